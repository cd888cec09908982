// Failure message templates

use std::fmt::{self, Debug};

use super::diff::text_diff;
use crate::config::{Config, MessageConfig};

/// Debug-renders as the bare text, without quotes
pub(crate) struct Verbatim(pub &'static str);

impl Debug for Verbatim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub(crate) const NIL: Verbatim = Verbatim("nil");

fn render<T: Debug + ?Sized>(value: &T, config: &MessageConfig) -> String {
    if config.pretty {
        format!("{:#?}", value)
    } else {
        format!("{:?}", value)
    }
}

/// `Expected: <expected>. Actual: <actual>`
pub fn inequality<E: Debug + ?Sized, A: Debug + ?Sized>(expected: &E, actual: &A) -> String {
    inequality_with(expected, actual, &Config::global().messages)
}

/// `Expected to not equal: <value>`
pub fn equality<T: Debug + ?Sized>(value: &T) -> String {
    format!(
        "Expected to not equal: {}",
        render(value, &Config::global().messages)
    )
}

/// Inequality message for structural comparisons, with a diff when enabled
pub fn deep_inequality<T: Debug + ?Sized>(expected: &T, actual: &T) -> String {
    deep_inequality_with(expected, actual, &Config::global().messages)
}

pub(crate) fn inequality_with<E: Debug + ?Sized, A: Debug + ?Sized>(
    expected: &E,
    actual: &A,
    config: &MessageConfig,
) -> String {
    format!(
        "Expected: {}. Actual: {}",
        render(expected, config),
        render(actual, config)
    )
}

pub(crate) fn deep_inequality_with<T: Debug + ?Sized>(
    expected: &T,
    actual: &T,
    config: &MessageConfig,
) -> String {
    let mut message = inequality_with(expected, actual, config);
    if config.diff {
        message.push('\n');
        message.push_str(&text_diff(
            &render(expected, config),
            &render(actual, config),
            config.color,
        ));
    }
    message
}
