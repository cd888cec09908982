use console::Style;
use dissimilar::{Chunk, diff};
use std::fmt::Write;

/// Character diff between two rendered values, optionally coloured
pub fn text_diff(expected: &str, actual: &str, color: bool) -> String {
    let mut output = String::new();
    let _ = write!(output, "Diff (Expected - / Actual +): ");

    for chunk in diff(expected, actual) {
        let (style, marker, text) = match chunk {
            Chunk::Equal(text) => (Style::new().dim(), "", text),
            Chunk::Delete(text) => (Style::new().red(), "-", text),
            Chunk::Insert(text) => (Style::new().green(), "+", text),
        };

        if color {
            let _ = write!(output, "{}", style.force_styling(true).apply_to(text));
        } else if marker.is_empty() {
            output.push_str(text);
        } else {
            let _ = write!(output, "[{}{}]", marker, text);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_diff_marks_changes() {
        let diff = text_diff("Point { x: 1 }", "Point { x: 2 }", false);

        assert!(diff.starts_with("Diff (Expected - / Actual +): "));
        assert!(diff.contains("[-1]"));
        assert!(diff.contains("[+2]"));
        assert!(diff.contains("Point { x: "));
    }

    #[test]
    fn test_colored_diff_keeps_text() {
        let diff = text_diff("Alice", "Bob", true);

        assert!(diff.contains("Alice") || diff.contains("Ali"));
        assert!(diff.contains('\u{1b}'));
    }

    #[test]
    fn test_identical_inputs() {
        let diff = text_diff("same", "same", false);
        assert!(diff.ends_with("same"));
        assert!(!diff.contains('['));
    }
}
