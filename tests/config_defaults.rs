use softassert::config::Config;
use std::io::Write;

#[test]
fn test_default_config_values() {
    let config = Config::default();

    // Defaults keep the plain message templates
    assert!(!config.messages.diff);
    assert!(!config.messages.color);
    assert!(!config.messages.pretty);
    assert!(config.logging.log_failures);
}

#[test]
fn test_load_from_file() {
    // Arrange
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[messages]\ndiff = true\ncolor = true").expect("write config");

    // Act
    let config = Config::load_from_file(file.path()).expect("load config");

    // Assert
    assert!(config.messages.diff);
    assert!(config.messages.color);
    assert!(!config.messages.pretty);
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.toml");

    let err = Config::load_from_file(&missing).unwrap_err();

    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_installed_config_is_used_without_reading_files() {
    // Arrange
    let t = softassert::Recorder::new();

    // Act
    let first = Config::default().install();
    let second = Config::default().install();
    softassert::deep_equal(&t, vec![1, 2], vec![1, 3]);

    // Assert
    assert!(first.is_ok());
    assert!(second.is_err());
    assert!(!Config::global().messages.diff);
    assert_eq!(t.messages(), vec!["Expected: [1, 2]. Actual: [1, 3]"]);
}
