//! Loading engine configuration from disk.

use noughts::EngineConfig;
use noughts_core::SearchMode;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
search = "minimax"

[depth]
size3 = 4
size5 = 2
"#
    )
    .unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.search(), SearchMode::Minimax);
    assert_eq!(config.depth().for_size(3), 4);
    assert_eq!(config.depth().for_size(4), 8);
    assert_eq!(config.depth().for_size(5), 2);
    assert!(*config.randomize_opening());

    let policy = config.policy();
    assert_eq!(policy.searcher.mode(), SearchMode::Minimax);
    assert_eq!(policy.budgets.for_size(5), 2);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noughts.toml");
    let config = EngineConfig::load_or_default(&path).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_missing_file_is_error_when_required() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_malformed_file_reported() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[depth\nsize3 = 1").unwrap();
    let err = EngineConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
