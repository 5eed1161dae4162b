//! Tests for loading game configuration from disk.

use std::io::Write;
use strictly_bowling::{BowlingConfig, FoulChance};

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "foul_chance = 20").unwrap();
    writeln!(file, "seed = 42").unwrap();
    writeln!(file, r#"players = ["Alice", "Bob"]"#).unwrap();

    let config = BowlingConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.foul_chance(), FoulChance::new(20).unwrap());
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(config.players().len(), 2);
}

#[test]
fn test_missing_file_reports_path_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BowlingConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_unknown_foul_chance_type_rejected() {
    let err = BowlingConfig::from_toml(r#"foul_chance = "high""#).unwrap_err();
    assert!(err.to_string().contains("Config error"));
}
