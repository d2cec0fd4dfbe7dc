//! Tests for loading `mastermind.toml`.

use std::fs;

use tempfile::TempDir;

use strictly_mastermind_tui::AppConfig;

#[test]
fn test_full_config_loads() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("mastermind.toml");
    fs::write(
        &path,
        r#"
[rules]
number_options = 8
row_size = 5
starting_lives = 12

[palette]
channel_range = 200
initial_tolerance = 60
attempts_per_tolerance = 10
seed = 1234

[log]
file = "game.log"
filter = "debug"
"#,
    )
    .expect("Failed to write TOML");

    let config = AppConfig::from_file(&path).expect("Config loads");
    assert_eq!(config.rules().number_options(), 8);
    assert_eq!(config.rules().row_size(), 5);
    assert_eq!(config.rules().starting_lives(), 12);
    assert_eq!(config.palette().generator().channel_range(), 200);
    assert_eq!(config.palette().generator().initial_tolerance(), 60);
    assert_eq!(config.palette().generator().attempts_per_tolerance(), 10);
    assert_eq!(*config.palette().seed(), Some(1234));
    assert_eq!(config.log().filter(), "debug");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).expect("Defaults");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_from_file_requires_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_invalid_rules_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("mastermind.toml");
    fs::write(&path, "[rules]\nrow_size = 0\n").expect("Failed to write TOML");

    let err = AppConfig::load_or_default(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().contains("config.rs"));
}

#[test]
fn test_seed_makes_palette_reproducible() {
    let config = AppConfig::default().with_seed(99);
    let generator = config.palette().generator();
    let first = generator.generate(6, &mut config.palette().rng());
    let second = generator.generate(6, &mut config.palette().rng());
    assert_eq!(first, second);
}
