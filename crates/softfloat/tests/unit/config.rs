//! Configuration loading tests.

use std::io::Write;

use pretty_assertions::assert_eq;
use sef_core::Config;
use sef_core::common::ConfigError;
use sef_core::config::{DisplayConfig, ReplConfig};

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(!config.display.json);
    assert!(config.display.show_fields);
    assert!(config.display.show_flags);
    assert_eq!(config.repl.prompt, ">>> ");
    assert!(config.repl.banner);
}

#[test]
fn test_empty_object_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config = Config::from_json(r#"{ "display": { "json": true }, "repl": { "prompt": "sef> " } }"#)
        .unwrap();
    assert_eq!(
        config,
        Config {
            display: DisplayConfig {
                json: true,
                ..DisplayConfig::default()
            },
            repl: ReplConfig {
                prompt: "sef> ".to_owned(),
                ..ReplConfig::default()
            },
        }
    );
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        Config::from_json("{ display: }"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        Config::from_json(r#"{ "display": { "json": "yes" } }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "display": { "show_fields": false } }"#)
        .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(!config.display.show_fields);
    assert!(config.display.show_flags);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match Config::from_file(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}
