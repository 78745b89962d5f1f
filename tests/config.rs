//! Tests for configuration loading.

use beaver::{Config, ConfigFormat, Error, OutputKind};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn load_yaml_config() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("beaver.yaml");
    fs::write(
        &path,
        "log_level: \"warn\"\nlog_output: \"file\"\nlog_file: \"/var/log/app.json\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.level, "warn");
    assert_eq!(config.output, "file");
    assert_eq!(config.file_path, "/var/log/app.json");
    assert_eq!(config.output_kind(), OutputKind::File);
    assert_eq!(config.file_path(), Some(PathBuf::from("/var/log/app.json")));
}

#[test]
fn load_json_config() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("beaver.json");
    fs::write(
        &path,
        r#"{"log_level": "error", "log_output": "console", "log_file": ""}"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.level, "error");
    assert_eq!(config.output_kind(), OutputKind::Console);
    assert_eq!(config.file_path(), None);
}

#[test]
fn missing_fields_default_to_empty() {
    let config = Config::from_yaml_str("log_level: info\n").unwrap();
    assert_eq!(config.level, "info");
    assert_eq!(config.output, "");
    assert_eq!(config.file_path, "");
    assert_eq!(config.output_kind(), OutputKind::Console);

    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn empty_yaml_document_is_all_defaults() {
    assert_eq!(Config::from_yaml_str("").unwrap(), Config::default());
    assert_eq!(Config::from_yaml_str("\n  \n").unwrap(), Config::default());
}

#[test]
fn unknown_keys_are_ignored_and_levels_kept_verbatim() {
    let config =
        Config::from_json_str(r#"{"log_level": "debug", "rotation": "daily"}"#).unwrap();
    assert_eq!(config.level, "debug");
}

#[test]
fn unopenable_config_is_io_error() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("missing.yaml");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_yaml_is_decode_error() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("broken.yaml");
    fs::write(&path, "log_level: [unterminated\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::Decode {
            format: ConfigFormat::Yaml,
            ..
        }
    ));
}

#[test]
fn malformed_json_is_decode_error() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("broken.json");
    fs::write(&path, r#"{"log_level": "#).unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::Decode {
            format: ConfigFormat::Json,
            ..
        }
    ));
}

#[test]
fn unsupported_extension_is_rejected_before_opening() {
    // The file does not exist: the format check must fail first.
    let err = Config::load_from("/nonexistent/beaver.toml").unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}

#[test]
fn tilde_in_log_file_is_expanded() {
    let config = Config {
        file_path: "~/beaver.json".to_string(),
        ..Config::default()
    };
    let path = config.file_path().unwrap();
    let expected = shellexpand::tilde("~/beaver.json");
    assert_eq!(path, PathBuf::from(expected.as_ref()));
    assert!(path.ends_with("beaver.json"));
}

#[test]
fn json_null_fields_decode_as_empty() {
    let config = Config::from_json_str(
        r#"{"log_level": "warn", "log_output": "console", "log_file": null}"#,
    )
    .unwrap();
    assert_eq!(config.level, "warn");
    assert_eq!(config.file_path, "");
    assert_eq!(config.file_path(), None);

    let config =
        Config::from_json_str(r#"{"log_level": null, "log_output": null, "log_file": null}"#)
            .unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn yaml_blank_values_decode_as_empty() {
    let config = Config::from_yaml_str("log_level: error\nlog_output:\nlog_file:\n").unwrap();
    assert_eq!(config.level, "error");
    assert_eq!(config.output, "");
    assert_eq!(config.file_path, "");
    assert_eq!(config.output_kind(), OutputKind::Console);

    let config = Config::from_yaml_str("log_level: ~\nlog_file: null\n").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn json_null_log_file_loads_from_disk() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("beaver.json");
    fs::write(&path, r#"{"log_output": "console", "log_file": null}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.output_kind(), OutputKind::Console);
    assert_eq!(config.file_path(), None);
}
