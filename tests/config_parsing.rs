//! Tests for TOML parsing, defaults, and config-to-logger wiring.

use std::fs;
use tempfile::TempDir;
use vislog::{Category, Color, Config, Error, Logger, Transform};

#[test]
fn empty_document_yields_documented_defaults() {
    let config = Config::parse("").unwrap();
    assert!(!config.include_timestamps);
    assert!(!config.include_utc_offset);
    assert!(config.include_category);
    assert!(!config.hide_logs_during_test);
    assert!(config.colors);
    assert_eq!(config.tag.prefix, " [ ");
    assert_eq!(config.tag.suffix, " ] ");
    assert_eq!(config.parse_transform(), Transform::Uppercase);
}

#[test]
fn full_document_parses_every_section() {
    let config = Config::parse(
        r##"
include_timestamps = true
include_utc_offset = true
include_category = false
hide_logs_during_test = true
colors = false

[tag]
prefix = "<"
suffix = ">"
transform = "lowercase"

[palette]
info = "#0000ff"
timestamp = "#333333"
"##,
    )
    .unwrap();

    assert!(config.include_timestamps);
    assert!(config.include_utc_offset);
    assert!(!config.include_category);
    assert!(config.hide_logs_during_test);
    assert!(!config.colors);
    assert_eq!(config.tag.prefix, "<");
    assert_eq!(config.parse_transform(), Transform::Lowercase);
    assert_eq!(config.get_color("info"), Some(Color::new(0, 0, 255)));
    assert_eq!(config.get_color("timestamp"), Some(Color::new(51, 51, 51)));
    assert_eq!(config.get_color("success"), None);
}

#[test]
fn transform_accepts_aliases() {
    let config = Config::parse("[tag]\ntransform = \"upper\"").unwrap();
    assert_eq!(config.parse_transform(), Transform::Uppercase);

    let config = Config::parse("[tag]\ntransform = \"cap\"").unwrap();
    assert_eq!(config.parse_transform(), Transform::Capitalize);

    let config = Config::parse("[tag]\ntransform = \"sideways\"").unwrap();
    assert_eq!(config.parse_transform(), Transform::None);
}

#[test]
fn invalid_toml_reports_a_parse_error() {
    let err = Config::parse("include_timestamps = maybe").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn load_from_reads_a_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("vislog.toml");
    fs::write(&path, "include_timestamps = true").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.include_timestamps);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert!(config.include_category);
}

#[test]
fn from_config_honors_category_visibility() {
    let config = Config::parse("include_category = false\ncolors = false").unwrap();
    let logger = Logger::from_config_with(&config);
    assert_eq!(logger.render(Category::Info, None, "msg"), "msg");
}

#[test]
fn from_config_applies_palette_overrides() {
    let config = Config::parse("[palette]\nsuccess = \"#00ff00\"").unwrap();
    let logger = Logger::from_config_with(&config);
    let line = logger.render(Category::Success, None, "ok");
    assert!(line.contains("\x1b[48;2;0;255;0m"));
    assert!(line.contains("\x1b[38;2;0;255;0m"));
}

#[test]
fn from_config_applies_tag_settings() {
    let config = Config::parse(
        "colors = false\n\n[tag]\nprefix = \"[\"\nsuffix = \"]\"\ntransform = \"capitalize\"",
    )
    .unwrap();
    let logger = Logger::from_config_with(&config);
    assert_eq!(logger.render(Category::Warn, None, "msg"), "[Warn] msg");
}
