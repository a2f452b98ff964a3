//! Tests for category parsing and display.

use vislog::Category;

#[test]
fn as_str_is_lowercase() {
    assert_eq!(Category::Log.as_str(), "log");
    assert_eq!(Category::Success.as_str(), "success");
    assert_eq!(Category::Error.to_string(), "error");
}

#[test]
fn default_is_log() {
    assert_eq!(Category::default(), Category::Log);
}

#[test]
fn all_covers_every_operation() {
    assert_eq!(Category::all().len(), 5);
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("Info".parse::<Category>().unwrap(), Category::Info);
    assert_eq!("SUCCESS".parse::<Category>().unwrap(), Category::Success);
}

#[test]
fn parse_accepts_aliases() {
    assert_eq!("warning".parse::<Category>().unwrap(), Category::Warn);
    assert_eq!("err".parse::<Category>().unwrap(), Category::Error);
}

#[test]
fn parse_rejects_unknown_names() {
    assert!("fatal".parse::<Category>().is_err());
    let err = "fatal".parse::<Category>().unwrap_err();
    assert_eq!(err.to_string(), "unknown category: 'fatal'");
}
