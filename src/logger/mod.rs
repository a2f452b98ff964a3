//! The formatter/writer. Each operation assembles up to three segments
//! (timestamp, category badge, body), styles them through the palette, and
//! writes one line to stdout unless the suppression rule applies.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::category::Category;
use crate::fmt::{Palette, Role, TagConfig, timestamp};
use std::io::{self, Write};

/// Name of the environment variable consulted by the suppression rule.
pub const ENV_VAR: &str = "VISLOG_ENV";

/// The suppression comparison, factored out of the logger so it can be tested
/// without mutating process environment.
#[must_use]
pub fn is_test_env(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("test"))
}

/// Renders an error value into display text: the message, the error itself,
/// then one `caused by:` line per source. A source-less error degrades to its
/// own message.
#[must_use]
pub fn with_error_chain(msg: &str, error: &dyn std::error::Error) -> String {
    let mut out = format!("{msg}\n{error}");
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str("\ncaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Immutable after build; every print call is stateless given the configuration.
#[derive(Debug, Clone)]
pub struct Logger {
    include_timestamps: bool,
    include_utc_offset: bool,
    include_category: bool,
    hide_logs_during_test: bool,
    colors_enabled: bool,
    tag_config: TagConfig,
    palette: Palette,
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Logger {
    /// Direct construction would expose every rendering knob; the builder
    /// provides a guided API instead.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Core dispatch: renders and writes one line under the built-in tag label.
    pub fn write(&self, category: Category, msg: &str) {
        self.emit(&self.render(category, None, msg));
    }

    /// Custom labels keep the category's color while replacing the tag text
    /// ("DATABASE" in info blue, "DEPLOY" in success green).
    pub fn write_labeled(&self, category: Category, label: &str, msg: &str) {
        self.emit(&self.render(category, Some(label), msg));
    }

    /// Plain output; black title badge, uncolored body.
    pub fn log(&self, msg: &str) {
        self.write(Category::Log, msg);
    }

    /// Plain output under a custom label.
    pub fn log_as(&self, label: &str, msg: &str) {
        self.write_labeled(Category::Log, label, msg);
    }

    /// Informational messages, rendered in blue.
    pub fn info(&self, msg: &str) {
        self.write(Category::Info, msg);
    }

    /// Informational messages under a custom label.
    pub fn info_as(&self, label: &str, msg: &str) {
        self.write_labeled(Category::Info, label, msg);
    }

    /// Completed operations, rendered in green.
    pub fn success(&self, msg: &str) {
        self.write(Category::Success, msg);
    }

    /// Success output under a custom label.
    pub fn success_as(&self, label: &str, msg: &str) {
        self.write_labeled(Category::Success, label, msg);
    }

    /// Anomalies worth attention, rendered in yellow.
    pub fn warn(&self, msg: &str) {
        self.write(Category::Warn, msg);
    }

    /// Warning output under a custom label.
    pub fn warn_as(&self, label: &str, msg: &str) {
        self.write_labeled(Category::Warn, label, msg);
    }

    /// Failures, rendered in red. The tag label is fixed; errors don't get
    /// custom categories.
    pub fn error(&self, msg: &str) {
        self.write(Category::Error, msg);
    }

    /// Failure plus the error value that caused it. The error's display text
    /// and source chain follow the message on subsequent lines, all in the
    /// error body color.
    pub fn error_with(&self, msg: &str, error: &dyn std::error::Error) {
        self.write(Category::Error, &with_error_chain(msg, error));
    }

    /// Assembles the styled line without writing it. Public so tests and
    /// embedding applications can observe output without capturing stdout.
    #[must_use]
    pub fn render(&self, category: Category, label: Option<&str>, msg: &str) -> String {
        let mut segments: Vec<String> = Vec::with_capacity(3);

        if self.include_timestamps {
            let ts = timestamp::now(self.include_utc_offset);
            segments.push(self.paint(Role::Timestamp, &ts));
        }

        if self.include_category {
            let tag = label.map_or_else(
                || self.tag_config.format(category),
                |l| self.tag_config.format_label(l),
            );
            segments.push(self.paint(Role::Title(category), &tag));
        }

        // Empty segments are skipped entirely; a disabled timestamp must not
        // leave a leading separator space.
        if !msg.is_empty() {
            segments.push(self.paint(Role::Body(category), msg));
        }

        segments.join(" ")
    }

    /// Whether a line would be written given the test-context variable's value.
    /// Suppression needs both the config flag and the environment to agree.
    #[must_use]
    pub fn writes_in(&self, env: Option<&str>) -> bool {
        !(self.hide_logs_during_test && is_test_env(env))
    }

    fn paint(&self, role: Role, text: &str) -> String {
        if self.colors_enabled {
            self.palette.paint(role, text)
        } else {
            text.to_string()
        }
    }

    fn emit(&self, line: &str) {
        let env = std::env::var(ENV_VAR).ok();
        if !self.writes_in(env.as_deref()) {
            return;
        }
        let _ = writeln!(io::stdout(), "{line}");
    }

    /// Tests verify the builder wired the expected flags.
    #[must_use]
    pub const fn includes_timestamps(&self) -> bool {
        self.include_timestamps
    }

    /// Tests verify the builder wired the expected flags.
    #[must_use]
    pub const fn includes_category(&self) -> bool {
        self.include_category
    }
}
