//! Stepwise construction for the logger's rendering knobs.

use super::Logger;
use crate::fmt::{Palette, TagConfig};

/// Collects options before freezing them into an immutable [`Logger`].
#[derive(Debug, Clone, Default)]
pub struct LoggerBuilder {
    include_timestamps: bool,
    include_utc_offset: bool,
    include_category: Option<bool>,
    hide_logs_during_test: bool,
    colors: Option<bool>,
    tag_config: TagConfig,
    palette: Palette,
}

impl LoggerBuilder {
    /// Documented defaults: no timestamps, no offset, category shown, nothing
    /// hidden, colors on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamps are opt-in; interactive output rarely needs them.
    #[must_use]
    pub const fn include_timestamps(mut self, enabled: bool) -> Self {
        self.include_timestamps = enabled;
        self
    }

    /// Only meaningful together with timestamps; renders the local UTC offset.
    #[must_use]
    pub const fn include_utc_offset(mut self, enabled: bool) -> Self {
        self.include_utc_offset = enabled;
        self
    }

    /// An explicit `false` here must actually hide the tag; `None` keeps the
    /// documented default of showing it.
    #[must_use]
    pub const fn include_category(mut self, enabled: bool) -> Self {
        self.include_category = Some(enabled);
        self
    }

    /// Opt-in silence for test runs; see the suppression rule on [`Logger`].
    #[must_use]
    pub const fn hide_logs_during_test(mut self, enabled: bool) -> Self {
        self.hide_logs_during_test = enabled;
        self
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = Some(enabled);
        self
    }

    /// The default ` [ CATEGORY ] ` badge may not match the project's log convention.
    #[must_use]
    pub fn tag_config(mut self, config: TagConfig) -> Self {
        self.tag_config = config;
        self
    }

    /// Default colors may clash with the user's terminal theme.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Immutability after build keeps every print call stateless.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            include_timestamps: self.include_timestamps,
            include_utc_offset: self.include_utc_offset,
            include_category: self.include_category.unwrap_or(true),
            hide_logs_during_test: self.hide_logs_during_test,
            colors_enabled: self.colors.unwrap_or(true),
            tag_config: self.tag_config,
            palette: self.palette,
        }
    }
}
