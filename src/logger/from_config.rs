//! Logger construction from vislog config files.

use super::{Logger, LoggerBuilder};
use crate::category::Category;
use crate::config::Config;
use crate::fmt::{Palette, TagConfig};

impl Logger {
    /// Creates a logger from the default config file
    /// (`<config_dir>/vislog/vislog.toml`), falling back to documented
    /// defaults when the file is missing or unreadable.
    #[must_use]
    pub fn from_config() -> Self {
        let config = Config::load().unwrap_or_default();
        Self::from_config_with(&config)
    }

    /// Creates a logger from an already-loaded config.
    #[must_use]
    pub fn from_config_with(config: &Config) -> Self {
        let tag_config = TagConfig::new()
            .prefix(&config.tag.prefix)
            .suffix(&config.tag.suffix)
            .transform(config.parse_transform());

        let mut palette = Palette::new();
        for category in Category::all() {
            if let Some(color) = config.get_color(category.as_str()) {
                palette = palette.category(category, color);
            }
        }
        if let Some(color) = config.get_color("timestamp") {
            palette = palette.timestamp(color);
        }

        LoggerBuilder::new()
            .include_timestamps(config.include_timestamps)
            .include_utc_offset(config.include_utc_offset)
            .include_category(config.include_category)
            .hide_logs_during_test(config.hide_logs_during_test)
            .colors(config.colors)
            .tag_config(tag_config)
            .palette(palette)
            .build()
    }
}
