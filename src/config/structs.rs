//! Configuration struct definitions.

use serde::Deserialize;
use std::collections::HashMap;

/// A completely empty config file must still produce a working logger;
/// `#[serde(default)]` on every field ensures zero-config works out of the box.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Show a wall-clock timestamp segment on every line.
    pub include_timestamps: bool,
    /// Render the local UTC offset inside the timestamp.
    pub include_utc_offset: bool,
    /// Show the category tag. An explicit `false` hides the tag for every
    /// operation, custom labels included.
    pub include_category: bool,
    /// Skip writing entirely when the process runs in a test context.
    pub hide_logs_during_test: bool,
    /// Piped output and CI environments can't render ANSI escape codes.
    pub colors: bool,
    /// Tag appearance varies by project convention.
    pub tag: TagConfigFile,
    /// Hex overrides keyed by category name (plus `timestamp`); named here so
    /// themes don't repeat escape codes.
    pub palette: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_timestamps: false,
            include_utc_offset: false,
            include_category: true,
            hide_logs_during_test: false,
            colors: true,
            tag: TagConfigFile::default(),
            palette: HashMap::new(),
        }
    }
}

/// Tag formatting configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TagConfigFile {
    /// Prefix before the label.
    pub prefix: String,
    /// Suffix after the label.
    pub suffix: String,
    /// Case treatment (none, uppercase, lowercase, capitalize).
    pub transform: String,
}

impl Default for TagConfigFile {
    fn default() -> Self {
        Self {
            prefix: " [ ".to_string(),
            suffix: " ] ".to_string(),
            transform: "uppercase".to_string(),
        }
    }
}
