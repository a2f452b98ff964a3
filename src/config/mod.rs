//! TOML configuration loading.
//!
//! Separated from struct definitions so the loading logic (path discovery,
//! file I/O) stays independent of the serde schema.

mod structs;

pub use structs::{Config, TagConfigFile};

use crate::fmt::{Color, Transform};
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Primary entry point: the user's config from the default location, with
    /// a missing file treated as an empty one.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits
    /// a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path instead of the default
    /// location. Useful for tests and embedding applications.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses a TOML document already held in memory.
    ///
    /// # Errors
    /// Returns an error on TOML syntax or type mismatches.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// XDG-compliant path under the platform config directory.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("vislog").join("vislog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Accepts multiple aliases ("uppercase"/"upper") for user convenience.
    /// Unknown strings fall back to `None` rather than erroring; a typo'd
    /// transform is not worth refusing to log.
    #[must_use]
    pub fn parse_transform(&self) -> Transform {
        match self.tag.transform.to_lowercase().as_str() {
            "uppercase" | "upper" => Transform::Uppercase,
            "lowercase" | "lower" => Transform::Lowercase,
            "capitalize" | "cap" => Transform::Capitalize,
            _ => Transform::None,
        }
    }

    /// Named palette lookup; `[palette] info = "#61afef"` reaches the renderer
    /// through here.
    #[must_use]
    pub fn get_color(&self, name: &str) -> Option<Color> {
        self.palette.get(name).map(|hex| Color::from_hex(hex))
    }
}
