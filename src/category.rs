//! Message categories that select the tag text and color treatment of a line.
//!
//! Unlike severity levels, categories never gate output; they are purely
//! presentational.

use std::fmt;
use std::str::FromStr;

/// One variant per print operation; each carries its own color treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Plain output with a black title badge and an uncolored body.
    #[default]
    Log,
    /// Informational messages, rendered in blue.
    Info,
    /// Completed operations worth celebrating, rendered in green.
    Success,
    /// Anomalies that may need attention, rendered in yellow.
    Warn,
    /// Failures, rendered in red. The only category that accepts an error value.
    Error,
}

impl Category {
    /// Lowercase because config keys and parse input use lowercase names;
    /// the rendered tag applies its own case transform.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Convenience for iteration; used by palette overrides and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Log, Self::Info, Self::Success, Self::Warn, Self::Error]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown category" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}
