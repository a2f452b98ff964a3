//! Category tag rendering. The default produces the ` [ CATEGORY ] ` badge,
//! but projects with a different convention can swap delimiters and casing.

use crate::category::Category;

/// Case treatment applied to the tag label before the delimiters are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    /// Labels pass through exactly as given.
    None,
    /// Uppercase tags (`SUCCESS`, `WARN`) scan fastest in mixed output.
    #[default]
    Uppercase,
    /// For projects whose log convention is lowercase throughout.
    Lowercase,
    /// Title-case (`Info`, `Warn`) for prose-style formats.
    Capitalize,
}

impl Transform {
    /// Centralized transform avoids duplicating casing logic at every call site.
    #[must_use]
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::None => s.to_string(),
            Self::Uppercase => s.to_uppercase(),
            Self::Lowercase => s.to_lowercase(),
            Self::Capitalize => {
                let mut chars = s.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().collect::<String>()
                        + chars.as_str().to_lowercase().as_str()
                })
            }
        }
    }
}

/// Every tag knob in one struct so rendering doesn't accept loose parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagConfig {
    /// Opening delimiter, padding included; the default ` [ ` keeps the badge
    /// background from touching the label.
    pub prefix: String,
    /// Closing delimiter; must mirror the prefix for readability.
    pub suffix: String,
    /// Casing convention applied to the label.
    pub transform: Transform,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            prefix: " [ ".to_string(),
            suffix: " ] ".to_string(),
            transform: Transform::Uppercase,
        }
    }
}

impl TagConfig {
    /// Explicit constructor matches the builder-pattern convention used throughout the crate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Different log formats use different opening delimiters.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Closing delimiter is independently configurable to pair with any opening delimiter.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Casing preference varies across projects.
    #[must_use]
    pub const fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Renders the tag for a built-in category.
    #[must_use]
    pub fn format(&self, category: Category) -> String {
        self.format_label(category.as_str())
    }

    /// Custom categories are arbitrary labels that don't map to a built-in name.
    #[must_use]
    pub fn format_label(&self, label: &str) -> String {
        let transformed = self.transform.apply(label);
        format!("{}{}{}", self.prefix, transformed, self.suffix)
    }
}
