//! Semantic styling layer. Call sites name a [`Role`] ("the error title", "the
//! timestamp") and the [`Palette`] turns it into a styled string, so the ANSI
//! backend can be swapped or re-themed without touching the logger.

use super::color::{Color, colorize, colorize_badge};
use crate::category::Category;

/// The three visual positions a piece of text can occupy in a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Leading wall-clock segment, de-emphasized.
    Timestamp,
    /// The ` [ CATEGORY ] ` badge; bold bright text on the category's background.
    Title(Category),
    /// The message body, in the category's foreground color.
    Body(Category),
}

/// One color per category plus the fixed accents. Overridable so the default
/// theme never has to match every terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub log: Color,
    pub info: Color,
    pub success: Color,
    pub warn: Color,
    pub error: Color,
    /// Timestamps carry no signal once a line is found; gray keeps them out of the way.
    pub timestamp: Color,
    /// Badge text must contrast with every category background.
    pub title_text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            log: Color::black(),
            info: Color::blue(),
            success: Color::green(),
            warn: Color::yellow(),
            error: Color::red(),
            timestamp: Color::gray(),
            title_text: Color::white(),
        }
    }
}

impl Palette {
    /// Explicit constructor matches the builder-pattern convention used throughout the crate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Config palette overrides arrive keyed by category name.
    #[must_use]
    pub const fn category(mut self, category: Category, color: Color) -> Self {
        match category {
            Category::Log => self.log = color,
            Category::Info => self.info = color,
            Category::Success => self.success = color,
            Category::Warn => self.warn = color,
            Category::Error => self.error = color,
        }
        self
    }

    /// The default gray may be invisible on some backgrounds.
    #[must_use]
    pub const fn timestamp(mut self, color: Color) -> Self {
        self.timestamp = color;
        self
    }

    /// Badge backgrounds and body text share one color per category.
    #[must_use]
    pub const fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Log => self.log,
            Category::Info => self.info,
            Category::Success => self.success,
            Category::Warn => self.warn,
            Category::Error => self.error,
        }
    }

    /// Pure role-to-styled-string mapping; the single place styling decisions live.
    ///
    /// `Log` bodies stay unstyled: plain output is that category's whole point.
    #[must_use]
    pub fn paint(&self, role: Role, text: &str) -> String {
        match role {
            Role::Timestamp => colorize(text, self.timestamp),
            Role::Title(category) => {
                colorize_badge(text, self.title_text, self.category_color(category))
            }
            Role::Body(Category::Log) => text.to_string(),
            Role::Body(category) => colorize(text, self.category_color(category)),
        }
    }
}
