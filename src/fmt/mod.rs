//! Rendering is split per concern (colors, roles, tags, timestamps) so no
//! single formatting file accumulates every decision.

mod color;
mod style;
mod tag;
pub mod timestamp;

pub use color::{Color, colorize, colorize_badge};
pub use style::{Palette, Role};
pub use tag::{TagConfig, Transform};
