#![forbid(unsafe_code)]

//! `vislog` - categorized, color-coded console log formatting.
//!
//! A small synchronous pretty-printer: each call assembles an optional
//! timestamp, an optional ` [ CATEGORY ] ` badge, and a colored message body
//! into one stdout line. There is no routing, filtering, or persistence.
//!
//! # Example
//!
//! ```
//! use vislog::Logger;
//!
//! let logger = Logger::builder()
//!     .include_timestamps(true)
//!     .build();
//!
//! logger.info("Connecting to server...");
//! logger.success_as("BUILD", "Compilation finished");
//! logger.warn("Disk almost full");
//! logger.error("Connection failed");
//! ```
//!
//! A process-wide default instance is available through free functions:
//!
//! ```
//! vislog::success("Ready");
//! ```

pub mod category;
pub mod config;
mod error;
pub mod fmt;
mod global;
pub mod logger;

// Re-exports for convenience
pub use category::{Category, ParseCategoryError};
pub use config::Config;
pub use error::Error;
pub use fmt::{Color, Palette, Role, TagConfig, Transform};
pub use global::{
    default_logger, error, error_with, info, init, init_with_config, log, success, warn,
};
pub use logger::{Logger, LoggerBuilder};
