//! The process-wide default logger.
//!
//! Kept behind a `OnceLock` so it is an explicitly constructed, explicitly
//! owned value rather than ambient mutable state; independent instances with
//! independent configuration remain plain values.

use crate::config::Config;
use crate::logger::Logger;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Seeds the default logger from the user's config file.
///
/// `OnceLock` guarantees only the first initialization takes effect; calling
/// this after the default logger has been touched is a no-op.
pub fn init() {
    DEFAULT_LOGGER.get_or_init(|| {
        let config = Config::load().unwrap_or_default();
        Logger::from_config_with(&config)
    });
}

/// Preferred initializer; reuses an already-loaded config to avoid double I/O.
pub fn init_with_config(config: &Config) {
    DEFAULT_LOGGER.get_or_init(|| Logger::from_config_with(config));
}

/// The default instance. First access without a prior `init` constructs it
/// with all documented defaults.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::default)
}

/// Plain output through the default instance.
pub fn log(msg: &str) {
    default_logger().log(msg);
}

/// Informational output through the default instance.
pub fn info(msg: &str) {
    default_logger().info(msg);
}

/// Success output through the default instance.
pub fn success(msg: &str) {
    default_logger().success(msg);
}

/// Warning output through the default instance.
pub fn warn(msg: &str) {
    default_logger().warn(msg);
}

/// Error output through the default instance.
pub fn error(msg: &str) {
    default_logger().error(msg);
}

/// Error output with an attached error value through the default instance.
pub fn error_with(msg: &str, err: &dyn std::error::Error) {
    default_logger().error_with(msg, err);
}
