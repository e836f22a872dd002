#[cfg(feature = "logger")]
/// This module provides a logger item writer, useful for mirroring reports into the log.
pub mod logger;

#[cfg(feature = "json")]
/// This module provides a JSON item reader.
pub mod json;

/// This module provides a plain-text item writer.
pub mod text;
