use std::num::ParseIntError;
use std::str::ParseBoolError;
use thiserror::Error;

/// Errors produced by the reflection primitives and config parsing.
#[derive(Error, Debug)]
pub enum ReflectError {
    /// Width outside `1..=max` for the integer type being reflected.
    #[error("invalid width: {width} (expected 1..={max})")]
    InvalidWidth {
        /// Width that was requested.
        width: u32,
        /// Bit capacity of the target integer type.
        max: u32,
    },

    /// Malformed reflection settings.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// I/O failure while loading settings from disk.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Numeric setting that could not be parsed.
    #[error("parse int error: {0}")]
    ParseInt(#[from] ParseIntError),

    /// Boolean setting that could not be parsed.
    #[error("parse bool error: {0}")]
    ParseBool(#[from] ParseBoolError),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ReflectError>;
