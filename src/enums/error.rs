//! # Error Module - Custom *Minizone* Error Type
//!
//! Defines the unified error type for Minizone.
//!
//! ## Features
//! - Covers malformed offset strings and offsets outside the catalog's
//! supported `[-11:00, +14:00]` window.
//! - Implements `Display` for readable output and `Error` for integration
//! with standard Rust error handling.

use std::error::Error;
use std::fmt;

/// Catch all error type for `Minizone`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinizoneError {
    MalformedOffset {
        value: String,
        message: Option<String>,
    },
    OffsetOutOfRange {
        value: String,
        minutes: i16,
    },
}

impl fmt::Display for MinizoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinizoneError::MalformedOffset { value, message } => {
                if let Some(msg) = message {
                    write!(f, "Malformed offset '{}': {}", value, msg)
                } else {
                    write!(f, "Malformed offset '{}': expected the signed '+HH:MM' form.", value)
                }
            }
            MinizoneError::OffsetOutOfRange { value, minutes } => {
                write!(
                    f,
                    "Offset '{}' ({} minutes) is outside the supported range -11:00 to +14:00.",
                    value, minutes
                )
            }
        }
    }
}

impl Error for MinizoneError {}
