//! Unified error type for busplan
//!
//! [`BusplanError`] covers the failures shared by every crate in the
//! workspace: reading files and parsing datasets and configs. Solve outcomes
//! live in `busplan_algo::assignment::AssignmentError`.
//!
//! # Example
//!
//! ```
//! use busplan_core::{BusplanError, BusplanResult};
//!
//! fn route_limit(raw: &str) -> BusplanResult<usize> {
//!     raw.trim()
//!         .parse()
//!         .map_err(|e| BusplanError::Parse(format!("route limit: {e}")))
//! }
//!
//! assert_eq!(route_limit(" 93 ").unwrap(), 93);
//! assert!(matches!(route_limit("many"), Err(BusplanError::Parse(_))));
//! ```

use thiserror::Error;

/// Error type for data loading and configuration.
#[derive(Error, Debug)]
pub enum BusplanError {
    /// I/O errors (file access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results using BusplanError.
pub type BusplanResult<T> = Result<T, BusplanError>;
