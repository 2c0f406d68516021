//! Error types for GGON encoding.
//!
//! GGON has a single way for encoding to fail on well-formed input: a leaf of
//! a kind the format cannot represent. The encoder stops at the first such
//! leaf (depth-first) and returns no output at all.
//!
//! ## Error Categories
//!
//! - **Unencodable types**: `null`, booleans, and numbers when numeric
//!   coercion is off
//! - **Depth limit**: nesting deeper than a configured
//!   [`EncodeOptions::max_depth`](crate::EncodeOptions)
//! - **Custom**: failures raised while converting Rust data through serde
//!
//! ## Examples
//!
//! ```rust
//! use ggon::{encode, Error, Value};
//!
//! let err = encode(&Value::from(42)).unwrap_err();
//! assert!(matches!(err, Error::UnencodableType { .. }));
//! assert_eq!(err.to_string(), "Cannot encode value of type integer");
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while producing GGON text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value of a kind GGON cannot represent was reached.
    #[error("Cannot encode value of type {kind}")]
    UnencodableType { kind: String },

    /// Containers were nested deeper than the configured limit.
    #[error("Nesting exceeds maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unencodable type error naming the offending kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ggon::Error;
    ///
    /// let err = Error::unencodable_type("boolean");
    /// assert_eq!(err.kind(), Some("boolean"));
    /// ```
    pub fn unencodable_type(kind: &str) -> Self {
        Error::UnencodableType {
            kind: kind.to_string(),
        }
    }

    /// Creates a depth limit error.
    pub fn depth_exceeded(max_depth: usize) -> Self {
        Error::DepthExceeded { max_depth }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ggon::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the offending value kind for [`Error::UnencodableType`].
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        match self {
            Error::UnencodableType { kind } => Some(kind),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
