//! Error types for DataSet lookups and rendering.
//!
//! ## Error Categories
//!
//! - **Lookup errors**: a strictly requested key is absent, or it exists under a
//!   different [`KeyType`] than the accessor asked for
//! - **Configuration errors**: a [`FormatSpec`](crate::FormatSpec) that selects no
//!   style or an undefined combination of styles
//! - **I/O errors**: the output sink rejected a write
//!
//! A key that is merely absent is not an error for defaulted lookups: those
//! return [`Lookup::NotFound`](crate::Lookup::NotFound) carrying the caller's
//! default.
//!
//! ## Examples
//!
//! ```rust
//! use dataset_show::{DataSet, Error, KeyType};
//!
//! let mut node = DataSet::new("Dimm");
//! node.set_u32("Capacity", 16);
//!
//! let err = node.get_bool("Capacity", false).unwrap_err();
//! assert!(matches!(
//!     err,
//!     Error::TypeMismatch { expected: KeyType::Bool, found: KeyType::U32, .. }
//! ));
//! ```

use crate::KeyType;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the DataSet store and the renderer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A strict lookup found no value under the key
    #[error("key `{key}` not found")]
    KeyNotFound { key: String },

    /// The key exists but holds a value of another type
    #[error("type mismatch for key `{key}`: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: KeyType,
        found: KeyType,
    },

    /// Text output was requested without selecting table or list style
    #[error("format style not set: text output needs a table or list style")]
    UnsetStyle,

    /// The format configuration asks for something that cannot be rendered
    #[error("malformed format: {0}")]
    MalformedFormat(String),

    /// The output sink rejected a write
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a not-found error for a strict lookup.
    pub fn key_not_found(key: &str) -> Self {
        Error::KeyNotFound {
            key: key.to_string(),
        }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dataset_show::{Error, KeyType};
    ///
    /// let err = Error::type_mismatch("Temp", KeyType::I32, KeyType::WStr);
    /// assert!(err.to_string().contains("expected i32"));
    /// ```
    pub fn type_mismatch(key: &str, expected: KeyType, found: KeyType) -> Self {
        Error::TypeMismatch {
            key: key.to_string(),
            expected,
            found,
        }
    }

    /// Creates a malformed format error.
    pub fn malformed<T: fmt::Display>(msg: T) -> Self {
        Error::MalformedFormat(msg.to_string())
    }

    /// Returns `true` for errors caused by the format configuration.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::UnsetStyle | Error::MalformedFormat(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
