#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the crate.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Conversion errors are caller-input errors: they are raised immediately and
/// no partial result is returned.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A node used as a request parameter has no `in` location.
    #[from(ignore)]
    #[display("in is required!!!")]
    MissingLocation,

    /// A scalar tag has no known schema type/format mapping.
    #[from(ignore)]
    #[display("Unsupported target type: {_0}")]
    UnsupportedType(String),

    /// A non-body parameter whose node is not primitive (e.g. an object, or a
    /// list of objects).
    #[from(ignore)]
    #[display("Parameter '{_0}' is not primitive and must be declared in body")]
    NonPrimitiveParameter(String),

    /// A mapping file that cannot be turned into a mapping tree.
    #[from(ignore)]
    #[display("Invalid mapping: {_0}")]
    InvalidMapping(String),

    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for YAML (de)serialization errors.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_missing_location_message() {
        assert_eq!(AppError::MissingLocation.to_string(), "in is required!!!");
    }

    #[test]
    fn test_unsupported_type_message() {
        let err = AppError::UnsupportedType("binary".into());
        assert_eq!(err.to_string(), "Unsupported target type: binary");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_yaml_conversion() {
        let yaml_err = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let app_err: AppError = yaml_err.into();
        assert!(matches!(app_err, AppError::Yaml(_)));
    }
}
