#![deny(missing_docs)]

//! # Converter Configuration
//!
//! Knobs that change how mappings become parameters. Deserializable so
//! callers can keep them next to the rest of their settings.

use crate::swagger::CollectionFormat;
use serde::Deserialize;

/// Settings of a [`DefaultMappingConverter`](crate::converter::DefaultMappingConverter).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ConverterConfig {
    /// Accept lists of primitives as query/path/header/formData parameters
    /// (rendered as `type: array`). When off, such lists must go in the body.
    pub primitive_list_params: bool,
    /// `collectionFormat` written on array parameters. Omitted when `None`,
    /// which Swagger reads as `csv`.
    pub collection_format: Option<CollectionFormat>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            primitive_list_params: true,
            collection_format: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConverterConfig::default();
        assert!(config.primitive_list_params);
        assert_eq!(config.collection_format, None);
    }

    #[test]
    fn test_partial_yaml() {
        let config: ConverterConfig = serde_yaml::from_str("collectionFormat: multi").unwrap();
        assert!(config.primitive_list_params);
        assert_eq!(config.collection_format, Some(CollectionFormat::Multi));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let res = serde_yaml::from_str::<ConverterConfig>("prefix: '#/components/'");
        assert!(res.is_err());
    }
}
