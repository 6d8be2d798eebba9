#![deny(missing_docs)]

//! # Mapping Converter
//!
//! The public seam of the crate: a trait bundling every conversion, and the
//! default implementation delegating to the builder modules.

use crate::config::ConverterConfig;
use crate::error::AppResult;
use crate::mapping::Mapping;
use crate::swagger::{Model, NamedModel, Parameter, Property};
use crate::{model, parameter, property, scanner, type_resolver};

/// Converts mapping trees into Swagger 2.0 fragments.
pub trait MappingConverter {
    /// Request parameters for a named mapping or a group of named fields.
    fn to_parameters(&self, name: &str, node: &Mapping) -> AppResult<Vec<Parameter>>;

    /// Standalone model for a mapping, e.g. a body or response schema.
    fn to_model(&self, node: &Mapping) -> AppResult<Model>;

    /// Inline property for a mapping.
    fn to_property(&self, node: &Mapping) -> AppResult<Property>;

    /// Every named sub-tree of a mapping, parents first.
    fn scan_models(&self, node: &Mapping) -> AppResult<Vec<NamedModel>>;

    /// Whether a mapping needs no nested object schema.
    fn is_primitive(&self, node: &Mapping, primitive_list_as_primitive: bool) -> bool {
        type_resolver::is_primitive(node, primitive_list_as_primitive)
    }

    /// Swagger `type` of a mapping.
    fn target_type(&self, node: &Mapping) -> AppResult<&'static str> {
        type_resolver::target_type(node)
    }

    /// Swagger `format` of a mapping.
    fn format(&self, node: &Mapping) -> AppResult<Option<String>> {
        type_resolver::format(node)
    }
}

/// The standard implementation of [`MappingConverter`].
///
/// Stateless apart from its configuration; one instance may serve concurrent
/// conversions.
#[derive(Debug, Clone, Default)]
pub struct DefaultMappingConverter {
    config: ConverterConfig,
}

impl DefaultMappingConverter {
    /// Creates a converter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter with an explicit configuration.
    pub fn with_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }
}

impl MappingConverter for DefaultMappingConverter {
    fn to_parameters(&self, name: &str, node: &Mapping) -> AppResult<Vec<Parameter>> {
        parameter::to_parameters(name, node, &self.config)
    }

    fn to_model(&self, node: &Mapping) -> AppResult<Model> {
        model::to_model(node)
    }

    fn to_property(&self, node: &Mapping) -> AppResult<Property> {
        property::to_property(node)
    }

    fn scan_models(&self, node: &Mapping) -> AppResult<Vec<NamedModel>> {
        scanner::scan_models(node)
    }
}
