#![deny(missing_docs)]

//! # Binder Swagger
//!
//! Translates field-mapping specifications into Swagger 2.0 artifacts:
//! request parameters, standalone models, inline properties and the named
//! definitions referenced through `#/definitions/<name>`.
//!
//! All conversions are pure functions of their input tree.

/// Shared error types.
pub mod error;

/// Mapping tree (input) model.
pub mod mapping;

/// Swagger 2.0 (output) object model.
pub mod swagger;

/// Converter configuration.
pub mod config;

/// Type and format resolution.
pub mod type_resolver;

/// Inline property builder.
pub mod property;

/// Standalone model builder.
pub mod model;

/// Named model scanner.
pub mod scanner;

/// Request parameter builder.
pub mod parameter;

/// Converter trait and default implementation.
pub mod converter;

/// YAML/JSON mapping documents.
pub mod loader;

pub use config::ConverterConfig;
pub use converter::{DefaultMappingConverter, MappingConverter};
pub use error::{AppError, AppResult};
pub use mapping::{Constraint, Extras, Mapping, MappingKind, ParamLocation, ScalarType};
pub use swagger::{Model, NamedModel, Parameter, Property};
