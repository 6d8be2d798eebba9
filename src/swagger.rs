#![deny(missing_docs)]

//! # Swagger Objects
//!
//! The Swagger 2.0 fragments produced by the converter: inline properties,
//! standalone models, named definitions and request parameters.
//!
//! Everything serializes to the exact JSON shape of the Swagger 2.0 object
//! model. Per-property `required` flags are kept on the values (they feed the
//! enclosing object's `required` list) but are never serialized themselves.

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix of every local definition reference.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Builds the `$ref` pointer of a named definition.
pub fn definition_ref(name: &str) -> String {
    format!("{}{}", DEFINITIONS_PREFIX, name)
}

/// Validation keywords shared by scalar properties and non-body parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    /// Regular expression the value must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Minimum text length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum text length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Inclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Allowed values.
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
}

/// An inline schema property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Property {
    /// Pointer to a named definition.
    Ref(RefProperty),
    /// Array of items.
    Array(ArrayProperty),
    /// Object with nested properties.
    Object(ObjectProperty),
    /// Primitive value.
    Scalar(ScalarProperty),
}

impl Property {
    /// Whether the source node was declared required.
    pub fn is_required(&self) -> bool {
        match self {
            Property::Ref(p) => p.required,
            Property::Array(p) => p.required,
            Property::Object(p) => p.required,
            Property::Scalar(p) => p.required,
        }
    }

    /// The property description, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Property::Ref(_) => None,
            Property::Array(p) => p.description.as_deref(),
            Property::Object(p) => p.description.as_deref(),
            Property::Scalar(p) => p.description.as_deref(),
        }
    }

    /// The `type` keyword, or `None` for references.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Property::Ref(_) => None,
            Property::Array(p) => Some(p.type_.as_str()),
            Property::Object(p) => Some(p.type_.as_str()),
            Property::Scalar(p) => Some(p.type_.as_str()),
        }
    }
}

/// A primitive property (`integer`, `number`, `boolean`, `string`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarProperty {
    /// Schema type.
    #[serde(rename = "type")]
    pub type_: String,
    /// Schema format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Example value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// Validation keywords.
    #[serde(flatten)]
    pub validation: Validation,
    /// Required-ness of the source node.
    #[serde(skip)]
    pub required: bool,
}

/// An array property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayProperty {
    /// Always `array`.
    #[serde(rename = "type")]
    pub type_: String,
    /// Element schema.
    pub items: Box<Property>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Required-ness of the source node.
    #[serde(skip)]
    pub required: bool,
}

/// An object property with nested properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectProperty {
    /// Always `object`.
    #[serde(rename = "type")]
    pub type_: String,
    /// Names of the required nested properties, in declaration order.
    #[serde(rename = "required", skip_serializing_if = "Vec::is_empty")]
    pub required_fields: Vec<String>,
    /// Nested properties, in declaration order.
    pub properties: IndexMap<String, Property>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Required-ness of the source node.
    #[serde(skip)]
    pub required: bool,
}

/// A `$ref` pointer to a named definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefProperty {
    /// The pointer, e.g. `#/definitions/User`.
    #[serde(rename = "$ref")]
    pub reference: String,
    /// Required-ness of the source node.
    #[serde(skip)]
    pub required: bool,
}

impl RefProperty {
    /// Creates a reference to the definition called `name`.
    pub fn new(name: &str, required: bool) -> Self {
        Self {
            reference: definition_ref(name),
            required,
        }
    }

    /// The simple definition name, e.g. `User` for `#/definitions/User`.
    pub fn simple_ref(&self) -> &str {
        self.reference
            .strip_prefix(DEFINITIONS_PREFIX)
            .unwrap_or(self.reference.as_str())
    }
}

/// A standalone schema, usable as a body schema or a named definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Model {
    /// Object with properties.
    Object(ObjectModel),
    /// Array of items.
    Array(ArrayModel),
    /// Primitive value.
    Primitive(PrimitiveModel),
}

impl Model {
    /// The properties of an object model, or `None` otherwise.
    pub fn properties(&self) -> Option<&IndexMap<String, Property>> {
        match self {
            Model::Object(m) => Some(&m.properties),
            _ => None,
        }
    }

    /// The `type` keyword.
    pub fn type_name(&self) -> &str {
        match self {
            Model::Object(m) => &m.type_,
            Model::Array(m) => &m.type_,
            Model::Primitive(m) => &m.type_,
        }
    }
}

/// An object model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectModel {
    /// Always `object`.
    #[serde(rename = "type")]
    pub type_: String,
    /// Names of the required properties, in declaration order.
    #[serde(rename = "required", skip_serializing_if = "Vec::is_empty")]
    pub required_fields: Vec<String>,
    /// Properties, in declaration order.
    pub properties: IndexMap<String, Property>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An array model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayModel {
    /// Always `array`.
    #[serde(rename = "type")]
    pub type_: String,
    /// Element schema.
    pub items: Property,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A primitive model, produced when a scalar node is asked for a model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveModel {
    /// Schema type.
    #[serde(rename = "type")]
    pub type_: String,
    /// Schema format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A named model collected by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedModel {
    /// Definition name (the node's reference name).
    pub name: String,
    /// Definition body.
    pub model: Model,
}

/// Serialization of array parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CollectionFormat {
    /// Comma separated.
    Csv,
    /// Space separated.
    Ssv,
    /// Tab separated.
    Tsv,
    /// Pipe separated.
    Pipes,
    /// Repeated parameter.
    Multi,
}

/// A request parameter. The variant is serialized as the `in` keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "in", rename_all = "camelCase")]
pub enum Parameter {
    /// Query string parameter.
    Query(SerializableParameter),
    /// Path parameter.
    Path(SerializableParameter),
    /// Header parameter.
    Header(SerializableParameter),
    /// Form field parameter.
    FormData(SerializableParameter),
    /// Request body.
    Body(BodyParameter),
}

impl Parameter {
    /// Parameter name.
    pub fn name(&self) -> &str {
        match self {
            Parameter::Query(p)
            | Parameter::Path(p)
            | Parameter::Header(p)
            | Parameter::FormData(p) => &p.name,
            Parameter::Body(p) => &p.name,
        }
    }

    /// Whether the parameter is required.
    pub fn is_required(&self) -> bool {
        match self {
            Parameter::Query(p)
            | Parameter::Path(p)
            | Parameter::Header(p)
            | Parameter::FormData(p) => p.required,
            Parameter::Body(p) => p.required,
        }
    }

    /// Parameter description.
    pub fn description(&self) -> Option<&str> {
        match self {
            Parameter::Query(p)
            | Parameter::Path(p)
            | Parameter::Header(p)
            | Parameter::FormData(p) => p.description.as_deref(),
            Parameter::Body(p) => p.description.as_deref(),
        }
    }
}

/// A non-body parameter, carrying its own type and format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializableParameter {
    /// Parameter name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the parameter is required.
    pub required: bool,
    /// Schema type.
    #[serde(rename = "type")]
    pub type_: String,
    /// Schema format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Element schema, for `array` parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Property>,
    /// Element separator, for `array` parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_format: Option<CollectionFormat>,
    /// Validation keywords.
    #[serde(flatten)]
    pub validation: Validation,
}

/// A body parameter, carrying an embedded schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyParameter {
    /// Parameter name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the body is required.
    pub required: bool,
    /// Body schema.
    pub schema: Model,
}
