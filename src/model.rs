#![deny(missing_docs)]

//! # Model Builder
//!
//! Like the property builder, but the outermost node always materializes as
//! a standalone model (object, array or primitive), suitable as a body schema
//! or as the target of a named definition.

use crate::error::AppResult;
use crate::mapping::{Mapping, MappingKind};
use crate::property::{nested_property, object_properties};
use crate::swagger::{ArrayModel, Model, ObjectModel, PrimitiveModel};
use crate::type_resolver::{format, target_type};

/// Converts `node` into a model.
///
/// A reference name on `node` itself is ignored: this builder produces the
/// definition the name points to. Named nested fields still become `$ref`s.
pub fn to_model(node: &Mapping) -> AppResult<Model> {
    let description = node.extras.description.clone();

    match &node.kind {
        MappingKind::Object(fields) => {
            let (properties, required_fields) = object_properties(fields)?;
            Ok(Model::Object(ObjectModel {
                type_: target_type(node)?.to_string(),
                required_fields,
                properties,
                description,
            }))
        }
        MappingKind::List(element) => Ok(Model::Array(ArrayModel {
            type_: target_type(node)?.to_string(),
            items: nested_property(element)?,
            description,
        })),
        MappingKind::Scalar(_) => Ok(Model::Primitive(PrimitiveModel {
            type_: target_type(node)?.to_string(),
            format: format(node)?,
            description,
        })),
    }
}
