#![deny(missing_docs)]

//! # Parameter Builder
//!
//! Turns a named mapping, or a group of named fields, into request
//! parameters. The parameter kind follows the node's declared `in` location;
//! body parameters embed a full model.

use crate::config::ConverterConfig;
use crate::error::{AppError, AppResult};
use crate::mapping::{Mapping, MappingKind, ParamLocation};
use crate::model::to_model;
use crate::property::{to_property, validation};
use crate::swagger::{BodyParameter, Parameter, SerializableParameter};
use crate::type_resolver::{format, is_primitive, target_type};
use tracing::debug;

/// Converts a named mapping into parameters, in field declaration order.
///
/// An outermost object node without an `in` location is a group: each field
/// becomes exactly one parameter named after the field. Groups do not nest,
/// so every field (and any other outermost node) must declare `in`, otherwise
/// [`AppError::MissingLocation`] is returned. Parameter names are not checked
/// for collisions.
pub fn to_parameters(
    name: &str,
    node: &Mapping,
    config: &ConverterConfig,
) -> AppResult<Vec<Parameter>> {
    match &node.kind {
        MappingKind::Object(fields) if node.extras.location.is_none() => {
            let mut params = Vec::with_capacity(fields.len());
            for (field_name, field) in fields {
                params.push(to_parameter(field_name, field, config)?);
            }
            Ok(params)
        }
        _ => Ok(vec![to_parameter(name, node, config)?]),
    }
}

fn to_parameter(name: &str, node: &Mapping, config: &ConverterConfig) -> AppResult<Parameter> {
    let location = node.extras.location.ok_or(AppError::MissingLocation)?;
    debug!(parameter = name, location = %location, "building parameter");

    let param = match location {
        ParamLocation::Body => Parameter::Body(BodyParameter {
            name: name.to_string(),
            description: node.extras.description.clone(),
            required: node.is_required(),
            schema: to_model(node)?,
        }),
        ParamLocation::Query => Parameter::Query(serializable(name, node, location, config)?),
        ParamLocation::Path => Parameter::Path(serializable(name, node, location, config)?),
        ParamLocation::Header => Parameter::Header(serializable(name, node, location, config)?),
        ParamLocation::FormData => {
            Parameter::FormData(serializable(name, node, location, config)?)
        }
    };

    Ok(param)
}

fn serializable(
    name: &str,
    node: &Mapping,
    location: ParamLocation,
    config: &ConverterConfig,
) -> AppResult<SerializableParameter> {
    if !is_primitive(node, config.primitive_list_params) {
        return Err(AppError::NonPrimitiveParameter(name.to_string()));
    }

    let items = match &node.kind {
        MappingKind::List(element) => Some(to_property(element)?),
        _ => None,
    };
    let collection_format = items.as_ref().and(config.collection_format);

    Ok(SerializableParameter {
        name: name.to_string(),
        description: node.extras.description.clone(),
        // Swagger 2.0 path parameters are always required.
        required: location == ParamLocation::Path || node.is_required(),
        type_: target_type(node)?.to_string(),
        format: format(node)?,
        items,
        collection_format,
        validation: validation(node),
    })
}
