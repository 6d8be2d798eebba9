#![deny(missing_docs)]

//! # Property Builder
//!
//! Turns a mapping node into an inline schema property, recursively.
//! Nested nodes carrying a reference name become `$ref` pointers instead of
//! being inlined.

use crate::error::AppResult;
use crate::mapping::{Constraint, Mapping, MappingKind};
use crate::swagger::{
    ArrayProperty, ObjectProperty, Property, RefProperty, ScalarProperty, Validation,
};
use crate::type_resolver::{format, target_type};
use indexmap::IndexMap;

/// Converts `node` into a property.
///
/// The node itself is always materialized; only nested fields and list
/// elements with a reference name are replaced by `$ref` pointers.
pub fn to_property(node: &Mapping) -> AppResult<Property> {
    let required = node.is_required();
    let description = node.extras.description.clone();

    match &node.kind {
        MappingKind::Scalar(_) => Ok(Property::Scalar(ScalarProperty {
            type_: target_type(node)?.to_string(),
            format: format(node)?,
            description,
            example: node.extras.example.clone(),
            validation: validation(node),
            required,
        })),
        MappingKind::List(element) => Ok(Property::Array(ArrayProperty {
            type_: target_type(node)?.to_string(),
            items: Box::new(nested_property(element)?),
            description,
            required,
        })),
        MappingKind::Object(fields) => {
            let (properties, required_fields) = object_properties(fields)?;
            Ok(Property::Object(ObjectProperty {
                type_: target_type(node)?.to_string(),
                required_fields,
                properties,
                description,
                required,
            }))
        }
    }
}

/// Property for a node in nested position: a `$ref` when the node is named.
pub(crate) fn nested_property(node: &Mapping) -> AppResult<Property> {
    match node.ref_name() {
        Some(name) => Ok(Property::Ref(RefProperty::new(name, node.is_required()))),
        None => to_property(node),
    }
}

/// Builds the properties of an object and the list of its required fields.
pub(crate) fn object_properties(
    fields: &[(String, Mapping)],
) -> AppResult<(IndexMap<String, Property>, Vec<String>)> {
    let mut properties = IndexMap::with_capacity(fields.len());
    let mut required = Vec::new();

    for (name, field) in fields {
        if field.is_required() {
            required.push(name.clone());
        }
        properties.insert(name.clone(), nested_property(field)?);
    }

    Ok((properties, required))
}

/// Collects the validation keywords declared by a node's constraints.
pub(crate) fn validation(node: &Mapping) -> Validation {
    let mut validation = Validation::default();
    for constraint in &node.constraints {
        match constraint {
            Constraint::Pattern(p) => validation.pattern = Some(p.clone()),
            Constraint::MinLength(n) => validation.min_length = Some(*n),
            Constraint::MaxLength(n) => validation.max_length = Some(*n),
            Constraint::Minimum(x) => validation.minimum = Some(*x),
            Constraint::Maximum(x) => validation.maximum = Some(*x),
            Constraint::OneOf(values) => validation.enum_values = values.clone(),
            Constraint::Required | Constraint::Email => {}
        }
    }
    validation
}
