#![deny(missing_docs)]

//! # Type Resolver
//!
//! Maps a mapping node to its Swagger `type` and `format` strings, and
//! classifies nodes as primitive or compound.

use crate::error::{AppError, AppResult};
use crate::mapping::{Mapping, MappingKind, ScalarType};

/// Returns the Swagger `type` of a node.
///
/// Scalars depend on their tag only; lists are `array` and objects `object`.
/// Fails with [`AppError::UnsupportedType`] for tags without a mapping.
pub fn target_type(node: &Mapping) -> AppResult<&'static str> {
    match &node.kind {
        MappingKind::Scalar(ty) => scalar_type(ty),
        MappingKind::List(_) => Ok("array"),
        MappingKind::Object(_) => Ok("object"),
    }
}

fn scalar_type(ty: &ScalarType) -> AppResult<&'static str> {
    match ty {
        ScalarType::Int | ScalarType::Long | ScalarType::BigInteger => Ok("integer"),
        ScalarType::Float | ScalarType::Double | ScalarType::BigDecimal => Ok("number"),
        ScalarType::Boolean => Ok("boolean"),
        ScalarType::Text | ScalarType::Uuid | ScalarType::DateTime | ScalarType::Date => {
            Ok("string")
        }
        ScalarType::Custom(tag) => Err(AppError::UnsupportedType(tag.clone())),
    }
}

/// Returns the Swagger `format` of a node, if it has one.
///
/// Priority: explicit format override, then `email` for text nodes declaring
/// the email constraint, then the format implied by the scalar tag.
pub fn format(node: &Mapping) -> AppResult<Option<String>> {
    if let Some(explicit) = node.extras.format.as_deref().filter(|f| !f.is_empty()) {
        return Ok(Some(explicit.to_string()));
    }

    let MappingKind::Scalar(ty) = &node.kind else {
        return Ok(None);
    };

    let inferred = match ty {
        ScalarType::Text if node.is_email() => Some("email"),
        ScalarType::Int => Some("int32"),
        ScalarType::Long => Some("int64"),
        ScalarType::Float => Some("float"),
        ScalarType::Double => Some("double"),
        ScalarType::Uuid => Some("uuid"),
        ScalarType::DateTime => Some("date-time"),
        ScalarType::Date => Some("date"),
        ScalarType::BigInteger
        | ScalarType::BigDecimal
        | ScalarType::Boolean
        | ScalarType::Text => None,
        ScalarType::Custom(tag) => return Err(AppError::UnsupportedType(tag.clone())),
    };

    Ok(inferred.map(str::to_string))
}

/// Whether a node needs no nested object schema.
///
/// Scalars are primitive. A list is primitive only when
/// `primitive_list_as_primitive` is set and its element is primitive.
/// Objects never are.
pub fn is_primitive(node: &Mapping, primitive_list_as_primitive: bool) -> bool {
    match &node.kind {
        MappingKind::Scalar(_) => true,
        MappingKind::List(element) => {
            primitive_list_as_primitive && is_primitive(element, primitive_list_as_primitive)
        }
        MappingKind::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{Constraint, Extras};

    fn with_format(node: Mapping, fmt: &str) -> Mapping {
        node.extras(Extras {
            format: Some(fmt.into()),
            ..Default::default()
        })
    }

    #[test]
    fn test_target_type() {
        assert_eq!(target_type(&Mapping::long()).unwrap(), "integer");
        assert_eq!(target_type(&Mapping::list(Mapping::int())).unwrap(), "array");
        assert_eq!(
            target_type(&Mapping::object(Vec::<(String, Mapping)>::new())).unwrap(),
            "object"
        );
        assert_eq!(
            target_type(&Mapping::scalar(ScalarType::Uuid)).unwrap(),
            "string"
        );
        assert_eq!(
            target_type(&Mapping::scalar(ScalarType::BigDecimal)).unwrap(),
            "number"
        );
        assert_eq!(
            target_type(&Mapping::scalar(ScalarType::Boolean)).unwrap(),
            "boolean"
        );
    }

    #[test]
    fn test_target_type_ignores_metadata() {
        let decorated = with_format(Mapping::long().required(), "json")
            .constrained(Constraint::Email);
        assert_eq!(target_type(&decorated).unwrap(), "integer");
    }

    #[test]
    fn test_unsupported_type() {
        let node = Mapping::scalar(ScalarType::Custom("binary".into()));
        let err = target_type(&node).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedType(ref t) if t == "binary"));
        assert!(format(&node).is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(
            format(&Mapping::scalar(ScalarType::DateTime)).unwrap().as_deref(),
            Some("date-time")
        );
        assert_eq!(
            format(&Mapping::text().constrained(Constraint::Email))
                .unwrap()
                .as_deref(),
            Some("email")
        );
        assert_eq!(
            format(&Mapping::long().constrained(Constraint::Email))
                .unwrap()
                .as_deref(),
            Some("int64")
        );
        assert_eq!(
            format(&with_format(Mapping::text(), "json")).unwrap().as_deref(),
            Some("json")
        );
        assert_eq!(format(&Mapping::int()).unwrap().as_deref(), Some("int32"));
        assert_eq!(
            format(&Mapping::scalar(ScalarType::BigDecimal)).unwrap(),
            None
        );
        assert_eq!(format(&Mapping::text()).unwrap(), None);
    }

    #[test]
    fn test_format_override_wins_for_every_tag() {
        let tags = [
            ScalarType::Int,
            ScalarType::Long,
            ScalarType::BigInteger,
            ScalarType::Float,
            ScalarType::Double,
            ScalarType::BigDecimal,
            ScalarType::Boolean,
            ScalarType::Text,
            ScalarType::Uuid,
            ScalarType::DateTime,
            ScalarType::Date,
        ];
        for tag in tags {
            let node = with_format(Mapping::scalar(tag.clone()), "custom")
                .constrained(Constraint::Email);
            assert_eq!(
                format(&node).unwrap().as_deref(),
                Some("custom"),
                "override ignored for {}",
                tag
            );
        }
    }

    #[test]
    fn test_is_primitive() {
        assert!(is_primitive(&Mapping::long(), true));
        assert!(is_primitive(&Mapping::list(Mapping::long()), true));
        assert!(!is_primitive(&Mapping::list(Mapping::long()), false));
        assert!(!is_primitive(
            &Mapping::object(Vec::<(String, Mapping)>::new()),
            true
        ));
        assert!(!is_primitive(
            &Mapping::list(Mapping::object([("id", Mapping::int())])),
            true
        ));
    }
}
