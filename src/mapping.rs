#![deny(missing_docs)]

//! # Mapping Model
//!
//! Read-only view of a mapping specification: a tree of nodes, each with a
//! kind (scalar, list or object), declared constraints, and presentation
//! extras (`in`, description, format override, reference name).
//!
//! Trees are plain values. The helpers below only assemble a node once; the
//! converter never mutates them.

use serde::Deserialize;
use std::fmt::{self, Display};

/// The primitive tag of a scalar mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarType {
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// Arbitrary precision integer.
    BigInteger,
    /// Single precision float.
    Float,
    /// Double precision float.
    Double,
    /// Arbitrary precision decimal.
    BigDecimal,
    /// Boolean.
    Boolean,
    /// Free text.
    Text,
    /// UUID in its canonical text form.
    Uuid,
    /// Date and time.
    DateTime,
    /// Calendar date.
    Date,
    /// A tag declared by the mapping DSL that has no schema mapping.
    Custom(String),
}

impl ScalarType {
    /// Parses a scalar tag as written in mapping files.
    ///
    /// Unknown tags are kept as [`ScalarType::Custom`]; rejecting them is up to
    /// the type resolver.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "int" | "integer" | "int32" => ScalarType::Int,
            "long" | "int64" => ScalarType::Long,
            "bigInteger" | "bigint" => ScalarType::BigInteger,
            "float" => ScalarType::Float,
            "double" => ScalarType::Double,
            "bigDecimal" | "decimal" => ScalarType::BigDecimal,
            "boolean" | "bool" => ScalarType::Boolean,
            "text" | "string" => ScalarType::Text,
            "uuid" => ScalarType::Uuid,
            "datetime" | "dateTime" | "date-time" => ScalarType::DateTime,
            "date" => ScalarType::Date,
            other => ScalarType::Custom(other.to_string()),
        }
    }
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::Int => write!(f, "int"),
            ScalarType::Long => write!(f, "long"),
            ScalarType::BigInteger => write!(f, "bigInteger"),
            ScalarType::Float => write!(f, "float"),
            ScalarType::Double => write!(f, "double"),
            ScalarType::BigDecimal => write!(f, "bigDecimal"),
            ScalarType::Boolean => write!(f, "boolean"),
            ScalarType::Text => write!(f, "text"),
            ScalarType::Uuid => write!(f, "uuid"),
            ScalarType::DateTime => write!(f, "datetime"),
            ScalarType::Date => write!(f, "date"),
            ScalarType::Custom(tag) => write!(f, "{}", tag),
        }
    }
}

/// A declared validation rule. Only its presence and arguments are read.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// The value must be present.
    Required,
    /// The value must be an email address.
    Email,
    /// The value must match a regular expression.
    Pattern(String),
    /// Minimum text length.
    MinLength(u64),
    /// Maximum text length.
    MaxLength(u64),
    /// Inclusive numeric lower bound.
    Minimum(f64),
    /// Inclusive numeric upper bound.
    Maximum(f64),
    /// The value must be one of the listed values.
    OneOf(Vec<String>),
}

/// Where a request parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamLocation {
    /// Query string.
    Query,
    /// Path segment.
    Path,
    /// HTTP header.
    Header,
    /// Form field.
    FormData,
    /// Request body.
    Body,
}

impl Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamLocation::Query => write!(f, "query"),
            ParamLocation::Path => write!(f, "path"),
            ParamLocation::Header => write!(f, "header"),
            ParamLocation::FormData => write!(f, "formData"),
            ParamLocation::Body => write!(f, "body"),
        }
    }
}

/// Presentation metadata attached to a node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extras {
    /// Parameter location. Required for any node used directly as a parameter.
    pub location: Option<ParamLocation>,
    /// Human readable description.
    pub description: Option<String>,
    /// Explicit format, overriding the inferred one.
    pub format: Option<String>,
    /// Marks the node as a named, reusable definition.
    pub ref_name: Option<String>,
    /// Example value, rendered verbatim.
    pub example: Option<String>,
}

/// The shape of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingKind {
    /// A single value.
    Scalar(ScalarType),
    /// A homogeneous list.
    List(Box<Mapping>),
    /// A group of named fields, in declaration order.
    Object(Vec<(String, Mapping)>),
}

/// A node of the mapping tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    /// Node shape.
    pub kind: MappingKind,
    /// Declared constraints.
    pub constraints: Vec<Constraint>,
    /// Presentation metadata.
    pub extras: Extras,
}

impl Mapping {
    /// Creates a node of the given kind without constraints or extras.
    pub fn new(kind: MappingKind) -> Self {
        Self {
            kind,
            constraints: Vec::new(),
            extras: Extras::default(),
        }
    }

    /// A scalar node.
    pub fn scalar(ty: ScalarType) -> Self {
        Self::new(MappingKind::Scalar(ty))
    }

    /// A 32-bit integer node.
    pub fn int() -> Self {
        Self::scalar(ScalarType::Int)
    }

    /// A 64-bit integer node.
    pub fn long() -> Self {
        Self::scalar(ScalarType::Long)
    }

    /// A text node.
    pub fn text() -> Self {
        Self::scalar(ScalarType::Text)
    }

    /// A list node.
    pub fn list(element: Mapping) -> Self {
        Self::new(MappingKind::List(Box::new(element)))
    }

    /// An object node from `(name, node)` pairs.
    pub fn object<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Mapping)>,
        S: Into<String>,
    {
        Self::new(MappingKind::Object(
            fields.into_iter().map(|(n, m)| (n.into(), m)).collect(),
        ))
    }

    /// Adds a constraint.
    pub fn constrained(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Shorthand for `constrained(Constraint::Required)`.
    pub fn required(self) -> Self {
        self.constrained(Constraint::Required)
    }

    /// Replaces the presentation metadata.
    pub fn extras(mut self, extras: Extras) -> Self {
        self.extras = extras;
        self
    }

    /// Whether the node declares [`Constraint::Required`].
    pub fn is_required(&self) -> bool {
        self.constraints.contains(&Constraint::Required)
    }

    /// Whether the node declares [`Constraint::Email`].
    pub fn is_email(&self) -> bool {
        self.constraints.contains(&Constraint::Email)
    }

    /// The reference name, if set and non-empty.
    pub fn ref_name(&self) -> Option<&str> {
        self.extras.ref_name.as_deref().filter(|n| !n.is_empty())
    }

    /// The fields of an object node, or `None` for scalars and lists.
    pub fn fields(&self) -> Option<&[(String, Mapping)]> {
        match &self.kind {
            MappingKind::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_tags() {
        assert_eq!(ScalarType::from_tag("long"), ScalarType::Long);
        assert_eq!(ScalarType::from_tag("date-time"), ScalarType::DateTime);
        assert_eq!(
            ScalarType::from_tag("binary"),
            ScalarType::Custom("binary".into())
        );
    }

    #[test]
    fn test_builder_helpers() {
        let node = Mapping::text().required().extras(Extras {
            description: Some("name".into()),
            ref_name: Some(String::new()),
            ..Default::default()
        });
        assert!(node.is_required());
        assert!(!node.is_email());
        assert_eq!(node.extras.description.as_deref(), Some("name"));
        // Empty names do not mark a definition.
        assert_eq!(node.ref_name(), None);
    }

    #[test]
    fn test_object_preserves_field_order() {
        let node = Mapping::object([("b", Mapping::int()), ("a", Mapping::text())]);
        let names: Vec<&str> = node
            .fields()
            .unwrap()
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_location_serde_names() {
        let loc: ParamLocation = serde_json::from_str("\"formData\"").unwrap();
        assert_eq!(loc, ParamLocation::FormData);
        assert_eq!(ParamLocation::FormData.to_string(), "formData");
    }
}
