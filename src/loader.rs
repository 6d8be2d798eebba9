#![deny(missing_docs)]

//! # Mapping Files
//!
//! Reads mapping trees from YAML or JSON documents, so the converter can be
//! driven without writing Rust.
//!
//! ```yaml
//! type: object
//! fields:
//!   id: { type: int, in: path, description: id }
//!   data:
//!     type: object
//!     in: body
//!     refName: Pet
//!     fields:
//!       name: { type: text, required: true }
//!       tags: { type: list, items: { type: text } }
//! ```
//!
//! Field order is preserved. Unknown scalar tags are kept and rejected later
//! by the type resolver.

use crate::error::{AppError, AppResult};
use crate::mapping::{Constraint, Extras, Mapping, MappingKind, ParamLocation, ScalarType};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One node of a mapping document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MappingDef {
    /// Scalar tag, `list` or `object`.
    #[serde(rename = "type")]
    pub type_: String,
    /// Element of a `list`.
    pub items: Option<Box<MappingDef>>,
    /// Fields of an `object`.
    pub fields: Option<IndexMap<String, MappingDef>>,
    /// Declares the required constraint.
    #[serde(default)]
    pub required: bool,
    /// Declares the email constraint.
    #[serde(default)]
    pub email: bool,
    /// Regular expression constraint.
    pub pattern: Option<String>,
    /// Minimum length constraint.
    pub min_length: Option<u64>,
    /// Maximum length constraint.
    pub max_length: Option<u64>,
    /// Lower bound constraint.
    pub minimum: Option<f64>,
    /// Upper bound constraint.
    pub maximum: Option<f64>,
    /// Allowed values constraint.
    pub one_of: Option<Vec<String>>,
    /// Parameter location.
    #[serde(rename = "in")]
    pub location: Option<ParamLocation>,
    /// Description.
    pub description: Option<String>,
    /// Format override.
    pub format: Option<String>,
    /// Definition name.
    pub ref_name: Option<String>,
    /// Example value.
    pub example: Option<String>,
}

impl MappingDef {
    /// Builds the mapping tree. `path` names this node in error messages.
    pub fn to_mapping(&self, path: &str) -> AppResult<Mapping> {
        let kind = match self.type_.as_str() {
            "list" => {
                if self.fields.is_some() {
                    return Err(invalid(path, "a list cannot declare fields"));
                }
                let items = self
                    .items
                    .as_ref()
                    .ok_or_else(|| invalid(path, "a list needs items"))?;
                MappingKind::List(Box::new(items.to_mapping(&format!("{}[]", path))?))
            }
            "object" => {
                if self.items.is_some() {
                    return Err(invalid(path, "an object cannot declare items"));
                }
                let fields = self
                    .fields
                    .as_ref()
                    .ok_or_else(|| invalid(path, "an object needs fields"))?;
                let mut converted = Vec::with_capacity(fields.len());
                for (name, def) in fields {
                    converted.push((name.clone(), def.to_mapping(&join(path, name))?));
                }
                MappingKind::Object(converted)
            }
            tag => {
                if self.items.is_some() || self.fields.is_some() {
                    return Err(invalid(path, "a scalar cannot declare items or fields"));
                }
                MappingKind::Scalar(ScalarType::from_tag(tag))
            }
        };

        Ok(Mapping {
            kind,
            constraints: self.constraints(),
            extras: Extras {
                location: self.location,
                description: self.description.clone(),
                format: self.format.clone(),
                ref_name: self.ref_name.clone(),
                example: self.example.clone(),
            },
        })
    }

    fn constraints(&self) -> Vec<Constraint> {
        let mut constraints = Vec::new();
        if self.required {
            constraints.push(Constraint::Required);
        }
        if self.email {
            constraints.push(Constraint::Email);
        }
        if let Some(p) = &self.pattern {
            constraints.push(Constraint::Pattern(p.clone()));
        }
        if let Some(n) = self.min_length {
            constraints.push(Constraint::MinLength(n));
        }
        if let Some(n) = self.max_length {
            constraints.push(Constraint::MaxLength(n));
        }
        if let Some(x) = self.minimum {
            constraints.push(Constraint::Minimum(x));
        }
        if let Some(x) = self.maximum {
            constraints.push(Constraint::Maximum(x));
        }
        if let Some(values) = &self.one_of {
            constraints.push(Constraint::OneOf(values.clone()));
        }
        constraints
    }
}

fn invalid(path: &str, reason: &str) -> AppError {
    let at = if path.is_empty() { "<root>" } else { path };
    AppError::InvalidMapping(format!("{}: {}", at, reason))
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

/// Parses a YAML mapping document.
pub fn from_yaml_str(content: &str) -> AppResult<Mapping> {
    let def: MappingDef = serde_yaml::from_str(content)?;
    def.to_mapping("")
}

/// Parses a JSON mapping document.
pub fn from_json_str(content: &str) -> AppResult<Mapping> {
    let def: MappingDef = serde_json::from_str(content)?;
    def.to_mapping("")
}

/// Reads a mapping document, choosing the syntax from the file extension.
/// Anything but `.json` is read as YAML.
pub fn load_file(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => from_json_str(&content),
        _ => from_yaml_str(&content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_document() {
        let mapping = from_yaml_str(
            r#"
type: object
fields:
  id: { type: int, in: path, description: id }
  data:
    type: object
    in: body
    refName: Pet
    fields:
      name: { type: text, required: true, maxLength: 20 }
      tags: { type: list, items: { type: text } }
"#,
        )
        .unwrap();

        let fields = mapping.fields().unwrap();
        assert_eq!(fields[0].0, "id");
        assert_eq!(fields[0].1.extras.location, Some(ParamLocation::Path));
        assert_eq!(fields[0].1.kind, MappingKind::Scalar(ScalarType::Int));

        let data = &fields[1].1;
        assert_eq!(data.ref_name(), Some("Pet"));
        let inner = data.fields().unwrap();
        assert_eq!(
            inner[0].1.constraints,
            vec![Constraint::Required, Constraint::MaxLength(20)]
        );
        assert!(matches!(inner[1].1.kind, MappingKind::List(_)));
    }

    #[test]
    fn test_list_without_items() {
        let err = from_yaml_str("type: object\nfields:\n  tags: { type: list }").unwrap_err();
        assert_eq!(err.to_string(), "Invalid mapping: tags: a list needs items");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = from_yaml_str("type: text\nrequird: true").unwrap_err();
        assert!(matches!(err, AppError::Yaml(_)));
    }

    #[test]
    fn test_unknown_tag_kept() {
        let mapping = from_json_str(r#"{"type": "binary"}"#).unwrap();
        assert_eq!(
            mapping.kind,
            MappingKind::Scalar(ScalarType::Custom("binary".into()))
        );
    }
}
