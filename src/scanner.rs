#![deny(missing_docs)]

//! # Model Scanner
//!
//! Collects every named sub-tree of a mapping into a flat list of
//! definitions, depth-first and pre-order: a parent always precedes the
//! models nested in it.
//!
//! Entries are keyed by reference name only. Two occurrences sharing a name
//! yield two entries, even when their structures differ; both are referenced
//! through the same `#/definitions/<name>` pointer at their use sites.

use crate::error::AppResult;
use crate::mapping::{Mapping, MappingKind};
use crate::model::to_model;
use crate::swagger::NamedModel;
use tracing::trace;

/// Scans `node` (named or not) for named sub-trees.
///
/// `in` locations are irrelevant here; the only failure is an unsupported
/// scalar tag inside a named sub-tree.
pub fn scan_models(node: &Mapping) -> AppResult<Vec<NamedModel>> {
    let mut models = Vec::new();
    collect(node, &mut models)?;
    Ok(models)
}

fn collect(node: &Mapping, models: &mut Vec<NamedModel>) -> AppResult<()> {
    if let Some(name) = node.ref_name() {
        trace!(name, position = models.len(), "registering model");
        models.push(NamedModel {
            name: name.to_string(),
            model: to_model(node)?,
        });
    }

    match &node.kind {
        MappingKind::Object(fields) => {
            for (_, field) in fields {
                collect(field, models)?;
            }
        }
        MappingKind::List(element) => collect(element, models)?,
        MappingKind::Scalar(_) => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::Extras;
    use crate::swagger::{Model, Property};

    fn named(node: Mapping, name: &str) -> Mapping {
        node.extras(Extras {
            ref_name: Some(name.into()),
            ..Default::default()
        })
    }

    #[test]
    fn test_scan_models_keeps_every_occurrence() {
        let root = named(
            Mapping::object([
                ("id", Mapping::long()),
                (
                    "props1",
                    named(
                        Mapping::object([("id", Mapping::long()), ("name", Mapping::text())]),
                        "props",
                    ),
                ),
                (
                    "props2",
                    named(
                        Mapping::object([
                            ("id", Mapping::long()),
                            ("name", Mapping::text()),
                            ("extra", Mapping::text()),
                        ]),
                        "props",
                    ),
                ),
                (
                    "props3",
                    named(
                        Mapping::object([("id", Mapping::long()), ("name", Mapping::text())]),
                        "props",
                    ),
                ),
            ]),
            "test",
        );

        let models = scan_models(&root).unwrap();
        let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["test", "props", "props", "props"]);

        let root_props = models[0].model.properties().unwrap();
        for field in ["props1", "props2", "props3"] {
            let Property::Ref(r) = &root_props[field] else {
                panic!("Expected ref for {}", field)
            };
            assert_eq!(r.reference, "#/definitions/props");
        }

        assert_ne!(models[1].model, models[2].model);
        assert_eq!(models[1].model, models[3].model);
    }

    #[test]
    fn test_unnamed_root_is_searched() {
        let root = Mapping::object([
            (
                "plain",
                Mapping::object([(
                    "inner",
                    named(Mapping::object([("x", Mapping::int())]), "Inner"),
                )]),
            ),
            (
                "items",
                Mapping::list(named(Mapping::object([("y", Mapping::int())]), "Item")),
            ),
        ]);
        let models = scan_models(&root).unwrap();
        let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Inner", "Item"]);
    }

    #[test]
    fn test_parent_precedes_nested_children() {
        let root = named(
            Mapping::object([(
                "child",
                named(
                    Mapping::object([(
                        "grandchild",
                        named(Mapping::object([("v", Mapping::int())]), "C"),
                    )]),
                    "B",
                ),
            )]),
            "A",
        );
        let models = scan_models(&root).unwrap();
        let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        let Model::Object(b) = &models[1].model else {
            panic!("Expected object model")
        };
        assert!(matches!(b.properties["grandchild"], Property::Ref(_)));
    }

    #[test]
    fn test_nothing_named() {
        let root = Mapping::object([("id", Mapping::long())]);
        assert!(scan_models(&root).unwrap().is_empty());
    }
}
