//! Whole-file fixture operations.
//!
//! Each [`Operation`] loads one file, applies one transform and emits the
//! result through [`Output`]. Tree transforms reach either every test
//! object in the fixture or the whole document, depending on [`Scope`].

use crate::document::{FixtureDocument, Format, Output, read_text, write_text};
use crate::{FixtureError, mutators};
use serde_json::Value;
use std::path::Path;
use zobject_core::{
    ElementTypes, canonicalize, delist_cons_only, normalize_list_shapes, to_benjamin_form,
};

/// Transforms that can be run on a fixture file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Reduce objects to canonical form.
    Canonicalize,
    /// Flatten `Z10` cons-lists into arrays.
    ReplaceZ10s,
    /// Rewrite every list as a typed list.
    TypedLists,
    /// Prefix every array with its element type.
    Benjamin,
    /// Append the stock success cases.
    AddTests,
    /// Constrain the schema's `Z1K1` to the type named by the file.
    CanonicalizeZ1K1,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Canonicalize => "canonicalize",
            Operation::ReplaceZ10s => "replace-z10s",
            Operation::TypedLists => "typed-lists",
            Operation::Benjamin => "benjamin",
            Operation::AddTests => "add-tests",
            Operation::CanonicalizeZ1K1 => "canonicalize-z1k1",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which parts of a document a tree transform touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Test objects if the document has `test_objects`, else the document.
    #[default]
    Auto,
    /// `object` of every entry under `test_objects.success` and `.failure`.
    Objects,
    /// The whole tree.
    Document,
}

/// Settings shared by every operation.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub scope: Scope,
    pub element_types: ElementTypes,
}

/// Apply `op` to a loaded document.
pub fn apply(doc: &mut FixtureDocument, op: Operation, ctx: &Context) -> Result<(), FixtureError> {
    match op {
        Operation::Canonicalize => {
            for_each_target(doc.tree_mut(), ctx.scope, |t| *t = canonicalize(t))
        }
        Operation::ReplaceZ10s => {
            for_each_target(doc.tree_mut(), ctx.scope, |t| *t = delist_cons_only(t))
        }
        Operation::TypedLists => for_each_target(doc.tree_mut(), ctx.scope, |t| {
            *t = normalize_list_shapes(t, &ctx.element_types)
        }),
        Operation::Benjamin => for_each_target(doc.tree_mut(), ctx.scope, to_benjamin_form),
        Operation::AddTests => mutators::add_test_cases(doc.tree_mut()),
        Operation::CanonicalizeZ1K1 => {
            let zid = mutators::type_id_from_path(doc.path())?;
            mutators::canonicalize_type_field(doc.tree_mut(), &zid)
        }
    }
}

/// Load `path`, apply `op` and emit. Returns the rendered text.
pub fn run(
    path: &Path,
    format: Format,
    op: Operation,
    ctx: &Context,
    output: Output,
) -> Result<String, FixtureError> {
    let mut doc = FixtureDocument::load(path, format)?;
    apply(&mut doc, op, ctx)?;
    tracing::info!(
        %op,
        path = %path.display(),
        format = %doc.format(),
        ?output,
        "applied"
    );
    doc.emit(output)
}

/// Strip trailing newlines from a file, leaving the rest byte-for-byte.
pub fn trim_trailing_newlines(path: &Path, output: Output) -> Result<String, FixtureError> {
    let text = read_text(path)?;
    let trimmed = text.trim_end_matches('\n').to_string();
    match output {
        Output::DryRun => println!("{trimmed}"),
        Output::Write => write_text(path, &trimmed)?,
    }
    Ok(trimmed)
}

fn for_each_target(
    tree: &mut Value,
    scope: Scope,
    mut f: impl FnMut(&mut Value),
) -> Result<(), FixtureError> {
    let scope = match scope {
        Scope::Auto if tree.get("test_objects").is_some() => Scope::Objects,
        Scope::Auto => Scope::Document,
        other => other,
    };
    match scope {
        Scope::Document | Scope::Auto => f(tree),
        Scope::Objects => {
            let test_objects = tree
                .get_mut("test_objects")
                .ok_or_else(|| FixtureError::MissingField("test_objects".to_string()))?;
            for key in ["failure", "success"] {
                let Some(Value::Array(entries)) = test_objects.get_mut(key) else {
                    continue;
                };
                for object in entries.iter_mut().filter_map(|e| e.get_mut("object")) {
                    f(object);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture(tree: Value) -> FixtureDocument {
        let text = serde_json::to_string(&tree).unwrap();
        FixtureDocument::parse("schemas/Z6.json", Format::Json, &text).unwrap()
    }

    fn run_on(tree: Value, op: Operation, scope: Scope) -> Value {
        let mut doc = fixture(tree);
        let ctx = Context {
            scope,
            ..Context::default()
        };
        apply(&mut doc, op, &ctx).unwrap();
        doc.tree().clone()
    }

    #[test]
    fn test_canonicalize_objects_only() {
        let tree = json!({
            "test_objects": {
                "success": [{"name": "a", "object": {"Z1K1": "Z6", "Z6K1": "hi"}}],
                "failure": [{"name": "b", "object": {"Z1K1": "Z9", "Z9K1": "Z1000"}}]
            },
            "other": {"Z1K1": "Z6", "Z6K1": "left alone"}
        });
        let result = run_on(tree, Operation::Canonicalize, Scope::Auto);
        assert_eq!(result["test_objects"]["success"][0]["object"], "hi");
        assert_eq!(
            result["test_objects"]["failure"][0]["object"],
            json!({"Z1K1": "Z9", "Z9K1": "Z1000"})
        );
        assert_eq!(result["other"], json!({"Z1K1": "Z6", "Z6K1": "left alone"}));
    }

    #[test]
    fn test_document_scope() {
        let tree = json!({"Z1K1": "Z10", "Z10K1": "a"});
        assert_eq!(
            run_on(tree.clone(), Operation::ReplaceZ10s, Scope::Auto),
            json!(["a"])
        );
        assert_eq!(
            run_on(tree.clone(), Operation::Benjamin, Scope::Document),
            tree
        );
    }

    #[test]
    fn test_objects_scope_requires_test_objects() {
        let mut doc = fixture(json!({"a": 1}));
        let ctx = Context {
            scope: Scope::Objects,
            ..Context::default()
        };
        assert!(matches!(
            apply(&mut doc, Operation::Canonicalize, &ctx),
            Err(FixtureError::MissingField(_))
        ));
    }

    #[test]
    fn test_benjamin_leaves_fixture_lists_alone() {
        let tree = json!({"test_objects": {"success": [{"name": "a", "object": ["x"]}]}});
        let result = run_on(tree, Operation::Benjamin, Scope::Auto);
        assert_eq!(
            result,
            json!({"test_objects": {"success": [{"name": "a", "object": ["Z6", "x"]}]}})
        );
    }

    #[test]
    fn test_typed_lists_use_context_table() {
        let tree = json!({"test_objects": {"success": [
            {"name": "a", "object": {"Z1K1": "Z40", "Z40K1": []}}
        ]}});
        let mut doc = fixture(tree);
        let mut element_types = ElementTypes::empty();
        element_types.insert("Z40K1", "Z6");
        let ctx = Context {
            scope: Scope::Auto,
            element_types,
        };
        apply(&mut doc, Operation::TypedLists, &ctx).unwrap();
        let list = &doc.tree()["test_objects"]["success"][0]["object"]["Z40K1"];
        assert_eq!(list["Z1K1"]["Z881K1"], json!({"Z1K1": "Z9", "Z9K1": "Z6"}));
    }

    #[test]
    fn test_canonicalize_z1k1_uses_file_name() {
        let mut doc = fixture(json!({
            "definitions": {"objects": {"Z6_literal": {"properties": {}}}}
        }));
        apply(&mut doc, Operation::CanonicalizeZ1K1, &Context::default()).unwrap();
        let literal = &doc.tree()["definitions"]["objects"]["Z6_literal"];
        let z1k1 = &literal["properties"]["Z1K1"];
        assert_eq!(z1k1["allOf"][1]["enum"], json!(["Z6"]));
    }
}
