//! Type expression classification
//!
//! Bare identifiers and attribute chains are the only expression shapes
//! with a C++ rendering. Anything else is an unrecoverable error, which
//! fails the statement or class that referenced it.

use tree_sitter::Node;

use crate::features::parsing::{node_kinds, node_text, strip_parens, SpanExt};
use crate::features::translation::models::{CppType, Primitive};
use crate::features::type_resolution::registry::QtTypeRegistry;
use crate::shared::models::{Result, TranslateError};

/// Maps single type expressions to C++ types
///
/// Checks run in fixed priority order; the first match wins.
pub struct TypeResolver {
    registry: QtTypeRegistry,
}

impl TypeResolver {
    pub fn new(registry: QtTypeRegistry) -> Self {
        Self { registry }
    }

    /// Classify one base-class or signal-argument expression
    pub fn resolve(&self, node: Node, source: &str) -> Result<CppType> {
        let node = strip_parens(node);

        if node.kind() != node_kinds::IDENTIFIER && node.kind() != node_kinds::ATTRIBUTE {
            return Err(TranslateError::unknown_type(
                node_text(&node, source),
                node.to_span(),
            ));
        }

        // 1. Primitive name
        if node.kind() == node_kinds::IDENTIFIER {
            if let Some(primitive) = Primitive::from_name(node_text(&node, source)) {
                return Ok(CppType::Primitive(primitive));
            }
        }

        // 2. Qt wrapper class, matched on the terminal name
        let segments = dotted_path(node, source);
        if let Some(terminal) = segments.last() {
            if self.registry.contains(terminal) {
                return Ok(CppType::QtClass(terminal.clone()));
            }
        }

        // 3. Everything else keeps its own name as a scope path
        Ok(CppType::Scoped(segments.join("::")))
    }
}

/// Collect the segments of an attribute chain, outermost last
///
/// Non-identifier roots contribute nothing, so `f().x.y` degrades to the
/// reachable suffix `["x", "y"]`.
fn dotted_path(node: Node, source: &str) -> Vec<String> {
    let mut segments = Vec::new();
    collect_segments(node, source, &mut segments);
    segments
}

fn collect_segments(node: Node, source: &str, out: &mut Vec<String>) {
    let node = strip_parens(node);
    match node.kind() {
        node_kinds::IDENTIFIER => out.push(node_text(&node, source).to_string()),
        node_kinds::ATTRIBUTE => {
            if let Some(object) = node.child_by_field_name("object") {
                collect_segments(object, source, out);
            }
            if let Some(attribute) = node.child_by_field_name("attribute") {
                out.push(node_text(&attribute, source).to_string());
            }
        }
        _ => {}
    }
}
