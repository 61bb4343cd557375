//! Class declaration extraction

use tree_sitter::Node;

use crate::features::parsing::{named_children, node_kinds, node_text, SpanExt};
use crate::features::translation::models::CppClass;
use crate::features::translation::signal_extractor::extract_signals;
use crate::features::type_resolution::TypeResolver;
use crate::shared::models::Result;

/// Translate one class_definition node
///
/// Base-class expressions all have to resolve; a single failure aborts
/// the class. Body statements other than plain assignments are skipped.
pub fn extract_class(node: Node, source: &str, resolver: &TypeResolver) -> Result<CppClass> {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(&n, source).to_string())
        .unwrap_or_default();

    let mut bases = Vec::new();
    if let Some(superclasses) = node.child_by_field_name("superclasses") {
        for arg in named_children(&superclasses) {
            // Python keyword arguments (metaclass=...) are not bases
            if arg.kind() == node_kinds::KEYWORD_ARGUMENT {
                continue;
            }
            bases.push(resolver.resolve(arg, source)?);
        }
    }

    let mut signals = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        for stmt in named_children(&body) {
            if stmt.kind() != node_kinds::EXPRESSION_STATEMENT {
                continue;
            }
            let expr = match named_children(&stmt).into_iter().next() {
                Some(expr) => expr,
                None => continue,
            };
            if expr.kind() != node_kinds::ASSIGNMENT {
                continue;
            }
            signals.extend(extract_signals(expr, source, resolver)?);
        }
    }

    Ok(CppClass {
        name,
        span: node.to_span(),
        bases,
        signals,
        slots: Vec::new(),
        members: Vec::new(),
    })
}
