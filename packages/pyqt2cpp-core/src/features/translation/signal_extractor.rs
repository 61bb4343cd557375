//! Signal declaration extraction
//!
//! Recognizes the factory-call assignment idiom:
//!
//! ```python
//! clicked = pyqtSignal(int)
//! moved = QtCore.pyqtSignal(int, int)
//! ```
//!
//! Statements that do not match the idiom yield no signals and no error.
//! A recognized factory call with an unresolvable argument fails the
//! whole statement.

use std::sync::Arc;

use tree_sitter::Node;

use crate::features::parsing::{named_children, node_kinds, node_text, strip_parens, SpanExt};
use crate::features::translation::models::{CppSignal, CppType};
use crate::features::type_resolution::TypeResolver;
use crate::shared::models::{Result, Span};

const FACTORY_NAME: &str = "pyqtSignal";
const FACTORY_MODULE: &str = "QtCore";

/// Translate one assignment statement into its declared signals
pub fn extract_signals(
    node: Node,
    source: &str,
    resolver: &TypeResolver,
) -> Result<Vec<CppSignal>> {
    if node.kind() != node_kinds::ASSIGNMENT {
        return Ok(Vec::new());
    }
    // Annotated assignments never carry signal declarations
    if node.child_by_field_name("type").is_some() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    let mut value = None;
    collect_targets(node, source, &mut names, &mut value);

    let value = match value {
        Some(value) => strip_parens(value),
        None => return Ok(Vec::new()),
    };
    if value.kind() != node_kinds::CALL {
        return Ok(Vec::new());
    }
    let function = match value.child_by_field_name("function") {
        Some(function) => function,
        None => return Ok(Vec::new()),
    };
    if !is_factory(function, source) {
        return Ok(Vec::new());
    }

    // Arguments resolve before names are consulted, so a bad argument
    // rejects the statement even when every target was dropped.
    let mut params = Vec::new();
    if let Some(arguments) = value.child_by_field_name("arguments") {
        for arg in named_children(&arguments) {
            if arg.kind() == node_kinds::KEYWORD_ARGUMENT {
                continue;
            }
            params.push(resolver.resolve(arg, source)?);
        }
    }
    let params: Arc<[CppType]> = params.into();

    Ok(names
        .into_iter()
        .map(|(name, span)| CppSignal {
            name,
            params: Arc::clone(&params),
            span,
        })
        .collect())
}

/// Walk the chained-assignment spine, keeping simple-name targets
///
/// `a = b = v` nests as `assignment(left: a, right: assignment(left: b,
/// right: v))`. Tuple, attribute, and subscript targets are dropped
/// without error; a name in grouping parentheses still counts.
fn collect_targets<'tree>(
    node: Node<'tree>,
    source: &str,
    names: &mut Vec<(String, Span)>,
    value: &mut Option<Node<'tree>>,
) {
    if let Some(left) = node.child_by_field_name("left") {
        let left = unwrap_target_grouping(left);
        if left.kind() == node_kinds::IDENTIFIER {
            names.push((node_text(&left, source).to_string(), left.to_span()));
        }
    }
    match node.child_by_field_name("right") {
        Some(right) if right.kind() == node_kinds::ASSIGNMENT => {
            collect_targets(right, source, names, value);
        }
        Some(right) => *value = Some(right),
        None => {}
    }
}

/// Peel grouping parentheses off an assignment target
///
/// In pattern position the grammar parses `(b)` as a one-child
/// `tuple_pattern` rather than a parenthesized expression. Without a
/// comma that is plain grouping and the target is `b`; `(b,)` keeps its
/// comma and is a real one-element tuple.
fn unwrap_target_grouping(mut node: Node) -> Node {
    while node.kind() == node_kinds::TUPLE_PATTERN && !has_comma(&node) {
        let patterns = named_children(&node);
        match patterns.as_slice() {
            [single] => node = *single,
            _ => break,
        }
    }
    node
}

/// Any comma token among the node's direct children
fn has_comma(node: &Node) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == ",");
    found
}

/// The factory is recognized in exactly two spellings:
/// `pyqtSignal` and `QtCore.pyqtSignal`
fn is_factory(node: Node, source: &str) -> bool {
    let node = strip_parens(node);
    match node.kind() {
        node_kinds::IDENTIFIER => node_text(&node, source) == FACTORY_NAME,
        node_kinds::ATTRIBUTE => {
            let object = node.child_by_field_name("object").map(strip_parens);
            let attribute = node.child_by_field_name("attribute");
            match (object, attribute) {
                (Some(object), Some(attribute)) => {
                    object.kind() == node_kinds::IDENTIFIER
                        && node_text(&object, source) == FACTORY_MODULE
                        && node_text(&attribute, source) == FACTORY_NAME
                }
                _ => false,
            }
        }
        _ => false,
    }
}
