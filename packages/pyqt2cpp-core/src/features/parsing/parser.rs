//! Tree-sitter parser wrapper
//!
//! This is where the tree-sitter dependency lives. tree-sitter recovers
//! from bad input by inserting ERROR and MISSING nodes instead of
//! failing, so the parsed tree is scanned for them up front.

use tree_sitter::{Node, Parser as TSParser, Tree};

use crate::shared::models::{Result, Span, TranslateError};

/// Python parser backed by tree-sitter
#[derive(Debug, Default)]
pub struct PythonParser;

impl PythonParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a module, failing on the first syntax error
    pub fn parse(&self, source: &str) -> Result<Tree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .map_err(|e| TranslateError::language(format!("failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| TranslateError::parse("parser produced no tree", Span::zero()))?;

        if let Some(bad) = first_error(tree.root_node()) {
            let message = if bad.is_missing() {
                format!("missing {}", bad.kind())
            } else {
                "invalid syntax".to_string()
            };
            return Err(TranslateError::parse(message, bad.to_span()));
        }

        Ok(tree)
    }
}

/// Find the first ERROR or MISSING node, depth first
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if let Some(err) = first_error(child) {
                return Some(err);
            }
        }
    }
    None
}

/// Span extraction from tree-sitter nodes
pub trait SpanExt {
    fn to_span(&self) -> Span;
}

impl SpanExt for Node<'_> {
    fn to_span(&self) -> Span {
        Span::new(
            self.start_position().row as u32 + 1,
            self.start_position().column as u32,
            self.end_position().row as u32 + 1,
            self.end_position().column as u32,
        )
    }
}
