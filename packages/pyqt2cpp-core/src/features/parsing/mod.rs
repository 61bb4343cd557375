//! Python parsing
//!
//! Wraps tree-sitter and the grammar-specific node helpers.

pub mod parser;
pub mod python;

pub use parser::{PythonParser, SpanExt};
pub use python::{named_children, node_kinds, node_text, strip_parens};
