//! Python-specific tree-sitter configuration

use tree_sitter::Node;

/// Python node kinds the translator matches on
pub mod node_kinds {
    pub const CLASS_DEF: &str = "class_definition";
    pub const DECORATED_DEF: &str = "decorated_definition";
    pub const EXPRESSION_STATEMENT: &str = "expression_statement";
    pub const ASSIGNMENT: &str = "assignment";
    pub const TUPLE_PATTERN: &str = "tuple_pattern";
    pub const CALL: &str = "call";
    pub const IDENTIFIER: &str = "identifier";
    pub const ATTRIBUTE: &str = "attribute";
    pub const KEYWORD_ARGUMENT: &str = "keyword_argument";
    pub const PARENTHESIZED: &str = "parenthesized_expression";
}

/// Get node text from the source slice
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Named children with comments and other extras skipped
pub fn named_children<'tree>(node: &Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}

/// Strip surrounding parentheses from an expression node
///
/// The grammar keeps parentheses as nodes; classification and factory
/// recognition treat `(expr)` and `expr` alike.
pub fn strip_parens(mut node: Node) -> Node {
    while node.kind() == node_kinds::PARENTHESIZED {
        match named_children(&node).into_iter().next() {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse_python(code: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    #[test]
    fn test_node_text() {
        let code = "value = 42";
        let tree = parse_python(code);
        let root = tree.root_node();
        assert_eq!(node_text(&root, code), "value = 42");
    }

    #[test]
    fn test_named_children_skip_comments() {
        let code = "# leading comment\nx = 1\ny = 2\n";
        let tree = parse_python(code);
        let stmts = named_children(&tree.root_node());
        assert_eq!(stmts.len(), 2);
        assert!(stmts
            .iter()
            .all(|s| s.kind() == node_kinds::EXPRESSION_STATEMENT));
    }

    #[test]
    fn test_strip_parens() {
        let code = "((int))";
        let tree = parse_python(code);
        let stmt = tree.root_node().named_child(0).unwrap();
        let expr = stmt.named_child(0).unwrap();
        assert_eq!(expr.kind(), node_kinds::PARENTHESIZED);

        let stripped = strip_parens(expr);
        assert_eq!(stripped.kind(), node_kinds::IDENTIFIER);
        assert_eq!(node_text(&stripped, code), "int");
    }

    #[test]
    fn test_strip_parens_leaves_plain_nodes() {
        let code = "int";
        let tree = parse_python(code);
        let stmt = tree.root_node().named_child(0).unwrap();
        let expr = stmt.named_child(0).unwrap();
        assert_eq!(strip_parens(expr).kind(), node_kinds::IDENTIFIER);
    }
}
