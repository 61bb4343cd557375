//! Module translation entry points
//!
//! The walk stays at the top level of the module: classes nested inside
//! functions or other classes are not translated.

use tracing::debug;
use tree_sitter::Node;

use crate::features::parsing::{named_children, node_kinds, PythonParser};
use crate::features::translation::class_extractor::extract_class;
use crate::features::translation::models::CppClass;
use crate::features::type_resolution::{QtTypeRegistry, TypeResolver};
use crate::shared::models::Result;

/// Translates Python modules into C++ class declarations
pub struct ModuleTranslator {
    parser: PythonParser,
    resolver: TypeResolver,
}

impl ModuleTranslator {
    /// Translator with the bundled Qt class set
    pub fn new() -> Self {
        Self::with_registry(QtTypeRegistry::with_qt_classes())
    }

    /// Translator with a caller-supplied registry
    pub fn with_registry(registry: QtTypeRegistry) -> Self {
        Self {
            parser: PythonParser::new(),
            resolver: TypeResolver::new(registry),
        }
    }

    /// Translate every top-level class of a module, in declaration order
    ///
    /// The first parse or type failure aborts the whole module.
    pub fn translate(&self, source: &str) -> Result<Vec<CppClass>> {
        let tree = self.parser.parse(source)?;
        let root = tree.root_node();

        let mut classes = Vec::new();
        for stmt in named_children(&root) {
            let class_node = match class_definition(stmt) {
                Some(node) => node,
                None => continue,
            };
            let class = extract_class(class_node, source, &self.resolver)?;
            debug!(
                "translated class {} ({} bases, {} signals)",
                class.name,
                class.bases.len(),
                class.signals.len()
            );
            classes.push(class);
        }
        Ok(classes)
    }

    /// Render every translated class, fragments joined by a blank line
    pub fn translate_to_header(&self, source: &str) -> Result<String> {
        let classes = self.translate(source)?;
        let fragments: Vec<String> = classes.iter().map(|class| class.to_header()).collect();
        Ok(fragments.join("\n\n"))
    }
}

impl Default for ModuleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Unwrap a top-level statement to its class_definition, if any
///
/// Decorated classes nest under a decorated_definition node.
fn class_definition(stmt: Node) -> Option<Node> {
    match stmt.kind() {
        node_kinds::CLASS_DEF => Some(stmt),
        node_kinds::DECORATED_DEF => stmt
            .child_by_field_name("definition")
            .filter(|definition| definition.kind() == node_kinds::CLASS_DEF),
        _ => None,
    }
}

/// Translate with the bundled Qt class set
pub fn translate_source(source: &str) -> Result<Vec<CppClass>> {
    ModuleTranslator::new().translate(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_classes_in_order() {
        let code = r#"
import sys

class First: pass

def helper():
    class Hidden: pass

class Second: pass
"#;
        let classes = translate_source(code).unwrap();
        let names: Vec<&str> = classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_decorated_class_is_found() {
        let code = r#"
@register
class Decorated(QObject):
    changed = pyqtSignal()
"#;
        let classes = translate_source(code).unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Decorated");
        assert_eq!(classes[0].signals.len(), 1);
    }

    #[test]
    fn test_decorated_function_is_ignored() {
        let code = r#"
@register
def not_a_class():
    pass
"#;
        let classes = translate_source(code).unwrap();
        assert!(classes.is_empty());
    }

    #[test]
    fn test_module_without_classes() {
        let classes = translate_source("x = 1\n").unwrap();
        assert!(classes.is_empty());
    }
}
