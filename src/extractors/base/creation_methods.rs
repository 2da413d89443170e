// Declaration creation methods
//
// Language extractors locate the interesting nodes; these helpers turn them
// into outline records carrying the node's literal text.

use tree_sitter::Node;

use super::extractor::BaseExtractor;
use super::types::{FunctionDeclaration, TypeDeclaration, TypeKind};

impl BaseExtractor {
    /// Create a type declaration record spanning `node`
    pub fn create_type_declaration(
        &self,
        node: &Node,
        name: String,
        kind: TypeKind,
    ) -> TypeDeclaration {
        TypeDeclaration {
            name,
            kind,
            text: self.get_node_text(node),
        }
    }

    /// Create a function or method declaration record spanning `node`
    pub fn create_function_declaration(
        &self,
        node: &Node,
        name: String,
        receiver: Option<String>,
        parameter_count: usize,
    ) -> FunctionDeclaration {
        FunctionDeclaration {
            name,
            receiver,
            parameter_count,
            text: self.get_node_text(node),
        }
    }
}
