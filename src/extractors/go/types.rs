use crate::extractors::base::{TypeDeclaration, TypeKind};
use tree_sitter::Node;

/// Package clause and type declaration extraction for Go
impl super::GoExtractor {
    pub(super) fn extract_package(&self, node: Node) -> Option<String> {
        self.base
            .find_child_by_type(&node, "package_identifier")
            .map(|ident| self.get_node_text(ident))
    }

    /// One record per `type_spec`/`type_alias`; a grouped `type ( ... )`
    /// declaration yields several.
    pub(super) fn extract_type_declaration(&self, node: Node) -> Vec<TypeDeclaration> {
        let mut declarations = Vec::new();
        let mut cursor = node.walk();

        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "type_spec" => {
                    if let Some(declaration) = self.extract_type_spec(child) {
                        declarations.push(declaration);
                    }
                }
                "type_alias" => {
                    if let Some(name) = self.base.get_field_text(&child, "name") {
                        declarations.push(self.base.create_type_declaration(
                            &child,
                            name,
                            TypeKind::Other,
                        ));
                    }
                }
                _ => {}
            }
        }

        declarations
    }

    fn extract_type_spec(&self, node: Node) -> Option<TypeDeclaration> {
        let name = self.base.get_field_text(&node, "name")?;
        let kind = match node.child_by_field_name("type").map(|t| t.kind()) {
            Some("struct_type") => TypeKind::Struct,
            Some("interface_type") => TypeKind::Interface,
            _ => TypeKind::Other,
        };

        Some(self.base.create_type_declaration(&node, name, kind))
    }
}
