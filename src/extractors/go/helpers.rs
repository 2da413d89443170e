use tree_sitter::Node;

/// Helper methods for Go-specific utilities and node text extraction
impl super::GoExtractor {
    /// Get node text (helper method)
    pub(super) fn get_node_text(&self, node: Node) -> String {
        self.base.get_node_text(&node)
    }

    /// Strip pointer markers, parentheses and type arguments down to the
    /// declared type name
    pub(super) fn bare_type_name(&self, node: Node) -> Option<String> {
        match node.kind() {
            "type_identifier" => Some(self.get_node_text(node)),
            "pointer_type" | "parenthesized_type" => node
                .named_child(0)
                .and_then(|inner| self.bare_type_name(inner)),
            "generic_type" => node
                .child_by_field_name("type")
                .and_then(|inner| self.bare_type_name(inner)),
            // Anything else cannot name a local type; keep its text so the
            // unresolved-receiver diagnostic shows what was written
            _ => Some(self.get_node_text(node).trim_start_matches('*').to_string()),
        }
    }
}
