use crate::extractors::base::FunctionDeclaration;
use tree_sitter::Node;

/// Function and method extraction for Go
impl super::GoExtractor {
    pub(super) fn extract_function(&self, node: Node) -> Option<FunctionDeclaration> {
        let name = self.base.get_field_text(&node, "name")?;
        let parameter_count = node
            .child_by_field_name("parameters")
            .map(|list| self.count_parameters(list))
            .unwrap_or(0);

        Some(
            self.base
                .create_function_declaration(&node, name, None, parameter_count),
        )
    }

    pub(super) fn extract_method(&self, node: Node) -> Option<FunctionDeclaration> {
        // Methods use field_identifier for their names
        let name = self.base.get_field_text(&node, "name")?;
        let receiver = node
            .child_by_field_name("receiver")
            .and_then(|list| self.extract_receiver_type_name(list));
        let parameter_count = node
            .child_by_field_name("parameters")
            .map(|list| self.count_parameters(list))
            .unwrap_or(0);

        Some(
            self.base
                .create_function_declaration(&node, name, receiver, parameter_count),
        )
    }

    /// Receiver type name from a receiver parameter list
    ///
    /// `(s *Server)`, `(s Server)`, `(*Server)` and `(s *Server[T])` all yield `Server`.
    fn extract_receiver_type_name(&self, receiver_list: Node) -> Option<String> {
        let declaration = self
            .base
            .find_child_by_type(&receiver_list, "parameter_declaration")?;
        let type_node = declaration.child_by_field_name("type")?;
        self.bare_type_name(type_node)
    }

    /// Number of declared parameters; `a, b int` counts as two
    pub(super) fn count_parameters(&self, parameter_list: Node) -> usize {
        let mut count = 0;
        let mut cursor = parameter_list.walk();

        for child in parameter_list.named_children(&mut cursor) {
            match child.kind() {
                "parameter_declaration" => {
                    let mut name_cursor = child.walk();
                    let names = child.children_by_field_name("name", &mut name_cursor).count();
                    count += names.max(1);
                }
                "variadic_parameter_declaration" => count += 1,
                _ => {}
            }
        }

        count
    }
}
