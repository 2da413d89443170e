mod functions;
mod helpers;
mod types;

use crate::errors::{AnalysisError, Result};
use crate::extractors::base::{BaseExtractor, FileOutline};
use std::path::Path;
use tree_sitter::{Parser, Tree};

/// Go language extractor producing a syntactic outline of one file:
/// - the package clause
/// - top-level type specifications (structs, interfaces, everything else as `Other`)
/// - top-level functions and methods, with the bare receiver type name
///
/// Only direct children of the source file are visited; declarations nested
/// in function bodies are not part of the outline.
pub struct GoExtractor {
    base: BaseExtractor,
}

impl GoExtractor {
    pub fn new(file_path: &Path, content: String) -> Self {
        Self {
            base: BaseExtractor::new(file_path, content),
        }
    }

    /// Read a file from disk into a new extractor
    pub fn from_file(file_path: &Path) -> Result<Self> {
        let content = crate::utils::file_utils::read_file_content(file_path).map_err(|source| {
            AnalysisError::FileUnreadable {
                path: file_path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self::new(file_path, content))
    }

    /// Parse the file's content
    pub fn parse(&self, parser: &mut Parser) -> Result<Tree> {
        parser
            .parse(&self.base.content, None)
            .ok_or_else(|| AnalysisError::FileParse {
                path: self.base.file_path.clone(),
                reason: "parser produced no syntax tree".to_string(),
            })
    }

    /// Extract the file outline from a parsed tree
    pub fn extract_outline(&self, tree: &Tree) -> Result<FileOutline> {
        let root = tree.root_node();
        let mut package = None;
        let mut types = Vec::new();
        let mut functions = Vec::new();

        let mut cursor = root.walk();
        for node in root.named_children(&mut cursor) {
            match node.kind() {
                "package_clause" => package = self.extract_package(node),
                "type_declaration" => types.extend(self.extract_type_declaration(node)),
                "function_declaration" => {
                    if let Some(function) = self.extract_function(node) {
                        functions.push(function);
                    }
                }
                "method_declaration" => {
                    if let Some(method) = self.extract_method(node) {
                        functions.push(method);
                    }
                }
                _ => {}
            }
        }

        let package = package.ok_or_else(|| AnalysisError::MissingPackageClause {
            path: self.base.file_path.clone(),
        })?;

        Ok(FileOutline {
            package,
            types,
            functions,
            has_syntax_errors: self.base.has_error(&root),
        })
    }

    /// Lightweight probe: does the file declare a zero-parameter `main` function?
    pub fn has_entry_function(&self, tree: &Tree) -> bool {
        let root = tree.root_node();
        let mut cursor = root.walk();
        let found = root
            .named_children(&mut cursor)
            .filter(|node| node.kind() == "function_declaration")
            .filter_map(|node| self.extract_function(node))
            .any(|function| {
                function.name == crate::language::ENTRY_FUNCTION && function.parameter_count == 0
            });
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::TypeKind;

    fn outline(source: &str) -> Result<FileOutline> {
        let extractor = GoExtractor::new(Path::new("test.go"), source.to_string());
        let mut parser = crate::language::new_parser().unwrap();
        let tree = extractor.parse(&mut parser)?;
        extractor.extract_outline(&tree)
    }

    fn probe(source: &str) -> bool {
        let extractor = GoExtractor::new(Path::new("test.go"), source.to_string());
        let mut parser = crate::language::new_parser().unwrap();
        let tree = extractor.parse(&mut parser).unwrap();
        extractor.has_entry_function(&tree)
    }

    #[test]
    fn test_outline_collects_package_types_and_functions() {
        let source = r#"package foo

import "fmt"

// Bar is documented
type Bar struct {
	name string
}

type Greeter interface {
	Greet() string
}

type ID int64

type Alias = Bar

func (b *Bar) Hi() {
	fmt.Println(b.name)
}

func (b Bar) Name() string { return b.name }

func Standalone() {}
"#;
        let outline = outline(source).unwrap();
        assert_eq!(outline.package, "foo");
        assert!(!outline.has_syntax_errors);

        let kinds: Vec<(&str, TypeKind)> = outline
            .types
            .iter()
            .map(|t| (t.name.as_str(), t.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("Bar", TypeKind::Struct),
                ("Greeter", TypeKind::Interface),
                ("ID", TypeKind::Other),
                ("Alias", TypeKind::Other),
            ]
        );
        assert_eq!(outline.types[0].text, "Bar struct {\n\tname string\n}");

        let functions: Vec<(&str, Option<&str>)> = outline
            .functions
            .iter()
            .map(|f| (f.name.as_str(), f.receiver.as_deref()))
            .collect();
        assert_eq!(
            functions,
            vec![
                ("Hi", Some("Bar")),
                ("Name", Some("Bar")),
                ("Standalone", None),
            ]
        );
        assert_eq!(
            outline.functions[0].text,
            "func (b *Bar) Hi() {\n\tfmt.Println(b.name)\n}"
        );
    }

    #[test]
    fn test_grouped_type_declaration_yields_each_spec() {
        let source = "package models\n\ntype (\n\tUser struct{ ID int }\n\tRepo interface{ Find(id int) User }\n)\n";
        let outline = outline(source).unwrap();
        let names: Vec<&str> = outline.types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["User", "Repo"]);
        assert_eq!(outline.types[0].text, "User struct{ ID int }");
        assert_eq!(outline.types[1].kind, TypeKind::Interface);
    }

    #[test]
    fn test_generic_receiver_is_stripped_to_type_name() {
        let source = "package stack\n\ntype Stack[T any] struct{ items []T }\n\nfunc (s *Stack[T]) Push(v T) { s.items = append(s.items, v) }\n";
        let outline = outline(source).unwrap();
        assert_eq!(outline.functions[0].receiver.as_deref(), Some("Stack"));
        assert_eq!(outline.functions[0].parameter_count, 1);
    }

    #[test]
    fn test_nested_types_are_not_top_level() {
        let source = "package main\n\nfunc run() {\n\ttype local struct{}\n\t_ = local{}\n}\n";
        let outline = outline(source).unwrap();
        assert!(outline.types.is_empty());
        assert_eq!(outline.functions.len(), 1);
    }

    #[test]
    fn test_missing_package_clause_is_an_error() {
        let result = outline("func main() {}\n");
        assert!(matches!(
            result,
            Err(AnalysisError::MissingPackageClause { .. })
        ));
    }

    #[test]
    fn test_syntax_errors_are_flagged() {
        let outline = outline("package broken\n\nfunc main() {\n").unwrap();
        assert!(outline.has_syntax_errors);
    }

    #[test]
    fn test_entry_function_probe() {
        assert!(probe("package main\n\nfunc main() {}\n"));
        assert!(!probe("package main\n\nfunc main(args []string) {}\n"));
        assert!(!probe("package main\n\nfunc run() {}\n"));
        assert!(!probe("package main\n\ntype app struct{}\n\nfunc (a app) main() {}\n"));
    }
}
