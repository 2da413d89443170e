// Base Extractor Types
//
// Two families of data live here:
// - the per-file outline produced by a language extractor (declarations with
//   their literal source text, nothing resolved yet)
// - the resolved entities produced by the project extractor, which are what
//   gets persisted (`CodeEntity`, `Executable`)

use serde::{Deserialize, Serialize};

/// Kind of a top-level type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Struct,
    Interface,
    /// Anything else: aliases, named basic types, function types, ...
    Other,
}

/// A top-level type specification as written in one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// Declared type name
    pub name: String,
    pub kind: TypeKind,
    /// Exact source text of the type specification
    pub text: String,
}

/// A top-level function or method declaration as written in one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    /// Declared function or method name
    pub name: String,
    /// Bare receiver type name for methods (pointer marker and type arguments stripped)
    pub receiver: Option<String>,
    /// Number of declared parameters, not counting the receiver
    pub parameter_count: usize,
    /// Exact source text of the declaration
    pub text: String,
}

/// Syntactic outline of one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutline {
    /// Declared package identifier
    pub package: String,
    pub types: Vec<TypeDeclaration>,
    pub functions: Vec<FunctionDeclaration>,
    /// Whether tree-sitter had to recover from syntax errors
    pub has_syntax_errors: bool,
}

/// A struct or interface declaration, keyed by its canonical full name
///
/// `content` starts as the declaration text and is extended once with the
/// owned methods' text by the content aggregator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CodeEntity {
    #[serde(rename = "isInterface")]
    pub is_interface_like: bool,
    /// Always false for Go; part of the output schema shared with other languages
    pub is_annotation: bool,
    pub simple_name: String,
    pub full_name: String,
    pub file_path: String,
    pub service_name: String,
    pub content: String,
}

/// A function or method declaration
///
/// `parent_name` is empty for free functions and holds the owning
/// `CodeEntity::full_name` for methods.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Executable {
    pub full_name: String,
    pub simple_name: String,
    pub parent_name: String,
    pub service_name: String,
    pub content: String,
}

impl Executable {
    /// True when the executable was resolved to an owning type
    pub fn is_method(&self) -> bool {
        !self.parent_name.is_empty()
    }
}
