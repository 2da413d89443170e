//! Language Support - tree-sitter Go configuration
//!
//! Everything that knows which language is being analyzed lives here: the
//! grammar, the file-name conventions that mark a Go module or program, and
//! parser construction. The tree builder and the extractors only ask this
//! module.

use crate::errors::AnalysisError;
use std::path::Path;
use tree_sitter::Parser;

/// Extension of analyzable source files (without the dot)
pub const SOURCE_EXTENSION: &str = "go";

/// File whose presence marks a directory as a module root
pub const MODULE_MARKER: &str = "go.mod";

/// File literally named as the program entry module
pub const ENTRY_FILE: &str = "main.go";

/// Name of the program entry-point function
pub const ENTRY_FUNCTION: &str = "main";

/// Get the tree-sitter grammar for Go
pub fn get_tree_sitter_language() -> tree_sitter::Language {
    tree_sitter_go::LANGUAGE.into()
}

/// Create a parser already configured for Go
pub fn new_parser() -> Result<Parser, AnalysisError> {
    let mut parser = Parser::new();
    parser.set_language(&get_tree_sitter_language())?;
    Ok(parser)
}

/// Check whether a file name carries the Go source extension
pub fn is_source_file_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == SOURCE_EXTENSION)
}
