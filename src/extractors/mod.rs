//! Language Extractors Module
//!
//! Tree-sitter based extractors that turn one source file into a syntactic
//! outline: the declared package, the top-level type declarations and the
//! top-level functions and methods, each with its literal source text.
//!
//! - `base` - shared outline records, persisted entity types and the `BaseExtractor`
//! - `go` - the Go extractor

pub mod base;
pub mod go;

// Re-export the public API
pub use base::{
    CodeEntity, Executable, FileOutline, FunctionDeclaration, TypeDeclaration, TypeKind,
};
pub use go::GoExtractor;

use crate::errors::{AnalysisError, Result};
use std::path::Path;
use tree_sitter::Parser;

/// Read, parse and outline one file
///
/// A file only fails when no tree or no package clause comes back. Error
/// nodes elsewhere leave `has_syntax_errors` set on the outline, and with
/// `strict_syntax` they fail the file as well.
pub fn outline_file(
    parser: &mut Parser,
    file_path: &Path,
    strict_syntax: bool,
) -> Result<FileOutline> {
    let extractor = GoExtractor::from_file(file_path)?;
    let tree = extractor.parse(parser)?;
    let outline = extractor.extract_outline(&tree)?;

    if outline.has_syntax_errors && strict_syntax {
        return Err(AnalysisError::FileParse {
            path: file_path.to_path_buf(),
            reason: "syntax errors in file".to_string(),
        });
    }

    Ok(outline)
}

/// Probe a file for a zero-parameter entry-point function
pub fn probe_entry_function(parser: &mut Parser, file_path: &Path) -> Result<bool> {
    let extractor = GoExtractor::from_file(file_path)?;
    let tree = extractor.parse(parser)?;
    Ok(extractor.has_entry_function(&tree))
}
