// Error types for service discovery and declaration extraction
//
// Every variant carries the path it is attributable to. Whether an error ends
// the whole run or only one service is decided by the pipeline, not here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read source file {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {reason}", path.display())]
    FileParse { path: PathBuf, reason: String },

    #[error("{} has no package clause", path.display())]
    MissingPackageClause { path: PathBuf },

    #[error("failed to load the Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

impl AnalysisError {
    /// Path the error is attributed to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            AnalysisError::DirectoryUnreadable { path, .. }
            | AnalysisError::FileUnreadable { path, .. }
            | AnalysisError::FileParse { path, .. }
            | AnalysisError::MissingPackageClause { path } => Some(path),
            AnalysisError::Language(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
