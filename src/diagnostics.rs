//! Non-fatal findings produced while scanning and extracting
//!
//! Diagnostics are data: they are collected in emission order so callers can
//! inspect them, and each one is logged through `tracing` the moment it is
//! recorded so the log stays the primary human-facing channel.

use crate::errors::AnalysisError;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// A directory below the root could not be listed; its subtree was skipped
    DirectoryUnreadable { path: PathBuf, reason: String },
    /// A classified subtree contains no service-capable node
    NoServiceFound { path: PathBuf },
    /// A boundary root has direct source files next to several candidate services
    AmbiguousBoundary { path: PathBuf },
    /// A source file could not be parsed; its service was skipped
    FileParseFailure { path: PathBuf, reason: String },
    /// A source file could not be read; its service was skipped
    FileUnreadable { path: PathBuf, reason: String },
    /// A source file has syntax errors; the recovered declarations were kept
    SyntaxErrorsRecovered { path: PathBuf },
    /// A method's receiver type is not declared in its package
    UnresolvedReceiver {
        path: PathBuf,
        receiver: String,
        method: String,
    },
    /// Two declarations produced the same canonical name
    NameCollision { full_name: String, path: PathBuf },
    /// The entry-point probe could not read or parse a file
    ProbeFailed { path: PathBuf, reason: String },
}

impl Diagnostic {
    /// Path the diagnostic is attributed to
    pub fn path(&self) -> &Path {
        match self {
            Diagnostic::DirectoryUnreadable { path, .. }
            | Diagnostic::NoServiceFound { path }
            | Diagnostic::AmbiguousBoundary { path }
            | Diagnostic::FileParseFailure { path, .. }
            | Diagnostic::FileUnreadable { path, .. }
            | Diagnostic::SyntaxErrorsRecovered { path }
            | Diagnostic::UnresolvedReceiver { path, .. }
            | Diagnostic::NameCollision { path, .. }
            | Diagnostic::ProbeFailed { path, .. } => path,
        }
    }

    /// Diagnostic recording a service-fatal error
    ///
    /// `fallback` is used for errors that carry no path of their own.
    pub fn from_error(err: &AnalysisError, fallback: &Path) -> Self {
        match err {
            AnalysisError::DirectoryUnreadable { path, source } => Diagnostic::DirectoryUnreadable {
                path: path.clone(),
                reason: source.to_string(),
            },
            AnalysisError::FileUnreadable { path, source } => Diagnostic::FileUnreadable {
                path: path.clone(),
                reason: source.to_string(),
            },
            AnalysisError::FileParse { path, reason } => Diagnostic::FileParseFailure {
                path: path.clone(),
                reason: reason.clone(),
            },
            AnalysisError::MissingPackageClause { path } => Diagnostic::FileParseFailure {
                path: path.clone(),
                reason: "no package clause".to_string(),
            },
            AnalysisError::Language(_) => Diagnostic::FileParseFailure {
                path: fallback.to_path_buf(),
                reason: err.to_string(),
            },
        }
    }

    fn log(&self) {
        match self {
            Diagnostic::FileParseFailure { .. } | Diagnostic::FileUnreadable { .. } => {
                error!("{}", self)
            }
            Diagnostic::ProbeFailed { .. } => debug!("{}", self),
            _ => warn!("{}", self),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DirectoryUnreadable { path, reason } => {
                write!(f, "Skipping unreadable directory {}: {}", path.display(), reason)
            }
            Diagnostic::NoServiceFound { path } => {
                write!(f, "No service found under {}", path.display())
            }
            Diagnostic::AmbiguousBoundary { path } => write!(
                f,
                "Multiple services found next to source files in {}",
                path.display()
            ),
            Diagnostic::FileParseFailure { path, reason } => {
                write!(f, "Failed to parse {}: {}", path.display(), reason)
            }
            Diagnostic::FileUnreadable { path, reason } => {
                write!(f, "Failed to read {}: {}", path.display(), reason)
            }
            Diagnostic::SyntaxErrorsRecovered { path } => write!(
                f,
                "Syntax errors in {}, keeping the declarations that could be recovered",
                path.display()
            ),
            Diagnostic::UnresolvedReceiver {
                path,
                receiver,
                method,
            } => write!(
                f,
                "Struct {} not found for method {} in {}",
                receiver,
                method,
                path.display()
            ),
            Diagnostic::NameCollision { full_name, path } => write!(
                f,
                "Duplicate declaration {} in {} replaces an earlier one",
                full_name,
                path.display()
            ),
            Diagnostic::ProbeFailed { path, reason } => write!(
                f,
                "Entry-point probe failed for {}: {}",
                path.display(),
                reason
            ),
        }
    }
}

/// Ordered diagnostic sink
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it
    pub fn push(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.items.push(diagnostic);
    }

    /// Append already-logged diagnostics from another sink
    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }
}
