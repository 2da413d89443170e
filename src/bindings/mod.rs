// PyO3 Bindings Module
//
// Python access to service discovery and declaration extraction.

mod api;
mod entities;

// Re-export for lib.rs
pub use api::{analyze_project, find_services, render_tree};
pub use entities::{PyAnalysis, PyCodeEntity, PyExecutable};
