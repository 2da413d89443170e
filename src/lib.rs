// Servicemap Core - service discovery and declaration extraction for Go code bases
//
// Scans a source tree, decides which directories are independent services,
// and extracts every top-level struct, interface, function and method of each
// service under a canonical name. Usable as a Rust library, through the
// `servicemap` binary, or as a Python extension (feature `python`).

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod extractors;
pub mod language;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod project;
pub mod services;
pub mod utils;

// PyO3 bindings layer
#[cfg(feature = "python")]
pub mod bindings;

pub use config::AnalyzerConfig;
pub use diagnostics::{Diagnostic, Diagnostics};
pub use errors::{AnalysisError, Result};
pub use extractors::{CodeEntity, Executable};
pub use pipeline::{analyze, AnalysisReport, ServiceOutcome, ServiceReport, ServiceRoot};
pub use services::{classify, Classification, ServiceTree};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Servicemap Core Python module
#[cfg(feature = "python")]
#[pymodule]
fn servicemap_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Add Python functions
    m.add_function(wrap_pyfunction!(bindings::find_services, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::analyze_project, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::render_tree, m)?)?;

    // Add Python classes
    m.add_class::<bindings::PyCodeEntity>()?;
    m.add_class::<bindings::PyExecutable>()?;
    m.add_class::<bindings::PyAnalysis>()?;

    Ok(())
}
