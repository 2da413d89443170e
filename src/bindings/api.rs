// API Functions - PyO3-exposed functions for Python

use super::PyAnalysis;
use crate::config::AnalyzerConfig;
use crate::diagnostics::Diagnostics;
use crate::errors::AnalysisError;
use crate::pipeline::analyze;
use crate::services::{classify, ServiceTree};
use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::prelude::*;
use std::path::PathBuf;

fn to_py_err(err: AnalysisError) -> PyErr {
    match err {
        AnalysisError::DirectoryUnreadable { .. } | AnalysisError::FileUnreadable { .. } => {
            PyOSError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Classify the directories under `path` into service roots
///
/// Args:
///     path (str): Root of the application source
///
/// Returns:
///     tuple[str | None, list[str]]: Boundary root and service root paths
///
/// Raises:
///     OSError: If the root cannot be listed
#[pyfunction]
#[pyo3(signature = (path))]
pub fn find_services(py: Python<'_>, path: PathBuf) -> PyResult<(Option<String>, Vec<String>)> {
    let classification = py
        .detach(move || {
            let mut diagnostics = Diagnostics::new();
            let tree = ServiceTree::build(&path, &mut diagnostics)?;
            Ok::<_, AnalysisError>(classify(&tree, &mut diagnostics))
        })
        .map_err(to_py_err)?;

    Ok((
        classification
            .boundary_root
            .map(|root| root.display().to_string()),
        classification
            .services
            .iter()
            .map(|service| service.display().to_string())
            .collect(),
    ))
}

/// Discover services and extract their declarations
///
/// Args:
///     path (str): Root of the application source
///     monolithic (bool): Treat the whole root as one service
///     service_name (str | None): Name of the monolithic service
///
/// Returns:
///     Analysis: entities, executables, services and diagnostics
///
/// Raises:
///     OSError: If the root cannot be listed
#[pyfunction]
#[pyo3(signature = (path, monolithic=false, service_name=None))]
pub fn analyze_project(
    py: Python<'_>,
    path: PathBuf,
    monolithic: bool,
    service_name: Option<String>,
) -> PyResult<PyAnalysis> {
    let mut config = AnalyzerConfig::default().with_monolith(monolithic);
    if let Some(name) = service_name {
        config = config.with_service_name(name);
    }

    // Release GIL while walking and parsing
    let report = py
        .detach(move || analyze(&path, &config))
        .map_err(to_py_err)?;

    Ok(PyAnalysis::from_report(&report))
}

/// Render the scanned directory tree
///
/// Returns:
///     str: One line per directory or Go file, empty when nothing qualifies
#[pyfunction]
#[pyo3(signature = (path))]
pub fn render_tree(py: Python<'_>, path: PathBuf) -> PyResult<String> {
    py.detach(move || {
        let tree = ServiceTree::build(&path, &mut Diagnostics::new())?;
        Ok::<_, AnalysisError>(crate::services::render_tree(&tree))
    })
    .map_err(to_py_err)
}
