// Python wrappers for the extraction results
//
// Every field is a read-only copy; Python never holds a reference into Rust data.

use crate::diagnostics::Diagnostic;
use crate::extractors::base::{CodeEntity, Executable};
use crate::pipeline::AnalysisReport;
use pyo3::prelude::*;

/// A struct or interface with its aggregated content
#[pyclass(name = "CodeEntity")]
#[derive(Clone)]
pub struct PyCodeEntity {
    #[pyo3(get)]
    pub is_interface: bool,
    #[pyo3(get)]
    pub is_annotation: bool,
    #[pyo3(get)]
    pub simple_name: String,
    #[pyo3(get)]
    pub full_name: String,
    #[pyo3(get)]
    pub file_path: String,
    #[pyo3(get)]
    pub service_name: String,
    #[pyo3(get)]
    pub content: String,
}

impl From<&CodeEntity> for PyCodeEntity {
    fn from(entity: &CodeEntity) -> Self {
        Self {
            is_interface: entity.is_interface_like,
            is_annotation: entity.is_annotation,
            simple_name: entity.simple_name.clone(),
            full_name: entity.full_name.clone(),
            file_path: entity.file_path.clone(),
            service_name: entity.service_name.clone(),
            content: entity.content.clone(),
        }
    }
}

#[pymethods]
impl PyCodeEntity {
    fn __repr__(&self) -> String {
        format!("CodeEntity(full_name='{}')", self.full_name)
    }
}

/// A free function or a method; `parent_name` is empty for functions
#[pyclass(name = "Executable")]
#[derive(Clone)]
pub struct PyExecutable {
    #[pyo3(get)]
    pub full_name: String,
    #[pyo3(get)]
    pub simple_name: String,
    #[pyo3(get)]
    pub parent_name: String,
    #[pyo3(get)]
    pub service_name: String,
    #[pyo3(get)]
    pub content: String,
}

impl From<&Executable> for PyExecutable {
    fn from(executable: &Executable) -> Self {
        Self {
            full_name: executable.full_name.clone(),
            simple_name: executable.simple_name.clone(),
            parent_name: executable.parent_name.clone(),
            service_name: executable.service_name.clone(),
            content: executable.content.clone(),
        }
    }
}

#[pymethods]
impl PyExecutable {
    fn __repr__(&self) -> String {
        format!("Executable(full_name='{}')", self.full_name)
    }
}

/// Result of `analyze_project`
#[pyclass(name = "Analysis")]
pub struct PyAnalysis {
    #[pyo3(get)]
    pub app_name: String,
    #[pyo3(get)]
    pub entities: Vec<PyCodeEntity>,
    #[pyo3(get)]
    pub executables: Vec<PyExecutable>,
    /// (service name, service root path) pairs in service order
    #[pyo3(get)]
    pub services: Vec<(String, String)>,
    /// (kind, path, message) triples in emission order
    #[pyo3(get)]
    pub diagnostics: Vec<(String, String, String)>,
}

impl PyAnalysis {
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self {
            app_name: report.app_name.clone(),
            entities: report.entities().map(PyCodeEntity::from).collect(),
            executables: report.executables().map(PyExecutable::from).collect(),
            services: report
                .service_roots()
                .map(|service| (service.name.clone(), service.path.display().to_string()))
                .collect(),
            diagnostics: report.diagnostics.iter().map(diagnostic_tuple).collect(),
        }
    }
}

#[pymethods]
impl PyAnalysis {
    fn __repr__(&self) -> String {
        format!(
            "Analysis(services={}, entities={}, executables={})",
            self.services.len(),
            self.entities.len(),
            self.executables.len()
        )
    }
}

fn diagnostic_tuple(diagnostic: &Diagnostic) -> (String, String, String) {
    let kind = match diagnostic {
        Diagnostic::DirectoryUnreadable { .. } => "directoryUnreadable",
        Diagnostic::NoServiceFound { .. } => "noServiceFound",
        Diagnostic::AmbiguousBoundary { .. } => "ambiguousBoundary",
        Diagnostic::FileParseFailure { .. } => "fileParseFailure",
        Diagnostic::FileUnreadable { .. } => "fileUnreadable",
        Diagnostic::SyntaxErrorsRecovered { .. } => "syntaxErrorsRecovered",
        Diagnostic::UnresolvedReceiver { .. } => "unresolvedReceiver",
        Diagnostic::NameCollision { .. } => "nameCollision",
        Diagnostic::ProbeFailed { .. } => "probeFailed",
    };
    (
        kind.to_string(),
        diagnostic.path().display().to_string(),
        diagnostic.to_string(),
    )
}
