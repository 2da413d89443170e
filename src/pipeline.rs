//! Analysis pipeline
//!
//! Tree Builder -> Classifier (or the monolith override) -> per-service
//! extraction. Services are independent: one that fails is reported and
//! skipped while the others still produce output. Results are collected
//! in service order whether or not extraction ran on the rayon pool.

use crate::config::AnalyzerConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::errors::{AnalysisError, Result};
use crate::extractors::base::{CodeEntity, Executable};
use crate::project::{parse_project, ServiceExtraction};
use crate::services::{classify, ServiceTree};
use crate::utils::file_utils::sorted_entries;
use crate::utils::paths::base_name;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A discovered service root and the name it is reported under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRoot {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub enum ServiceOutcome {
    Extracted(ServiceExtraction),
    /// The diagnostic names the file or directory that failed the service
    Failed(Diagnostic),
}

#[derive(Debug, Clone)]
pub struct ServiceReport {
    pub service: ServiceRoot,
    pub outcome: ServiceOutcome,
}

impl ServiceReport {
    pub fn extraction(&self) -> Option<&ServiceExtraction> {
        match &self.outcome {
            ServiceOutcome::Extracted(extraction) => Some(extraction),
            ServiceOutcome::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, ServiceOutcome::Failed(_))
    }
}

/// Everything one run produced
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Base name of the analyzed root
    pub app_name: String,
    pub boundary_root: Option<PathBuf>,
    pub services: Vec<ServiceReport>,
    /// Discovery diagnostics followed by each service's, in service order
    pub diagnostics: Diagnostics,
}

impl AnalysisReport {
    /// All entities in service order, then discovery order
    pub fn entities(&self) -> impl Iterator<Item = &CodeEntity> {
        self.services
            .iter()
            .filter_map(ServiceReport::extraction)
            .flat_map(|extraction| extraction.entities.iter())
    }

    /// All executables in service order, then discovery order
    pub fn executables(&self) -> impl Iterator<Item = &Executable> {
        self.services
            .iter()
            .filter_map(ServiceReport::extraction)
            .flat_map(|extraction| extraction.executables.iter())
    }

    pub fn service_roots(&self) -> impl Iterator<Item = &ServiceRoot> {
        self.services.iter().map(|report| &report.service)
    }

    pub fn failed_services(&self) -> usize {
        self.services.iter().filter(|report| report.is_failed()).count()
    }
}

/// Application name: the base name of the root, resolving `.` and `..`
pub fn app_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    base_name(&resolved)
}

/// Decide the service roots for `root`
///
/// With `config.monolith` the classifier is bypassed and the root itself is
/// the only service. Fails only when the root cannot be listed.
pub fn discover_services(
    root: &Path,
    config: &AnalyzerConfig,
    diagnostics: &mut Diagnostics,
) -> Result<(Option<PathBuf>, Vec<ServiceRoot>)> {
    let app = app_name(root);

    if config.monolith {
        sorted_entries(root).map_err(|source| AnalysisError::DirectoryUnreadable {
            path: root.to_path_buf(),
            source,
        })?;
        let name = config.service_name.clone().unwrap_or(app);
        info!("Monolithic mode: analyzing {} as service {}", root.display(), name);
        return Ok((
            Some(root.to_path_buf()),
            vec![ServiceRoot {
                name,
                path: root.to_path_buf(),
            }],
        ));
    }

    let tree = ServiceTree::build(root, diagnostics)?;
    let classification = classify(&tree, diagnostics);
    let services = classification
        .services
        .into_iter()
        .map(|path| ServiceRoot {
            name: format!("{}-{}", app, base_name(&path)),
            path,
        })
        .collect::<Vec<_>>();

    for service in &services {
        info!("Service found: {} at {}", service.name, service.path.display());
    }
    Ok((classification.boundary_root, services))
}

fn extract_service(service: &ServiceRoot, config: &AnalyzerConfig) -> ServiceReport {
    info!("Processing service: {}", service.name);
    let outcome = match parse_project(&service.path, &service.name, config) {
        Ok(extraction) => {
            debug!(
                "Service {}: {} entities, {} executables",
                service.name,
                extraction.entities.len(),
                extraction.executables.len()
            );
            ServiceOutcome::Extracted(extraction)
        }
        Err(err) => ServiceOutcome::Failed(Diagnostic::from_error(&err, &service.path)),
    };
    ServiceReport {
        service: service.clone(),
        outcome,
    }
}

/// Run the whole analysis on `root`
pub fn analyze(root: &Path, config: &AnalyzerConfig) -> Result<AnalysisReport> {
    let mut diagnostics = Diagnostics::new();
    let (boundary_root, services) = discover_services(root, config, &mut diagnostics)?;

    let reports: Vec<ServiceReport> = if config.parallel {
        services
            .par_iter()
            .map(|service| extract_service(service, config))
            .collect()
    } else {
        services
            .iter()
            .map(|service| extract_service(service, config))
            .collect()
    };

    let mut services = Vec::with_capacity(reports.len());
    for mut report in reports {
        match &mut report.outcome {
            ServiceOutcome::Extracted(extraction) => {
                diagnostics.extend(std::mem::take(&mut extraction.diagnostics));
            }
            ServiceOutcome::Failed(diagnostic) => {
                diagnostics.push(diagnostic.clone());
                warn!("Service {} skipped", report.service.name);
            }
        }
        services.push(report);
    }

    Ok(AnalysisReport {
        app_name: app_name(root),
        boundary_root,
        services,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn two_service_app() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "orders/go.mod", "module orders\n");
        write(root, "orders/main.go", "package main\n\nfunc main() {}\n");
        write(
            root,
            "orders/model/order.go",
            "package model\n\ntype Order struct {\n\tID int\n}\n\nfunc (o *Order) Total() int { return 0 }\n",
        );
        write(root, "users/go.mod", "module users\n");
        write(
            root,
            "users/user.go",
            "package users\n\ntype Store interface {\n\tFind(id int) error\n}\n",
        );
        temp_dir
    }

    #[test]
    fn test_analyze_two_services() {
        let temp_dir = two_service_app();
        let root = temp_dir.path();
        let app = app_name(root);

        let report = analyze(root, &AnalyzerConfig::default()).unwrap();

        assert_eq!(report.boundary_root.as_deref(), Some(root));
        let names: Vec<&str> = report.service_roots().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![format!("{}-orders", app), format!("{}-users", app)]
        );

        let entities: Vec<&str> = report.entities().map(|e| e.full_name.as_str()).collect();
        assert_eq!(entities, vec!["model$$model$$$Order", "$$users$$$Store"]);

        let executables: Vec<&str> = report
            .executables()
            .map(|e| e.full_name.as_str())
            .collect();
        assert_eq!(
            executables,
            vec!["$$main$$$main()", "model$$model$$$Order.Total()"]
        );
        assert_eq!(report.failed_services(), 0);
    }

    #[test]
    fn test_failed_service_does_not_abort_others() {
        let temp_dir = two_service_app();
        let root = temp_dir.path();
        write(root, "users/broken.go", "func orphan() {}\n");

        let report = analyze(root, &AnalyzerConfig::default()).unwrap();

        assert_eq!(report.services.len(), 2);
        assert!(!report.services[0].is_failed());
        assert!(report.services[1].is_failed());
        assert!(report
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::FileParseFailure { path, .. } if path == &root.join("users/broken.go"))));
        assert_eq!(report.entities().count(), 1);
    }

    #[test]
    fn test_monolith_bypasses_classification() {
        let temp_dir = two_service_app();
        let root = temp_dir.path();

        let config = AnalyzerConfig::default()
            .with_monolith(true)
            .with_service_name("everything");
        let report = analyze(root, &config).unwrap();

        assert_eq!(report.services.len(), 1);
        assert_eq!(report.services[0].service.name, "everything");
        assert_eq!(report.services[0].service.path, root);

        let entities: Vec<&str> = report.entities().map(|e| e.full_name.as_str()).collect();
        assert_eq!(
            entities,
            vec!["orders/model$$model$$$Order", "users$$users$$$Store"]
        );
    }

    #[test]
    fn test_monolith_defaults_to_app_name() {
        let temp_dir = two_service_app();
        let root = temp_dir.path();

        let report = analyze(root, &AnalyzerConfig::default().with_monolith(true)).unwrap();
        assert_eq!(report.services[0].service.name, app_name(root));
    }

    #[test]
    fn test_unreadable_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        assert!(matches!(
            analyze(&missing, &AnalyzerConfig::default()),
            Err(AnalysisError::DirectoryUnreadable { .. })
        ));
        assert!(matches!(
            analyze(&missing, &AnalyzerConfig::default().with_monolith(true)),
            Err(AnalysisError::DirectoryUnreadable { .. })
        ));
    }

    #[test]
    fn test_parallel_and_sequential_runs_match() {
        let temp_dir = two_service_app();
        let root = temp_dir.path();
        write(root, "payments/go.mod", "module payments\n");
        write(root, "payments/pay.go", "package payments\n\nfunc Charge() {}\n");

        let parallel = analyze(root, &AnalyzerConfig::default()).unwrap();
        let sequential = analyze(root, &AnalyzerConfig::default().with_parallel(false)).unwrap();

        let dump = |report: &AnalysisReport| {
            (
                serde_json::to_string(&report.entities().collect::<Vec<_>>()).unwrap(),
                serde_json::to_string(&report.executables().collect::<Vec<_>>()).unwrap(),
            )
        };
        assert_eq!(dump(&parallel), dump(&sequential));
    }

    #[test]
    fn test_recoverable_syntax_errors_do_not_fail_the_service() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(
            root,
            "p.go",
            "package p\n\ntype Set[T comparable] = map[T]struct{}\n\nfunc Keys() {}\n",
        );

        let report = analyze(root, &AnalyzerConfig::default().with_monolith(true)).unwrap();
        assert_eq!(report.failed_services(), 0);
        assert!(report
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::SyntaxErrorsRecovered { .. })));

        let strict = AnalyzerConfig::default()
            .with_monolith(true)
            .with_strict_syntax(true);
        assert_eq!(analyze(root, &strict).unwrap().failed_services(), 1);
    }

    #[test]
    fn test_unreadable_file_is_reported_as_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("bad.go"), [0xff, 0xfe, 0x00]).unwrap();

        let report = analyze(root, &AnalyzerConfig::default().with_monolith(true)).unwrap();
        assert_eq!(report.failed_services(), 1);
        assert!(report.diagnostics.iter().any(|d| matches!(
            d,
            Diagnostic::FileUnreadable { path, .. } if path == &root.join("bad.go")
        )));
    }
}
