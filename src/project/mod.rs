//! Declaration Extractor
//!
//! Extracts every top-level struct, interface, function and method of one
//! service into canonical-named entities.
//!
//! - Pass 1 registers struct and interface declarations, both globally by full
//!   name and per package by simple name.
//! - Pass 2 registers functions and methods. A method whose receiver type is
//!   declared in the same package becomes a method of that type; otherwise it
//!   is kept as a free function and an `UnresolvedReceiver` diagnostic is
//!   emitted.
//! - Finally the aggregator folds method text into the owning type's content.
//!
//! Any file that cannot be read or parsed fails the whole service; nothing
//! else does.

pub mod aggregate;
pub mod naming;
pub mod registry;

use crate::config::AnalyzerConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::errors::Result;
use crate::extractors::base::{CodeEntity, Executable, FileOutline, TypeKind};
use crate::utils::file_utils::collect_source_files;
use crate::utils::paths::{to_relative_unix_style, to_unix_style};
use registry::Registry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Entities and executables extracted from one service
#[derive(Debug, Clone, Default)]
pub struct ServiceExtraction {
    pub entities: Vec<CodeEntity>,
    pub executables: Vec<Executable>,
    pub diagnostics: Diagnostics,
}

/// One parsed file with its package's canonical name
struct ParsedFile {
    path: PathBuf,
    package_full_name: String,
    outline: FileOutline,
}

pub struct ProjectParser {
    service_name: String,
    /// Package full name -> type simple name -> type full name
    structs: HashMap<String, HashMap<String, String>>,
    entities: Registry<CodeEntity>,
    executables: Registry<Executable>,
    /// Owner full name -> method full names in discovery order
    object_methods: HashMap<String, Vec<String>>,
    diagnostics: Diagnostics,
}

impl ProjectParser {
    /// `diagnostics` already holds what file discovery reported
    pub fn new(service_name: &str, diagnostics: Diagnostics) -> Self {
        Self {
            service_name: service_name.to_string(),
            structs: HashMap::new(),
            entities: Registry::new(),
            executables: Registry::new(),
            object_methods: HashMap::new(),
            diagnostics,
        }
    }

    /// Run both passes and the aggregator over already-parsed files
    fn run(mut self, files: &[ParsedFile]) -> ServiceExtraction {
        for file in files {
            debug!("Parsing structs in {}", file.path.display());
            self.parse_structs_in_file(file);
        }
        for file in files {
            debug!("Parsing functions/methods in {}", file.path.display());
            self.parse_functions_in_file(file);
        }
        aggregate::aggregate(&mut self.entities, &self.executables, &self.object_methods);

        ServiceExtraction {
            entities: self.entities.into_vec(),
            executables: self.executables.into_vec(),
            diagnostics: self.diagnostics,
        }
    }

    fn parse_structs_in_file(&mut self, file: &ParsedFile) {
        let file_path = to_unix_style(&file.path);

        for declaration in &file.outline.types {
            let is_interface_like = match declaration.kind {
                TypeKind::Struct => false,
                TypeKind::Interface => true,
                TypeKind::Other => {
                    debug!("Skipping type {} (not a struct or interface)", declaration.name);
                    continue;
                }
            };

            let full_name = naming::type_full_name(&file.package_full_name, &declaration.name);
            let entity = CodeEntity {
                is_interface_like,
                is_annotation: false,
                simple_name: declaration.name.clone(),
                full_name: full_name.clone(),
                file_path: file_path.clone(),
                service_name: self.service_name.clone(),
                content: declaration.text.clone(),
            };
            debug!(
                "{}: {}",
                if is_interface_like { "Interface" } else { "Struct" },
                full_name
            );

            if self.entities.insert(full_name.clone(), entity) {
                self.diagnostics.push(Diagnostic::NameCollision {
                    full_name: full_name.clone(),
                    path: file.path.clone(),
                });
            }
            self.object_methods.entry(full_name.clone()).or_default();
            self.structs
                .entry(file.package_full_name.clone())
                .or_default()
                .insert(declaration.name.clone(), full_name);
        }
    }

    fn parse_functions_in_file(&mut self, file: &ParsedFile) {
        for declaration in &file.outline.functions {
            let owner = declaration.receiver.as_ref().and_then(|receiver| {
                let owner = self
                    .structs
                    .get(&file.package_full_name)
                    .and_then(|types| types.get(receiver))
                    .cloned();
                if owner.is_none() {
                    self.diagnostics.push(Diagnostic::UnresolvedReceiver {
                        path: file.path.clone(),
                        receiver: receiver.clone(),
                        method: declaration.name.clone(),
                    });
                }
                owner
            });

            let executable = match &owner {
                Some(owner) => Executable {
                    full_name: naming::method_full_name(owner, &declaration.name),
                    simple_name: declaration.name.clone(),
                    parent_name: owner.clone(),
                    service_name: self.service_name.clone(),
                    content: declaration.text.clone(),
                },
                None => Executable {
                    full_name: naming::function_full_name(
                        &file.package_full_name,
                        &declaration.name,
                    ),
                    simple_name: declaration.name.clone(),
                    parent_name: String::new(),
                    service_name: self.service_name.clone(),
                    content: declaration.text.clone(),
                },
            };
            debug!(
                "{}: {}",
                if owner.is_some() { "Method" } else { "Function" },
                executable.full_name
            );

            let full_name = executable.full_name.clone();
            let replaced = self.executables.insert(full_name.clone(), executable);
            if replaced {
                self.diagnostics.push(Diagnostic::NameCollision {
                    full_name,
                    path: file.path.clone(),
                });
            } else if let Some(owner) = owner {
                self.object_methods.entry(owner).or_default().push(full_name);
            }
        }
    }
}

/// Extract one service rooted at `service_root`
///
/// Files are discovered recursively and parsed once. A file that cannot be
/// read, or that yields no syntax tree or package clause, fails the service;
/// a file with recoverable syntax errors keeps its recovered declarations
/// unless `config.strict_syntax` is set.
pub fn parse_project(
    service_root: &Path,
    service_name: &str,
    config: &AnalyzerConfig,
) -> Result<ServiceExtraction> {
    let mut diagnostics = Diagnostics::new();
    let files = collect_source_files(service_root, &mut diagnostics).map_err(|source| {
        crate::errors::AnalysisError::DirectoryUnreadable {
            path: service_root.to_path_buf(),
            source,
        }
    })?;
    debug!(
        "Found {} Go files in service {} at {}",
        files.len(),
        service_name,
        service_root.display()
    );

    let mut parser = crate::language::new_parser()?;
    let mut parsed = Vec::with_capacity(files.len());
    for path in files {
        let outline = crate::extractors::outline_file(&mut parser, &path, config.strict_syntax)?;
        if outline.has_syntax_errors {
            diagnostics.push(Diagnostic::SyntaxErrorsRecovered { path: path.clone() });
        }
        let package_full_name = package_full_name_for(&path, service_root, &outline.package);
        debug!("Package: {} ({})", outline.package, package_full_name);
        parsed.push(ParsedFile {
            path,
            package_full_name,
            outline,
        });
    }

    Ok(ProjectParser::new(service_name, diagnostics).run(&parsed))
}

fn package_full_name_for(file: &Path, service_root: &Path, package: &str) -> String {
    let dir = file.parent().unwrap_or(service_root);
    // Files come from walking `service_root`, so the prefix always matches
    let relative = to_relative_unix_style(dir, service_root).unwrap_or_default();
    naming::package_full_name(&relative, package)
}
