//! Tree Builder
//!
//! Scans a directory tree once and records, per directory, which Go-related
//! markers it holds. Nodes live in an arena (`ServiceTree`) and refer to each
//! other by index: the arena owns every node, `children` lists the owned
//! subdirectories in listing order, and `parent` is a plain lookup index.
//!
//! Nodes are pushed in pre-order, so every child's index is greater than its
//! parent's. The `can_be_service` flag is computed after the scan by folding
//! over the arena in reverse index order, which visits all children before
//! their parent.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::errors::{AnalysisError, Result};
use crate::language::{self, ENTRY_FILE, MODULE_MARKER};
use crate::utils::file_utils::{is_source_file, sorted_entries};
use crate::utils::paths::base_name;
use std::path::{Path, PathBuf};
use tracing::debug;
use tree_sitter::Parser;

/// Index of a node in its `ServiceTree`
pub type NodeId = usize;

/// One scanned directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceNode {
    pub id: NodeId,
    pub path: PathBuf,
    pub name: String,
    /// Non-owning back-reference
    pub parent: Option<NodeId>,
    /// Owned subdirectories, in listing order
    pub children: Vec<NodeId>,
    /// A Go file other than the entry file is present
    pub has_source_file: bool,
    /// `go.mod` is present
    pub has_module_marker: bool,
    /// `main.go` is present
    pub has_entry_file: bool,
    /// Some non-entry Go file declares `func main()`
    pub has_entry_function: bool,
    /// Module marker, source file, or a service-capable descendant
    pub can_be_service: bool,
    /// Number of Go files directly in this directory, entry file included
    pub source_file_count: usize,
    /// `go.mod` and Go file names directly in this directory, in listing order
    pub files: Vec<String>,
}

impl ServiceNode {
    fn new(id: NodeId, path: &Path, parent: Option<NodeId>) -> Self {
        Self {
            id,
            path: path.to_path_buf(),
            name: base_name(path),
            parent,
            children: Vec::new(),
            has_source_file: false,
            has_module_marker: false,
            has_entry_file: false,
            has_entry_function: false,
            can_be_service: false,
            source_file_count: 0,
            files: Vec::new(),
        }
    }
}

/// Arena of scanned directories; node 0 is the root
#[derive(Debug, Clone)]
pub struct ServiceTree {
    nodes: Vec<ServiceNode>,
}

impl ServiceTree {
    /// Scan `root` recursively
    ///
    /// An unreadable root is an error. An unreadable subdirectory is recorded
    /// as a diagnostic and left out of the tree.
    pub fn build(root: &Path, diagnostics: &mut Diagnostics) -> Result<Self> {
        let mut builder = TreeBuilder {
            nodes: Vec::new(),
            parser: language::new_parser()?,
            diagnostics,
        };
        builder.build_node(root, None)?;

        let mut tree = ServiceTree {
            nodes: builder.nodes,
        };
        tree.update_flags();
        debug!("Scanned {} directories under {}", tree.len(), root.display());
        Ok(tree)
    }

    /// Post-order flag update: reverse index order sees children first
    fn update_flags(&mut self) {
        for id in (0..self.nodes.len()).rev() {
            let any_child = self.nodes[id]
                .children
                .iter()
                .any(|&child| self.nodes[child].can_be_service);
            let node = &mut self.nodes[id];
            node.can_be_service = node.has_module_marker || node.has_source_file || any_child;
        }
    }

    pub fn root(&self) -> &ServiceNode {
        &self.nodes[0]
    }

    pub fn node(&self, id: NodeId) -> &ServiceNode {
        &self.nodes[id]
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &ServiceNode> {
        self.nodes[id].children.iter().map(|&child| &self.nodes[child])
    }

    pub fn parent(&self, id: NodeId) -> Option<&ServiceNode> {
        self.nodes[id].parent.map(|parent| &self.nodes[parent])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceNode> {
        self.nodes.iter()
    }
}

struct TreeBuilder<'d> {
    nodes: Vec<ServiceNode>,
    parser: Parser,
    diagnostics: &'d mut Diagnostics,
}

impl TreeBuilder<'_> {
    fn build_node(&mut self, path: &Path, parent: Option<NodeId>) -> Result<Option<NodeId>> {
        let entries = match sorted_entries(path) {
            Ok(entries) => entries,
            Err(source) if parent.is_none() => {
                return Err(AnalysisError::DirectoryUnreadable {
                    path: path.to_path_buf(),
                    source,
                })
            }
            Err(source) => {
                self.diagnostics.push(Diagnostic::DirectoryUnreadable {
                    path: path.to_path_buf(),
                    reason: source.to_string(),
                });
                return Ok(None);
            }
        };

        let id = self.nodes.len();
        self.nodes.push(ServiceNode::new(id, path, parent));

        for entry in entries {
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            // Symbolic links are not followed, same as file collection
            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                if let Some(child) = self.build_node(&entry_path, Some(id))? {
                    self.nodes[id].children.push(child);
                }
            } else if !file_type.is_file() {
                continue;
            } else if name == MODULE_MARKER {
                let node = &mut self.nodes[id];
                node.has_module_marker = true;
                node.files.push(name);
            } else if name == ENTRY_FILE {
                let node = &mut self.nodes[id];
                node.has_entry_file = true;
                node.source_file_count += 1;
                node.files.push(name);
            } else if is_source_file(&file_type, &name) {
                let has_entry_function = self.probe(&entry_path);
                let node = &mut self.nodes[id];
                node.has_source_file = true;
                node.source_file_count += 1;
                node.has_entry_function |= has_entry_function;
                node.files.push(name);
            }
        }

        Ok(Some(id))
    }

    fn probe(&mut self, file: &Path) -> bool {
        match crate::extractors::probe_entry_function(&mut self.parser, file) {
            Ok(found) => found,
            Err(e) => {
                self.diagnostics.push(Diagnostic::ProbeFailed {
                    path: file.to_path_buf(),
                    reason: e.to_string(),
                });
                false
            }
        }
    }
}
