//! Service Boundary Classifier
//!
//! Walks a scanned `ServiceTree` from the root and decides which directories
//! are service roots:
//! - no service-capable child: the node itself is the only service (if it is
//!   service-capable at all)
//! - exactly one service-capable child: descend into it, collapsing wrapper
//!   directories that add no branching information
//! - several service-capable children: each of them is a service and the
//!   node is the boundary root
//!
//! Candidates keep the tree's listing order, so results are reproducible.

use super::tree::{NodeId, ServiceTree};
use crate::diagnostics::{Diagnostic, Diagnostics};
use std::path::PathBuf;
use tracing::debug;

/// Result of classifying a tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Directory chosen as the boundary root; `None` when nothing qualified
    pub boundary_root: Option<PathBuf>,
    /// Service root directories in listing order
    pub services: Vec<PathBuf>,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

pub struct ServiceFinder<'t> {
    tree: &'t ServiceTree,
}

impl<'t> ServiceFinder<'t> {
    pub fn new(tree: &'t ServiceTree) -> Self {
        Self { tree }
    }

    /// Classify from the tree's root
    pub fn get_services(&self, diagnostics: &mut Diagnostics) -> Classification {
        self.find_services_root(0, diagnostics)
    }

    /// Classify the subtree rooted at `start`
    pub fn find_services_root(&self, start: NodeId, diagnostics: &mut Diagnostics) -> Classification {
        let mut current = self.tree.node(start);

        loop {
            let candidates: Vec<NodeId> = self
                .tree
                .children(current.id)
                .filter(|child| child.can_be_service)
                .map(|child| child.id)
                .collect();

            match candidates.as_slice() {
                [] => {
                    if current.can_be_service {
                        debug!("Service root: {}", current.path.display());
                        return Classification {
                            boundary_root: Some(current.path.clone()),
                            services: vec![current.path.clone()],
                        };
                    }
                    diagnostics.push(Diagnostic::NoServiceFound {
                        path: current.path.clone(),
                    });
                    return Classification::default();
                }
                [only] => {
                    debug!(
                        "Fast-forwarding from {} into {}",
                        current.name,
                        self.tree.node(*only).name
                    );
                    current = self.tree.node(*only);
                }
                many => {
                    if current.source_file_count > 0 {
                        diagnostics.push(Diagnostic::AmbiguousBoundary {
                            path: current.path.clone(),
                        });
                    }
                    debug!(
                        "Boundary root {} with {} services",
                        current.path.display(),
                        many.len()
                    );
                    return Classification {
                        boundary_root: Some(current.path.clone()),
                        services: many
                            .iter()
                            .map(|&id| self.tree.node(id).path.clone())
                            .collect(),
                    };
                }
            }
        }
    }
}

/// Convenience: classify a whole tree
pub fn classify(tree: &ServiceTree, diagnostics: &mut Diagnostics) -> Classification {
    ServiceFinder::new(tree).get_services(diagnostics)
}
