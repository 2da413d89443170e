//! Content Aggregator
//!
//! Appends each owned method's text to its type's declaration text, in
//! method discovery order, segments separated by one blank line.
//!
//! Not idempotent: running it twice on the same entities duplicates method
//! bodies. The project extractor calls it exactly once, as its last step.

use super::registry::Registry;
use crate::extractors::base::{CodeEntity, Executable};
use std::collections::HashMap;
use tracing::debug;

pub const CONTENT_SEPARATOR: &str = "\n\n";

/// `owner_methods` maps an owning type's full name to its methods' full
/// names in discovery order
pub fn aggregate(
    entities: &mut Registry<CodeEntity>,
    executables: &Registry<Executable>,
    owner_methods: &HashMap<String, Vec<String>>,
) {
    for (owner, methods) in owner_methods {
        if methods.is_empty() {
            continue;
        }
        let Some(entity) = entities.get_mut(owner) else {
            continue;
        };

        let mut segments = vec![entity.content.as_str()];
        segments.extend(
            methods
                .iter()
                .filter_map(|name| executables.get(name))
                .map(|method| method.content.as_str()),
        );

        if segments.len() > 1 {
            debug!("Updating struct: {}", entity.full_name);
            entity.content = segments.join(CONTENT_SEPARATOR);
        }
    }
}
