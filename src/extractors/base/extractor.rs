// BaseExtractor implementation
//
// Holds one file's path and text and provides the node-text helpers every
// language extractor builds on.

use std::path::{Path, PathBuf};
use tracing::debug;
use tree_sitter::Node;

/// Base implementation for language extractors
pub struct BaseExtractor {
    pub file_path: PathBuf,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(file_path: &Path, content: String) -> Self {
        debug!("BaseExtractor for '{}' ({} bytes)", file_path.display(), content.len());

        Self {
            file_path: file_path.to_path_buf(),
            content,
        }
    }

    /// Get the exact source text spanned by a node
    ///
    /// Returns an empty string if the node's byte range does not fall on the
    /// file's character boundaries.
    pub fn get_node_text(&self, node: &Node) -> String {
        self.content
            .get(node.start_byte()..node.end_byte())
            .unwrap_or_default()
            .to_string()
    }
}
