//! Human-readable rendering of a scanned tree
//!
//! ```text
//! |---shop/ $ *
//! |   |---api/ *
//! |   |   |---handlers.go
//! |   |---go.mod
//! |   |---main.go
//! ```
//!
//! ` $` marks a subtree holding a module marker, an entry file or an entry
//! function; ` *` marks a subtree holding Go files. Subtrees with neither are
//! left out. This is display only and feeds nothing back into classification.

use super::tree::{NodeId, ServiceTree};

const INDENT: &str = "|   ";
const BRANCH: &str = "|---";

struct Rendered {
    lines: Vec<String>,
    has_marker: bool,
    has_source: bool,
}

/// Render the whole tree; an empty string when nothing Go-related was found
pub fn render_tree(tree: &ServiceTree) -> String {
    if tree.is_empty() {
        return String::new();
    }
    render_node(tree, 0, 0)
        .map(|rendered| rendered.lines.join("\n"))
        .unwrap_or_default()
}

fn render_node(tree: &ServiceTree, id: NodeId, depth: usize) -> Option<Rendered> {
    let node = tree.node(id);
    let child_indent = INDENT.repeat(depth + 1);

    let mut has_marker =
        node.has_module_marker || node.has_entry_file || node.has_entry_function;
    let mut has_source = node.source_file_count > 0;

    // Merge subdirectories and files back into listing (name) order
    let mut entries: Vec<(&str, Vec<String>)> = node
        .files
        .iter()
        .map(|file| (file.as_str(), vec![format!("{}{}{}", child_indent, BRANCH, file)]))
        .collect();

    for child in tree.children(id) {
        if let Some(rendered) = render_node(tree, child.id, depth + 1) {
            has_marker |= rendered.has_marker;
            has_source |= rendered.has_source;
            entries.push((child.name.as_str(), rendered.lines));
        }
    }
    entries.sort_by(|a, b| a.0.cmp(b.0));

    if !has_marker && !has_source {
        return None;
    }

    let mut header = format!("{}{}{}/", INDENT.repeat(depth), BRANCH, node.name);
    if has_marker {
        header.push_str(" $");
    }
    if has_source {
        header.push_str(" *");
    }

    let mut lines = vec![header];
    lines.extend(entries.into_iter().flat_map(|(_, lines)| lines));

    Some(Rendered {
        lines,
        has_marker,
        has_source,
    })
}
