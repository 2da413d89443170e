// Utilities Module
//
// File discovery and path helpers shared by the tree builder and the
// project extractor.

/// File utilities
pub mod file_utils {
    use crate::diagnostics::{Diagnostic, Diagnostics};
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    /// Read file content
    pub fn read_file_content(path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    /// List a directory's entries sorted by file name
    ///
    /// Sorting makes every traversal independent of the filesystem's own
    /// listing order.
    pub fn sorted_entries(dir: &Path) -> io::Result<Vec<fs::DirEntry>> {
        let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
        entries.sort_by_key(|entry| entry.file_name());
        Ok(entries)
    }

    /// Recursively collect Go source files under `root`, depth-first in
    /// name order. Symbolic links are not followed.
    ///
    /// Only an unreadable `root` is an error; an unreadable subdirectory is
    /// recorded in `diagnostics` and its subtree is left out.
    pub fn collect_source_files(
        root: &Path,
        diagnostics: &mut Diagnostics,
    ) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        collect_into(sorted_entries(root)?, &mut files, diagnostics);
        Ok(files)
    }

    fn collect_into(
        entries: Vec<fs::DirEntry>,
        files: &mut Vec<PathBuf>,
        diagnostics: &mut Diagnostics,
    ) {
        for entry in entries {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let path = entry.path();
            if file_type.is_dir() {
                match sorted_entries(&path) {
                    Ok(children) => collect_into(children, files, diagnostics),
                    Err(err) => diagnostics.push(Diagnostic::DirectoryUnreadable {
                        path,
                        reason: err.to_string(),
                    }),
                }
            } else if is_source_file(&file_type, &entry.file_name().to_string_lossy()) {
                files.push(path);
            }
        }
    }

    /// A regular (non-symlink) file with the Go source extension
    pub fn is_source_file(file_type: &fs::FileType, name: &str) -> bool {
        file_type.is_file() && crate::language::is_source_file_name(name)
    }
}

/// Path conversion utilities (native ↔ Unix-style)
pub mod paths;

#[cfg(test)]
mod tests {
    use super::file_utils::*;
    use crate::diagnostics::{Diagnostic, Diagnostics};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_source_files_recurses_in_name_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("b/inner")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("z.go"), "package z").unwrap();
        fs::write(root.join("b/inner/deep.go"), "package inner").unwrap();
        fs::write(root.join("a/x.go"), "package a").unwrap();
        fs::write(root.join("a/notes.txt"), "not go").unwrap();
        fs::write(root.join("go.mod"), "module z").unwrap();

        let files = collect_source_files(root, &mut Diagnostics::new()).unwrap();
        let relative: Vec<String> = files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(relative, vec!["a/x.go", "b/inner/deep.go", "z.go"]);
    }

    #[test]
    fn test_same_named_files_in_different_directories_are_all_kept() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("api")).unwrap();
        fs::create_dir_all(root.join("db")).unwrap();
        fs::write(root.join("api/types.go"), "package api").unwrap();
        fs::write(root.join("db/types.go"), "package db").unwrap();

        let files = collect_source_files(root, &mut Diagnostics::new()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_are_not_collected() {
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("real.go"), "package real").unwrap();

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("own.go"), "package own").unwrap();
        std::os::unix::fs::symlink(outside.path().join("real.go"), root.join("link.go")).unwrap();

        let files = collect_source_files(root, &mut Diagnostics::new()).unwrap();
        assert_eq!(files, vec![root.join("own.go")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_is_skipped_with_diagnostic() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("locked")).unwrap();
        fs::write(root.join("locked/hidden.go"), "package locked").unwrap();
        fs::write(root.join("open.go"), "package open").unwrap();

        let locked = root.join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read_dir(&locked).is_ok() {
            // Permission bits are not enforced (running as root)
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut diagnostics = Diagnostics::new();
        let files = collect_source_files(root, &mut diagnostics);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(files.unwrap(), vec![root.join("open.go")]);
        assert!(matches!(
            diagnostics.iter().next(),
            Some(Diagnostic::DirectoryUnreadable { path, .. }) if path == &locked
        ));
    }
}
