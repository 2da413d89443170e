// Path Conversion Utilities
//
// Canonical names and persisted file paths always use `/` separators,
// regardless of the platform the analysis runs on.

use anyhow::{Context, Result};
use std::path::{Path, MAIN_SEPARATOR};

/// Render a path with Unix-style `/` separators
pub fn to_unix_style(path: &Path) -> String {
    let path_str = path.to_string_lossy();
    if MAIN_SEPARATOR == '\\' {
        path_str.replace('\\', "/")
    } else {
        path_str.to_string()
    }
}

/// Path of `path` relative to `root`, Unix-style, without a leading `/`
///
/// Returns an empty string when `path` is `root` itself.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use servicemap_core::utils::paths::to_relative_unix_style;
///
/// let rel = to_relative_unix_style(Path::new("/app/svc/api/v1"), Path::new("/app/svc")).unwrap();
/// assert_eq!(rel, "api/v1");
/// ```
pub fn to_relative_unix_style(path: &Path, root: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).with_context(|| {
        format!(
            "Path '{}' is not within root '{}'",
            path.display(),
            root.display()
        )
    })?;

    let unix_style = to_unix_style(relative);
    Ok(unix_style.trim_start_matches('/').to_string())
}

/// Base name of a path, falling back to the whole path (e.g. for `/` or `..`)
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_path_of_root_is_empty() {
        let root = PathBuf::from("/work/app");
        assert_eq!(to_relative_unix_style(&root, &root).unwrap(), "");
    }

    #[test]
    fn test_relative_path_uses_forward_slashes() {
        let root = PathBuf::from("/work/app");
        let nested = root.join("internal").join("store");
        assert_eq!(
            to_relative_unix_style(&nested, &root).unwrap(),
            "internal/store"
        );
    }

    #[test]
    fn test_path_outside_root_is_an_error() {
        let result = to_relative_unix_style(Path::new("/elsewhere"), Path::new("/work/app"));
        assert!(result.is_err());
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("/work/app")), "app");
        assert_eq!(base_name(Path::new("/")), "/");
    }
}
