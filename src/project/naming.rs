//! Canonical declaration names
//!
//! ```text
//! package   <relative/dir>$$<package>
//! type      <package full name>$$$<Type>
//! function  <package full name>$$$<function>()
//! method    <type full name>.<method>()
//! ```
//!
//! The separators are a persisted format: consumers split names on `$$`,
//! `$$$`, `.` and `()` in that order.

pub const PACKAGE_SEPARATOR: &str = "$$";
pub const MEMBER_SEPARATOR: &str = "$$$";
pub const METHOD_SEPARATOR: &str = ".";
pub const CALL_SUFFIX: &str = "()";

/// `relative_dir` is the file's directory relative to the service root,
/// already using `/` separators; a leading `/` is dropped
pub fn package_full_name(relative_dir: &str, package: &str) -> String {
    let full = format!("{}{}{}", relative_dir, PACKAGE_SEPARATOR, package);
    match full.strip_prefix('/') {
        Some(stripped) => stripped.to_string(),
        None => full,
    }
}

pub fn type_full_name(package_full_name: &str, type_name: &str) -> String {
    format!("{}{}{}", package_full_name, MEMBER_SEPARATOR, type_name)
}

pub fn function_full_name(package_full_name: &str, function_name: &str) -> String {
    format!(
        "{}{}{}{}",
        package_full_name, MEMBER_SEPARATOR, function_name, CALL_SUFFIX
    )
}

pub fn method_full_name(type_full_name: &str, method_name: &str) -> String {
    format!(
        "{}{}{}{}",
        type_full_name, METHOD_SEPARATOR, method_name, CALL_SUFFIX
    )
}

/// Components recovered from a canonical name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameParts {
    Type {
        package_path: String,
        package: String,
        type_name: String,
    },
    Function {
        package_path: String,
        package: String,
        function_name: String,
    },
    Method {
        package_path: String,
        package: String,
        type_name: String,
        method_name: String,
    },
}

/// Split a canonical name back into its components
///
/// Returns `None` for strings that do not follow the grammar.
pub fn split_full_name(full_name: &str) -> Option<NameParts> {
    let (package_path, rest) = full_name.split_once(PACKAGE_SEPARATOR)?;
    let (package, member) = rest.split_once(MEMBER_SEPARATOR)?;
    if package.is_empty() || member.is_empty() {
        return None;
    }

    let (package_path, package) = (package_path.to_string(), package.to_string());
    match member.strip_suffix(CALL_SUFFIX) {
        Some(callable) => match callable.split_once(METHOD_SEPARATOR) {
            Some((type_name, method_name)) => Some(NameParts::Method {
                package_path,
                package,
                type_name: type_name.to_string(),
                method_name: method_name.to_string(),
            }),
            None => Some(NameParts::Function {
                package_path,
                package,
                function_name: callable.to_string(),
            }),
        },
        None => Some(NameParts::Type {
            package_path,
            package,
            type_name: member.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_full_name_strips_leading_slash() {
        assert_eq!(package_full_name("", "main"), "$$main");
        assert_eq!(package_full_name("/internal/db", "db"), "internal/db$$db");
        assert_eq!(package_full_name("internal/db", "db"), "internal/db$$db");
    }

    #[test]
    fn test_name_forms() {
        let package = package_full_name("pkg/greet", "foo");
        let type_name = type_full_name(&package, "Bar");
        assert_eq!(type_name, "pkg/greet$$foo$$$Bar");
        assert_eq!(
            function_full_name(&package, "Standalone"),
            "pkg/greet$$foo$$$Standalone()"
        );
        assert_eq!(
            method_full_name(&type_name, "Hi"),
            "pkg/greet$$foo$$$Bar.Hi()"
        );
    }

    #[test]
    fn test_method_name_round_trip() {
        let cases = [
            ("", "main", "Server", "Run"),
            ("internal/store", "store", "Repo", "Find"),
            ("a/b/c/d", "d", "T", "String"),
        ];
        for (path, package, type_name, method) in cases {
            let full = method_full_name(
                &type_full_name(&package_full_name(path, package), type_name),
                method,
            );
            assert_eq!(
                split_full_name(&full),
                Some(NameParts::Method {
                    package_path: path.to_string(),
                    package: package.to_string(),
                    type_name: type_name.to_string(),
                    method_name: method.to_string(),
                }),
                "round trip of {}",
                full
            );
        }
    }

    #[test]
    fn test_split_type_and_function() {
        assert_eq!(
            split_full_name("api$$api$$$Handler"),
            Some(NameParts::Type {
                package_path: "api".to_string(),
                package: "api".to_string(),
                type_name: "Handler".to_string(),
            })
        );
        assert_eq!(
            split_full_name("$$main$$$main()"),
            Some(NameParts::Function {
                package_path: String::new(),
                package: "main".to_string(),
                function_name: "main".to_string(),
            })
        );
    }

    #[test]
    fn test_split_rejects_malformed_names() {
        assert_eq!(split_full_name("no separators"), None);
        assert_eq!(split_full_name("pkg$$only"), None);
        assert_eq!(split_full_name("pkg$$$$$Type"), None);
    }
}
