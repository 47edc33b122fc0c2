//! Path resolution helpers.
//!
//! Every path that ends up in a compiler command goes through
//! [`normalize_separators`], so tokens use forward slashes on every host.

use std::path::Path;

use path_clean::PathClean;

use crate::error::{Error, Result};

/// Return the `count`-th ancestor directory of `path` as an absolute,
/// forward-slash string.
///
/// `count == 0` yields the directory containing `path` when it is a file, or
/// `path` itself when it is an existing directory. The path is made absolute
/// against the current directory and cleaned lexically (`.` and `..` are
/// collapsed); symlinks are not resolved, so the path does not need to exist.
///
/// # Errors
///
/// Returns [`Error::Path`] when `count` goes past the filesystem root.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)]
/// # {
/// use kiln_core::path::resolve_ancestor;
///
/// assert_eq!(resolve_ancestor("/work/game/src/main.cpp", 0).unwrap(), "/work/game/src");
/// assert_eq!(resolve_ancestor("/work/game/src/main.cpp", 1).unwrap(), "/work/game");
/// # }
/// ```
pub fn resolve_ancestor(path: impl AsRef<Path>, count: usize) -> Result<String> {
    let original = path.as_ref();
    let absolute = std::path::absolute(original)?.clean();

    let start = if absolute.is_dir() {
        absolute.as_path()
    } else {
        match absolute.parent() {
            Some(parent) => parent,
            None => {
                return Err(Error::Path {
                    path: original.to_path_buf(),
                    depth: 0,
                    requested: count,
                });
            }
        }
    };

    let ancestors: Vec<&Path> = start.ancestors().collect();
    match ancestors.get(count) {
        Some(dir) => Ok(normalize_separators(dir)),
        None => Err(Error::Path {
            path: original.to_path_buf(),
            depth: ancestors.len().saturating_sub(1),
            requested: count,
        }),
    }
}

/// Render a path with every `\` replaced by `/`.
pub fn normalize_separators(path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Join `child` onto a forward-slash directory string.
pub(crate) fn join(dir: &str, child: &str) -> String {
    format!("{}/{}", dir.trim_end_matches('/'), child)
}
