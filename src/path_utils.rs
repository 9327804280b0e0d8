//! Path utilities for bundle keys
//!
//! Bundle paths are relative, `/`-separated and never rooted. These helpers validate
//! them and map them onto native filesystem paths.

use std::path::{Path, PathBuf};

/// Name of the bundle root directory
pub const ROOT: &str = ".";

/// Convert a path to a string using forward slashes
///
/// ```
/// use std::path::Path;
/// use bldr_saucer::path_utils::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(Path::new("src/main.cpp")), "src/main.cpp");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Check whether `path` is a valid bundle path
///
/// Valid paths are unrooted, have no empty, `.` or `..` elements and no trailing
/// slash. The single exception is `"."`, which names the root.
///
/// ```
/// use bldr_saucer::path_utils::is_valid_path;
///
/// assert!(is_valid_path("src/main.cpp"));
/// assert!(is_valid_path("."));
/// assert!(!is_valid_path("/src/main.cpp"));
/// assert!(!is_valid_path("src/../CMakeLists.txt"));
/// assert!(!is_valid_path("src/"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path == ROOT {
        return true;
    }

    !path.is_empty()
        && path
            .split('/')
            .all(|elem| !elem.is_empty() && elem != "." && elem != "..")
}

/// Normalize a directory-style prefix for listing
///
/// `""`, `"."` and `"/"` all mean the root and normalize to `""`. Leading `./` or `/`
/// and trailing slashes are dropped. Returns `None` when what remains is not a valid path.
pub fn normalize_prefix(prefix: &str) -> Option<&str> {
    let trimmed = prefix.trim_end_matches('/');
    let trimmed = trimmed.strip_prefix("./").unwrap_or(trimmed);
    let trimmed = trimmed.trim_start_matches('/');

    if trimmed.is_empty() || trimmed == ROOT {
        return Some("");
    }

    is_valid_path(trimmed).then_some(trimmed)
}

/// Join a bundle path onto a native directory
pub fn to_native(root: &Path, bundle_path: &str) -> PathBuf {
    bundle_path
        .split('/')
        .fold(root.to_path_buf(), |acc, elem| acc.join(elem))
}

/// Final element of a bundle path
pub fn file_name(bundle_path: &str) -> &str {
    bundle_path.rsplit('/').next().unwrap_or(bundle_path)
}
