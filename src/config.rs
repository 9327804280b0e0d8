//! Runtime settings for locating and building the bldr-saucer binary
//!
//! Settings come from environment variables. The CLI layers its own flags on top.

use std::env;
use std::path::PathBuf;

/// Force or allow a source build
pub const ENV_FROM_SOURCE: &str = "BLDR_SAUCER_FROM_SOURCE";

/// Skip installing the binary altogether
pub const ENV_SKIP_BINARY: &str = "BLDR_SAUCER_SKIP_BINARY";

/// Root directory holding prebuilt platform packages
pub const ENV_PREBUILT_DIR: &str = "BLDR_SAUCER_PREBUILT_DIR";

/// Working directory for materialized sources and builds
pub const ENV_WORK_DIR: &str = "BLDR_SAUCER_DIR";

/// Directory name used under the cache or temp directory
const WORK_DIR_NAME: &str = "bldr-saucer";

/// Resolved settings for the binary locator and source installer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub from_source: bool,
    pub skip_binary: bool,
    pub prebuilt_dir: Option<PathBuf>,
    pub work_dir: PathBuf,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            from_source: is_enabled(lookup(ENV_FROM_SOURCE).as_deref()),
            skip_binary: is_enabled(lookup(ENV_SKIP_BINARY).as_deref()),
            prebuilt_dir: non_empty(ENV_PREBUILT_DIR).map(PathBuf::from),
            work_dir: non_empty(ENV_WORK_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(default_work_dir),
        }
    }

    /// Directory CMake builds into, relative to the work dir
    pub fn build_dir(&self) -> PathBuf {
        self.work_dir.join("build")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Only the literal string `true` enables a flag
pub fn is_enabled(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Default work dir: the user cache dir, else an absolute temp dir
pub fn default_work_dir() -> PathBuf {
    dirs::cache_dir()
        .filter(|dir| dir.is_absolute())
        .unwrap_or_else(temp_dir_base)
        .join(WORK_DIR_NAME)
}

/// Returns an absolute directory suitable for scratch files, even when TMPDIR is relative
fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}
