//! Common test utilities for bldr-saucer integration tests

use std::path::{Path, PathBuf};

use bldr_saucer::ui::Reporter;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A scratch directory for integration tests
#[allow(dead_code)]
pub struct TestDir {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the directory root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestDir {
    /// Create a new scratch directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file relative to the root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the root
    pub fn read_bytes(&self, path: &str) -> Vec<u8> {
        std::fs::read(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists relative to the root
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).is_file()
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// The `saucer/` directory the bundle is built from
#[allow(dead_code)]
pub fn source_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("saucer")
}

/// Scan `root` the way the build does: `CMakeLists.txt` plus `src/*.cpp` and `src/*.h`
#[allow(dead_code)]
pub fn scan_sources(root: &Path) -> Vec<String> {
    let mut paths: Vec<String> = WalkDir::new(root)
        .max_depth(2)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let relative = e
                .path()
                .strip_prefix(root)
                .ok()?
                .to_string_lossy()
                .replace('\\', "/");
            let is_source = relative.strip_prefix("src/").is_some_and(|name| {
                !name.contains('/') && (name.ends_with(".cpp") || name.ends_with(".h"))
            });
            (relative == "CMakeLists.txt" || is_source).then_some(relative)
        })
        .collect();
    paths.sort();
    paths
}

/// Reporter that keeps every message, so tests can assert on install progress
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<String>,
}

impl Reporter for RecordingReporter {
    fn start_step(&mut self, message: &str) {
        self.events.push(format!("start: {message}"));
    }

    fn finish_step(&mut self, message: &str) {
        self.events.push(format!("finish: {message}"));
    }

    fn fail_step(&mut self, message: &str) {
        self.events.push(format!("fail: {message}"));
    }

    fn info(&mut self, message: &str) {
        self.events.push(format!("info: {message}"));
    }

    fn detail(&mut self, message: &str) {
        self.events.push(format!("detail: {message}"));
    }
}
