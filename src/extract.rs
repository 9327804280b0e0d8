//! Materialize a bundle back onto disk
//!
//! Files are written through a temp file in the target directory and then renamed into
//! place, so a reader never sees a half-written source file. Every written file is
//! re-hashed against the bundle entry.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::bundle::{Bundle, Entry};
use crate::error::{self, Result, SaucerError};
use crate::hash;
use crate::path_utils;

/// Options for [`extract`]
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Only extract entries under this prefix
    pub prefix: Option<String>,
    /// Replace files whose contents differ from the bundle
    pub overwrite: bool,
}

/// What [`extract`] did with each entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractReport {
    pub root: PathBuf,
    pub written: Vec<String>,
    pub unchanged: Vec<String>,
    pub skipped: Vec<String>,
    pub bytes_written: u64,
}

impl ExtractReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len() + self.skipped.len()
    }
}

enum Disposition {
    Write,
    Unchanged,
    Skip,
}

/// Write bundle entries under `dest`, recreating their directory layout
///
/// A prefix that selects nothing (unknown, or not a valid bundle path such as `../x`)
/// fails with `NotFound` before anything is created.
pub fn extract(
    bundle: &Bundle<'_>,
    dest: &Path,
    options: &ExtractOptions,
) -> Result<ExtractReport> {
    let prefix = options.prefix.as_deref().unwrap_or("");
    let mut entries = bundle.entries_under(prefix).peekable();
    if !prefix.is_empty() && entries.peek().is_none() {
        return Err(error::not_found(prefix));
    }

    std::fs::create_dir_all(dest).map_err(|e| write_error(dest, &e))?;
    let root = dunce::canonicalize(dest)
        .map_err(|e| error::file_read_failed(dest.display().to_string(), e.to_string()))?;

    let mut report = ExtractReport {
        root: root.clone(),
        ..ExtractReport::default()
    };

    for entry in entries {
        let target = path_utils::to_native(&root, entry.path());

        match disposition(entry, &target, options.overwrite)? {
            Disposition::Unchanged => report.unchanged.push(entry.path().to_string()),
            Disposition::Skip => report.skipped.push(entry.path().to_string()),
            Disposition::Write => {
                write_entry(entry, &target)?;
                report.bytes_written += entry.size();
                report.written.push(entry.path().to_string());
            }
        }
    }

    Ok(report)
}

/// Result of comparing a directory against a bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    /// Bundle paths with no file under the directory
    pub missing: Vec<String>,
    /// Bundle paths whose file differs from the embedded copy
    pub modified: Vec<String>,
    /// Files under the directory that are not in the bundle
    pub extra: Vec<String>,
}

impl VerifyReport {
    /// True when every bundle file is present and identical; extra files are allowed
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.modified.is_empty()
    }
}

/// Compare the files under `dest` with the bundle
pub fn verify(bundle: &Bundle<'_>, dest: &Path) -> Result<VerifyReport> {
    let mut report = VerifyReport::default();

    for entry in bundle.entries() {
        let target = path_utils::to_native(dest, entry.path());
        if !target.is_file() {
            report.missing.push(entry.path().to_string());
            continue;
        }

        let actual = hash::hash_file(&target)?;
        if !hash::verify_hash(&entry.hash(), &actual) {
            report.modified.push(entry.path().to_string());
        }
    }

    if dest.is_dir() {
        let mut extra: Vec<String> = WalkDir::new(dest)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let relative = e.path().strip_prefix(dest).ok()?;
                let relative = path_utils::to_forward_slashes(relative);
                (!bundle.contains(&relative)).then_some(relative)
            })
            .collect();
        extra.sort();
        report.extra = extra;
    }

    Ok(report)
}

fn disposition(entry: &Entry<'_>, target: &Path, overwrite: bool) -> Result<Disposition> {
    if !target.exists() {
        return Ok(Disposition::Write);
    }

    let existing = hash::hash_file(target)?;
    if hash::verify_hash(&entry.hash(), &existing) {
        Ok(Disposition::Unchanged)
    } else if overwrite {
        Ok(Disposition::Write)
    } else {
        Ok(Disposition::Skip)
    }
}

fn write_entry(entry: &Entry<'_>, target: &Path) -> Result<()> {
    let parent = target.parent().ok_or_else(|| {
        error::file_write_failed(target.display().to_string(), "no parent directory")
    })?;
    std::fs::create_dir_all(parent).map_err(|e| write_error(parent, &e))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| write_error(target, &e))?;
    temp.write_all(entry.contents())
        .and_then(|()| temp.flush())
        .map_err(|e| write_error(target, &e))?;
    temp.persist(target).map_err(|e| write_error(target, &e.error))?;

    let expected = entry.hash();
    let actual = hash::hash_file(target)?;
    if !hash::verify_hash(&expected, &actual) {
        return Err(error::hash_mismatch(entry.path(), expected, actual));
    }

    Ok(())
}

fn write_error(path: &Path, e: &std::io::Error) -> SaucerError {
    error::file_write_failed(path.display().to_string(), e.to_string())
}
