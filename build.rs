//! Snapshots the C++ sources under `saucer/` into a generated resource table.
//!
//! Every file matching one of [`PATTERNS`] becomes an `Entry` whose contents are pulled in
//! with `include_bytes!`, so the bytes live in the compiled artifact. A pattern that matches
//! nothing fails the build.

#![allow(clippy::expect_used, clippy::panic)]

use std::collections::BTreeMap;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

/// Directory (relative to the manifest) that the bundle is rooted at
const SOURCE_ROOT: &str = "saucer";

/// Files captured into the bundle, relative to [`SOURCE_ROOT`]
const PATTERNS: &[&str] = &["CMakeLists.txt", "src/*.cpp", "src/*.h"];

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is not set"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is not set"));
    let root = manifest_dir.join(SOURCE_ROOT);

    // A directory path makes cargo rescan it, which picks up added and removed files.
    println!("cargo:rerun-if-changed={}", root.display());
    println!("cargo:rerun-if-changed=build.rs");

    let files = collect(&root);
    let generated = render(&files);

    fs::write(out_dir.join("embedded_sources.rs"), generated)
        .expect("failed to write embedded_sources.rs");
}

/// Walk the source root and return `relative path -> absolute path` for every match
fn collect(root: &Path) -> BTreeMap<String, PathBuf> {
    if !root.is_dir() {
        panic!("source root {} does not exist", root.display());
    }

    let globs: Vec<(&str, Glob<'static>)> = PATTERNS
        .iter()
        .map(|pattern| {
            let glob = Glob::new(*pattern)
                .unwrap_or_else(|e| panic!("invalid embed pattern '{pattern}': {e}"));
            (*pattern, glob)
        })
        .collect();

    let mut hits: BTreeMap<&str, usize> = PATTERNS.iter().map(|p| (*p, 0)).collect();
    let mut files = BTreeMap::new();

    // The deepest pattern is `src/*`, nothing below depth 2 can match.
    for entry in WalkDir::new(root)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let relative = entry
            .path()
            .strip_prefix(root)
            .expect("walked path outside source root")
            .to_string_lossy()
            .replace('\\', "/");
        let candidate = CandidatePath::from(relative.as_str());

        let mut matched = false;
        for (pattern, glob) in &globs {
            if glob.matched(&candidate).is_some() {
                *hits.entry(*pattern).or_default() += 1;
                matched = true;
            }
        }

        if matched {
            files.insert(relative, entry.path().to_path_buf());
        }
    }

    for (pattern, count) in &hits {
        if *count == 0 {
            panic!(
                "embed pattern '{pattern}' matched no files under {}",
                root.display()
            );
        }
    }

    files
}

fn render(files: &BTreeMap<String, PathBuf>) -> String {
    let mut out = String::new();
    out.push_str("// @generated by build.rs, do not edit.\n\n");

    out.push_str("/// Patterns the bundle was captured from, relative to the source root\n");
    out.push_str("pub const PATTERNS: &[&str] = &[");
    for pattern in PATTERNS {
        let _ = write!(out, "{pattern:?}, ");
    }
    out.push_str("];\n\n");

    out.push_str("static ENTRIES: &[Entry<'static>] = &[\n");
    for (relative, absolute) in files {
        let bytes = fs::read(absolute)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", absolute.display()));
        let hash = format!("blake3:{}", blake3::hash(&bytes).to_hex());
        let _ = writeln!(
            out,
            "    Entry::with_hash({relative:?}, include_bytes!({:?}), {hash:?}),",
            absolute.to_string_lossy()
        );
    }
    out.push_str("];\n");

    out
}
