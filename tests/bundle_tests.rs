//! Integration tests for the embedded source bundle
//!
//! Compares `SOURCES` against the `saucer/` directory it was built from.

mod common;

use std::io::{Read, Seek, SeekFrom};

use bldr_saucer::{SOURCES, SaucerError};

#[test]
fn test_embedded_bytes_match_disk() {
    let root = common::source_root();
    for path in common::scan_sources(&root) {
        let on_disk = std::fs::read(root.join(&path)).unwrap();
        let embedded = SOURCES.read_all(&path).unwrap();
        assert_eq!(embedded, on_disk.as_slice(), "contents differ for {path}");
    }
}

#[test]
fn test_list_all_matches_disk_scan() {
    let expected = common::scan_sources(&common::source_root());
    let listed: Vec<&str> = SOURCES.list("").map(|m| m.path).collect();
    assert_eq!(listed, expected);

    let dot: Vec<&str> = SOURCES.list(".").map(|m| m.path).collect();
    assert_eq!(dot, expected);
}

#[test]
fn test_list_src_excludes_build_config() {
    let listed: Vec<&str> = SOURCES.list("src").map(|m| m.path).collect();
    assert!(!listed.is_empty());
    assert!(listed.iter().all(|p| p.starts_with("src/")));
    assert!(listed.contains(&"src/main.cpp"));
    assert!(!listed.contains(&"CMakeLists.txt"));
}

#[test]
fn test_expected_sources_present() {
    for path in [
        "CMakeLists.txt",
        "src/main.cpp",
        "src/fetch_proto.h",
        "src/pipe_client.cpp",
        "src/pipe_connection.h",
        "src/scheme_forwarder.cpp",
    ] {
        assert!(SOURCES.contains(path), "{path} is not embedded");
    }
}

#[test]
fn test_open_streams_whole_file() {
    let mut file = SOURCES.open("src/main.cpp").unwrap();
    let mut contents = Vec::new();
    file.read_to_end(&mut contents).unwrap();
    assert_eq!(contents, SOURCES.read_all("src/main.cpp").unwrap());

    file.seek(SeekFrom::Start(0)).unwrap();
    let mut again = Vec::new();
    file.read_to_end(&mut again).unwrap();
    assert_eq!(again, contents);
}

#[test]
fn test_missing_paths_are_not_found() {
    for path in [
        "src/missing.cpp",
        "README.md",
        "vendor.yaml",
        "src",
        "",
        "/CMakeLists.txt",
        "src/../CMakeLists.txt",
    ] {
        let err = SOURCES.open(path).unwrap_err();
        assert!(
            matches!(err, SaucerError::NotFound { .. }),
            "expected NotFound for {path:?}, got {err:?}"
        );
    }
}

#[test]
fn test_repeated_reads_are_identical() {
    let first = SOURCES.read_all("CMakeLists.txt").unwrap();
    let second = SOURCES.read_all("CMakeLists.txt").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.as_ptr(), second.as_ptr());
}

#[test]
fn test_stat_directory_and_read_dir() {
    let meta = SOURCES.stat("src").unwrap();
    assert!(meta.is_dir());
    assert_eq!(meta.mode(), 0o555);
    assert!(meta.modified().is_none());

    let root: Vec<&str> = SOURCES.read_dir(".").unwrap().iter().map(|m| m.name).collect();
    assert_eq!(root, vec!["CMakeLists.txt", "src"]);
}

#[test]
fn test_digest_is_stable() {
    assert_eq!(SOURCES.digest(), SOURCES.digest());
    assert!(SOURCES.digest().starts_with("blake3:"));
}
