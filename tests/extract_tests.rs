//! Writing the embedded sources to disk and building them

mod common;

use common::RecordingReporter;

use bldr_saucer::builder::{Builder, InstallOutcome};
use bldr_saucer::config::Settings;
use bldr_saucer::extract::{self, ExtractOptions};
use bldr_saucer::{SOURCES, SaucerError};

fn settings(dir: &common::TestDir) -> Settings {
    Settings {
        from_source: false,
        skip_binary: false,
        prebuilt_dir: Some(dir.path.join("node_modules")),
        work_dir: dir.path.join("work"),
    }
}

#[test]
fn test_extracted_tree_matches_source_dir() {
    let dir = common::TestDir::new();
    let report = extract::extract(&SOURCES, &dir.path, &ExtractOptions::default()).unwrap();

    assert_eq!(report.written.len(), SOURCES.len());
    assert_eq!(report.bytes_written, SOURCES.total_size());
    assert_eq!(common::scan_sources(&dir.path), common::scan_sources(&common::source_root()));

    for path in SOURCES.paths() {
        assert_eq!(dir.read_bytes(path), SOURCES.read_all(path).unwrap());
    }
}

#[test]
fn test_second_extract_is_unchanged() {
    let dir = common::TestDir::new();
    extract::extract(&SOURCES, &dir.path, &ExtractOptions::default()).unwrap();

    let report = extract::extract(&SOURCES, &dir.path, &ExtractOptions::default()).unwrap();
    assert!(report.written.is_empty());
    assert_eq!(report.unchanged.len(), SOURCES.len());
    assert_eq!(report.bytes_written, 0);
}

#[test]
fn test_extract_unknown_prefix_fails() {
    let dir = common::TestDir::new();
    let options = ExtractOptions {
        prefix: Some("docs".to_string()),
        overwrite: false,
    };

    let err = extract::extract(&SOURCES, &dir.path, &options).unwrap_err();
    assert!(matches!(err, SaucerError::NotFound { .. }));
    assert!(common::scan_sources(&dir.path).is_empty());
}

#[test]
fn test_verify_lists_extra_files() {
    let dir = common::TestDir::new();
    extract::extract(&SOURCES, &dir.path, &ExtractOptions::default()).unwrap();
    dir.write_file("build/build.ninja", "");

    let report = extract::verify(&SOURCES, &dir.path).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.extra, vec!["build/build.ninja"]);
}

#[test]
fn test_install_skipped_leaves_work_dir_alone() {
    let dir = common::TestDir::new();
    let mut settings = settings(&dir);
    settings.skip_binary = true;
    let mut reporter = RecordingReporter::default();

    let outcome = Builder::new(settings).install(&SOURCES, &mut reporter).unwrap();
    assert_eq!(outcome, InstallOutcome::Skipped);
    assert!(!dir.path.join("work").exists());
    assert_eq!(reporter.events.len(), 1);
}

#[test]
fn test_install_without_source_build_reports_hint() {
    let dir = common::TestDir::new();
    let mut reporter = RecordingReporter::default();

    let outcome = Builder::new(settings(&dir))
        .install(&SOURCES, &mut reporter)
        .unwrap();
    assert_eq!(outcome, InstallOutcome::NoPrebuilt);
    assert!(
        reporter
            .events
            .iter()
            .any(|e| e.contains("BLDR_SAUCER_FROM_SOURCE=true"))
    );
}

#[test]
fn test_build_without_toolchain_writes_nothing() {
    let dir = common::TestDir::new();
    let mut settings = settings(&dir);
    settings.from_source = true;
    std::fs::create_dir_all(dir.path.join("empty-bin")).unwrap();

    let err = Builder::new(settings)
        .with_search_path(dir.path.join("empty-bin"))
        .install(&SOURCES, &mut RecordingReporter::default())
        .unwrap_err();
    assert!(matches!(err, SaucerError::ToolNotFound { .. }));
    assert!(!dir.path.join("work").exists());
}
