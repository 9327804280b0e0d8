//! Build bldr-saucer from the embedded sources
//!
//! Writes the bundle into the work dir, then runs
//! `cmake -G Ninja -B build` and `cmake --build build` there.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::binary::{self, Locator};
use crate::bundle::Bundle;
use crate::config::{ENV_FROM_SOURCE, Settings};
use crate::error::{self, Result};
use crate::extract::{self, ExtractOptions};
use crate::ui::Reporter;

/// Arguments for the CMake configure step
pub const CONFIGURE_ARGS: &[&str] = &["-G", "Ninja", "-B", "build"];

/// Arguments for the CMake build step
pub const BUILD_ARGS: &[&str] = &["--build", "build"];

/// Tools that must be on PATH for a source build
pub const REQUIRED_TOOLS: &[&str] = &["cmake", "ninja"];

/// Result of [`Builder::install`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// `BLDR_SAUCER_SKIP_BINARY=true`
    Skipped,
    /// A prebuilt binary already exists
    Prebuilt(PathBuf),
    /// No prebuilt binary and source builds are not enabled
    NoPrebuilt,
    /// Built from source
    Built(PathBuf),
}

/// Installs the binary, building from source when asked to
#[derive(Debug, Clone)]
pub struct Builder {
    locator: Locator,
    settings: Settings,
    search_path: Option<OsString>,
}

impl Builder {
    pub fn new(settings: Settings) -> Self {
        Self {
            locator: Locator::new(settings.clone()),
            settings,
            search_path: env::var_os("PATH"),
        }
    }

    /// Resolve tools against this PATH value instead of the process one
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    pub fn install(
        &self,
        bundle: &Bundle<'_>,
        reporter: &mut dyn Reporter,
    ) -> Result<InstallOutcome> {
        if self.settings.skip_binary {
            reporter.info("Skipping install (BLDR_SAUCER_SKIP_BINARY=true)");
            return Ok(InstallOutcome::Skipped);
        }

        if let Some(prebuilt) = self.locator.prebuilt_path().filter(|p| p.exists()) {
            reporter.info("Using prebuilt binary");
            reporter.detail(&prebuilt.display().to_string());
            return Ok(InstallOutcome::Prebuilt(prebuilt));
        }

        if !self.settings.from_source {
            reporter.info(&format!(
                "No prebuilt binary for this platform. Set {ENV_FROM_SOURCE}=true to build from source."
            ));
            return Ok(InstallOutcome::NoPrebuilt);
        }

        reporter.info("Building from source...");
        let built = self.build(bundle, reporter)?;
        Ok(InstallOutcome::Built(built))
    }

    /// Materialize the sources and run the CMake build unconditionally
    pub fn build(&self, bundle: &Bundle<'_>, reporter: &mut dyn Reporter) -> Result<PathBuf> {
        let cmake = self.require_tool("cmake")?;
        for tool in REQUIRED_TOOLS.iter().filter(|t| **t != "cmake") {
            self.require_tool(tool)?;
        }

        let work_dir = &self.settings.work_dir;
        reporter.start_step("Writing sources...");
        let options = ExtractOptions {
            prefix: None,
            overwrite: true,
        };
        let report = match extract::extract(bundle, work_dir, &options) {
            Ok(report) => report,
            Err(e) => {
                reporter.fail_step("Writing sources failed");
                return Err(e);
            }
        };
        reporter.finish_step(&format!(
            "Wrote {} files to {}",
            report.total(),
            report.root.display()
        ));

        run_cmake(&cmake, CONFIGURE_ARGS, work_dir, "Configuring...", reporter)?;
        run_cmake(&cmake, BUILD_ARGS, work_dir, "Building...", reporter)?;

        let binary_path = self.locator.source_path();
        if !binary_path.exists() {
            reporter.fail_step(&format!("Binary not found at {}", binary_path.display()));
            return Err(error::binary_not_found(binary::host_description()));
        }

        reporter.info("Build successful!");
        Ok(binary_path)
    }

    fn require_tool(&self, tool: &str) -> Result<PathBuf> {
        self.search_path
            .as_deref()
            .and_then(|path| find_tool_in(tool, path))
            .ok_or_else(|| error::tool_not_found(tool))
    }
}

fn run_cmake(
    program: &Path,
    args: &[&str],
    cwd: &Path,
    message: &str,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let command = format!("cmake {}", args.join(" "));
    reporter.start_step(message);
    reporter.detail(&command);

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .status()
        .map_err(|e| {
            reporter.fail_step(&format!("{command} failed"));
            error::command_failed(&command, e.to_string())
        })?;

    if !status.success() {
        reporter.fail_step(&format!("{command} failed"));
        return Err(error::command_failed(command, status.to_string()));
    }

    reporter.finish_step(message.trim_end_matches("..."));
    Ok(())
}

/// Find an executable on the process PATH
pub fn find_tool(name: &str) -> Option<PathBuf> {
    env::var_os("PATH").and_then(|path| find_tool_in(name, &path))
}

/// Find an executable in a PATH-style list of directories
pub fn find_tool_in(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    let exts = env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    std::iter::once(dir.join(name))
        .chain(
            exts.split(';')
                .filter(|ext| !ext.is_empty())
                .map(|ext| dir.join(format!("{name}{ext}"))),
        )
        .collect()
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::Entry;
    use crate::error::SaucerError;
    use crate::ui::tests::RecordingReporter;
    use tempfile::TempDir;

    static ENTRIES: &[Entry<'static>] = &[
        Entry::new("CMakeLists.txt", b"project(demo)\n"),
        Entry::new("src/main.cpp", b"int main() { return 0; }\n"),
    ];

    fn settings(temp: &TempDir) -> Settings {
        Settings {
            from_source: false,
            skip_binary: false,
            prebuilt_dir: Some(temp.path().join("prebuilt")),
            work_dir: temp.path().join("work"),
        }
    }

    fn empty_path(temp: &TempDir) -> OsString {
        let bin = temp.path().join("empty-bin");
        std::fs::create_dir_all(&bin).unwrap();
        bin.into_os_string()
    }

    #[test]
    fn test_install_skipped() {
        let temp = TempDir::new().unwrap();
        let mut settings = settings(&temp);
        settings.skip_binary = true;
        settings.from_source = true;

        let outcome = Builder::new(settings)
            .install(&Bundle::new(ENTRIES), &mut RecordingReporter::default())
            .unwrap();
        assert_eq!(outcome, InstallOutcome::Skipped);
        assert!(!temp.path().join("work").exists());
    }

    #[test]
    fn test_install_without_prebuilt_or_source_flag() {
        let temp = TempDir::new().unwrap();
        let mut reporter = RecordingReporter::default();

        let outcome = Builder::new(settings(&temp))
            .install(&Bundle::new(ENTRIES), &mut reporter)
            .unwrap();
        assert_eq!(outcome, InstallOutcome::NoPrebuilt);
        assert!(reporter.events.iter().any(|e| e.contains(ENV_FROM_SOURCE)));
    }

    #[test]
    fn test_install_uses_existing_prebuilt() {
        let temp = TempDir::new().unwrap();
        let builder = Builder::new(settings(&temp));
        let Some(prebuilt) = builder.locator().prebuilt_path() else {
            // Host has no published package; nothing to check.
            return;
        };
        std::fs::create_dir_all(prebuilt.parent().unwrap()).unwrap();
        std::fs::write(&prebuilt, b"").unwrap();

        let outcome = builder
            .install(&Bundle::new(ENTRIES), &mut RecordingReporter::default())
            .unwrap();
        assert_eq!(outcome, InstallOutcome::Prebuilt(prebuilt));
    }

    #[test]
    fn test_build_requires_cmake() {
        let temp = TempDir::new().unwrap();
        let mut settings = settings(&temp);
        settings.from_source = true;

        let err = Builder::new(settings)
            .with_search_path(empty_path(&temp))
            .install(&Bundle::new(ENTRIES), &mut RecordingReporter::default())
            .unwrap_err();
        assert_eq!(
            err,
            SaucerError::ToolNotFound {
                tool: "cmake".to_string()
            }
        );
    }

    #[test]
    fn test_find_tool_in_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_tool_in("cmake", &empty_path(&temp)).is_none());
    }

    // Serialized: exec'ing a freshly written script races with forks from other threads.
    #[cfg(unix)]
    mod fake_toolchain {
        use super::*;
        use serial_test::serial;
        use std::os::unix::fs::PermissionsExt;

        fn write_script(dir: &Path, name: &str, body: &str) {
            let path = dir.join(name);
            std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        /// A PATH dir with a `cmake` that fakes the build output and a no-op `ninja`
        fn toolchain(temp: &TempDir, cmake_body: &str) -> OsString {
            let bin = temp.path().join("bin");
            std::fs::create_dir_all(&bin).unwrap();
            write_script(&bin, "cmake", cmake_body);
            write_script(&bin, "ninja", "exit 0");
            bin.into_os_string()
        }

        const FAKE_CMAKE: &str = r#"if [ "$1" = "--build" ]; then
  mkdir -p "$2" && touch "$2/bldr-saucer"
else
  test -f CMakeLists.txt || exit 7
fi
exit 0"#;

        #[test]
        #[serial]
        fn test_find_tool_in_executable() {
            let temp = TempDir::new().unwrap();
            let path = toolchain(&temp, "exit 0");
            assert_eq!(
                find_tool_in("cmake", &path),
                Some(temp.path().join("bin").join("cmake"))
            );
        }

        #[test]
        #[serial]
        fn test_find_tool_ignores_non_executable() {
            let temp = TempDir::new().unwrap();
            let bin = temp.path().join("bin");
            std::fs::create_dir_all(&bin).unwrap();
            std::fs::write(bin.join("cmake"), "not executable").unwrap();
            assert!(find_tool_in("cmake", bin.as_os_str()).is_none());
        }

        #[test]
        #[serial]
        fn test_build_requires_ninja() {
            let temp = TempDir::new().unwrap();
            let bin = temp.path().join("bin");
            std::fs::create_dir_all(&bin).unwrap();
            write_script(&bin, "cmake", "exit 0");

            let mut settings = settings(&temp);
            settings.from_source = true;
            let err = Builder::new(settings)
                .with_search_path(bin.into_os_string())
                .install(&Bundle::new(ENTRIES), &mut RecordingReporter::default())
                .unwrap_err();
            assert_eq!(
                err,
                SaucerError::ToolNotFound {
                    tool: "ninja".to_string()
                }
            );
        }

        #[test]
        #[serial]
        fn test_install_builds_from_source() {
            let temp = TempDir::new().unwrap();
            let mut settings = settings(&temp);
            settings.from_source = true;
            let mut reporter = RecordingReporter::default();

            let outcome = Builder::new(settings)
                .with_search_path(toolchain(&temp, FAKE_CMAKE))
                .install(&Bundle::new(ENTRIES), &mut reporter)
                .unwrap();

            let expected = temp.path().join("work").join("build").join("bldr-saucer");
            assert_eq!(outcome, InstallOutcome::Built(expected));
            assert_eq!(
                std::fs::read(temp.path().join("work/src/main.cpp")).unwrap(),
                b"int main() { return 0; }\n"
            );
            assert!(reporter.events.contains(&"start: Configuring...".to_string()));
            assert!(reporter.events.contains(&"start: Building...".to_string()));
        }

        #[test]
        #[serial]
        fn test_failing_configure_is_command_failed() {
            let temp = TempDir::new().unwrap();
            let mut settings = settings(&temp);
            settings.from_source = true;
            let mut reporter = RecordingReporter::default();

            let err = Builder::new(settings)
                .with_search_path(toolchain(&temp, "exit 3"))
                .install(&Bundle::new(ENTRIES), &mut reporter)
                .unwrap_err();

            match err {
                SaucerError::CommandFailed { command, .. } => {
                    assert_eq!(command, "cmake -G Ninja -B build");
                }
                other => panic!("expected CommandFailed, got {other:?}"),
            }
            assert!(reporter.events.iter().any(|e| e.starts_with("fail:")));
        }

        #[test]
        #[serial]
        fn test_missing_binary_after_build() {
            let temp = TempDir::new().unwrap();
            let mut settings = settings(&temp);
            settings.from_source = true;

            let err = Builder::new(settings)
                .with_search_path(toolchain(&temp, "exit 0"))
                .build(&Bundle::new(ENTRIES), &mut RecordingReporter::default())
                .unwrap_err();
            assert!(matches!(err, SaucerError::BinaryNotFound { .. }));
        }
    }
}
