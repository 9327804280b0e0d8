//! Locate a prebuilt or source-built bldr-saucer binary
//!
//! Prebuilt binaries ship as one package per platform, laid out as
//! `<prebuilt dir>/@aptre/bldr-saucer-<platform>/bin/bldr-saucer[.exe]`. A source build
//! leaves the binary at `<work dir>/build/bldr-saucer[.exe]`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::config::Settings;
use crate::error::{self, Result, SaucerError};

/// Name of the executable produced by the CMake build
pub const BINARY_NAME: &str = "bldr-saucer";

/// npm scope the platform packages are published under
pub const PACKAGE_SCOPE: &str = "@aptre";

/// Platforms with a published prebuilt package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    #[serde(rename = "darwin-arm64")]
    DarwinArm64,
    #[serde(rename = "darwin-x64")]
    DarwinX64,
    #[serde(rename = "linux-x64")]
    LinuxX64,
    #[serde(rename = "linux-arm64")]
    LinuxArm64,
    #[serde(rename = "win32-x64")]
    Win32X64,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::DarwinArm64,
        Platform::DarwinX64,
        Platform::LinuxX64,
        Platform::LinuxArm64,
        Platform::Win32X64,
    ];

    /// The platform this process runs on, if a package exists for it
    pub fn current() -> Option<Self> {
        Self::from_target(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Map Rust's `OS`/`ARCH` constants onto a package platform
    pub fn from_target(os: &str, arch: &str) -> Option<Self> {
        match (os, arch) {
            ("macos", "aarch64") => Some(Platform::DarwinArm64),
            ("macos", "x86_64") => Some(Platform::DarwinX64),
            ("linux", "x86_64") => Some(Platform::LinuxX64),
            ("linux", "aarch64") => Some(Platform::LinuxArm64),
            ("windows", "x86_64") => Some(Platform::Win32X64),
            _ => None,
        }
    }

    /// Package platform id, e.g. `linux-x64`
    pub fn id(self) -> &'static str {
        match self {
            Platform::DarwinArm64 => "darwin-arm64",
            Platform::DarwinX64 => "darwin-x64",
            Platform::LinuxX64 => "linux-x64",
            Platform::LinuxArm64 => "linux-arm64",
            Platform::Win32X64 => "win32-x64",
        }
    }

    /// Full package name, e.g. `@aptre/bldr-saucer-linux-x64`
    pub fn package_name(self) -> String {
        format!("{PACKAGE_SCOPE}/{BINARY_NAME}-{}", self.id())
    }

    pub fn binary_name(self) -> String {
        match self {
            Platform::Win32X64 => format!("{BINARY_NAME}.exe"),
            _ => BINARY_NAME.to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = SaucerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| error::platform_not_supported(s))
    }
}

/// `os-arch` of the running process, for messages about unsupported platforms
pub fn host_description() -> String {
    Platform::current().map_or_else(
        || format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
        |p| p.id().to_string(),
    )
}

/// Executable name for binaries built on this host
pub fn host_binary_name() -> String {
    if cfg!(windows) {
        format!("{BINARY_NAME}.exe")
    } else {
        BINARY_NAME.to_string()
    }
}

/// Resolves where the bldr-saucer binary lives
#[derive(Debug, Clone)]
pub struct Locator {
    settings: Settings,
    platform: Option<Platform>,
}

impl Locator {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            platform: Platform::current(),
        }
    }

    /// Look up packages for a platform other than the host
    pub fn with_platform(mut self, platform: Option<Platform>) -> Self {
        self.platform = platform;
        self
    }

    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    /// Path inside the platform package; `None` without a prebuilt dir or platform
    pub fn prebuilt_path(&self) -> Option<PathBuf> {
        let platform = self.platform?;
        let root = self.settings.prebuilt_dir.as_ref()?;

        let mut path = root.clone();
        for segment in platform.package_name().split('/') {
            path.push(segment);
        }
        path.push("bin");
        path.push(platform.binary_name());
        Some(path)
    }

    /// Where a source build leaves the binary
    pub fn source_path(&self) -> PathBuf {
        self.settings.build_dir().join(host_binary_name())
    }

    /// Resolve the binary path
    ///
    /// A forced source build returns the source path even if nothing is built yet.
    /// Otherwise the prebuilt package wins over an existing source build.
    pub fn binary_path(&self) -> Result<PathBuf> {
        if self.settings.from_source {
            return Ok(self.source_path());
        }

        if let Some(prebuilt) = self.prebuilt_path().filter(|p| p.exists()) {
            return Ok(prebuilt);
        }

        let source = self.source_path();
        if source.exists() {
            return Ok(source);
        }

        let platform = self
            .platform
            .map_or_else(host_description, |p| p.id().to_string());
        Err(error::binary_not_found(platform))
    }

    pub fn has_binary(&self) -> bool {
        self.binary_path().is_ok()
    }
}
