//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use bldr_saucer::config::{ENV_PREBUILT_DIR, ENV_WORK_DIR};

/// bldr-saucer-src - embedded bldr-saucer sources
///
/// Inspect, extract and build the C++ sources embedded in this binary.
#[derive(Parser, Debug)]
#[command(
    name = "bldr-saucer-src",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Embedded C++ sources and build configuration for bldr-saucer",
    long_about = "bldr-saucer-src carries the bldr-saucer C++ sources and CMakeLists.txt \
                  embedded at build time. It lists and extracts them, prints the vendoring \
                  manifest, and can build the bldr-saucer binary from source.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  bldr-saucer-src list\n    \
                  bldr-saucer-src cat src/main.cpp\n    \
                  bldr-saucer-src extract ./bldr-saucer\n    \
                  BLDR_SAUCER_FROM_SOURCE=true bldr-saucer-src install"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List embedded files
    List(ListArgs),

    /// Write an embedded file to stdout
    Cat(CatArgs),

    /// Show metadata for an embedded file or directory
    Stat(StatArgs),

    /// Write the embedded sources to a directory
    Extract(ExtractArgs),

    /// Check a directory against the embedded sources
    Verify(VerifyArgs),

    /// Show the vendoring manifest
    Vendor(VendorArgs),

    /// Print the path of the bldr-saucer binary
    BinPath(BinPathArgs),

    /// Install bldr-saucer, building from source if requested
    Install(InstallArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List everything:\n    bldr-saucer-src list\n\n\
                  List sources with sizes and hashes:\n    bldr-saucer-src list src --long\n\n\
                  Machine-readable output:\n    bldr-saucer-src list --json")]
pub struct ListArgs {
    /// Only list files under this prefix
    #[arg(default_value = "")]
    pub prefix: String,

    /// Show size and hash
    #[arg(long, short = 'l')]
    pub long: bool,

    /// Print JSON
    #[arg(long, conflicts_with = "long")]
    pub json: bool,
}

/// Arguments for the cat command
#[derive(Parser, Debug)]
pub struct CatArgs {
    /// Bundle path, e.g. src/main.cpp
    pub path: String,
}

/// Arguments for the stat command
#[derive(Parser, Debug)]
pub struct StatArgs {
    /// Bundle path or directory
    pub path: String,

    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the extract command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Extract everything:\n    bldr-saucer-src extract ./out\n\n\
                  Extract only the sources:\n    bldr-saucer-src extract ./out --prefix src\n\n\
                  Replace locally modified files:\n    bldr-saucer-src extract ./out --force")]
pub struct ExtractArgs {
    /// Destination directory (created if missing)
    pub dest: PathBuf,

    /// Only extract files under this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Overwrite files that differ from the embedded copy
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Arguments for the verify command
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Directory previously written by `extract`
    pub dest: PathBuf,
}

/// Arguments for the vendor command
#[derive(Parser, Debug)]
pub struct VendorArgs {
    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

/// Where to look for binaries and where to build
#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    /// Prefer a source build (same as BLDR_SAUCER_FROM_SOURCE=true)
    #[arg(long)]
    pub from_source: bool,

    /// Root of the prebuilt platform packages
    #[arg(long, value_name = "DIR", env = ENV_PREBUILT_DIR)]
    pub prebuilt_dir: Option<PathBuf>,

    /// Working directory for sources and builds
    #[arg(long, value_name = "DIR", env = ENV_WORK_DIR)]
    pub dir: Option<PathBuf>,
}

/// Arguments for the bin-path command
#[derive(Parser, Debug)]
pub struct BinPathArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Look up the package for another platform (e.g. darwin-arm64)
    #[arg(long)]
    pub platform: Option<String>,
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Use a prebuilt binary if one exists:\n    bldr-saucer-src install\n\n\
                  Build from source:\n    bldr-saucer-src install --from-source\n\n\
                  Build in a specific directory:\n    bldr-saucer-src install --from-source --dir ./build-root")]
pub struct InstallArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Do nothing (same as BLDR_SAUCER_SKIP_BINARY=true)
    #[arg(long)]
    pub skip_binary: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
