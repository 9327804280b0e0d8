//! Version command implementation

use bldr_saucer::Result;
use bldr_saucer::SOURCES;
use bldr_saucer::ui::format_size;

/// Run version command
pub fn run() -> Result<()> {
    println!("bldr-saucer-src {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("Embedded sources:");
    println!("  Files: {}", SOURCES.len());
    println!("  Size: {}", format_size(SOURCES.total_size()));
    println!("  Digest: {}", SOURCES.digest());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
