//! Extract command implementation

use bldr_saucer::extract::{self, ExtractOptions};
use bldr_saucer::ui::{self, format_size};
use bldr_saucer::{Bundle, Result};

use crate::cli::ExtractArgs;

/// Write the bundle to a directory
pub fn run(bundle: &Bundle<'_>, args: ExtractArgs, verbose: bool) -> Result<()> {
    let options = ExtractOptions {
        prefix: args.prefix,
        overwrite: args.force,
    };

    let report = extract::extract(bundle, &args.dest, &options)?;

    if verbose {
        for path in &report.written {
            println!("  wrote     {path}");
        }
        for path in &report.unchanged {
            println!("  unchanged {path}");
        }
    }
    for path in &report.skipped {
        eprintln!("  skipped   {path} (differs from embedded copy, use --force to replace)");
    }

    println!(
        "Extracted {} files ({}) to {}",
        report.written.len(),
        format_size(report.bytes_written),
        ui::highlight(&report.root.display().to_string())
    );
    if !report.unchanged.is_empty() {
        println!("{} already up to date", report.unchanged.len());
    }

    Ok(())
}
