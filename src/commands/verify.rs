//! Verify command implementation

use bldr_saucer::extract;
use bldr_saucer::{Bundle, Result};

use crate::cli::VerifyArgs;

/// Compare a directory with the bundle; returns whether every embedded file matched
pub fn run(bundle: &Bundle<'_>, args: VerifyArgs, verbose: bool) -> Result<bool> {
    let report = extract::verify(bundle, &args.dest)?;

    for path in &report.missing {
        eprintln!("  missing   {path}");
    }
    for path in &report.modified {
        eprintln!("  modified  {path}");
    }
    if verbose {
        for path in &report.extra {
            eprintln!("  extra     {path}");
        }
    }

    if report.is_clean() {
        println!("All {} files match.", bundle.len());
    } else {
        eprintln!(
            "{} missing, {} modified",
            report.missing.len(),
            report.modified.len()
        );
    }

    Ok(report.is_clean())
}
