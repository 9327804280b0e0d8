//! Cat command implementation

use std::io::Write;

use bldr_saucer::{Bundle, Result};

use crate::cli::CatArgs;

/// Write the raw bytes of an embedded file to stdout
pub fn run(bundle: &Bundle<'_>, args: CatArgs) -> Result<()> {
    let contents = bundle.read_all(&args.path)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(contents)?;
    stdout.flush()?;

    Ok(())
}
