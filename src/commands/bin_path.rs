//! Bin-path command implementation

use bldr_saucer::Result;
use bldr_saucer::binary::{Locator, Platform, host_description};

use crate::cli::BinPathArgs;
use crate::commands::helpers;

/// Print the resolved bldr-saucer binary path
pub fn run(args: BinPathArgs, verbose: bool) -> Result<()> {
    let settings = helpers::resolve_settings(&args.location);
    let mut locator = Locator::new(settings);
    if let Some(platform) = &args.platform {
        locator = locator.with_platform(Some(platform.parse::<Platform>()?));
    }

    if verbose {
        match locator.platform() {
            Some(platform) => eprintln!("platform: {platform} ({})", platform.package_name()),
            None => eprintln!("platform: {} (no prebuilt package)", host_description()),
        }
        if let Some(prebuilt) = locator.prebuilt_path() {
            eprintln!("prebuilt: {}", prebuilt.display());
        }
        eprintln!("source:   {}", locator.source_path().display());
    }

    println!("{}", locator.binary_path()?.display());
    Ok(())
}
