//! Vendor command implementation

use bldr_saucer::Result;
use bldr_saucer::ui;
use bldr_saucer::vendor::VendorManifest;

use crate::cli::VendorArgs;

/// Print the vendoring manifest
pub fn run(args: VendorArgs) -> Result<()> {
    let manifest = VendorManifest::embedded()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
        return Ok(());
    }

    println!("Vendored packages ({}):", manifest.packages.len());
    println!();
    for package in &manifest.packages {
        println!("  {}", ui::highlight(&package.module));
        if let Some(purpose) = &package.purpose {
            println!("    {} {}", ui::label("Purpose:"), purpose);
        }
        if package.vendors_sources() {
            println!("    {} {}", ui::label("Sources:"), package.sources.join(", "));
        }
    }

    Ok(())
}
