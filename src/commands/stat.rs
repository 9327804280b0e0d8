//! Stat command implementation

use bldr_saucer::ui;
use bldr_saucer::{Bundle, Result};

use crate::cli::StatArgs;

/// Print metadata for a file or directory
pub fn run(bundle: &Bundle<'_>, args: StatArgs) -> Result<()> {
    let meta = bundle.stat(&args.path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&meta)?);
        return Ok(());
    }

    println!("{} {}", ui::label("Path:"), ui::highlight(meta.path));
    println!(
        "{} {}",
        ui::label("Kind:"),
        if meta.is_dir() { "directory" } else { "file" }
    );
    println!("{} {:o}", ui::label("Mode:"), meta.mode());

    if meta.is_file() {
        println!("{} {} bytes", ui::label("Size:"), meta.size);
        if let Some(hash) = &meta.hash {
            println!("{} {}", ui::label("Hash:"), hash);
        }
    } else {
        let children = bundle.read_dir(&args.path)?;
        println!("{} {}", ui::label("Entries:"), children.len());
        for child in children {
            let suffix = if child.is_dir() { "/" } else { "" };
            println!("  {}{}", child.name, suffix);
        }
    }

    Ok(())
}
