//! List command implementation
//!
//! Lists embedded files, optionally under a prefix, as plain paths, a long listing
//! with sizes and hashes, or JSON.

use bldr_saucer::{Bundle, Metadata, Result};

use crate::cli::ListArgs;
use bldr_saucer::ui::{self, format_size};

/// Run list command
pub fn run(bundle: &Bundle<'_>, args: ListArgs) -> Result<()> {
    let entries: Vec<Metadata<'_>> = bundle.list(&args.prefix).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        if !args.prefix.is_empty() {
            eprintln!("No embedded files under '{}'.", args.prefix);
        }
        return Ok(());
    }

    for meta in &entries {
        if args.long {
            println!("{}", format_long(meta));
        } else {
            println!("{}", meta.path);
        }
    }

    if args.long {
        let total: u64 = entries.iter().map(|m| m.size).sum();
        println!();
        println!(
            "{} {} files, {}",
            ui::label("Total:"),
            entries.len(),
            format_size(total)
        );
    }

    Ok(())
}

fn format_long(meta: &Metadata<'_>) -> String {
    format!(
        "{:>10}  {}  {}",
        format_size(meta.size),
        meta.hash.as_deref().unwrap_or("-"),
        meta.path
    )
}
