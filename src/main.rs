//! bldr-saucer-src - embedded bldr-saucer sources
//!
//! Lists, extracts and builds the C++ sources and CMake configuration embedded in the
//! `bldr_saucer` library.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;

use bldr_saucer::SOURCES;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let mut reporter = commands::helpers::reporter(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::List(args) => commands::list::run(&SOURCES, args),
        Commands::Cat(args) => commands::cat::run(&SOURCES, args),
        Commands::Stat(args) => commands::stat::run(&SOURCES, args),
        Commands::Extract(args) => commands::extract::run(&SOURCES, args, cli.verbose),
        Commands::Verify(args) => match commands::verify::run(&SOURCES, args, cli.verbose) {
            Ok(true) => Ok(()),
            Ok(false) => std::process::exit(1),
            Err(e) => Err(e),
        },
        Commands::Vendor(args) => commands::vendor::run(args),
        Commands::BinPath(args) => commands::bin_path::run(args, cli.verbose),
        Commands::Install(args) => commands::install::run(&SOURCES, args, reporter.as_mut()),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
