//! Shell completions command

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use bldr_saucer::Result;

use crate::cli::{Cli, CompletionsArgs};

const BIN_NAME: &str = "bldr-saucer-src";

/// Print the completion script for the requested shell
pub fn run(args: CompletionsArgs) -> Result<()> {
    let Some(shell) = parse_shell(&args.shell) else {
        eprintln!("Unknown shell: {}", args.shell);
        eprintln!("Supported shells: bash, elvish, fish, powershell, zsh");
        std::process::exit(1);
    };

    write_script(shell, &mut std::io::stdout().lock())
}

/// Shell by name, case-insensitive; `pwsh` is accepted for PowerShell
fn parse_shell(name: &str) -> Option<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "elvish" => Some(Shell::Elvish),
        "fish" => Some(Shell::Fish),
        "powershell" | "pwsh" => Some(Shell::PowerShell),
        "zsh" => Some(Shell::Zsh),
        _ => None,
    }
}

fn write_script(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, out);
    out.flush()?;
    Ok(())
}
