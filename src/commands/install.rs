//! Install command implementation
//!
//! Uses a prebuilt binary when one exists, otherwise builds from the embedded sources
//! if a source build was requested.

use bldr_saucer::builder::{self, Builder, InstallOutcome, REQUIRED_TOOLS};
use bldr_saucer::ui::Reporter;
use bldr_saucer::{Bundle, Result};

use crate::cli::InstallArgs;
use crate::commands::helpers;

/// Run install command
pub fn run(bundle: &Bundle<'_>, args: InstallArgs, reporter: &mut dyn Reporter) -> Result<()> {
    let mut settings = helpers::resolve_settings(&args.location);
    settings.skip_binary |= args.skip_binary;

    reporter.detail(&format!("work dir: {}", settings.work_dir.display()));
    for tool in REQUIRED_TOOLS {
        let found = builder::find_tool(tool)
            .map_or_else(|| "not found".to_string(), |p| p.display().to_string());
        reporter.detail(&format!("{tool}: {found}"));
    }

    match Builder::new(settings).install(bundle, reporter)? {
        InstallOutcome::Built(path) | InstallOutcome::Prebuilt(path) => {
            reporter.detail(&format!("binary: {}", path.display()));
        }
        InstallOutcome::Skipped | InstallOutcome::NoPrebuilt => {}
    }

    Ok(())
}
