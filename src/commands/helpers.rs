//! Command helper utilities

use bldr_saucer::config::Settings;
use bldr_saucer::ui::{InteractiveReporter, Reporter, SilentReporter};

use crate::cli::LocationArgs;

/// Environment settings with command-line flags layered on top
pub fn resolve_settings(location: &LocationArgs) -> Settings {
    let mut settings = Settings::from_env();
    settings.from_source |= location.from_source;
    if let Some(dir) = &location.prebuilt_dir {
        settings.prebuilt_dir = Some(dir.clone());
    }
    if let Some(dir) = &location.dir {
        settings.work_dir = dir.clone();
    }
    settings
}

/// Progress reporter matching the global output flags
pub fn reporter(verbose: bool, quiet: bool) -> Box<dyn Reporter> {
    if quiet {
        Box::new(SilentReporter)
    } else {
        Box::new(InteractiveReporter::new(verbose))
    }
}
