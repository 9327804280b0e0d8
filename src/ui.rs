//! Progress and status output
//!
//! Long-running steps (configuring and building the C++ sources) go through the
//! [`Reporter`] trait, so the CLI can show spinners while library callers and tests
//! stay silent.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Reporter for multi-step operations
pub trait Reporter: Send {
    /// Begin a step, e.g. "Configuring..."
    fn start_step(&mut self, message: &str);

    /// Complete the current step
    fn finish_step(&mut self, message: &str);

    /// Abandon the current step after an error
    fn fail_step(&mut self, message: &str);

    /// A one-off status line
    fn info(&mut self, message: &str);

    /// Extra detail shown only in verbose mode
    fn detail(&mut self, message: &str);
}

/// Spinner-based reporter for interactive terminals
pub struct InteractiveReporter {
    spinner: Option<ProgressBar>,
    verbose: bool,
}

impl InteractiveReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            spinner: None,
            verbose,
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Reporter for InteractiveReporter {
    fn start_step(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn finish_step(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        println!("{} {}", Style::new().green().bold().apply_to("✓"), message);
    }

    fn fail_step(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abandon();
        }
        eprintln!("{} {}", Style::new().red().bold().apply_to("✗"), message);
    }

    fn info(&mut self, message: &str) {
        match &self.spinner {
            Some(spinner) => spinner.println(message),
            None => println!("{message}"),
        }
    }

    fn detail(&mut self, message: &str) {
        if self.verbose {
            let line = Style::new().dim().apply_to(message).to_string();
            self.info(&line);
        }
    }
}

/// Reporter that prints nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn start_step(&mut self, _message: &str) {}

    fn finish_step(&mut self, _message: &str) {}

    fn fail_step(&mut self, _message: &str) {}

    fn info(&mut self, _message: &str) {}

    fn detail(&mut self, _message: &str) {}
}

/// Bold label used in key/value listings
pub fn label(text: &str) -> String {
    Style::new().bold().apply_to(text).to_string()
}

/// Highlighted path or name
pub fn highlight(text: &str) -> String {
    Style::new().bold().yellow().apply_to(text).to_string()
}

/// Format a byte count for humans
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;

    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}
