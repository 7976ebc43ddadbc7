//! UI/Progress presentation layer
//!
//! This module handles:
//! - Styled status messages (info, success, warnings, debug)
//! - Spinners around long-running git operations
//! - Silent reporting for tests
//!
//! All user-facing output from the installer goes through the [`Reporter`]
//! trait, so the core logic never prints directly.

use std::cell::RefCell;
use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Reporter for status output of long-running operations
pub trait Reporter {
    /// Report a normal status line
    fn info(&self, message: &str);

    /// Report a successful outcome
    fn success(&self, message: &str);

    /// Report a recoverable problem
    fn warn(&self, message: &str);

    /// Report detail only shown in verbose mode
    fn debug(&self, message: &str);

    /// Start an activity indicator; finished by `finish_activity`
    fn start_activity(&self, message: &str);

    /// Stop the current activity indicator
    fn finish_activity(&self);
}

/// Console reporter with colored output and spinners
pub struct ConsoleReporter {
    verbose: bool,
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleReporter {
    /// Create a console reporter
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            spinner: RefCell::new(None),
        }
    }

    fn suspend<F: FnOnce()>(&self, f: F) {
        match self.spinner.borrow().as_ref() {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        self.suspend(|| println!("{message}"));
    }

    fn success(&self, message: &str) {
        self.suspend(|| {
            println!(
                "{} {message}",
                Style::new().green().bold().apply_to("✔")
            );
        });
    }

    fn warn(&self, message: &str) {
        self.suspend(|| {
            eprintln!(
                "{} {message}",
                Style::new().yellow().bold().apply_to("Warning:")
            );
        });
    }

    fn debug(&self, message: &str) {
        if self.verbose {
            self.suspend(|| eprintln!("{}", Style::new().dim().apply_to(message)));
        }
    }

    fn start_activity(&self, message: &str) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
        {
            pb.set_style(
                style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
            );
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Some(previous) = self.spinner.replace(Some(pb)) {
            previous.finish_and_clear();
        }
    }

    fn finish_activity(&self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

/// Silent reporter for tests
///
/// No-op implementation that does not display anything.
#[cfg(test)]
#[derive(Default)]
pub struct SilentReporter;

#[cfg(test)]
impl Reporter for SilentReporter {
    fn info(&self, _message: &str) {}

    fn success(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}

    fn start_activity(&self, _message: &str) {}

    fn finish_activity(&self) {}
}
