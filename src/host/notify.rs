//! Console notifier backed by the `output` helpers.

use crate::output as out;

use super::{Notifier, Severity};

/// Prints notifications to the terminal. In quiet mode only warnings and
/// errors are shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info if self.quiet => {}
            Severity::Info => out::print_success(message),
            Severity::Warning => out::print_warn(message),
            Severity::Error => out::print_error(message),
        }
    }
}
