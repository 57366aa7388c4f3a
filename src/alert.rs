//! Terminal alert surface.

use searchit_client::Notifier;

/// Writes alerts to stderr so they stay out of the results output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("!! {message}");
    }
}
