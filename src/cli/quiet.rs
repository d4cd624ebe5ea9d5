//! Quiet mode and terminal detection for the clipboard fallback.

use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::tty::IsTty;

/// Set once from `--quiet`. Hides confirmations and warnings, never errors or the password.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether someone can answer a question on stdin.
pub fn can_ask() -> bool {
    !enabled() && std::io::stdin().is_tty()
}
