//! Centralized warning and prompt messages for CLI output.

use std::io::{BufRead, Write};

use crossterm::style::{Stylize, style};
use crossterm::tty::IsTty;

use super::quiet;

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if quiet::enabled() {
        return;
    }
    if std::io::stderr().is_tty() {
        eprintln!("{}", style(msg).yellow());
    } else {
        eprintln!("{msg}");
    }
}

/// Print a failed run to stdout. Never suppressed.
pub fn failure(err: &super::Error) {
    println!("[{}]: {}", err.family(), err);
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("Password was copied to clipboard...");
    }
}

/// Decide whether to print to the terminal when the clipboard can't be opened.
///
/// Interactive runs are asked once, with the reason in the question. Otherwise
/// the password falls back to the terminal, with a warning unless quiet.
pub fn clipboard_fallback(reason: &str) -> bool {
    if !quiet::can_ask() {
        warn(&format!("Clipboard unavailable ({reason}), printing to terminal."));
        return true;
    }
    let stdin = std::io::stdin();
    clipboard_fallback_answer(reason, &mut stdin.lock(), &mut std::io::stderr())
}

fn clipboard_fallback_answer<R: BufRead, W: Write>(reason: &str, input: &mut R, out: &mut W) -> bool {
    let _ = write!(out, "Clipboard unavailable ({reason}). Print to terminal instead? [Y/n]: ");
    let _ = out.flush();

    let mut line = String::new();
    if input.read_line(&mut line).is_err() {
        return true;
    }
    let answer = line.trim().to_lowercase();
    if answer.is_empty() || answer == "y" || answer == "yes" {
        let _ = writeln!(out);
        return true;
    }

    let _ = writeln!(out, "\nAborted.");
    false
}
