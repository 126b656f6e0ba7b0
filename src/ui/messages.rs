//! User-facing one-line messages. Confirmations and warnings go to stdout,
//! errors to stderr. Colors are only emitted when the stream is a terminal.

use crate::core::controller::Notice;
use ansi_term::Colour::{self, Blue, Green, Red, Yellow};
use std::fmt;
use std::io::{IsTerminal, stderr, stdout};

fn styled(colour: Colour, text: &str, color: bool) -> String {
    if color {
        colour.bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {msg}", styled(Blue, "ℹ️", stdout().is_terminal()));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {msg}", styled(Green, "✅", stdout().is_terminal()));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {msg}", styled(Yellow, "⚠️", stdout().is_terminal()));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {msg}", styled(Red, "❌", stderr().is_terminal()));
}

/// Transient notices are confirmations; blocking ones go to stderr.
pub fn notice(n: &Notice) {
    match n {
        Notice::Transient(msg) => success(msg),
        Notice::Blocking(msg) => error(msg),
    }
}

/// Section title above a table or a report.
pub fn header<T: fmt::Display>(msg: T) {
    let title = format!("── {msg} ──");
    println!("{}\n", styled(Blue, &title, stdout().is_terminal()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escape_codes() {
        assert_eq!(styled(Green, "✅", false), "✅");
    }

    #[test]
    fn terminal_output_is_bold_and_colored() {
        let s = styled(Green, "✅", true);
        assert!(s.starts_with("\x1b[1;32m"));
        assert!(s.ends_with("\x1b[0m"));
    }
}
