#![forbid(unsafe_code)]

use ld_core::gate::Confirmer;
use std::io::{BufRead, Write};

/// `[y/N]` prompt on the terminal. Anything but an explicit yes declines.
pub(crate) struct StdinConfirmer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdinConfirmer<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirmer for StdinConfirmer<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        if write!(self.output, "{message} [y/N] ").is_err() || self.output.flush().is_err() {
            return false;
        }
        read_line(&mut self.input).is_some_and(|answer| is_yes(&answer))
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// One trimmed line, `None` at end of input.
pub(crate) fn read_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
