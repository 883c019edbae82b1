//! Report rendering for the terminal.

use std::io::{self, Write};

use dungeon_core::{Emphasis, Report, ReportSink};
use tracing::warn;

/// ANSI bold on.
const BOLD: &str = "\x1b[1m";
/// ANSI dim on.
const DIM: &str = "\x1b[2m";
/// ANSI reset.
const RESET: &str = "\x1b[0m";

/// Writes report lines to a terminal, styled by emphasis.
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    /// Destination, usually stdout.
    out: W,
    /// Whether to emit ANSI styling.
    styled: bool,
}

impl<W: Write> TerminalSink<W> {
    /// A styled sink over `out`.
    pub const fn new(out: W) -> Self {
        Self { out, styled: true }
    }

    /// A sink that writes plain text only.
    #[cfg(test)]
    pub const fn plain(out: W) -> Self {
        Self { out, styled: false }
    }

    /// Show the input prompt.
    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    /// Tell the player a word is not a command.
    pub fn unknown(&mut self, word: &str) {
        self.say(&format!("I don't know how to \"{word}\"."));
    }

    /// Flush pending output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Consume the sink, returning the writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TerminalSink<W> {
    fn write(&mut self, report: Report) {
        let result = match (self.styled, report.emphasis) {
            (true, Emphasis::Highlight) => writeln!(self.out, "{BOLD}{}{RESET}", report.text),
            (true, Emphasis::Info) => writeln!(self.out, "{DIM}{}{RESET}", report.text),
            _ => writeln!(self.out, "{}", report.text),
        };
        if let Err(error) = result {
            warn!(%error, "failed to write report line");
        }
    }
}
