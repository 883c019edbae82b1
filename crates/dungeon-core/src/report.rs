//! Report lines produced by actions.
//!
//! Actions never print. They hand [`Report`]s to a [`ReportSink`], which
//! the front end renders however it likes. [`Transcript`] records them for
//! tests.

use dungeon_types::Name;

/// How a report line should stand out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// Ordinary narration.
    #[default]
    Normal,
    /// Dreams, learned spells, birthdays.
    Highlight,
    /// The hero's own age and status.
    Info,
}

/// One line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Plain text, without trailing newline.
    pub text: String,
    /// Rendering hint.
    pub emphasis: Emphasis,
}

/// Receives report lines.
pub trait ReportSink {
    /// Accept one line.
    fn write(&mut self, report: Report);

    /// Accept one plain line.
    fn say(&mut self, text: &str) {
        self.write(Report {
            text: text.to_owned(),
            emphasis: Emphasis::Normal,
        });
    }

    /// Accept one line with an emphasis hint.
    fn emphasize(&mut self, text: &str, emphasis: Emphasis) {
        self.write(Report {
            text: text.to_owned(),
            emphasis,
        });
    }
}

/// In-memory sink that keeps every line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    /// Lines in the order they were written.
    pub reports: Vec<Report>,
}

impl Transcript {
    /// An empty transcript.
    pub const fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    /// The text of every line.
    pub fn lines(&self) -> Vec<&str> {
        self.reports.iter().map(|report| report.text.as_str()).collect()
    }

    /// Whether some line is exactly `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.reports.iter().any(|report| report.text == text)
    }

    /// The last line written.
    pub fn last(&self) -> Option<&str> {
        self.reports.last().map(|report| report.text.as_str())
    }
}

impl ReportSink for Transcript {
    fn write(&mut self, report: Report) {
        self.reports.push(report);
    }
}

/// Join words as `"a"`, `"a and b"`, or `"a, b and c"`.
pub fn enumerate<S: AsRef<str>>(words: &[S]) -> String {
    match words {
        [] => String::new(),
        [only] => only.as_ref().to_owned(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Describe a group of named entities by count, in first-seen order.
///
/// Two rats and a cow become `"2 Rats and 1 Cow"`.
pub fn enumerate_names<'a>(names: impl IntoIterator<Item = &'a Name>) -> String {
    let mut counts: Vec<(&Name, u64)> = Vec::new();
    for name in names {
        match counts.iter_mut().find(|(seen, _)| *seen == name) {
            Some((_, count)) => *count = count.saturating_add(1),
            None => counts.push((name, 1)),
        }
    }
    let parts: Vec<String> = counts
        .iter()
        .map(|(name, count)| name.quantified(*count))
        .collect();
    enumerate(&parts)
}
