//! # Text Document
//!
//! In-memory view of a document as an ordered sequence of lines.
//!
//! Lines are addressed by 1-based line number. Every mutation works on this
//! view and converts back with [`TextDocument::to_text`], which is guaranteed
//! to reproduce the original text when nothing was changed.
//!
//! ```text
//! "alpha\nbeta\n"  →  [ "alpha", "beta", "" ]
//!                        line 1   line 2  line 3
//! ```

use crate::line::{from_lines, to_lines, LineNumber};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// A plain-text document split into lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TextDocument {
    lines: Vec<String>,
}

/// A validated, inclusive span of 1-based line numbers
///
/// Only obtainable from [`TextDocument::line_range`], so `1 <= start <= end <= n`
/// held for the document that produced it. Applied to a different or since
/// shortened document, the range is clamped to that document's lines rather
/// than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    /// First line (1-based, inclusive)
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last line (1-based, inclusive)
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of lines covered
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false; a range covers at least one line
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Equivalent 0-based, half-open index range
    pub fn indices(&self) -> Range<usize> {
        (self.start - 1)..self.end
    }
}

impl TextDocument {
    /// Split `text` into lines
    pub fn parse(text: &str) -> Self {
        Self {
            lines: to_lines(text).into_iter().map(str::to_string).collect(),
        }
    }

    /// Build a document directly from lines
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Rejoin the lines into text
    pub fn to_text(&self) -> String {
        from_lines(&self.lines)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines (the element count, never zero for parsed text)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Content of a 1-based line, if it exists
    pub fn line(&self, number: LineNumber) -> Option<&str> {
        let index = self.checked_line(number)? - 1;
        self.lines.get(index).map(String::as_str)
    }

    /// Validate a 1-based line number against the current line count
    pub fn checked_line(&self, number: LineNumber) -> Option<usize> {
        let number = usize::try_from(number).ok()?;
        (1..=self.lines.len()).contains(&number).then_some(number)
    }

    /// Validate an inclusive 1-based range against the current line count
    pub fn line_range(&self, start: LineNumber, end: LineNumber) -> Option<LineRange> {
        if start > end {
            return None;
        }

        let start = self.checked_line(start)?;
        let end = self.checked_line(end)?;
        Some(LineRange { start, end })
    }

    /// Replace the lines in `range` with a single element holding `content`
    ///
    /// `content` is not split; if it embeds `\n` it becomes several physical
    /// lines once the document is turned back into text.
    ///
    /// A stale `range` is clamped to the current lines: the part past the end
    /// is ignored, and a range starting past the end appends `content`.
    pub fn replace_range(&mut self, range: LineRange, content: impl Into<String>) {
        let indices = self.clamp(range);
        self.lines.splice(indices, std::iter::once(content.into()));
    }

    /// Remove the lines in `range` entirely
    ///
    /// A stale `range` is clamped to the current lines, so only lines that
    /// still exist are removed and returned.
    pub fn remove_range(&mut self, range: LineRange) -> Vec<String> {
        let indices = self.clamp(range);
        self.lines.drain(indices).collect()
    }

    /// Insert `content` as a new element at a 0-based index
    ///
    /// An index past the end appends.
    pub fn insert_at(&mut self, index: usize, content: impl Into<String>) {
        let index = index.min(self.lines.len());
        self.lines.insert(index, content.into());
    }

    /// Snapshot with 1-based line numbers, one `"{n}: {line}"` per line
    pub fn numbered(&self) -> String {
        let numbered: Vec<String> = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}: {}", i + 1, line))
            .collect();
        from_lines(&numbered)
    }

    fn clamp(&self, range: LineRange) -> Range<usize> {
        let indices = range.indices();
        let end = indices.end.min(self.lines.len());
        indices.start.min(end)..end
    }
}

impl fmt::Display for TextDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for TextDocument {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<TextDocument> for String {
    fn from(doc: TextDocument) -> Self {
        doc.to_text()
    }
}
