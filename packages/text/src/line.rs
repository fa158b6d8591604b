//! Line splitting and joining rules shared by every document operation.
//!
//! A text maps to its lines by splitting on `\n` and back by joining with
//! `\n`. Nothing is trimmed or normalized, so the two functions are exact
//! inverses: a trailing `\n` yields a trailing empty line, and the empty
//! string is a single empty line.

/// Separator between physical lines
pub const LINE_SEPARATOR: char = '\n';

/// A line number as supplied by a caller: 1-based, possibly out of range.
///
/// Signed so that zero and negative requests can be reported back to the
/// caller as range errors instead of being rejected as malformed input.
pub type LineNumber = i64;

/// Split text into its lines
pub fn to_lines(text: &str) -> Vec<&str> {
    text.split(LINE_SEPARATOR).collect()
}

/// Join lines back into text
pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let capacity = lines.iter().map(|l| l.as_ref().len() + 1).sum::<usize>();
    let mut text = String::with_capacity(capacity);

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            text.push(LINE_SEPARATOR);
        }
        text.push_str(line.as_ref());
    }

    text
}

/// Number of lines in `text` without allocating the split
pub fn line_count(text: &str) -> usize {
    text.matches(LINE_SEPARATOR).count() + 1
}
