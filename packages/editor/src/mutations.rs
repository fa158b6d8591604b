//! # Document Mutations
//!
//! The five operations an AI tool call can perform on a plain-text document.
//!
//! ## Design Principles
//!
//! 1. **Pure**: `(mutation, text) → text | error`, nothing is stored between calls
//! 2. **Validated**: Bounds are checked against the text passed in, before any edit
//! 3. **All or nothing**: A failed mutation leaves the caller's text untouched
//!
//! ## Mutation Semantics
//!
//! ### UpdateDocByLine
//! - Replaces the inclusive range `[start_line, end_line]` with one element
//! - `new_content` is inserted raw; embedded newlines become extra lines
//!
//! ### UpdateDocByReplace
//! - Literal substring replacement on the whole text (may span lines)
//! - `first`, `last` or `all` non-overlapping occurrences
//!
//! ### InsertAtLine
//! - New element before or after an existing anchor line
//!
//! ### DeleteLines
//! - Removes the inclusive range; removing every line leaves `""`
//!
//! ### AppendToDocument
//! - Always `text + "\n" + content`, even for an empty document

use scribe_text::{line_count, LineNumber, TextDocument};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Semantic mutations, one per tool the AI model can call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "name", content = "arguments", rename_all = "snake_case")]
pub enum Mutation {
    /// Replace an inclusive range of lines with new content
    UpdateDocByLine {
        start_line: LineNumber,
        end_line: LineNumber,
        new_content: String,
    },

    /// Find and replace a literal string
    UpdateDocByReplace {
        old_string: String,
        new_string: String,
        occurrence: Occurrence,
    },

    /// Insert content before or after an existing line
    InsertAtLine {
        line_number: LineNumber,
        content: String,
        position: InsertPosition,
    },

    /// Remove an inclusive range of lines
    DeleteLines {
        start_line: LineNumber,
        end_line: LineNumber,
    },

    /// Append content after a newline at the end of the document
    AppendToDocument {
        content: String,
    },
}

/// Which matches of a find/replace are affected
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Occurrence {
    First,
    Last,
    All,
}

/// Where inserted content goes relative to its anchor line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    Before,
    After,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Invalid line range: {start}-{end}. Document has {line_count} lines.")]
    InvalidLineRange {
        start: LineNumber,
        end: LineNumber,
        line_count: usize,
    },

    #[error("Invalid line number: {line}. Document has {line_count} lines.")]
    InvalidLineNumber {
        line: LineNumber,
        line_count: usize,
    },

    #[error("Text \"{0}\" not found in document")]
    TextNotFound(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Invalid arguments for {function}: {reason}")]
    InvalidArguments { function: String, reason: String },
}

impl Mutation {
    /// Tool names accepted by [`Mutation::decode`](crate::Mutation::decode)
    pub const FUNCTION_NAMES: [&'static str; 5] = [
        "update_doc_by_line",
        "update_doc_by_replace",
        "insert_at_line",
        "delete_lines",
        "append_to_document",
    ];

    /// Tool name of this mutation
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::UpdateDocByLine { .. } => "update_doc_by_line",
            Mutation::UpdateDocByReplace { .. } => "update_doc_by_replace",
            Mutation::InsertAtLine { .. } => "insert_at_line",
            Mutation::DeleteLines { .. } => "delete_lines",
            Mutation::AppendToDocument { .. } => "append_to_document",
        }
    }

    /// Apply mutation to `text`, returning the new text
    pub fn apply(&self, text: &str) -> Result<String, MutationError> {
        debug!(mutation = self.name(), bytes = text.len(), "Applying mutation");

        let result = match self {
            Mutation::UpdateDocByLine { start_line, end_line, new_content } => {
                Self::apply_update_by_line(text, *start_line, *end_line, new_content)
            }

            Mutation::UpdateDocByReplace { old_string, new_string, occurrence } => {
                Self::apply_replace(text, old_string, new_string, *occurrence)
            }

            Mutation::InsertAtLine { line_number, content, position } => {
                Self::apply_insert(text, *line_number, content, *position)
            }

            Mutation::DeleteLines { start_line, end_line } => {
                Self::apply_delete(text, *start_line, *end_line)
            }

            Mutation::AppendToDocument { content } => Ok(Self::apply_append(text, content)),
        };

        if let Ok(new_text) = &result {
            debug!(
                mutation = self.name(),
                lines_before = line_count(text),
                lines_after = line_count(new_text),
                "Mutation applied"
            );
        }

        result
    }

    /// Validate without applying
    pub fn validate(&self, text: &str) -> Result<(), MutationError> {
        let n = line_count(text);

        match self {
            Mutation::UpdateDocByLine { start_line, end_line, .. }
            | Mutation::DeleteLines { start_line, end_line } => {
                if *start_line < 1 || *start_line > *end_line || Self::exceeds(*end_line, n) {
                    return Err(MutationError::InvalidLineRange {
                        start: *start_line,
                        end: *end_line,
                        line_count: n,
                    });
                }
                Ok(())
            }

            Mutation::InsertAtLine { line_number, .. } => {
                if *line_number < 1 || Self::exceeds(*line_number, n) {
                    return Err(MutationError::InvalidLineNumber {
                        line: *line_number,
                        line_count: n,
                    });
                }
                Ok(())
            }

            Mutation::UpdateDocByReplace { old_string, .. } => {
                if !text.contains(old_string.as_str()) {
                    return Err(MutationError::TextNotFound(old_string.clone()));
                }
                Ok(())
            }

            Mutation::AppendToDocument { .. } => Ok(()),
        }
    }

    fn exceeds(line: LineNumber, line_count: usize) -> bool {
        usize::try_from(line).map_or(false, |line| line > line_count)
    }

    fn apply_update_by_line(
        text: &str,
        start_line: LineNumber,
        end_line: LineNumber,
        new_content: &str,
    ) -> Result<String, MutationError> {
        let mut doc = TextDocument::parse(text);
        let range = Self::checked_range(&doc, start_line, end_line)?;

        doc.replace_range(range, new_content);
        Ok(doc.to_text())
    }

    fn apply_replace(
        text: &str,
        old_string: &str,
        new_string: &str,
        occurrence: Occurrence,
    ) -> Result<String, MutationError> {
        let not_found = || MutationError::TextNotFound(old_string.to_string());

        match occurrence {
            Occurrence::First => {
                let at = text.find(old_string).ok_or_else(not_found)?;
                Ok(Self::splice_text(text, at, old_string.len(), new_string))
            }
            Occurrence::Last => {
                let at = text.rfind(old_string).ok_or_else(not_found)?;
                Ok(Self::splice_text(text, at, old_string.len(), new_string))
            }
            Occurrence::All => {
                if !text.contains(old_string) {
                    return Err(not_found());
                }
                Ok(text.replace(old_string, new_string))
            }
        }
    }

    fn apply_insert(
        text: &str,
        line_number: LineNumber,
        content: &str,
        position: InsertPosition,
    ) -> Result<String, MutationError> {
        let mut doc = TextDocument::parse(text);
        let anchor = doc
            .checked_line(line_number)
            .ok_or(MutationError::InvalidLineNumber {
                line: line_number,
                line_count: doc.line_count(),
            })?;

        let index = match position {
            InsertPosition::Before => anchor - 1,
            InsertPosition::After => anchor,
        };

        doc.insert_at(index, content);
        Ok(doc.to_text())
    }

    fn apply_delete(
        text: &str,
        start_line: LineNumber,
        end_line: LineNumber,
    ) -> Result<String, MutationError> {
        let mut doc = TextDocument::parse(text);
        let range = Self::checked_range(&doc, start_line, end_line)?;

        doc.remove_range(range);
        Ok(doc.to_text())
    }

    fn apply_append(text: &str, content: &str) -> String {
        let mut new_text = String::with_capacity(text.len() + content.len() + 1);
        new_text.push_str(text);
        new_text.push('\n');
        new_text.push_str(content);
        new_text
    }

    fn checked_range(
        doc: &TextDocument,
        start_line: LineNumber,
        end_line: LineNumber,
    ) -> Result<scribe_text::LineRange, MutationError> {
        doc.line_range(start_line, end_line)
            .ok_or(MutationError::InvalidLineRange {
                start: start_line,
                end: end_line,
                line_count: doc.line_count(),
            })
    }

    /// Replace `len` bytes at `at` with `replacement`
    fn splice_text(text: &str, at: usize, len: usize, replacement: &str) -> String {
        let mut new_text = String::with_capacity(text.len() - len + replacement.len());
        new_text.push_str(&text[..at]);
        new_text.push_str(replacement);
        new_text.push_str(&text[at + len..]);
        new_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::InsertAtLine {
            line_number: 3,
            content: "Hello World".to_string(),
            position: InsertPosition::After,
        };

        let json = serde_json::to_value(&mutation).unwrap();
        assert_eq!(json["name"], "insert_at_line");
        assert_eq!(json["arguments"]["position"], "after");

        let deserialized: Mutation = serde_json::from_value(json).unwrap();
        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_names_match_serde_tags() {
        let samples = [
            Mutation::UpdateDocByLine { start_line: 1, end_line: 1, new_content: String::new() },
            Mutation::UpdateDocByReplace {
                old_string: "a".to_string(),
                new_string: "b".to_string(),
                occurrence: Occurrence::All,
            },
            Mutation::InsertAtLine {
                line_number: 1,
                content: String::new(),
                position: InsertPosition::Before,
            },
            Mutation::DeleteLines { start_line: 1, end_line: 1 },
            Mutation::AppendToDocument { content: String::new() },
        ];

        for (mutation, name) in samples.iter().zip(Mutation::FUNCTION_NAMES) {
            assert_eq!(mutation.name(), name);
            assert_eq!(serde_json::to_value(mutation).unwrap()["name"], name);
        }
    }

    #[test]
    fn test_validate_agrees_with_apply() {
        let text = "a\nb\nc";
        let cases = [
            Mutation::UpdateDocByLine { start_line: 0, end_line: 1, new_content: "x".into() },
            Mutation::UpdateDocByLine { start_line: 2, end_line: 3, new_content: "x".into() },
            Mutation::DeleteLines { start_line: 3, end_line: 2 },
            Mutation::DeleteLines { start_line: 1, end_line: 4 },
            Mutation::DeleteLines { start_line: -3, end_line: -1 },
            Mutation::InsertAtLine {
                line_number: 4,
                content: "x".into(),
                position: InsertPosition::Before,
            },
            Mutation::UpdateDocByReplace {
                old_string: "zzz".into(),
                new_string: "y".into(),
                occurrence: Occurrence::First,
            },
            Mutation::AppendToDocument { content: "x".into() },
        ];

        for mutation in &cases {
            assert_eq!(
                mutation.validate(text).is_ok(),
                mutation.apply(text).is_ok(),
                "validate and apply disagree for {:?}",
                mutation
            );
            if let Err(err) = mutation.validate(text) {
                assert_eq!(mutation.apply(text), Err(err));
            }
        }
    }

    #[test]
    fn test_range_error_message() {
        let mutation = Mutation::UpdateDocByLine {
            start_line: 1,
            end_line: 5,
            new_content: "z".to_string(),
        };

        let err = mutation.apply("a\nb").unwrap_err();
        assert_eq!(err.to_string(), "Invalid line range: 1-5. Document has 2 lines.");
    }

    #[test]
    fn test_line_number_error_message() {
        let mutation = Mutation::InsertAtLine {
            line_number: 0,
            content: "z".to_string(),
            position: InsertPosition::Before,
        };

        let err = mutation.apply("a\nb").unwrap_err();
        assert_eq!(err.to_string(), "Invalid line number: 0. Document has 2 lines.");
    }

    #[test]
    fn test_not_found_message() {
        let mutation = Mutation::UpdateDocByReplace {
            old_string: "missing".to_string(),
            new_string: "x".to_string(),
            occurrence: Occurrence::All,
        };

        let err = mutation.apply("text").unwrap_err();
        assert_eq!(err.to_string(), "Text \"missing\" not found in document");
    }

    #[test]
    fn test_replace_last_keeps_surrounding_text() {
        let mutation = Mutation::UpdateDocByReplace {
            old_string: "ab".to_string(),
            new_string: "X".to_string(),
            occurrence: Occurrence::Last,
        };

        assert_eq!(mutation.apply("ab-ab-ab!").unwrap(), "ab-ab-X!");
    }

    #[test]
    fn test_replace_multibyte() {
        let mutation = Mutation::UpdateDocByReplace {
            old_string: "é".to_string(),
            new_string: "e".to_string(),
            occurrence: Occurrence::First,
        };

        assert_eq!(mutation.apply("café é").unwrap(), "cafe é");
    }
}
