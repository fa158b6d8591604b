//! # Document Handle
//!
//! Owns the text of a single document and its editing state.
//!
//! Documents can be:
//! - **Memory-backed**: Temporary, for tests or text held by another store
//! - **File-backed**: Loaded from and saved to disk
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Snapshot → Mutate → Save
//!   ↓       ↓          ↓       ↓
//! File  numbered    text    File
//! ```
//!
//! Remote updates overwrite the text wholesale through
//! [`Document::replace_text`]; the last write wins.

use crate::{EditorError, Mutation, MutationResult};
use scribe_text::TextDocument;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, info};

/// Editable plain-text document
#[derive(Debug)]
pub struct Document {
    /// Path to source file (or a logical name for memory documents)
    pub path: PathBuf,

    /// Current version number (increments on each change)
    pub version: u64,

    /// Backing storage strategy
    storage: DocumentStorage,
}

/// Storage backend for document
#[derive(Debug)]
pub enum DocumentStorage {
    /// In-memory only
    Memory { text: String },

    /// File-backed
    File { text: String, dirty: bool },
}

/// Summary of a successfully applied mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMutation {
    /// Document version after the mutation
    pub version: u64,

    /// Line count after the mutation
    pub line_count: usize,
}

impl Document {
    /// Create a memory-backed document
    pub fn from_text(path: PathBuf, text: impl Into<String>) -> Self {
        Self {
            path,
            version: 0,
            storage: DocumentStorage::Memory { text: text.into() },
        }
    }

    /// Load a document from file (file-backed)
    pub fn load(path: PathBuf) -> Result<Self, EditorError> {
        let text = std::fs::read_to_string(&path)?;
        info!(path = %path.display(), bytes = text.len(), "Loaded document");

        Ok(Self {
            path,
            version: 0,
            storage: DocumentStorage::File { text, dirty: false },
        })
    }

    /// Current text
    pub fn text(&self) -> &str {
        match &self.storage {
            DocumentStorage::Memory { text } | DocumentStorage::File { text, .. } => text,
        }
    }

    /// Line view of the current text
    pub fn lines(&self) -> TextDocument {
        TextDocument::parse(self.text())
    }

    /// Line-numbered snapshot of the current text
    pub fn numbered(&self) -> String {
        self.lines().numbered()
    }

    /// Apply a mutation
    ///
    /// On failure the text and version are left exactly as they were.
    pub fn apply(&mut self, mutation: &Mutation) -> Result<AppliedMutation, EditorError> {
        let new_text = mutation.apply(self.text())?;
        self.set_text(new_text);

        debug!(
            path = %self.path.display(),
            mutation = mutation.name(),
            version = self.version,
            "Document updated"
        );

        Ok(AppliedMutation {
            version: self.version,
            line_count: scribe_text::line_count(self.text()),
        })
    }

    /// Decode and apply a raw tool call, reporting in the outbound shape
    pub fn execute(&mut self, name: &str, arguments: &Value) -> MutationResult {
        let result = crate::execute(name, arguments, self.text());

        if let MutationResult::Success { new_content } = &result {
            self.set_text(new_content.clone());
        }

        result
    }

    /// Overwrite the text wholesale (remote update or restore)
    pub fn replace_text(&mut self, text: impl Into<String>) {
        self.set_text(text.into());
    }

    /// Check if document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        match &self.storage {
            DocumentStorage::File { dirty, .. } => *dirty,
            DocumentStorage::Memory { .. } => false,
        }
    }

    /// Save document to disk (if file-backed)
    pub fn save(&mut self) -> Result<(), EditorError> {
        match &mut self.storage {
            DocumentStorage::File { text, dirty } => {
                std::fs::write(&self.path, text.as_bytes())?;
                *dirty = false;
                info!(path = %self.path.display(), version = self.version, "Saved document");
                Ok(())
            }
            DocumentStorage::Memory { .. } => Err(EditorError::NotFileBacked),
        }
    }

    fn set_text(&mut self, new_text: String) {
        self.version += 1;

        match &mut self.storage {
            DocumentStorage::Memory { text } => *text = new_text,
            DocumentStorage::File { text, dirty } => {
                *text = new_text;
                *dirty = true;
            }
        }
    }
}
