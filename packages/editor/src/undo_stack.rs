//! # Undo/Redo Stack
//!
//! Tracks mutation history and enables undo/redo operations.
//!
//! ## Design
//!
//! - Each entry records the text before and after its mutations
//! - Undo restores the "before" text and moves the entry to the redo stack
//! - Redo restores the "after" text
//! - New mutations clear the redo stack
//! - Failed mutations are not recorded
//! - Supports batched operations (group multiple mutations as one undo step)
//!
//! Restoring is refused if the document no longer holds the text the entry
//! expects, e.g. after a remote overwrite replaced it.
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! let mut doc = Document::from_text(path, "hello");
//!
//! stack.apply(&Mutation::AppendToDocument { content: "world".into() }, &mut doc)?;
//! stack.undo(&mut doc)?;
//! stack.redo(&mut doc)?;
//! ```

use crate::{Document, EditorError, Mutation};
use tracing::debug;

/// A group of mutations that should be undone/redone together
#[derive(Debug, Clone)]
pub struct MutationBatch {
    /// The mutations in this batch (in application order)
    pub mutations: Vec<Mutation>,

    /// Text before the first mutation
    pub before: String,

    /// Text after the last mutation
    pub after: String,

    /// Optional description of this batch
    pub description: Option<String>,
}

impl MutationBatch {
    /// Create a single-mutation batch
    pub fn single(mutation: Mutation, before: String, after: String) -> Self {
        Self {
            mutations: vec![mutation],
            before,
            after,
            description: None,
        }
    }

    /// Add a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Undo/redo stack for document editing
#[derive(Debug)]
pub struct UndoStack {
    /// Stack of applied batches (most recent last)
    undo_stack: Vec<MutationBatch>,

    /// Stack of undone batches (most recent last)
    redo_stack: Vec<MutationBatch>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    batching: bool,
    current_batch: Option<MutationBatch>,
    batch_description: Option<String>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            batching: false,
            current_batch: None,
            batch_description: None,
        }
    }

    /// Apply a mutation and record it for undo
    pub fn apply(&mut self, mutation: &Mutation, doc: &mut Document) -> Result<(), EditorError> {
        let before = doc.text().to_string();
        doc.apply(mutation)?;
        let after = doc.text().to_string();

        if self.batching {
            match &mut self.current_batch {
                Some(batch) => {
                    batch.mutations.push(mutation.clone());
                    batch.after = after;
                }
                None => {
                    self.current_batch = Some(MutationBatch::single(mutation.clone(), before, after));
                }
            }
        } else {
            self.push_batch(MutationBatch::single(mutation.clone(), before, after));
        }

        Ok(())
    }

    /// Start a batch of mutations (will be undone/redone together)
    pub fn begin_batch(&mut self) {
        self.batching = true;
        self.current_batch = None;
        self.batch_description = None;
    }

    /// End the current batch and push to undo stack
    pub fn end_batch(&mut self) {
        self.batching = false;
        let description = self.batch_description.take();

        if let Some(batch) = self.current_batch.take() {
            let batch = match description {
                Some(description) => batch.with_description(description),
                None => batch,
            };
            self.push_batch(batch);
        }
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if self.batching {
            self.batch_description = Some(description.into());
        }
    }

    /// Push a batch to the undo stack
    fn push_batch(&mut self, batch: MutationBatch) {
        debug!(mutations = batch.mutations.len(), "Recording undo step");
        self.undo_stack.push(batch);

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // New action invalidates future
        self.redo_stack.clear();
    }

    /// Undo the most recent mutation/batch
    pub fn undo(&mut self, doc: &mut Document) -> Result<bool, EditorError> {
        let Some(batch) = self.undo_stack.last() else {
            return Ok(false);
        };

        if doc.text() != batch.after {
            return Err(EditorError::HistoryDiverged);
        }

        if let Some(batch) = self.undo_stack.pop() {
            doc.replace_text(batch.before.clone());
            self.redo_stack.push(batch);
        }

        Ok(true)
    }

    /// Redo the most recently undone mutation/batch
    pub fn redo(&mut self, doc: &mut Document) -> Result<bool, EditorError> {
        let Some(batch) = self.redo_stack.last() else {
            return Ok(false);
        };

        if doc.text() != batch.before {
            return Err(EditorError::HistoryDiverged);
        }

        if let Some(batch) = self.redo_stack.pop() {
            doc.replace_text(batch.after.clone());
            self.undo_stack.push(batch);
        }

        Ok(true)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.batching = false;
        self.current_batch = None;
        self.batch_description = None;
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
