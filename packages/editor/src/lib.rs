//! # Scribe Editor
//!
//! Mutation engine for plain-text documents edited through AI tool calls.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ AI model: emits tool calls (name + args)    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: decode → validate → mutate          │
//! │  - Decode untyped args into a Mutation      │
//! │  - Check line bounds against current text   │
//! │  - Return new text or a readable failure    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ caller: persist newContent, re-display      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Pure engine**: `(mutation, text) → text | error`, no hidden state
//! 2. **Total boundary**: every tool call yields exactly one result, never a panic
//! 3. **Errors as data**: failures carry enough detail for the model to retry
//! 4. **Lossless lines**: split on `\n`, join with `\n`, nothing normalized
//!
//! ## Usage
//!
//! ### Raw tool call
//!
//! ```rust
//! use scribe_editor::execute;
//! use serde_json::json;
//!
//! let result = execute(
//!     "update_doc_by_line",
//!     &json!({ "start_line": 2, "end_line": 2, "new_content": "REPLACED" }),
//!     "line1\nline2\nline3",
//! );
//! assert_eq!(result.new_content(), Some("line1\nREPLACED\nline3"));
//! ```
//!
//! ### Document with history
//!
//! ```rust,ignore
//! use scribe_editor::{Document, Mutation, UndoStack};
//!
//! let mut doc = Document::load("notes.txt".into())?;
//! let mut history = UndoStack::new();
//!
//! history.apply(&Mutation::AppendToDocument { content: "more".into() }, &mut doc)?;
//! history.undo(&mut doc)?;
//! doc.save()?;
//! ```

mod document;
mod errors;
mod export;
mod mutations;
mod tool_call;
mod tools;
mod undo_stack;

pub use document::{AppliedMutation, Document, DocumentStorage};
pub use errors::EditorError;
pub use export::{export, ExportFormat};
pub use mutations::{InsertPosition, Mutation, MutationError, Occurrence};
pub use tool_call::{execute, MutationResult, ToolCall};
pub use tools::{tool_definitions, ToolDefinition};
pub use undo_stack::{MutationBatch, UndoStack};

// Re-export the line model for convenience
pub use scribe_text::{LineNumber, TextDocument};
