//! Function declarations registered with the AI model.
//!
//! Each declaration mirrors one [`Mutation`](crate::Mutation) variant: the
//! same name, the same required fields, and the same literal sets for the
//! enum-valued fields, so anything the model is told it may send is
//! something [`execute`](crate::execute) accepts.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A single function the model may call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,

    /// JSON Schema for the argument object
    pub parameters: Value,
}

impl ToolDefinition {
    fn new(name: &str, description: &str, properties: Value, required: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters: json!({
                "type": "object",
                "properties": properties,
                "required": required,
            }),
        }
    }

    /// Names of the required argument fields
    pub fn required_fields(&self) -> Vec<&str> {
        self.parameters["required"]
            .as_array()
            .map(|fields| fields.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Declarations for every supported document operation
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "update_doc_by_line",
            "Replace an inclusive range of lines with new content. Line numbers are 1-based.",
            json!({
                "start_line": { "type": "integer", "description": "First line to replace (1-based)" },
                "end_line": { "type": "integer", "description": "Last line to replace (inclusive)" },
                "new_content": { "type": "string", "description": "Replacement text; may contain newlines" },
            }),
            &["start_line", "end_line", "new_content"],
        ),
        ToolDefinition::new(
            "update_doc_by_replace",
            "Find a literal string in the document and replace it.",
            json!({
                "old_string": { "type": "string", "description": "Exact text to find" },
                "new_string": { "type": "string", "description": "Text to put in its place" },
                "occurrence": {
                    "type": "string",
                    "enum": ["first", "last", "all"],
                    "description": "Which matches to replace",
                },
            }),
            &["old_string", "new_string", "occurrence"],
        ),
        ToolDefinition::new(
            "insert_at_line",
            "Insert new content before or after an existing line.",
            json!({
                "line_number": { "type": "integer", "description": "Anchor line (1-based)" },
                "content": { "type": "string", "description": "Text to insert; may contain newlines" },
                "position": {
                    "type": "string",
                    "enum": ["before", "after"],
                    "description": "Insert before or after the anchor line",
                },
            }),
            &["line_number", "content", "position"],
        ),
        ToolDefinition::new(
            "delete_lines",
            "Delete an inclusive range of lines.",
            json!({
                "start_line": { "type": "integer", "description": "First line to delete (1-based)" },
                "end_line": { "type": "integer", "description": "Last line to delete (inclusive)" },
            }),
            &["start_line", "end_line"],
        ),
        ToolDefinition::new(
            "append_to_document",
            "Append content to the end of the document on a new line.",
            json!({
                "content": { "type": "string", "description": "Text to append" },
            }),
            &["content"],
        ),
    ]
}
