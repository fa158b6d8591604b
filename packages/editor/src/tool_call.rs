//! # Tool Call Boundary
//!
//! Decodes an untyped `(name, arguments)` tool call from the AI layer into a
//! [`Mutation`], runs it, and reports the outcome in the shape the caller
//! persists and displays:
//!
//! ```text
//! { "success": true,  "newContent": "..." }
//! { "success": false, "error": "..." }
//! ```
//!
//! [`execute`] is total: every input, however malformed, produces exactly one
//! [`MutationResult`].

use crate::mutations::{Mutation, MutationError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{instrument, warn};

/// A function call emitted by the AI model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCall {
    pub name: String,

    /// Argument object, or a JSON string encoding one
    #[serde(default, alias = "args")]
    pub arguments: Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Decode into a typed mutation
    pub fn decode(&self) -> Result<Mutation, MutationError> {
        Mutation::decode(&self.name, &self.arguments)
    }

    /// Decode and apply to `current_text`
    pub fn execute(&self, current_text: &str) -> MutationResult {
        execute(&self.name, &self.arguments, current_text)
    }
}

/// Outcome reported back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireResult", try_from = "WireResult")]
pub enum MutationResult {
    Success { new_content: String },
    Failure { error: String },
}

impl MutationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, MutationResult::Success { .. })
    }

    pub fn new_content(&self) -> Option<&str> {
        match self {
            MutationResult::Success { new_content } => Some(new_content),
            MutationResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MutationResult::Success { .. } => None,
            MutationResult::Failure { error } => Some(error),
        }
    }

    /// Convert into a `Result`, with the failure message as the error
    pub fn into_result(self) -> Result<String, String> {
        match self {
            MutationResult::Success { new_content } => Ok(new_content),
            MutationResult::Failure { error } => Err(error),
        }
    }
}

impl From<Result<String, MutationError>> for MutationResult {
    fn from(result: Result<String, MutationError>) -> Self {
        match result {
            Ok(new_content) => MutationResult::Success { new_content },
            Err(err) => MutationResult::Failure {
                error: err.to_string(),
            },
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResult {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    new_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<MutationResult> for WireResult {
    fn from(result: MutationResult) -> Self {
        match result {
            MutationResult::Success { new_content } => WireResult {
                success: true,
                new_content: Some(new_content),
                error: None,
            },
            MutationResult::Failure { error } => WireResult {
                success: false,
                new_content: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<WireResult> for MutationResult {
    type Error = String;

    fn try_from(wire: WireResult) -> Result<Self, Self::Error> {
        match (wire.success, wire.new_content, wire.error) {
            (true, Some(new_content), _) => Ok(MutationResult::Success { new_content }),
            (true, None, _) => Err("successful result is missing newContent".to_string()),
            (false, _, Some(error)) => Ok(MutationResult::Failure { error }),
            (false, _, None) => Err("failed result is missing error".to_string()),
        }
    }
}

impl Mutation {
    /// Decode a tool call's name and argument bag
    ///
    /// The name is checked first so that an unknown function is reported as
    /// such rather than as malformed arguments. `arguments` may be an object
    /// or a string holding serialized JSON.
    pub fn decode(name: &str, arguments: &Value) -> Result<Mutation, MutationError> {
        if !Mutation::FUNCTION_NAMES.contains(&name) {
            return Err(MutationError::UnknownFunction(name.to_string()));
        }

        let invalid = |reason: String| MutationError::InvalidArguments {
            function: name.to_string(),
            reason,
        };

        let arguments = match arguments {
            Value::String(raw) => serde_json::from_str(raw).map_err(|e| invalid(e.to_string()))?,
            Value::Null => json!({}),
            other => other.clone(),
        };

        if !arguments.is_object() {
            return Err(invalid("arguments must be a JSON object".to_string()));
        }

        serde_json::from_value(json!({ "name": name, "arguments": arguments }))
            .map_err(|e| invalid(e.to_string()))
    }
}

/// Decode and apply one tool call to `current_text`
#[instrument(skip(arguments, current_text), fields(bytes = current_text.len()))]
pub fn execute(name: &str, arguments: &Value, current_text: &str) -> MutationResult {
    let result = Mutation::decode(name, arguments).and_then(|mutation| mutation.apply(current_text));

    if let Err(err) = &result {
        warn!(function = name, error = %err, "Tool call rejected");
    }

    result.into()
}
