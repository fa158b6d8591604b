use scribe_editor::{tool_definitions, ExportFormat, MutationResult, TextDocument};
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Apply one tool call to `text`
///
/// `args_json` is the tool call's argument object as JSON. The return value is
/// always a JSON result: `{ success, newContent }` or `{ success, error }`.
#[wasm_bindgen(js_name = execute)]
pub fn execute_js(name: &str, args_json: &str, text: &str) -> String {
    // Decoded by the engine, after the function name is checked
    let arguments = Value::String(args_json.to_string());
    to_json(&scribe_editor::execute(name, &arguments, text))
}

/// Tool declarations to register with the model, as JSON
#[wasm_bindgen(js_name = toolDefinitions)]
pub fn tool_definitions_js() -> Result<String, JsValue> {
    serde_json::to_string(&tool_definitions())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Line-numbered snapshot of `text`
#[wasm_bindgen(js_name = numberedSnapshot)]
pub fn numbered_snapshot_js(text: &str) -> String {
    TextDocument::parse(text).numbered()
}

/// Render `text` as txt, md, or html
#[wasm_bindgen(js_name = exportDocument)]
pub fn export_document_js(text: &str, title: &str, format: &str) -> Result<String, JsValue> {
    let format = format
        .parse::<ExportFormat>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(scribe_editor::export(text, title, format))
}

fn to_json(result: &MutationResult) -> String {
    // Serializing a struct of bools and strings cannot fail
    serde_json::to_string(result).unwrap_or_else(|e| {
        format!(
            "{{\"success\":false,\"error\":{}}}",
            Value::String(e.to_string())
        )
    })
}
