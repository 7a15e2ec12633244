//! Turns whatever the inference endpoint sent back into display text.

use serde_json::Value;

use crate::constants::prompts::GENERATION_FALLBACK;

/// Returns the display text carried by `response`, or `None` when its shape
/// is not one we know.
///
/// Accepted shapes, in order: a bare string (passed through untouched), an
/// object with a `generated_text` string, a chat completion
/// (`choices[0].message.content`), and an array whose first element is one
/// of the above.
pub fn extract_text(response: &Value) -> Option<String> {
    match response {
        Value::String(text) => Some(text.clone()),
        Value::Object(object) => {
            if let Some(text) = object.get("generated_text").and_then(Value::as_str) {
                return Some(text.trim().to_string());
            }

            response
                .pointer("/choices/0/message/content")
                .and_then(Value::as_str)
                .map(|content| content.trim().to_string())
        }
        Value::Array(items) => items.first().and_then(extract_text),
        _ => None,
    }
}

/// Like [`extract_text`], substituting the fixed fallback message for an
/// unrecognised shape. Never fails.
pub fn unwrap_response(response: &Value) -> String {
    extract_text(response).unwrap_or_else(|| {
        log::warn!("Unrecognised inference response shape: {}", response);
        GENERATION_FALLBACK.to_string()
    })
}
