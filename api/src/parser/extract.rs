use serde_json::{Map, Value};

const JSON_CODE_BLOCK: &str = "```json";
const CODE_BLOCK: &str = "```";

/// Extracts a JSON object from a model reply.
///
/// Handles a ```` ```json ```` fenced block, a generic fenced block, or bare JSON.
/// Returns an empty map when the input is empty or does not decode to an object.
pub fn extract_json(response_text: &str) -> Map<String, Value> {
    if response_text.is_empty() {
        return Map::new();
    }

    let candidate = fenced_payload(response_text).trim();

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            tracing::error!(
                "JSON decode error: expected an object, got {} | Text: {}",
                json_kind(&other),
                candidate
            );
            Map::new()
        }
        Err(e) => {
            tracing::error!("JSON decode error: {} | Text: {}", e, candidate);
            Map::new()
        }
    }
}

fn fenced_payload(text: &str) -> &str {
    if let Some(pos) = text.find(JSON_CODE_BLOCK) {
        let start = pos + JSON_CODE_BLOCK.len();
        let rest = &text[start..];
        match rest.find(CODE_BLOCK) {
            Some(end) => &rest[..end],
            None => rest,
        }
    } else if let Some(pos) = text.find(CODE_BLOCK) {
        let start = pos + CODE_BLOCK.len();
        // A lone opening fence yields an empty payload
        let end = text.rfind(CODE_BLOCK).unwrap_or(pos).max(start);
        &text[start..end]
    } else {
        text
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
