use serde_json::Value;

/// Normalizes a heterogeneous `prediction` payload into displayable text.
///
/// The backend sometimes returns a bare string and sometimes an object with
/// a `text` or `content` field. Every input shape lands in an explicit
/// branch; the fallback is the JSON rendering of the value itself.
pub fn prediction_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Object(map) => match map.get("text").or_else(|| map.get("content")) {
            Some(field) => scalar_text(field),
            None => value.to_string(),
        },
        other => other.to_string(),
    }
}

/// Tolerant field access for payloads that are sometimes structured and
/// sometimes a bare string.
///
/// A bare string stands in for the `reading` field only; for any other key
/// it yields the default.
pub fn safe_field(data: &Value, key: &str, default: &str) -> String {
    match data {
        Value::Object(map) => map
            .get(key)
            .map(scalar_text)
            .unwrap_or_else(|| default.to_string()),
        Value::String(text) if key == "reading" => text.clone(),
        _ => default.to_string(),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
