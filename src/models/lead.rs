use serde_json::Value;

/// A lead or status-update body forwarded to the CRM as-is.
///
/// Only presence is checked: `null`, `false`, `0`, `""`, `[]` and `{}` count as no payload.
pub fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
