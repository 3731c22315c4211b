use crate::props::bag::PropertyBag;
use serde_json::Value;

/// Decode a serialized prop attribute into a [`PropertyBag`].
///
/// Never fails: absent, blank, malformed or non-object input all yield the empty bag, so a broken
/// prop string only costs the component its customizations.
pub fn decode(raw: Option<&str>) -> PropertyBag {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return PropertyBag::default();
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => PropertyBag::from_map(map),
        Ok(other) => {
            tracing::debug!(kind = value_kind(&other), "props are not an object; using defaults");
            PropertyBag::default()
        }
        Err(e) => {
            tracing::debug!(error = %e, "malformed props; using defaults");
            PropertyBag::default()
        }
    }
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
