use serde_json::Value;

// Remote stores disagree on identifier shape: some send "id", some "_id",
// some send numbers, a few send both. Records keep a single string id,
// taken from "id" when it is usable and from "_id" otherwise.
pub fn canonical_id(id: Option<&Value>, alt_id: Option<&Value>) -> Option<String> {
    id.and_then(value_to_id).or_else(|| alt_id.and_then(value_to_id))
}

pub fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
