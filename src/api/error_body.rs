use serde_json::Value;

const DETAIL_KEYS: [&str; 3] = ["error", "message", "detail"];

/// Extract the human-readable error from a failed response body.
///
/// Looks at `error`, `message` and `detail` in that order. FastAPI validation
/// errors put a list under `detail`; the first entry's `msg` is used.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let obj = value.as_object()?;

    DETAIL_KEYS.iter().find_map(|key| match obj.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => items
            .first()
            .and_then(|first| first.get("msg"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    })
}
