use serde::Serialize;

/// Format any query result as pretty JSON.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}
