use crate::Result;

/// media types are kept verbatim, "text/html" and "text/html; charset=utf-8" are both fine
pub fn deserialize(value: &serde_json::Value) -> Result<String> {
	Ok(crate::expect_str(value, "mime media type string")?.to_string())
}

pub fn serialize(media_type: &str) -> Result<serde_json::Value> {
	Ok(serde_json::Value::String(media_type.to_string()))
}
