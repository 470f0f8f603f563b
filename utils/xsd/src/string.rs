use crate::Result;

pub fn deserialize(value: &serde_json::Value) -> Result<String> {
	Ok(crate::expect_str(value, "xsd:string")?.to_string())
}

pub fn serialize(s: &str) -> Result<serde_json::Value> {
	Ok(serde_json::Value::String(s.to_string()))
}
