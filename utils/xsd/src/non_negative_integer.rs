use crate::{Error, Result};

pub fn deserialize(value: &serde_json::Value) -> Result<u64> {
	value.as_u64().ok_or(Error::Shape { expected: "xsd:nonNegativeInteger", found: crate::shape(value) })
}

pub fn serialize(n: &u64) -> Result<serde_json::Value> {
	Ok(serde_json::Value::Number(serde_json::Number::from(*n)))
}
