use crate::{Error, Result};

pub const VALUE: &str = "@value";
pub const LANGUAGE: &str = "@language";

/// a json-ld value object carrying a language tag: `{"@value": "ciao", "@language": "it"}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangString {
	pub value: String,
	pub language: String,
}

impl LangString {
	pub fn new(value: impl ToString, language: impl ToString) -> Self {
		LangString { value: value.to_string(), language: language.to_string() }
	}
}

pub fn deserialize(value: &serde_json::Value) -> Result<LangString> {
	let Some(map) = value.as_object() else {
		return Err(Error::Shape { expected: "rdf:langString value object", found: crate::shape(value) });
	};
	// anything else in there would be lost on the way back
	if map.len() != 2 {
		return Err(Error::Shape { expected: "rdf:langString value object", found: "object" });
	}
	match (map.get(VALUE).and_then(|x| x.as_str()), map.get(LANGUAGE).and_then(|x| x.as_str())) {
		(Some(value), Some(language)) => Ok(LangString::new(value, language)),
		_ => Err(Error::Shape { expected: "rdf:langString value object", found: "object" }),
	}
}

pub fn serialize(s: &LangString) -> Result<serde_json::Value> {
	let mut map = serde_json::Map::new();
	map.insert(VALUE.to_string(), serde_json::Value::String(s.value.clone()));
	map.insert(LANGUAGE.to_string(), serde_json::Value::String(s.language.clone()));
	Ok(serde_json::Value::Object(map))
}
