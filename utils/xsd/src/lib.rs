//! Primitive codecs for the value spaces used by ActivityStreams properties.
//!
//! Every module exposes a `deserialize` / `serialize` pair converting between a raw
//! [serde_json::Value] and a typed rust value. Failures are never fatal on their own:
//! callers treat them as "this alternative doesn't match" and move on.

pub mod any_uri;
pub mod date_time;
pub mod duration;
pub mod float;
pub mod lang_string;
pub mod mime;
pub mod non_negative_integer;
pub mod string;
pub mod unknown;

pub use any_uri::AnyUri;
pub use lang_string::LangString;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("expected {expected}, found {found}")]
	Shape {
		expected: &'static str,
		found: &'static str,
	},

	#[error("'{0}' cannot be interpreted as xsd:anyURI: {1}")]
	Uri(String, url::ParseError),

	#[error("'{0}' is not a valid relative reference")]
	Reference(String),

	#[error("'{0}' cannot be interpreted as xsd:dateTime")]
	DateTime(String),

	#[error("'{0}' cannot be interpreted as xsd:duration")]
	Duration(String),

	#[error("{0} cannot be represented as a json number")]
	NonFinite(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

/// short name of a json value shape, used in error messages
pub fn shape(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "boolean",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}

pub(crate) fn expect_str<'a>(value: &'a serde_json::Value, expected: &'static str) -> Result<&'a str> {
	value.as_str().ok_or(Error::Shape { expected, found: shape(value) })
}
