//! Outer json-ld envelope for top level documents.
//!
//! Terms never read nor write `@context` themselves: this is where a delivery layer adds
//! it before sending a document out, and where documents of unknown type are read in.

use crate::{Codec, Config, Error, Result, Term, Value};
use crate::property::{Kind, Property};

pub const CONTEXT : &str = "@context";
pub const ACTIVITYSTREAMS : &str = "https://www.w3.org/ns/activitystreams";
pub const SECURITY : &str = "https://w3id.org/security/v1";

const DOCUMENT : Property = Property::one("document", &[Kind::Object(crate::Capability::Any), Kind::Link]);

pub trait LD {
	fn ld_context(self) -> Self;
}

impl LD for serde_json::Map<String, serde_json::Value> {
	fn ld_context(mut self) -> Self {
		self.insert(
			CONTEXT.to_string(),
			serde_json::Value::Array(vec![
				serde_json::Value::String(ACTIVITYSTREAMS.into()),
				serde_json::Value::String(SECURITY.into()),
			]),
		);
		self
	}
}

/// serialize a top level term, adding its `@context`
pub fn document(term: &impl Term) -> Result<serde_json::Map<String, serde_json::Value>> {
	Ok(term.serialize()?.ld_context())
}

pub fn document_with(term: &impl Term, codec: &Codec) -> Result<serde_json::Map<String, serde_json::Value>> {
	Ok(term.serialize_with(codec)?.ld_context())
}

/// read any top level document, picking the term out of its `type`
pub fn from_document(json: &serde_json::Value) -> Result<Value> {
	let config = Config::default();
	from_document_with(json, &Codec::new(&config))
}

pub fn from_document_with(json: &serde_json::Value, codec: &Codec) -> Result<Value> {
	if !json.is_object() {
		return Err(Error::NotAnObject(xsd::shape(json)));
	}
	crate::resolve::resolve(&DOCUMENT, json, codec)
}

#[cfg(test)]
mod test {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use crate::{Object, Term};

	#[test]
	fn documents_carry_context() {
		let doc = super::document(&Object::read()).unwrap();
		assert_eq!(
			serde_json::Value::Object(doc),
			json!({
				"@context": [super::ACTIVITYSTREAMS, super::SECURITY],
				"type": "Read",
			})
		);
		// but the term alone never does
		assert!(!Object::read().serialize().unwrap().contains_key(super::CONTEXT));
	}

	#[test]
	fn documents_resolve_by_type() {
		let doc = json!({
			"@context": "https://www.w3.org/ns/activitystreams",
			"type": "Read",
			"actor": "https://example.com/alice",
		});
		let value = super::from_document(&doc).unwrap();
		let activity = value.as_object().expect("Read is an object term");
		assert!(activity.is_activity());
		assert!(activity.extensions().is_empty());

		let mention = super::from_document(&json!({"type": "Mention", "href": "https://example.com/bob"})).unwrap();
		assert!(mention.is_link());

		let unknown = super::from_document(&json!({"type": "Whatever"})).unwrap();
		assert!(unknown.is_unknown());
	}

	#[test]
	fn documents_must_be_objects() {
		let err = super::from_document(&json!(["https://example.com"])).unwrap_err();
		assert!(matches!(err, crate::Error::NotAnObject("array")));
	}
}
