//! Resolution of raw json property values into exactly one [Value] alternative, and back.
//!
//! Object values are matched by their `type` names against the registry, trying every
//! candidate in priority order and, for each, every type name in order: the first pair
//! that resolves wins. Scalars go through the primitive parsers of the candidates, again
//! in order. Whatever matches nothing is kept as [Value::Unknown], so a property never
//! fails to deserialize unless an embedded term which was recognized is itself broken.

use crate::{Codec, Error, Kind, LanguageMap, Property, Result, Term, Value};

/// resolve a single occurrence of a property value
pub fn resolve(prop: &Property, value: &serde_json::Value, codec: &Codec) -> Result<Value> {
	match value {
		serde_json::Value::Object(map) => resolve_object(prop, map, value, codec),
		_ => Ok(resolve_scalar(prop, value)),
	}
}

/// resolve a repeatable property: arrays give one value per item, anything else one value
pub fn expand(prop: &Property, value: &serde_json::Value, codec: &Codec) -> Result<Vec<Value>> {
	match value {
		serde_json::Value::Array(arr) => arr
			.iter()
			.map(|x| resolve(prop, x, codec))
			.collect(),
		x => Ok(vec![resolve(prop, x, codec)?]),
	}
}

/// serialize a repeatable property: nothing is omitted, one value is written bare, many
/// values become an array
pub fn collapse(prop: &Property, values: &[Value], codec: &Codec) -> Result<Option<serde_json::Value>> {
	match values {
		[] => Ok(None),
		// a lone unknown array must stay wrapped or it would come back as many values
		[single] if !matches!(single, Value::Unknown(serde_json::Value::Array(_))) =>
			Ok(Some(render(prop.key, single, codec)?)),
		many => Ok(Some(serde_json::Value::Array(
			many.iter()
				.map(|x| render(prop.key, x, codec))
				.collect::<Result<Vec<_>>>()?
		))),
	}
}

/// serialize the populated alternative
pub fn render(key: &'static str, value: &Value, codec: &Codec) -> Result<serde_json::Value> {
	let primitive = |source: xsd::Error| Error::Primitive { key, source };
	match value {
		Value::Object(x) => Ok(serde_json::Value::Object(x.serialize_with(codec)?)),
		Value::Link(x) => Ok(serde_json::Value::Object(x.serialize_with(codec)?)),
		Value::Iri(x) => xsd::any_uri::serialize(x).map_err(primitive),
		Value::String(x) => xsd::string::serialize(x).map_err(primitive),
		Value::LangString(x) => xsd::lang_string::serialize(x).map_err(primitive),
		Value::DateTime(x) => xsd::date_time::serialize(x).map_err(primitive),
		Value::Float(x) => xsd::float::serialize(x).map_err(primitive),
		Value::Duration(x) => xsd::duration::serialize(x).map_err(primitive),
		Value::MediaType(x) => xsd::mime::serialize(x).map_err(primitive),
		Value::Integer(x) => xsd::non_negative_integer::serialize(x).map_err(primitive),
		Value::Unknown(x) => xsd::unknown::serialize(x).map_err(primitive),
	}
}

/// type names listed in `type`, which may be a single string or an array of them
pub fn type_names(map: &serde_json::Map<String, serde_json::Value>) -> Vec<&str> {
	match map.get("type") {
		Some(serde_json::Value::String(name)) => vec![name.as_str()],
		Some(serde_json::Value::Array(names)) => names.iter().filter_map(|x| x.as_str()).collect(),
		_ => Vec::new(),
	}
}

/// type list to emit for a term: the canonical name is appended unless already there
pub fn with_type_name(types: &[Value], canonical: &str) -> Vec<Value> {
	let mut out = types.to_vec();
	if !types.iter().any(|x| x.as_string() == Some(canonical)) {
		out.push(Value::String(canonical.to_string()));
	}
	out
}

/// natural language map out of a json object, entries which are not strings are dropped.
/// returns None if value is not an object at all
pub fn language_map(key: &str, value: &serde_json::Value) -> Option<LanguageMap> {
	let obj = value.as_object()?;
	let mut out = LanguageMap::new();
	for (lang, text) in obj {
		match text.as_str() {
			Some(text) => { out.insert(lang.clone(), text.to_string()); },
			None => tracing::warn!("dropping non-string entry '{lang}' from language map '{key}'"),
		}
	}
	Some(out)
}

pub fn render_language_map(map: &Option<LanguageMap>, codec: &Codec) -> Option<serde_json::Value> {
	let map = map.as_ref()?;
	if map.is_empty() && !codec.config().serialize.emit_empty_language_maps {
		return None;
	}
	Some(serde_json::Value::Object(
		map.iter()
			.map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
			.collect()
	))
}

fn resolve_object(
	prop: &Property,
	map: &serde_json::Map<String, serde_json::Value>,
	raw: &serde_json::Value,
	codec: &Codec,
) -> Result<Value> {
	if !prop.accepts_objects() {
		if prop.functional {
			return Err(Error::UnexpectedObject { key: prop.key });
		}
		return Ok(unknown(prop, raw));
	}

	let names = type_names(map);

	for kind in prop.candidates {
		match kind {
			Kind::Object(capability) => {
				for name in &names {
					if let Some(mut obj) = capability.resolve(name) {
						obj.deserialize_with(map, &codec.descend()?)
							.map_err(|e| nested(prop, name, e))?;
						return Ok(Value::Object(Box::new(obj)));
					}
				}
			},
			Kind::Link => {
				for name in &names {
					if let Some(mut link) = crate::resolve_link(name) {
						link.deserialize_with(map, &codec.descend()?)
							.map_err(|e| nested(prop, name, e))?;
						return Ok(Value::Link(Box::new(link)));
					}
				}
			},
			Kind::LangString => {
				if let Ok(x) = xsd::lang_string::deserialize(raw) {
					return Ok(Value::LangString(x));
				}
			},
			_ => {}, // scalars never come out of objects
		}
	}

	Ok(unknown(prop, raw))
}

fn resolve_scalar(prop: &Property, raw: &serde_json::Value) -> Value {
	for kind in prop.candidates {
		let parsed = match kind {
			Kind::Iri => xsd::any_uri::deserialize(raw).map(Value::Iri),
			Kind::String => xsd::string::deserialize(raw).map(Value::String),
			Kind::DateTime => xsd::date_time::deserialize(raw).map(Value::DateTime),
			Kind::Float => xsd::float::deserialize(raw).map(Value::Float),
			Kind::Duration => xsd::duration::deserialize(raw).map(Value::Duration),
			Kind::MediaType => xsd::mime::deserialize(raw).map(Value::MediaType),
			Kind::Integer => xsd::non_negative_integer::deserialize(raw).map(Value::Integer),
			Kind::Object(_) | Kind::Link | Kind::LangString => continue,
		};
		match parsed {
			Ok(x) => return x,
			Err(e) => tracing::trace!("'{}' is not {kind:?}: {e}", prop.key),
		}
	}
	unknown(prop, raw)
}

fn unknown(prop: &Property, raw: &serde_json::Value) -> Value {
	tracing::debug!("no alternative of '{}' matched, keeping it as unknown value", prop.key);
	Value::Unknown(xsd::unknown::deserialize(raw))
}

fn nested(prop: &Property, name: &str, e: Error) -> Error {
	Error::Nested { key: prop.key, kind: name.to_string(), source: Box::new(e) }
}
