use crate::{Link, Object};

/// One populated alternative of a polymorphic property.
///
/// Which alternatives may appear depends on the property: `actor` may hold objects, links
/// or bare IRIs, `published` a date-time or an IRI, and so on (see [crate::property]).
/// Anything that matched none of them is carried as [Value::Unknown].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// embedded object-like term (Note, Person, Collection, Image...)
	Object(Box<Object>),
	/// embedded link-like term (Link, Mention...)
	Link(Box<Link>),
	/// reference to a remote entity, possibly relative to the enclosing document
	Iri(xsd::AnyUri),
	String(String),
	LangString(xsd::LangString),
	DateTime(chrono::DateTime<chrono::FixedOffset>),
	Float(f64),
	Duration(chrono::TimeDelta),
	MediaType(String),
	Integer(u64),
	/// raw json which matched no alternative, passed through untouched
	Unknown(serde_json::Value),
}

impl Value {
	pub fn iri(uri: &str) -> xsd::Result<Self> {
		Ok(Value::Iri(xsd::AnyUri::parse(uri)?))
	}

	pub fn string(s: impl ToString) -> Self {
		Value::String(s.to_string())
	}

	pub fn is_object(&self) -> bool { matches!(self, Value::Object(_)) }
	pub fn is_link(&self) -> bool { matches!(self, Value::Link(_)) }
	pub fn is_iri(&self) -> bool { matches!(self, Value::Iri(_)) }
	pub fn is_string(&self) -> bool { matches!(self, Value::String(_)) }
	pub fn is_lang_string(&self) -> bool { matches!(self, Value::LangString(_)) }
	pub fn is_date_time(&self) -> bool { matches!(self, Value::DateTime(_)) }
	pub fn is_float(&self) -> bool { matches!(self, Value::Float(_)) }
	pub fn is_duration(&self) -> bool { matches!(self, Value::Duration(_)) }
	pub fn is_media_type(&self) -> bool { matches!(self, Value::MediaType(_)) }
	pub fn is_integer(&self) -> bool { matches!(self, Value::Integer(_)) }
	pub fn is_unknown(&self) -> bool { matches!(self, Value::Unknown(_)) }

	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Value::Object(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_link(&self) -> Option<&Link> {
		match self {
			Value::Link(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_iri(&self) -> Option<&xsd::AnyUri> {
		match self {
			Value::Iri(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_string(&self) -> Option<&str> {
		match self {
			Value::String(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_lang_string(&self) -> Option<&xsd::LangString> {
		match self {
			Value::LangString(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_date_time(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
		match self {
			Value::DateTime(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_float(&self) -> Option<f64> {
		match self {
			Value::Float(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_duration(&self) -> Option<chrono::TimeDelta> {
		match self {
			Value::Duration(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_media_type(&self) -> Option<&str> {
		match self {
			Value::MediaType(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_integer(&self) -> Option<u64> {
		match self {
			Value::Integer(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_unknown(&self) -> Option<&serde_json::Value> {
		match self {
			Value::Unknown(x) => Some(x),
			_ => None,
		}
	}

	/// returns id of referenced entity: the IRI itself, `id` for objects, `href` for links
	pub fn id(&self) -> Option<&str> {
		match self {
			Value::Iri(x) => Some(x.as_str()),
			Value::Object(x) => x.id().map(|x| x.as_str()),
			Value::Link(link) => link.href()
				.and_then(Value::as_iri)
				.or(link.id())
				.map(xsd::AnyUri::as_str),
			_ => None,
		}
	}
}

impl From<Object> for Value {
	fn from(value: Object) -> Self {
		Value::Object(Box::new(value))
	}
}

impl From<Link> for Value {
	fn from(value: Link) -> Self {
		Value::Link(Box::new(value))
	}
}

impl From<xsd::AnyUri> for Value {
	fn from(value: xsd::AnyUri) -> Self {
		Value::Iri(value)
	}
}

impl From<url::Url> for Value {
	fn from(value: url::Url) -> Self {
		Value::Iri(value.into())
	}
}

impl From<xsd::LangString> for Value {
	fn from(value: xsd::LangString) -> Self {
		Value::LangString(value)
	}
}
