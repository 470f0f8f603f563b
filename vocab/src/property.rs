//! Property descriptors: which alternatives a json key may resolve to, and in which order
//! they are attempted.

use crate::Capability;

/// natural language map: language tag -> text
pub type LanguageMap = std::collections::BTreeMap<String, String>;

/// A candidate alternative for a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
	/// registered object term satisfying given capability, resolved by its `type`
	Object(Capability),
	/// registered link term, resolved by its `type`
	Link,
	Iri,
	String,
	LangString,
	DateTime,
	Float,
	Duration,
	MediaType,
	Integer,
}

impl Kind {
	/// whether this alternative can be built out of a json object
	pub fn accepts_objects(&self) -> bool {
		matches!(self, Kind::Object(_) | Kind::Link | Kind::LangString)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
	pub key: &'static str,
	/// holds at most one value, never a list
	pub functional: bool,
	/// alternatives in priority order, first match wins
	pub candidates: &'static [Kind],
}

impl Property {
	pub const fn one(key: &'static str, candidates: &'static [Kind]) -> Self {
		Property { key, functional: true, candidates }
	}

	pub const fn many(key: &'static str, candidates: &'static [Kind]) -> Self {
		Property { key, functional: false, candidates }
	}

	pub fn accepts_objects(&self) -> bool {
		self.candidates.iter().any(Kind::accepts_objects)
	}
}

pub const TYPE : Property = Property::many("type", TYPE_NAME);

/// inline object, inline link or reference
pub const ENTITY : &[Kind] = &[Kind::Object(Capability::Any), Kind::Link, Kind::Iri];
/// inline object or reference
pub const OBJECT : &[Kind] = &[Kind::Object(Capability::Any), Kind::Iri];
pub const IMAGE : &[Kind] = &[Kind::Object(Capability::Image), Kind::Link, Kind::Iri];
pub const COLLECTION : &[Kind] = &[Kind::Object(Capability::Collection), Kind::Iri];
pub const ORDERED_COLLECTION : &[Kind] = &[Kind::Object(Capability::OrderedCollection), Kind::Iri];
/// `url` prefers plain IRIs over links
pub const LOCATOR : &[Kind] = &[Kind::Iri, Kind::Link];
pub const TEXT : &[Kind] = &[Kind::String, Kind::LangString, Kind::Iri];
pub const USERNAME : &[Kind] = &[Kind::String, Kind::Iri];
pub const TIMESTAMP : &[Kind] = &[Kind::DateTime, Kind::Iri];
pub const MEASURE : &[Kind] = &[Kind::Float, Kind::Iri];
pub const TIMESPAN : &[Kind] = &[Kind::Duration, Kind::Iri];
pub const MEDIA_TYPE : &[Kind] = &[Kind::MediaType, Kind::Iri];
pub const IRI : &[Kind] = &[Kind::Iri];
pub const TYPE_NAME : &[Kind] = &[Kind::String];
pub const WORD : &[Kind] = &[Kind::String];
pub const TAGGED_TEXT : &[Kind] = &[Kind::String, Kind::LangString];
pub const DIMENSION : &[Kind] = &[Kind::Integer];
pub const MIME : &[Kind] = &[Kind::MediaType];
