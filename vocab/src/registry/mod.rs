//! Closed registry of vocabulary type names.
//!
//! Nested values are resolved by looking up the names found in their `type` field here:
//! a known name yields a fresh empty term of that type, anything else yields nothing.

mod types;
pub use types::*;

use crate::{Link, Object};

/// Interface a nested object must satisfy to fill a given property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
	/// any object-like term
	Any,
	/// Collection, OrderedCollection and their pages
	Collection,
	/// OrderedCollection and OrderedCollectionPage
	OrderedCollection,
	/// only Image documents
	Image,
}

impl Capability {
	pub fn accepts(&self, kind: ObjectType) -> bool {
		match self {
			Capability::Any => true,
			Capability::Collection => matches!(kind, ObjectType::Collection(_)),
			Capability::OrderedCollection => matches!(
				kind,
				ObjectType::Collection(CollectionType::OrderedCollection | CollectionType::OrderedCollectionPage)
			),
			Capability::Image => matches!(kind, ObjectType::Document(DocumentType::Image)),
		}
	}

	/// fresh term for given type name, if it exists and satisfies this capability
	pub fn resolve(&self, name: &str) -> Option<Object> {
		let obj = match self {
			Capability::Image => resolve_image(name)?,
			_ => resolve_object(name)?,
		};
		if self.accepts(obj.kind()) {
			Some(obj)
		} else {
			None
		}
	}
}

pub fn resolve_object(name: &str) -> Option<Object> {
	ObjectType::try_from(name).ok().map(Object::new)
}

pub fn resolve_link(name: &str) -> Option<Link> {
	LinkType::try_from(name).ok().map(Link::new)
}

pub fn resolve_image(name: &str) -> Option<Object> {
	match ObjectType::try_from(name).ok()? {
		kind @ ObjectType::Document(DocumentType::Image) => Some(Object::new(kind)),
		_ => None,
	}
}

#[cfg(test)]
mod test {
	use super::{Capability, ObjectType, CollectionType};

	#[test]
	fn registry_builds_terms_of_requested_type() {
		let obj = super::resolve_object("Note").expect("Note is a known object type");
		assert_eq!(obj.kind(), ObjectType::Note);
		assert!(super::resolve_object("Mention").is_none());
		assert!(super::resolve_link("Mention").is_some());
		assert!(super::resolve_image("Image").is_some());
		assert!(super::resolve_image("Video").is_none());
	}

	#[test]
	fn collection_pages_satisfy_collection_capabilities() {
		let page = ObjectType::Collection(CollectionType::OrderedCollectionPage);
		assert!(Capability::Collection.accepts(page));
		assert!(Capability::OrderedCollection.accepts(page));
		assert!(!Capability::OrderedCollection.accepts(ObjectType::Collection(CollectionType::Collection)));
		assert!(Capability::OrderedCollection.resolve("Collection").is_none());
		assert!(Capability::Collection.resolve("Note").is_none());
		assert!(Capability::Any.resolve("Note").is_some());
	}
}
