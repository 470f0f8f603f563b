mod macros;
pub(crate) use macros::{strenum, term};
pub use macros::TypeValueError;

pub mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};

pub mod registry;
pub use registry::{
	Capability,
	ObjectType, LinkType, ActivityType, ActorType, CollectionType, DocumentType,
	IntransitiveActivityType, AcceptType, IgnoreType, OfferType, RejectType,
	resolve_object, resolve_link, resolve_image,
};

mod value;
pub use value::Value;

pub mod property;
pub use property::{Kind, Property, LanguageMap};

pub mod resolve;

mod term;
pub use term::{Term, Codec};

mod object;
pub use object::Object;

mod link;
pub use link::Link;

pub mod target;
pub mod jsonld;

pub use xsd::{AnyUri, LangString};
