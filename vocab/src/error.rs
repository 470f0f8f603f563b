#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("property '{key}' holds a single scalar value, found an object")]
	UnexpectedObject {
		key: &'static str,
	},

	#[error("failed deserializing '{kind}' in property '{key}': {source}")]
	Nested {
		key: &'static str,
		kind: String,
		source: Box<Error>,
	},

	#[error("expected a json object, found {0}")]
	NotAnObject(&'static str),

	#[error("invalid identifier in '{key}': {source}")]
	InvalidIdentifier {
		key: &'static str,
		source: xsd::Error,
	},

	#[error("terms are nested deeper than {0} levels")]
	TooDeep(u32),

	#[error("cannot serialize '{key}': {source}")]
	Primitive {
		key: &'static str,
		source: xsd::Error,
	},
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	/// walks down nested deserialization errors, returning the one that actually failed
	pub fn root_cause(&self) -> &Error {
		match self {
			Error::Nested { source, .. } => source.root_cause(),
			e => e,
		}
	}
}
