use crate::{Error, Result};

/// A URI reference: either an absolute IRI or a reference relative to some base document.
///
/// Relative references are kept verbatim, they can be resolved later with [AnyUri::resolve]
/// once the base is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyUri {
	Absolute(url::Url),
	Relative(String),
}

impl AnyUri {
	pub fn parse(raw: &str) -> Result<Self> {
		match url::Url::parse(raw) {
			Ok(url) => Ok(AnyUri::Absolute(url)),
			Err(url::ParseError::RelativeUrlWithoutBase) => relative_reference(raw).map(AnyUri::Relative),
			Err(e) => Err(Error::Uri(raw.to_string(), e)),
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			AnyUri::Absolute(x) => x.as_str(),
			AnyUri::Relative(x) => x,
		}
	}

	pub fn as_url(&self) -> Option<&url::Url> {
		match self {
			AnyUri::Absolute(x) => Some(x),
			AnyUri::Relative(_) => None,
		}
	}

	pub fn is_relative(&self) -> bool {
		matches!(self, AnyUri::Relative(_))
	}

	/// absolute form of this reference, relative ones are joined onto given base
	pub fn resolve(&self, base: &url::Url) -> Result<url::Url> {
		match self {
			AnyUri::Absolute(x) => Ok(x.clone()),
			AnyUri::Relative(x) => base.join(x).map_err(|e| Error::Uri(x.clone(), e)),
		}
	}
}

impl std::fmt::Display for AnyUri {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for AnyUri {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		AnyUri::parse(s)
	}
}

impl From<url::Url> for AnyUri {
	fn from(value: url::Url) -> Self {
		AnyUri::Absolute(value)
	}
}

// RFC 3986 relative-ref, loosened to allow non-ascii characters as IRIs do
fn relative_reference(raw: &str) -> Result<String> {
	let invalid = || Error::Reference(raw.to_string());

	if raw.is_empty() {
		return Err(invalid());
	}

	if raw.chars().any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '<' | '>' | '\\' | '^' | '`' | '{' | '|' | '}')) {
		return Err(invalid());
	}

	// a colon in the first segment would make it a scheme
	let first_segment = raw.split(['/', '?', '#']).next().unwrap_or_default();
	if first_segment.contains(':') {
		return Err(invalid());
	}

	if raw.matches('#').count() > 1 {
		return Err(invalid());
	}

	let bytes = raw.as_bytes();
	for (i, b) in bytes.iter().enumerate() {
		if *b == b'%'
			&& !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit) && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
		{
			return Err(invalid());
		}
	}

	Ok(raw.to_string())
}

pub fn deserialize(value: &serde_json::Value) -> Result<AnyUri> {
	AnyUri::parse(crate::expect_str(value, "xsd:anyURI string")?)
}

pub fn serialize(uri: &AnyUri) -> Result<serde_json::Value> {
	Ok(serde_json::Value::String(uri.to_string()))
}

#[cfg(test)]
mod test {
	use super::AnyUri;

	#[test]
	fn absolute_urls_are_accepted() {
		let uri = super::deserialize(&serde_json::json!("https://example.com/alice")).unwrap();
		assert!(!uri.is_relative());
		assert_eq!(uri.as_str(), "https://example.com/alice");
		assert_eq!(super::serialize(&uri).unwrap(), serde_json::json!("https://example.com/alice"));
	}

	#[test]
	fn relative_references_are_kept_verbatim() {
		for raw in ["/users/alice", "alice", "../notes/1?page=2#top", "//example.com/bob", "caf%C3%A9", "notes/ünïcode"] {
			let uri = super::deserialize(&serde_json::json!(raw)).unwrap();
			assert!(uri.is_relative(), "{raw} should be relative");
			assert_eq!(super::serialize(&uri).unwrap(), serde_json::json!(raw));
		}
	}

	#[test]
	fn relative_references_resolve_against_base() {
		let base = url::Url::parse("https://example.com/users/").unwrap();
		let uri : AnyUri = "alice/outbox".parse().unwrap();
		assert_eq!(uri.resolve(&base).unwrap().as_str(), "https://example.com/users/alice/outbox");
		let uri : AnyUri = "/notes/1".parse().unwrap();
		assert_eq!(uri.resolve(&base).unwrap().as_str(), "https://example.com/notes/1");
	}

	#[test]
	fn malformed_references_are_rejected() {
		for raw in ["", "hello world", "not\ta uri", "a<b>", "1a:b/c", "100%", "%zz", "a#b#c"] {
			assert!(super::deserialize(&serde_json::json!(raw)).is_err(), "{raw:?} should be rejected");
		}
		assert!(matches!(
			super::deserialize(&serde_json::json!("http://exa mple.com")),
			Err(crate::Error::Uri(..)),
		));
	}

	#[test]
	fn non_strings_are_rejected() {
		assert_eq!(
			super::deserialize(&serde_json::json!(42)),
			Err(crate::Error::Shape { expected: "xsd:anyURI string", found: "number" }),
		);
	}
}
