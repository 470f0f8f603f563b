use crate::{Config, Error, Result};

/// Common surface of every vocabulary term, so that delivery layers can move any of them
/// to and from json without knowing what they are.
pub trait Term {
	/// canonical type name, appended to `type` when serializing if missing
	fn type_name(&self) -> &str;

	fn serialize_with(&self, codec: &Codec) -> Result<serde_json::Map<String, serde_json::Value>>;

	/// fill this term from a json object. on failure the term is left half populated
	fn deserialize_with(&mut self, map: &serde_json::Map<String, serde_json::Value>, codec: &Codec) -> Result<()>;

	fn serialize(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
		let config = Config::default();
		self.serialize_with(&Codec::new(&config))
	}

	fn deserialize(&mut self, map: &serde_json::Map<String, serde_json::Value>) -> Result<()> {
		let config = Config::default();
		self.deserialize_with(map, &Codec::new(&config))
	}
}

/// Carries configuration and current nesting depth through a (de)serialization pass.
#[derive(Debug, Clone, Copy)]
pub struct Codec<'c> {
	config: &'c Config,
	depth: u32,
}

impl<'c> Codec<'c> {
	pub fn new(config: &'c Config) -> Self {
		Codec { config, depth: 0 }
	}

	pub fn config(&self) -> &'c Config {
		self.config
	}

	/// codec for a term nested one level deeper
	pub(crate) fn descend(&self) -> Result<Self> {
		let depth = self.depth + 1;
		if depth > self.config.resolve.max_depth {
			return Err(Error::TooDeep(self.config.resolve.max_depth));
		}
		Ok(Codec { config: self.config, depth })
	}
}
