#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub serialize: SerializeConfig,

	#[serde(default)]
	pub resolve: ResolveConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct SerializeConfig {
	#[serde(default)]
	/// write `contentMap` and friends even when they hold no entry
	pub emit_empty_language_maps: bool,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct ResolveConfig {
	#[serde_inline_default(64)]
	/// how many embedded terms deep a document may go before it's rejected
	pub max_depth: u32,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}
}

#[cfg(test)]
mod test {
	#[test]
	fn missing_config_falls_back_to_defaults() {
		let cfg = super::Config::load(None);
		assert!(!cfg.serialize.emit_empty_language_maps);
		assert_eq!(cfg.resolve.max_depth, 64);

		let cfg = super::Config::load(Some(&std::path::PathBuf::from("/definitely/not/here.toml")));
		assert_eq!(cfg.resolve.max_depth, 64);
	}

	#[test]
	fn partial_config_keeps_other_defaults() {
		let cfg : super::Config = toml::from_str("[serialize]\nemit_empty_language_maps = true\n").unwrap();
		assert!(cfg.serialize.emit_empty_language_maps);
		assert_eq!(cfg.resolve.max_depth, 64);

		let cfg : super::Config = toml::from_str("[resolve]\nmax_depth = 3\n").unwrap();
		assert!(!cfg.serialize.emit_empty_language_maps);
		assert_eq!(cfg.resolve.max_depth, 3);
	}
}
