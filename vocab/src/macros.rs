#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;

macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident),* ; $($deep:ident($inner:ident)),* };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Debug, Clone, Copy)]
			pub enum $enum_name {
				$($flat,)*
				$($deep($inner),)*
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					match self {
						$(Self::$flat => stringify!($flat),)*
						$(Self::$deep(x) => x.as_ref(),)*
					}
				}
			}

			impl std::fmt::Display for $enum_name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.as_ref())
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value:&str) -> Result<Self, Self::Error> {
					match value {
						$(stringify!($flat) => Ok(Self::$flat),)*
						_ => {
							$(
								if let Ok(x) = $inner::try_from(value) {
									return Ok(Self::$deep(x));
								}
							)*
							Err($crate::macros::TypeValueError)
						},
					}
				}
			}
		)*
	};
}

pub(crate) use strenum;

/// Declares a vocabulary term: the struct holding one slot per known property, its
/// accessors and builder setters, and its [crate::Term] implementation.
///
/// Functional properties hold at most one [crate::Value], repeated ones keep an ordered
/// list, maps hold a natural language map. `id`, `type` and the extension fields are
/// always present.
macro_rules! term {
	(
		$(#[$meta:meta])*
		pub struct $term:ident : $kind:ty {
			functional {
				$( $(#[$fmeta:meta])* $f:ident : $fkey:literal => $fcand:expr ; )*
			}
			repeated {
				$( $(#[$rmeta:meta])* $r:ident : $rkey:literal => $rcand:expr ; )*
			}
			maps {
				$( $(#[$mmeta:meta])* $m:ident : $mkey:literal ; )*
			}
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq)]
		pub struct $term {
			kind: $kind,
			id: Option<xsd::AnyUri>,
			types: Vec<$crate::Value>,
			$( $f: Option<$crate::Value>, )*
			$( $r: Vec<$crate::Value>, )*
			$( $m: Option<$crate::LanguageMap>, )*
			extensions: serde_json::Map<String, serde_json::Value>,
		}

		paste::paste! {
			impl $term {
				/// empty term which will serialize with given canonical type
				pub fn new(kind: $kind) -> Self {
					$term {
						kind,
						id: None,
						types: Vec::new(),
						$( $f: None, )*
						$( $r: Vec::new(), )*
						$( $m: None, )*
						extensions: serde_json::Map::new(),
					}
				}

				pub fn kind(&self) -> $kind {
					self.kind
				}

				pub fn id(&self) -> Option<&xsd::AnyUri> {
					self.id.as_ref()
				}

				pub fn set_id(mut self, val: Option<xsd::AnyUri>) -> Self {
					self.id = val;
					self
				}

				/// type names as found on the wire, may not include the canonical one
				pub fn types(&self) -> &[$crate::Value] {
					&self.types
				}

				pub fn set_types(mut self, val: Vec<$crate::Value>) -> Self {
					self.types = val;
					self
				}

				/// fields which are not part of this term, kept verbatim
				pub fn extensions(&self) -> &serde_json::Map<String, serde_json::Value> {
					&self.extensions
				}

				pub fn set_extension(mut self, key: &str, val: Option<serde_json::Value>) -> Self {
					match val {
						Some(x) => self.extensions.insert(key.to_string(), x),
						None => self.extensions.remove(key),
					};
					self
				}

				$(
					$(#[$fmeta])*
					pub fn $f(&self) -> Option<&$crate::Value> {
						self.$f.as_ref()
					}

					pub fn [< set_ $f >](mut self, val: Option<$crate::Value>) -> Self {
						self.$f = val;
						self
					}
				)*

				$(
					$(#[$rmeta])*
					pub fn $r(&self) -> &[$crate::Value] {
						&self.$r
					}

					pub fn [< $r _mut >](&mut self) -> &mut Vec<$crate::Value> {
						&mut self.$r
					}

					pub fn [< set_ $r >](mut self, val: Vec<$crate::Value>) -> Self {
						self.$r = val;
						self
					}

					pub fn [< add_ $r >](mut self, val: impl Into<$crate::Value>) -> Self {
						self.$r.push(val.into());
						self
					}
				)*

				$(
					$(#[$mmeta])*
					pub fn $m(&self) -> Option<&$crate::LanguageMap> {
						self.$m.as_ref()
					}

					pub fn [< set_ $m >](mut self, val: Option<$crate::LanguageMap>) -> Self {
						self.$m = val;
						self
					}
				)*
			}
		}

		impl $crate::Term for $term {
			fn type_name(&self) -> &str {
				self.kind.as_ref()
			}

			fn serialize_with(&self, codec: &$crate::Codec) -> $crate::Result<serde_json::Map<String, serde_json::Value>> {
				use $crate::property::Property;

				// extensions go first, known properties win on collisions
				let mut map = self.extensions.clone();
				map.remove($crate::jsonld::CONTEXT);

				if let Some(id) = &self.id {
					map.insert(
						"id".to_string(),
						xsd::any_uri::serialize(id)
							.map_err(|source| $crate::Error::Primitive { key: "id", source })?,
					);
				}

				let types = $crate::resolve::with_type_name(&self.types, self.kind.as_ref());
				if let Some(x) = $crate::resolve::collapse(&$crate::property::TYPE, &types, codec)? {
					map.insert("type".to_string(), x);
				}

				$(
					if let Some(x) = &self.$f {
						map.insert($fkey.to_string(), $crate::resolve::render($fkey, x, codec)?);
					}
				)*

				$(
					if let Some(x) = $crate::resolve::collapse(&Property::many($rkey, $rcand), &self.$r, codec)? {
						map.insert($rkey.to_string(), x);
					}
				)*

				$(
					if let Some(x) = $crate::resolve::render_language_map(&self.$m, codec) {
						map.insert($mkey.to_string(), x);
					}
				)*

				Ok(map)
			}

			fn deserialize_with(&mut self, map: &serde_json::Map<String, serde_json::Value>, codec: &$crate::Codec) -> $crate::Result<()> {
				use $crate::property::Property;

				for (key, value) in map {
					match key.as_str() {
						$crate::jsonld::CONTEXT => continue,
						"id" => {
							let id = xsd::any_uri::deserialize(value)
								.map_err(|source| $crate::Error::InvalidIdentifier { key: "id", source })?;
							self.id = Some(id);
						},
						"type" => self.types = $crate::resolve::expand(&$crate::property::TYPE, value, codec)?,
						$(
							$fkey => self.$f = Some($crate::resolve::resolve(&Property::one($fkey, $fcand), value, codec)?),
						)*
						$(
							$rkey => self.$r = $crate::resolve::expand(&Property::many($rkey, $rcand), value, codec)?,
						)*
						$(
							$mkey => match $crate::resolve::language_map($mkey, value) {
								Some(x) => self.$m = Some(x),
								None => {
									tracing::debug!("'{}' is not a language map, keeping it as extension", $mkey);
									self.extensions.insert(key.clone(), xsd::unknown::deserialize(value));
								},
							},
						)*
						_ => {
							self.extensions.insert(key.clone(), xsd::unknown::deserialize(value));
						},
					}
				}
				Ok(())
			}
		}
	};
}

pub(crate) use term;
