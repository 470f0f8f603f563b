use crate::property::{DIMENSION, ENTITY, IRI, MIME, TAGGED_TEXT, WORD};
use crate::LinkType;

crate::term! {
	/// A reference to a resource identified by `href`, with some metadata about it.
	/// Mentions and hashtags are links too.
	pub struct Link : LinkType {
		functional {
			href: "href" => IRI;
			/// Hints as to the language used by the target resource
			hreflang: "hreflang" => WORD;
			/// On a Link, specifies a hint as to the rendering height in device-independent pixels of the linked resource
			height: "height" => DIMENSION;
			/// On a Link, specifies a hint as to the rendering width in device-independent pixels of the linked resource
			width: "width" => DIMENSION;
			/// When used on a Link, identifies the MIME media type of the referenced resource.
			media_type: "mediaType" => MIME;
		}
		repeated {
			/// A link relation associated with a Link. The value MUST conform to both the HTML5 and RFC5988 "link relation" definitions
			rel: "rel" => WORD;
			name: "name" => TAGGED_TEXT;
			preview: "preview" => ENTITY;
		}
		maps {
			name_map: "nameMap";
		}
	}
}

impl Link {
	pub fn link() -> Self { Link::new(LinkType::Link) }
	pub fn mention() -> Self { Link::new(LinkType::Mention) }
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	pub fn hashtag() -> Self { Link::new(LinkType::Hashtag) }
}
