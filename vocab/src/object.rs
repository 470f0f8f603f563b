use crate::property::{
	COLLECTION, ENTITY, IMAGE, IRI, LOCATOR, MEASURE, MEDIA_TYPE, OBJECT,
	ORDERED_COLLECTION, TEXT, TIMESPAN, TIMESTAMP, USERNAME,
};
use crate::{ActivityType, ActorType, CollectionType, ObjectType};

crate::term! {
	/// Any object-like vocabulary term: plain objects, activities, actors, collections and
	/// documents all share this shape, only their canonical type differs.
	pub struct Object : ObjectType {
		functional {
			/// The altitude of a place, measured in `units` (meters by default)
			altitude: "altitude" => MEASURE;
			/// When the object describes a time-bound resource, such as an audio or video, a meeting, etc, the duration property indicates the object's approximate duration.
			duration: "duration" => TIMESPAN;
			/// The date and time describing the actual or expected ending time of the object
			end_time: "endTime" => TIMESTAMP;
			/// The date and time at which the object was published
			published: "published" => TIMESTAMP;
			/// The date and time describing the actual or expected starting time of the object.
			start_time: "startTime" => TIMESTAMP;
			/// The date and time at which the object was updated
			updated: "updated" => TIMESTAMP;
			/// When used on an Object, identifies the MIME media type of the value of the content property.
			/// If not specified, the content property is assumed to contain text/html content.
			media_type: "mediaType" => MEDIA_TYPE;
			/// Identifies a Collection containing objects considered to be responses to this object
			replies: "replies" => COLLECTION;
			likes: "likes" => COLLECTION;
			inbox: "inbox" => ORDERED_COLLECTION;
			outbox: "outbox" => ORDERED_COLLECTION;
			following: "following" => COLLECTION;
			followers: "followers" => COLLECTION;
			liked: "liked" => COLLECTION;
			/// original representation the content was derived from, e.g. markdown
			source: "source" => OBJECT;
			endpoints: "endpoints" => OBJECT;
			preferred_username: "preferredUsername" => USERNAME;
			proxy_url: "proxyUrl" => IRI;
			oauth_authorization_endpoint: "oauthAuthorizationEndpoint" => IRI;
			oauth_token_endpoint: "oauthTokenEndpoint" => IRI;
			provide_client_key: "provideClientKey" => IRI;
			sign_client_key: "signClientKey" => IRI;
			shared_inbox: "sharedInbox" => IRI;
		}
		repeated {
			/// Describes one or more entities that either performed or are expected to perform the activity
			actor: "actor" => ENTITY;
			/// Describes the direct object of the activity
			object: "object" => ENTITY;
			/// Describes the indirect object, or target, of the activity
			target: "target" => ENTITY;
			/// Describes the result of the activity
			result: "result" => ENTITY;
			/// Describes an indirect object of the activity from which the activity is directed
			origin: "origin" => ENTITY;
			/// Identifies one or more objects used (or to be used) in the completion of an Activity
			instrument: "instrument" => ENTITY;
			/// Identifies a resource attached or related to an object that potentially requires special handling
			attachment: "attachment" => ENTITY;
			/// Identifies one or more entities to which this object is attributed.
			attributed_to: "attributedTo" => ENTITY;
			/// Identifies one or more entities that represent the total population of entities for which the object can considered to be relevant
			audience: "audience" => ENTITY;
			/// The content or textual representation of the Object encoded as a JSON string. By default, the value of content is HTML
			content: "content" => TEXT;
			/// Identifies the context within which the object exists or an activity was performed
			context: "context" => ENTITY;
			/// A simple, human-readable, plain-text name for the object. HTML markup MUST NOT be included
			name: "name" => TEXT;
			/// Identifies the entity (e.g. an application) that generated the object
			generator: "generator" => ENTITY;
			/// Indicates an entity that describes an icon for this object
			icon: "icon" => IMAGE;
			/// Indicates an entity that describes an image for this object
			image: "image" => IMAGE;
			/// Indicates one or more entities for which this object is considered a response
			in_reply_to: "inReplyTo" => ENTITY;
			/// Indicates one or more physical or logical locations associated with the object
			location: "location" => ENTITY;
			/// Identifies an entity that provides a preview of this object
			preview: "preview" => ENTITY;
			/// A natural language summarization of the object encoded as HTML
			summary: "summary" => TEXT;
			/// One or more "tags" that have been associated with an objects. A tag can be any kind of Object
			tag: "tag" => ENTITY;
			/// Identifies one or more links to representations of the object
			url: "url" => LOCATOR;
			to: "to" => ENTITY;
			bto: "bto" => ENTITY;
			cc: "cc" => ENTITY;
			bcc: "bcc" => ENTITY;
			streams: "streams" => COLLECTION;
		}
		maps {
			content_map: "contentMap";
			name_map: "nameMap";
			summary_map: "summaryMap";
			preferred_username_map: "preferredUsernameMap";
		}
	}
}

impl Object {
	pub fn note() -> Self { Object::new(ObjectType::Note) }
	pub fn article() -> Self { Object::new(ObjectType::Article) }
	pub fn tombstone() -> Self { Object::new(ObjectType::Tombstone) }
	pub fn read() -> Self { Object::new(ObjectType::Activity(ActivityType::Read)) }
	pub fn create() -> Self { Object::new(ObjectType::Activity(ActivityType::Create)) }
	pub fn announce() -> Self { Object::new(ObjectType::Activity(ActivityType::Announce)) }
	pub fn like() -> Self { Object::new(ObjectType::Activity(ActivityType::Like)) }
	pub fn follow() -> Self { Object::new(ObjectType::Activity(ActivityType::Follow)) }
	pub fn person() -> Self { Object::new(ObjectType::Actor(ActorType::Person)) }
	pub fn collection() -> Self { Object::new(ObjectType::Collection(CollectionType::Collection)) }
	pub fn ordered_collection() -> Self { Object::new(ObjectType::Collection(CollectionType::OrderedCollection)) }

	pub fn is_activity(&self) -> bool {
		matches!(self.kind, ObjectType::Activity(_))
	}

	pub fn is_actor(&self) -> bool {
		matches!(self.kind, ObjectType::Actor(_))
	}

	pub fn is_collection(&self) -> bool {
		matches!(self.kind, ObjectType::Collection(_))
	}
}
