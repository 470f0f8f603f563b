crate::strenum! {
	pub enum ObjectType {
		Object,
		Article,
		Event,
		Note,
		Place,
		Profile,
		Relationship,
		Tombstone;

		Activity(ActivityType),
		Actor(ActorType),
		Collection(CollectionType),
		Document(DocumentType)
	};

	pub enum ActorType {
		Application,
		Group,
		Organization,
		Person,
		Service;
	};

	pub enum CollectionType {
		Collection,
		CollectionPage,
		OrderedCollection,
		OrderedCollectionPage;
	};

	pub enum DocumentType {
		Document,
		Audio,
		Image,
		Page,
		Video;
	};

	pub enum IntransitiveActivityType {
		IntransitiveActivity,
		Arrive,
		Question,
		Travel;
	};

	pub enum AcceptType {
		Accept,
		TentativeAccept;
	};

	pub enum IgnoreType {
		Ignore,
		Block;
	};

	pub enum OfferType {
		Offer,
		Invite;
	};

	pub enum RejectType {
		Reject,
		TentativeReject;
	};
}

#[cfg(feature = "litepub")]
crate::strenum! {
	pub enum ActivityType {
		Activity,
		Add,
		Announce,
		Create,
		Delete,
		Dislike,
		EmojiReact,
		Flag,
		Follow,
		Join,
		Leave,
		Like,
		Listen,
		Move,
		Read,
		Remove,
		Undo,
		Update,
		View;

		IntransitiveActivity(IntransitiveActivityType),
		Accept(AcceptType),
		Ignore(IgnoreType),
		Offer(OfferType),
		Reject(RejectType)
	};
}

#[cfg(not(feature = "litepub"))]
crate::strenum! {
	pub enum ActivityType {
		Activity,
		Add,
		Announce,
		Create,
		Delete,
		Dislike,
		Flag,
		Follow,
		Join,
		Leave,
		Like,
		Listen,
		Move,
		Read,
		Remove,
		Undo,
		Update,
		View;

		IntransitiveActivity(IntransitiveActivityType),
		Accept(AcceptType),
		Ignore(IgnoreType),
		Offer(OfferType),
		Reject(RejectType)
	};
}

#[cfg(feature = "activitypub-miscellaneous-terms")]
crate::strenum! {
	pub enum LinkType {
		Link,
		Hashtag,
		Mention;
	};
}

#[cfg(not(feature = "activitypub-miscellaneous-terms"))]
crate::strenum! {
	pub enum LinkType {
		Link,
		Mention;
	};
}

#[cfg(test)]
mod test {
	#[test]
	fn flat_types_serialize() {
		let x = super::IgnoreType::Block;
		assert_eq!("Block", <super::IgnoreType as AsRef<str>>::as_ref(&x));
	}

	#[test]
	fn deep_types_serialize() {
		let x = super::ObjectType::Activity(super::ActivityType::Read);
		assert_eq!("Read", <super::ObjectType as AsRef<str>>::as_ref(&x));
		assert_eq!("Read", x.to_string());
	}

	#[test]
	fn flat_types_deserialize() {
		let x = super::ActorType::try_from("Person").expect("could not deserialize");
		assert_eq!(super::ActorType::Person, x);
	}

	#[test]
	fn deep_types_deserialize() {
		let x = super::ObjectType::try_from("Invite").expect("could not deserialize");
		assert_eq!(super::ObjectType::Activity(super::ActivityType::Offer(super::OfferType::Invite)), x);
	}

	#[test]
	fn links_and_objects_dont_overlap() {
		assert!(super::ObjectType::try_from("Mention").is_err());
		assert!(super::LinkType::try_from("Note").is_err());
	}
}
