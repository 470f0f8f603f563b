use crate::{Object, Value};

pub const PUBLIC : &str = "https://www.w3.org/ns/activitystreams#Public";

pub trait Addressed {
	/// every addressed entity: to, bto, cc, bcc
	fn addressed(&self) -> Vec<String>;
	/// primary audience only: to, bto
	fn mentioning(&self) -> Vec<String>;
	/// whether the public collection is among the addressed
	fn is_public(&self) -> bool {
		self.addressed().iter().any(|x| x == PUBLIC)
	}
}

fn ids(values: &[Value]) -> impl Iterator<Item = String> + '_ {
	values.iter().filter_map(Value::id).map(str::to_string)
}

impl Addressed for Object {
	fn addressed(&self) -> Vec<String> {
		ids(self.to())
			.chain(ids(self.bto()))
			.chain(ids(self.cc()))
			.chain(ids(self.bcc()))
			.collect()
	}

	fn mentioning(&self) -> Vec<String> {
		ids(self.to())
			.chain(ids(self.bto()))
			.collect()
	}
}
