use chrono::{DateTime, FixedOffset};

use crate::{Error, Result};

pub fn deserialize(value: &serde_json::Value) -> Result<DateTime<FixedOffset>> {
	let raw = crate::expect_str(value, "xsd:dateTime string")?;
	if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
		return Ok(t);
	}
	// some implementations drop the seconds: "2015-01-25T12:34Z"
	if raw.len() > 16 && raw.is_char_boundary(16) && raw.as_bytes()[13] == b':' && raw.as_bytes()[16] != b':' {
		let padded = format!("{}:00{}", &raw[..16], &raw[16..]);
		if let Ok(t) = DateTime::parse_from_rfc3339(&padded) {
			return Ok(t);
		}
	}
	Err(Error::DateTime(raw.to_string()))
}

pub fn serialize(t: &DateTime<FixedOffset>) -> Result<serde_json::Value> {
	Ok(serde_json::Value::String(t.to_rfc3339()))
}

#[cfg(test)]
mod test {
	use chrono::{Datelike, Timelike};

	#[test]
	fn rfc3339_timestamps_parse() {
		let t = super::deserialize(&serde_json::json!("2024-06-04T17:09:20+00:00")).unwrap();
		assert_eq!(t.year(), 2024);
		assert_eq!(t.second(), 20);
		assert_eq!(super::serialize(&t).unwrap(), serde_json::json!("2024-06-04T17:09:20+00:00"));
	}

	#[test]
	fn timestamps_without_seconds_parse() {
		let t = super::deserialize(&serde_json::json!("2015-01-25T12:34Z")).unwrap();
		assert_eq!(t.hour(), 12);
		assert_eq!(t.minute(), 34);
		assert_eq!(t.second(), 0);
	}

	#[test]
	fn garbage_is_rejected() {
		assert!(super::deserialize(&serde_json::json!("yesterday")).is_err());
		assert!(super::deserialize(&serde_json::json!(1717520960)).is_err());
	}
}
