use chrono::TimeDelta;

use crate::{Error, Result};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
// xsd:duration has no fixed length for these, activitystreams producers use 365 and 30 days
const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;
const DATE_DESIGNATORS: &str = "YMD";
const TIME_DESIGNATORS: &str = "HMS";

pub fn deserialize(value: &serde_json::Value) -> Result<TimeDelta> {
	let raw = crate::expect_str(value, "xsd:duration string")?;
	parse(raw).ok_or_else(|| Error::Duration(raw.to_string()))
}

pub fn serialize(d: &TimeDelta) -> Result<serde_json::Value> {
	Ok(serde_json::Value::String(format(d)))
}

fn parse(raw: &str) -> Option<TimeDelta> {
	let (negative, rest) = match raw.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, raw),
	};
	let rest = rest.strip_prefix('P')?;
	let (date, time) = match rest.split_once('T') {
		Some((date, time)) => {
			if time.is_empty() { return None } // "P1DT" is invalid
			(date, Some(time))
		},
		None => (rest, None),
	};

	let mut total = TimeDelta::zero();
	let mut components = 0;

	for (number, designator) in components_of(date, DATE_DESIGNATORS)? {
		let n : i64 = number.parse().ok()?;
		let days = match designator {
			'Y' => n.checked_mul(DAYS_PER_YEAR)?,
			'M' => n.checked_mul(DAYS_PER_MONTH)?,
			'D' => n,
			_ => return None,
		};
		total = total.checked_add(&TimeDelta::try_days(days)?)?;
		components += 1;
	}

	if let Some(time) = time {
		for (number, designator) in components_of(time, TIME_DESIGNATORS)? {
			let delta = match designator {
				'H' => TimeDelta::try_hours(number.parse().ok()?)?,
				'M' => TimeDelta::try_minutes(number.parse().ok()?)?,
				'S' => seconds(number)?,
				_ => return None,
			};
			total = total.checked_add(&delta)?;
			components += 1;
		}
	}

	if components == 0 {
		return None;
	}

	if negative {
		total = -total;
	}

	Some(total)
}

/// split "1Y2M3D" into [("1", 'Y'), ("2", 'M'), ("3", 'D')]. designators must appear
/// at most once each, in the same order as `order`
fn components_of<'a>(part: &'a str, order: &str) -> Option<Vec<(&'a str, char)>> {
	let mut out = Vec::new();
	let mut start = 0;
	let mut allowed = order;
	for (i, c) in part.char_indices() {
		if c.is_ascii_digit() || c == '.' {
			continue;
		}
		if i == start {
			return None; // designator without a number
		}
		let position = allowed.find(c)?;
		allowed = &allowed[position + c.len_utf8()..];
		out.push((&part[start..i], c));
		start = i + c.len_utf8();
	}
	if start != part.len() {
		return None; // trailing number without designator
	}
	Some(out)
}

fn seconds(number: &str) -> Option<TimeDelta> {
	let (whole, fraction) = match number.split_once('.') {
		Some((whole, fraction)) => (whole, fraction),
		None => (number, ""),
	};
	if whole.is_empty() || fraction.len() > 9 || !fraction.chars().all(|c| c.is_ascii_digit()) {
		return None;
	}
	let whole = TimeDelta::try_seconds(whole.parse().ok()?)?;
	let nanos : i64 = if fraction.is_empty() {
		0
	} else {
		format!("{fraction:0<9}").parse().ok()?
	};
	whole.checked_add(&TimeDelta::nanoseconds(nanos))
}

fn format(d: &TimeDelta) -> String {
	let negative = *d < TimeDelta::zero();
	let d = d.abs();
	let secs = d.num_seconds();
	let nanos = d.subsec_nanos();

	let days = secs / SECONDS_PER_DAY;
	let hours = (secs % SECONDS_PER_DAY) / 3600;
	let minutes = (secs % 3600) / 60;
	let seconds = secs % 60;

	let mut out = String::new();
	if negative {
		out.push('-');
	}
	out.push('P');
	if days > 0 {
		out.push_str(&format!("{days}D"));
	}
	if hours > 0 || minutes > 0 || seconds > 0 || nanos > 0 || days == 0 {
		out.push('T');
		if hours > 0 {
			out.push_str(&format!("{hours}H"));
		}
		if minutes > 0 {
			out.push_str(&format!("{minutes}M"));
		}
		if seconds > 0 || nanos > 0 || (hours == 0 && minutes == 0) {
			if nanos > 0 {
				let fraction = format!("{nanos:09}");
				out.push_str(&format!("{seconds}.{}S", fraction.trim_end_matches('0')));
			} else {
				out.push_str(&format!("{seconds}S"));
			}
		}
	}
	out
}

#[cfg(test)]
mod test {
	use chrono::TimeDelta;

	fn parse(s: &str) -> Option<TimeDelta> {
		super::deserialize(&serde_json::json!(s)).ok()
	}

	#[test]
	fn simple_durations_parse() {
		assert_eq!(parse("PT5S"), Some(TimeDelta::seconds(5)));
		assert_eq!(parse("PT2H30M"), Some(TimeDelta::minutes(150)));
		assert_eq!(parse("P1D"), Some(TimeDelta::days(1)));
		assert_eq!(parse("-PT1M"), Some(TimeDelta::minutes(-1)));
	}

	#[test]
	fn years_and_months_have_fixed_length() {
		assert_eq!(parse("P1Y"), Some(TimeDelta::days(365)));
		assert_eq!(parse("P2M"), Some(TimeDelta::days(60)));
	}

	#[test]
	fn fractional_seconds_parse() {
		assert_eq!(parse("PT1.5S"), Some(TimeDelta::milliseconds(1500)));
	}

	#[test]
	fn malformed_durations_are_rejected() {
		assert_eq!(parse("P"), None);
		assert_eq!(parse("PT"), None);
		assert_eq!(parse("P1DT"), None);
		assert_eq!(parse("5S"), None);
		assert_eq!(parse("PTS"), None);
		assert_eq!(parse("P1H"), None);
		assert_eq!(parse("PT1"), None);
		assert_eq!(parse("PT1H1H"), None);
		assert_eq!(parse("P1D1Y"), None);
		assert_eq!(parse("PT5S3M"), None);
		assert_eq!(parse("P1M1M"), None);
		assert_eq!(parse("P1Y2M3DT4H5M6S"), Some(TimeDelta::days(365 + 60 + 3) + TimeDelta::seconds(4 * 3600 + 5 * 60 + 6)));
	}

	#[test]
	fn durations_serialize_in_shortest_form() {
		assert_eq!(super::format(&TimeDelta::seconds(5)), "PT5S");
		assert_eq!(super::format(&TimeDelta::zero()), "PT0S");
		assert_eq!(super::format(&TimeDelta::days(1)), "P1D");
		assert_eq!(super::format(&(TimeDelta::days(1) + TimeDelta::hours(2))), "P1DT2H");
		assert_eq!(super::format(&TimeDelta::minutes(-90)), "-PT1H30M");
		assert_eq!(super::format(&TimeDelta::milliseconds(1500)), "PT1.5S");
	}
}
