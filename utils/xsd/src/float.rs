use crate::{Error, Result};

pub fn deserialize(value: &serde_json::Value) -> Result<f64> {
	value.as_f64().ok_or(Error::Shape { expected: "xsd:float number", found: crate::shape(value) })
}

// largest integer an f64 holds exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// integral values are written as json integers, like javascript producers do
pub fn serialize(f: &f64) -> Result<serde_json::Value> {
	if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER {
		return Ok(serde_json::Value::Number((*f as i64).into()));
	}
	serde_json::Number::from_f64(*f)
		.map(serde_json::Value::Number)
		.ok_or(Error::NonFinite(*f))
}

#[cfg(test)]
mod test {
	#[test]
	fn integers_and_floats_are_numbers() {
		assert_eq!(super::deserialize(&serde_json::json!(12)), Ok(12.0));
		assert_eq!(super::deserialize(&serde_json::json!(-0.5)), Ok(-0.5));
		assert!(super::deserialize(&serde_json::json!("12")).is_err());
	}

	#[test]
	fn non_finite_floats_cant_be_serialized() {
		assert!(super::serialize(&f64::NAN).is_err());
		assert!(super::serialize(&f64::INFINITY).is_err());
		assert_eq!(super::serialize(&3.5), Ok(serde_json::json!(3.5)));
	}

	#[test]
	fn integral_floats_serialize_as_integers() {
		assert_eq!(super::serialize(&12.0), Ok(serde_json::json!(12)));
		assert_eq!(super::serialize(&-3.0), Ok(serde_json::json!(-3)));
		assert_eq!(super::serialize(&1e300), Ok(serde_json::json!(1e300)));
	}
}
