use serde::{Deserialize, Serialize};

/// A single cell of a tabular dataset.
///
/// The untagged serde representation maps each variant directly onto the
/// corresponding JSON value, so JSON Lines cells round-trip without any
/// wrapping. Variant order matters for deserialization: integral numbers are
/// tried before floats, and [`Value::Nested`] comes last so it only absorbs
/// the non-scalar values (arrays and objects) that nothing else matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Nested(serde_json::Value),
}

impl Value {
    /// Returns the numeric reading of this cell, if it has one.
    ///
    /// Only [`Value::Integer`] and [`Value::Float`] are numeric; booleans and
    /// text are not coerced.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns `true` if this cell carries no usable observation.
    ///
    /// Nulls and float NaN are both treated as missing, matching the way
    /// numeric dataset columns encode absent measurements.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(f) => f.is_nan(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_each_json_scalar_to_the_matching_variant() {
        let parsed: Vec<Value> =
            serde_json::from_str(r#"[null, true, 3, 3.5, "NaCl", [1, 2]]"#).unwrap();
        assert_eq!(parsed[0], Value::Null);
        assert_eq!(parsed[1], Value::Bool(true));
        assert_eq!(parsed[2], Value::Integer(3));
        assert_eq!(parsed[3], Value::Float(3.5));
        assert_eq!(parsed[4], Value::Text("NaCl".to_string()));
        assert_eq!(parsed[5], Value::Nested(serde_json::json!([1, 2])));
    }

    #[test]
    fn integers_too_large_for_i64_fall_back_to_float() {
        let parsed: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(parsed, Value::Float(_)));
    }

    #[test]
    fn serializes_back_to_plain_json() {
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::Integer(-7)).unwrap(), "-7");
        assert_eq!(serde_json::to_string(&Value::Float(0.25)).unwrap(), "0.25");
        assert_eq!(
            serde_json::to_string(&Value::Text("Fe2O3".to_string())).unwrap(),
            "\"Fe2O3\""
        );
    }

    #[test]
    fn as_f64_reads_numbers_only() {
        assert_eq!(Value::Integer(4).as_f64(), Some(4.0));
        assert_eq!(Value::Float(0.05).as_f64(), Some(0.05));
        assert_eq!(Value::Bool(true).as_f64(), None);
        assert_eq!(Value::Text("12".to_string()).as_f64(), None);
        assert_eq!(Value::Null.as_f64(), None);
    }

    #[test]
    fn null_and_nan_are_missing() {
        assert!(Value::Null.is_missing());
        assert!(Value::Float(f64::NAN).is_missing());
        assert!(!Value::Float(0.0).is_missing());
        assert!(!Value::Text(String::new()).is_missing());
    }
}
