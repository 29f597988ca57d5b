//! Candidate value helpers.
//!
//! A candidate is whatever JSON value the caller presents at check time.
//! It is read-only during validation; this module only provides field
//! lookup and the truthiness test that `Rule::Required` uses.

use serde_json::Value;

/// Look up a field on a candidate.
///
/// A non-object candidate has no fields, so every lookup on it is absent.
pub fn field<'a>(candidate: &'a Value, name: &str) -> Option<&'a Value> {
    candidate.as_object().and_then(|fields| fields.get(name))
}

/// Truthiness test for `Required`.
///
/// Falsy: null, false, numeric zero, the empty string.
/// Everything else is truthy, including empty arrays and empty objects.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::null(json!(null), false)]
    #[case::bool_false(json!(false), false)]
    #[case::bool_true(json!(true), true)]
    #[case::zero(json!(0), false)]
    #[case::zero_float(json!(0.0), false)]
    #[case::one(json!(1), true)]
    #[case::negative(json!(-1), true)]
    #[case::empty_string(json!(""), false)]
    #[case::string(json!("x"), true)]
    #[case::empty_array(json!([]), true)]
    #[case::empty_object(json!({}), true)]
    fn truthiness_table(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_truthy(&value), expected);
    }

    #[test]
    fn field_lookup_on_object() {
        let candidate = json!({ "title": "TS", "price": 10 });
        assert_eq!(field(&candidate, "title"), Some(&json!("TS")));
        assert_eq!(field(&candidate, "missing"), None);
    }

    #[test]
    fn non_object_candidate_has_no_fields() {
        assert_eq!(field(&json!("just a string"), "title"), None);
        assert_eq!(field(&json!(42), "title"), None);
        assert_eq!(field(&json!(null), "title"), None);
    }
}
