//! Feed field accessors — thin typed lenses over raw JSON.
//!
//! The feed is loosely structured: every field is optional and may carry the
//! wrong JSON type. These helpers collapse "missing" and "wrong type" into
//! `None` so the decoder only has to decide which absences are fatal.

use serde_json::Value;

/// Extension trait for reading typed fields off a feed object.
pub trait JsonExt {
    fn str_field(&self, key: &str) -> Option<&str>;
    fn f64_field(&self, key: &str) -> Option<f64>;
    fn i64_field(&self, key: &str) -> Option<i64>;
    /// Integer given either as a JSON number or as a numeric string.
    fn i64_or_str(&self, key: &str) -> Option<i64>;
    fn array_field(&self, key: &str) -> Option<&Vec<Value>>;
    /// Elements of `key` that are JSON objects. Everything else is skipped.
    fn objects(&self, key: &str) -> Vec<&Value>;
}

impl JsonExt for Value {
    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    fn f64_field(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    fn i64_field(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_i64()
    }

    fn i64_or_str(&self, key: &str) -> Option<i64> {
        let value = self.get(key)?;
        value
            .as_i64()
            .or_else(|| value.as_str()?.trim().parse().ok())
    }

    fn array_field(&self, key: &str) -> Option<&Vec<Value>> {
        self.get(key)?.as_array()
    }

    fn objects(&self, key: &str) -> Vec<&Value> {
        self.array_field(key)
            .map(|arr| arr.iter().filter(|v| v.is_object()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrong_types_read_as_missing() {
        let v = json!({ "title": 5, "duration": "10", "id": 1.5 });
        assert_eq!(v.str_field("title"), None);
        assert_eq!(v.f64_field("duration"), None);
        assert_eq!(v.i64_field("id"), None);
        assert_eq!(v.str_field("absent"), None);
    }

    #[test]
    fn numbers_read_as_f64() {
        let v = json!({ "a": 10, "b": 2.5 });
        assert_eq!(v.f64_field("a"), Some(10.0));
        assert_eq!(v.f64_field("b"), Some(2.5));
    }

    #[test]
    fn i64_or_str_accepts_numeric_strings() {
        let v = json!({ "a": 7, "b": "12", "c": " 3 ", "d": "x", "e": 1.5 });
        assert_eq!(v.i64_or_str("a"), Some(7));
        assert_eq!(v.i64_or_str("b"), Some(12));
        assert_eq!(v.i64_or_str("c"), Some(3));
        assert_eq!(v.i64_or_str("d"), None);
        assert_eq!(v.i64_or_str("e"), None);
        assert_eq!(v.i64_or_str("missing"), None);
    }

    #[test]
    fn objects_skips_non_objects() {
        let v = json!({ "items": [1, {"a": 1}, "x", null, {"b": 2}] });
        assert_eq!(v.objects("items").len(), 2);
        assert!(v.objects("missing").is_empty());
    }

    #[test]
    fn fields_on_non_objects_are_missing() {
        let v = json!([1, 2, 3]);
        assert_eq!(v.str_field("title"), None);
        assert!(v.array_field("items").is_none());
    }
}
