//! FHIR reference string helpers.
//!
//! The fixtures carry references in two shapes: relative strings
//! (`Patient/123`) and reference objects (`{"reference": "Patient/123"}`).
//! Search parameters may arrive with or without the type prefix. These
//! helpers normalize both sides before comparison.

use serde_json::Value;

/// Strips a `Type/` prefix from a reference value, if present.
///
/// `strip_type_prefix("Patient/123", "Patient")` yields `"123"`; a bare id
/// passes through unchanged.
pub fn strip_type_prefix<'a>(value: &'a str, resource_type: &str) -> &'a str {
    match value.split_once('/') {
        Some((prefix, id)) if prefix == resource_type => id,
        _ => value,
    }
}

/// Extracts the id from a reference field that may be a plain string or a
/// reference object. Returns an empty string when neither shape matches.
pub fn value_reference_id(value: &Value, resource_type: &str) -> String {
    match value {
        Value::String(s) => strip_type_prefix(s, resource_type).to_string(),
        Value::Object(_) => value
            .get("reference")
            .and_then(Value::as_str)
            .map(|s| strip_type_prefix(s, resource_type).to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Reads the `reference` string of a reference object field, defaulting to
/// empty when the field or its `reference` is absent.
pub fn reference_id(resource: &Value, field: &str) -> String {
    resource
        .get(field)
        .and_then(|r| r.get("reference"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_type_prefix() {
        assert_eq!(strip_type_prefix("Patient/abc", "Patient"), "abc");
        assert_eq!(strip_type_prefix("abc", "Patient"), "abc");
        // a different type prefix is left alone
        assert_eq!(
            strip_type_prefix("Organization/xyz", "Patient"),
            "Organization/xyz"
        );
    }

    #[test]
    fn test_value_reference_id_string_form() {
        let v = json!("Patient/ePt123");
        assert_eq!(value_reference_id(&v, "Patient"), "ePt123");
    }

    #[test]
    fn test_value_reference_id_object_form() {
        let v = json!({"reference": "Patient/ePt123", "display": "Smith, John"});
        assert_eq!(value_reference_id(&v, "Patient"), "ePt123");
    }

    #[test]
    fn test_value_reference_id_missing() {
        assert_eq!(value_reference_id(&json!({}), "Patient"), "");
        assert_eq!(value_reference_id(&json!(42), "Patient"), "");
    }

    #[test]
    fn test_reference_id_field() {
        let resource = json!({"subject": {"reference": "Patient/p1"}});
        assert_eq!(reference_id(&resource, "subject"), "Patient/p1");
        assert_eq!(reference_id(&resource, "encounter"), "");
    }
}
