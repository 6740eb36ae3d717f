//! Searchset Bundle construction.
//!
//! Search results are wrapped into a FHIR `Bundle` with Epic-style
//! `fullUrl`s so downstream clients exercising Epic integrations see the
//! same envelope they would get from the real sandbox.

use serde_json::{Value, json};

pub use mockfhir_core::EPIC_FHIR_BASE;

/// Wraps a result list into a searchset Bundle.
///
/// `total` reflects the entries actually present; `_count` truncation is
/// applied by the caller before bundling.
pub fn searchset_bundle(resources: &[Value], resource_type: &str) -> Value {
    let entries: Vec<Value> = resources
        .iter()
        .map(|resource| {
            let id = resource.get("id").and_then(Value::as_str).unwrap_or("");
            json!({
                "fullUrl": format!("{EPIC_FHIR_BASE}/{resource_type}/{id}"),
                "resource": resource,
                "search": {"mode": "match"}
            })
        })
        .collect();

    json!({
        "resourceType": "Bundle",
        "type": "searchset",
        "total": entries.len(),
        "link": [{
            "relation": "self",
            "url": format!("{EPIC_FHIR_BASE}/{resource_type}?_count=100")
        }],
        "entry": entries
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_wraps_entries_with_full_urls() {
        let resources = vec![
            json!({"resourceType": "Patient", "id": "p1"}),
            json!({"resourceType": "Patient", "id": "p2"}),
        ];
        let bundle = searchset_bundle(&resources, "Patient");

        assert_eq!(bundle["resourceType"], "Bundle");
        assert_eq!(bundle["type"], "searchset");
        assert_eq!(bundle["total"], 2);
        assert_eq!(
            bundle["entry"][0]["fullUrl"],
            format!("{EPIC_FHIR_BASE}/Patient/p1")
        );
        assert_eq!(bundle["entry"][1]["resource"]["id"], "p2");
        assert_eq!(bundle["entry"][0]["search"]["mode"], "match");
    }

    #[test]
    fn empty_result_is_a_valid_searchset() {
        let bundle = searchset_bundle(&[], "Encounter");
        assert_eq!(bundle["total"], 0);
        assert!(bundle["entry"].as_array().unwrap().is_empty());
        assert_eq!(
            bundle["link"][0]["url"],
            format!("{EPIC_FHIR_BASE}/Encounter?_count=100")
        );
    }

    #[test]
    fn missing_id_yields_empty_id_segment() {
        let bundle = searchset_bundle(&[json!({"resourceType": "Binary"})], "Binary");
        assert_eq!(
            bundle["entry"][0]["fullUrl"],
            format!("{EPIC_FHIR_BASE}/Binary/")
        );
    }
}
