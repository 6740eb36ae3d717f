//! Generic matchers shared across resource types.
//!
//! Two reference matchers (patient, organization) plus the coded-value
//! lookups the per-type filters compose. All comparisons are defensive
//! about missing fields: an absent path simply does not match.

use mockfhir_core::reference::{reference_id, strip_type_prefix, value_reference_id};
use serde_json::Value;

/// Whether a resource belongs to the given patient.
///
/// Checks `subject.reference` and `patient.reference` for containment of
/// `Patient/{id}`, and `beneficiary` (string or object form) for id
/// equality. The parameter may arrive with or without the `Patient/`
/// prefix.
pub fn matches_patient(resource: &Value, patient_param: &str) -> bool {
    let id = strip_type_prefix(patient_param, "Patient");
    let needle = format!("Patient/{id}");

    let subject_ref = reference_id(resource, "subject");
    let patient_ref = reference_id(resource, "patient");
    let beneficiary_id = resource
        .get("beneficiary")
        .map(|b| value_reference_id(b, "Patient"))
        .unwrap_or_default();

    subject_ref.contains(&needle) || patient_ref.contains(&needle) || beneficiary_id == id
}

/// Whether a resource is served or paid by the given organization.
///
/// Checks `serviceProvider.reference` and each `payor[].reference` for
/// containment of `Organization/{id}`.
pub fn matches_organization(resource: &Value, org_param: &str) -> bool {
    let id = strip_type_prefix(org_param, "Organization");
    let needle = format!("Organization/{id}");

    if reference_id(resource, "serviceProvider").contains(&needle) {
        return true;
    }

    resource
        .get("payor")
        .and_then(Value::as_array)
        .is_some_and(|payors| {
            payors.iter().any(|payor| {
                payor
                    .get("reference")
                    .and_then(Value::as_str)
                    .is_some_and(|r| r.contains(&needle))
            })
        })
}

/// The code of the first coding of a CodeableConcept, or empty.
pub fn first_coding_code(concept: &Value) -> &str {
    concept
        .get("coding")
        .and_then(Value::as_array)
        .and_then(|codings| codings.first())
        .and_then(|coding| coding.get("code"))
        .and_then(Value::as_str)
        .unwrap_or("")
}

/// Whether any coding of a CodeableConcept carries the code.
pub fn any_coding_code(concept: &Value, code: &str) -> bool {
    concept
        .get("coding")
        .and_then(Value::as_array)
        .is_some_and(|codings| {
            codings
                .iter()
                .any(|coding| coding.get("code").and_then(Value::as_str) == Some(code))
        })
}

/// Whether any element of a CodeableConcept list matches on its first
/// coding's code. Used for `category`-style parameters.
pub fn any_first_coding_code(concepts: Option<&Value>, code: &str) -> bool {
    concepts
        .and_then(Value::as_array)
        .is_some_and(|list| list.iter().any(|concept| first_coding_code(concept) == code))
}

/// Plain string field equality, absent fields never match.
pub fn field_eq(resource: &Value, field: &str, expected: &str) -> bool {
    resource.get(field).and_then(Value::as_str) == Some(expected)
}

/// Substring containment over a string field, absent fields never match.
pub fn field_contains(resource: &Value, field: &str, needle: &str) -> bool {
    resource
        .get(field)
        .and_then(Value::as_str)
        .is_some_and(|v| v.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patient_matches_subject_reference() {
        let condition = json!({"subject": {"reference": "Patient/p1", "display": "Smith"}});
        assert!(matches_patient(&condition, "p1"));
        assert!(matches_patient(&condition, "Patient/p1"));
        assert!(!matches_patient(&condition, "p2"));
    }

    #[test]
    fn patient_matches_patient_reference() {
        let consent = json!({"patient": {"reference": "Patient/p7"}});
        assert!(matches_patient(&consent, "p7"));
    }

    #[test]
    fn patient_matches_string_beneficiary() {
        let coverage = json!({"beneficiary": "Patient/p3"});
        assert!(matches_patient(&coverage, "p3"));
        assert!(matches_patient(&coverage, "Patient/p3"));
    }

    #[test]
    fn patient_matches_object_beneficiary() {
        let coverage = json!({"beneficiary": {"reference": "Patient/p3"}});
        assert!(matches_patient(&coverage, "p3"));
    }

    #[test]
    fn patient_without_any_reference_path_never_matches() {
        let appointment = json!({"participant": [{"actor": {"reference": "Patient/p1"}}]});
        assert!(!matches_patient(&appointment, "p1"));
    }

    #[test]
    fn organization_matches_service_provider() {
        let encounter = json!({"serviceProvider": {"reference": "Organization/org1"}});
        assert!(matches_organization(&encounter, "org1"));
        assert!(matches_organization(&encounter, "Organization/org1"));
        assert!(!matches_organization(&encounter, "org2"));
    }

    #[test]
    fn organization_matches_any_payor() {
        let coverage = json!({"payor": [
            {"reference": "Organization/other"},
            {"reference": "Organization/org9", "display": "Carrier"}
        ]});
        assert!(matches_organization(&coverage, "org9"));
    }

    #[test]
    fn first_coding_code_reads_head_only() {
        let status = json!({"coding": [{"code": "active"}, {"code": "shadowed"}]});
        assert_eq!(first_coding_code(&status), "active");
        assert_eq!(first_coding_code(&json!({})), "");
    }

    #[test]
    fn any_coding_code_scans_all() {
        let code = json!({"coding": [
            {"system": "http://hl7.org/fhir/sid/icd-10-cm", "code": "I10"},
            {"system": "http://snomed.info/sct", "code": "38341003"}
        ]});
        assert!(any_coding_code(&code, "38341003"));
        assert!(!any_coding_code(&code, "E11.9"));
    }

    #[test]
    fn any_first_coding_code_over_list() {
        let categories = json!([
            {"coding": [{"code": "problem-list-item"}]},
            {"coding": [{"code": "encounter-diagnosis"}]}
        ]);
        assert!(any_first_coding_code(Some(&categories), "encounter-diagnosis"));
        assert!(!any_first_coding_code(Some(&categories), "vital-signs"));
        assert!(!any_first_coding_code(None, "vital-signs"));
    }
}
