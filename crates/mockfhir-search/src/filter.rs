//! Per-resource-type filter predicates.
//!
//! Each predicate answers "does this resource match these parameters" with
//! every recognized parameter applied conjunctively. Parameters a type does
//! not recognize are ignored.

use crate::date::appointment_start_matches;
use crate::matchers::{
    any_coding_code, any_first_coding_code, field_contains, field_eq, first_coding_code,
    matches_organization, matches_patient,
};
use crate::params::SearchParams;
use mockfhir_core::ResourceType;
use mockfhir_core::reference::strip_type_prefix;
use serde_json::Value;

/// Dispatch to the filter for a resource type.
pub fn matches(resource_type: ResourceType, resource: &Value, params: &SearchParams) -> bool {
    match resource_type {
        ResourceType::Patient => patient_matches(resource, params),
        ResourceType::Coverage => coverage_matches(resource, params),
        ResourceType::Encounter => encounter_matches(resource, params),
        ResourceType::Condition => condition_matches(resource, params),
        ResourceType::Procedure => procedure_matches(resource, params),
        ResourceType::Observation => observation_matches(resource, params),
        ResourceType::PractitionerRole => practitioner_role_matches(resource, params),
        ResourceType::DocumentReference => document_reference_matches(resource, params),
        ResourceType::Consent => consent_matches(resource, params),
        ResourceType::Provenance => provenance_matches(resource, params),
        ResourceType::Appointment => appointment_matches(resource, params),
        // Organization, Practitioner, Binary, ExplanationOfBenefit take no
        // filters beyond _count, which the engine applies.
        _ => true,
    }
}

fn patient_matches(resource: &Value, params: &SearchParams) -> bool {
    // Patient fixtures are wrapped: filters read the inner record, _id the
    // wrapper id.
    let data = resource.get("data").unwrap_or(resource);

    if let Some(id) = params.get("_id")
        && !field_eq(resource, "id", id)
    {
        return false;
    }

    if let Some(identifier) = params.get("identifier") {
        let found = data
            .get("identifier")
            .and_then(Value::as_array)
            .is_some_and(|idents| {
                idents
                    .iter()
                    .any(|ident| ident.get("value").and_then(Value::as_str) == Some(identifier))
            });
        if !found {
            return false;
        }
    }

    let names = data.get("name").and_then(Value::as_array);

    if let Some(family) = params.get("family") {
        let family = family.to_lowercase();
        let found = names.is_some_and(|names| {
            names.iter().any(|name| {
                name.get("family")
                    .and_then(Value::as_str)
                    .is_some_and(|f| f.to_lowercase().contains(&family))
            })
        });
        if !found {
            return false;
        }
    }

    if let Some(given) = params.get("given") {
        let given = given.to_lowercase();
        let found = names.is_some_and(|names| {
            names
                .iter()
                .any(|name| joined_given(name).to_lowercase().contains(&given))
        });
        if !found {
            return false;
        }
    }

    if let Some(name_param) = params.get("name") {
        let name_param = name_param.to_lowercase();
        let found = names.is_some_and(|names| {
            names.iter().any(|name| {
                let text = name.get("text").and_then(Value::as_str).unwrap_or("");
                let haystack = if text.is_empty() {
                    let family = name.get("family").and_then(Value::as_str).unwrap_or("");
                    format!("{} {family}", joined_given(name))
                } else {
                    text.to_string()
                };
                haystack.to_lowercase().contains(&name_param)
            })
        });
        if !found {
            return false;
        }
    }

    if let Some(birthdate) = params.get("birthdate")
        && !field_eq(data, "birthDate", birthdate)
    {
        return false;
    }

    if let Some(gender) = params.get("gender")
        && !field_eq(data, "gender", gender)
    {
        return false;
    }

    true
}

fn joined_given(name: &Value) -> String {
    name.get("given")
        .and_then(Value::as_array)
        .map(|given| {
            given
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

fn coverage_matches(resource: &Value, params: &SearchParams) -> bool {
    // `beneficiary` is accepted as an alias for `patient`.
    if let Some(patient) = params.get("patient").or_else(|| params.get("beneficiary"))
        && !matches_patient(resource, patient)
    {
        return false;
    }
    true
}

fn encounter_matches(resource: &Value, params: &SearchParams) -> bool {
    if let Some(patient) = params.get("patient")
        && !matches_patient(resource, patient)
    {
        return false;
    }
    if let Some(org) = params.get("organization")
        && !matches_organization(resource, org)
    {
        return false;
    }
    if let Some(id) = params.get("_id")
        && !field_eq(resource, "id", id)
    {
        return false;
    }
    if let Some(status) = params.get("status")
        && !field_eq(resource, "status", status)
    {
        return false;
    }
    if let Some(class) = params.get("class") {
        // Encounter.class is a bare Coding, not a CodeableConcept
        let code = resource
            .get("class")
            .and_then(|c| c.get("code"))
            .and_then(Value::as_str)
            .unwrap_or("");
        if code != class {
            return false;
        }
    }
    if let Some(date) = params.get("date") {
        let start = resource
            .get("period")
            .and_then(|p| p.get("start"))
            .and_then(Value::as_str)
            .unwrap_or("");
        if !start.contains(date) {
            return false;
        }
    }
    true
}

fn condition_matches(resource: &Value, params: &SearchParams) -> bool {
    if let Some(patient) = params.get("patient")
        && !matches_patient(resource, patient)
    {
        return false;
    }
    if let Some(id) = params.get("_id")
        && !field_eq(resource, "id", id)
    {
        return false;
    }
    if let Some(status) = params.get("clinical-status") {
        let clinical = resource
            .get("clinicalStatus")
            .map(first_coding_code)
            .unwrap_or("");
        if clinical != status {
            return false;
        }
    }
    if let Some(category) = params.get("category")
        && !any_first_coding_code(resource.get("category"), category)
    {
        return false;
    }
    if let Some(code) = params.get("code") {
        let found = resource
            .get("code")
            .is_some_and(|concept| any_coding_code(concept, code));
        if !found {
            return false;
        }
    }
    true
}

fn procedure_matches(resource: &Value, params: &SearchParams) -> bool {
    if let Some(patient) = params.get("patient")
        && !matches_patient(resource, patient)
    {
        return false;
    }
    if let Some(id) = params.get("_id")
        && !field_eq(resource, "id", id)
    {
        return false;
    }
    if let Some(status) = params.get("status")
        && !field_eq(resource, "status", status)
    {
        return false;
    }
    if let Some(date) = params.get("date")
        && !field_contains(resource, "performedDateTime", date)
    {
        return false;
    }
    true
}

fn observation_matches(resource: &Value, params: &SearchParams) -> bool {
    if let Some(patient) = params.get("patient")
        && !matches_patient(resource, patient)
    {
        return false;
    }
    if let Some(id) = params.get("_id")
        && !field_eq(resource, "id", id)
    {
        return false;
    }
    if let Some(encounter) = params.get("encounter") {
        let wanted = strip_type_prefix(encounter, "Encounter");
        let actual = resource
            .get("encounter")
            .and_then(|e| e.get("reference"))
            .and_then(Value::as_str)
            .unwrap_or("");
        if strip_type_prefix(actual, "Encounter") != wanted {
            return false;
        }
    }
    if let Some(category) = params.get("category")
        && !any_first_coding_code(resource.get("category"), category)
    {
        return false;
    }
    if let Some(code) = params.get("code") {
        let found = resource
            .get("code")
            .is_some_and(|concept| any_coding_code(concept, code));
        if !found {
            return false;
        }
    }
    if let Some(date) = params.get("date")
        && !field_contains(resource, "effectiveDateTime", date)
    {
        return false;
    }
    true
}

fn practitioner_role_matches(resource: &Value, params: &SearchParams) -> bool {
    if let Some(practitioner) = params.get("practitioner") {
        let wanted = strip_type_prefix(practitioner, "Practitioner");
        let actual = resource
            .get("practitioner")
            .and_then(|p| p.get("reference"))
            .and_then(Value::as_str)
            .unwrap_or("");
        if strip_type_prefix(actual, "Practitioner") != wanted {
            return false;
        }
    }
    true
}

fn document_reference_matches(resource: &Value, params: &SearchParams) -> bool {
    if let Some(patient) = params.get("patient")
        && !matches_patient(resource, patient)
    {
        return false;
    }
    if let Some(id) = params.get("_id")
        && !field_eq(resource, "id", id)
    {
        return false;
    }
    if let Some(status) = params.get("status")
        && !field_eq(resource, "status", status)
    {
        return false;
    }
    if let Some(date) = params.get("date")
        && !field_contains(resource, "date", date)
    {
        return false;
    }
    if let Some(doc_type) = params.get("type") {
        let found = resource
            .get("type")
            .is_some_and(|concept| any_coding_code(concept, doc_type));
        if !found {
            return false;
        }
    }
    true
}

fn consent_matches(resource: &Value, params: &SearchParams) -> bool {
    if let Some(patient) = params.get("patient")
        && !matches_patient(resource, patient)
    {
        return false;
    }
    if let Some(id) = params.get("_id")
        && !field_eq(resource, "id", id)
    {
        return false;
    }
    if let Some(status) = params.get("status")
        && !field_eq(resource, "status", status)
    {
        return false;
    }
    if let Some(category) = params.get("category")
        && !any_first_coding_code(resource.get("category"), category)
    {
        return false;
    }
    true
}

fn provenance_matches(resource: &Value, params: &SearchParams) -> bool {
    if let Some(target) = params.get("target") {
        let found = resource
            .get("target")
            .and_then(Value::as_array)
            .is_some_and(|targets| {
                targets.iter().any(|t| {
                    t.get("reference")
                        .and_then(Value::as_str)
                        .is_some_and(|r| r.contains(target))
                })
            });
        if !found {
            return false;
        }
    }
    true
}

fn appointment_matches(resource: &Value, params: &SearchParams) -> bool {
    // `patient` runs through the generic subject/patient/beneficiary
    // matcher; appointment patients live in participant actors and are
    // addressed via `actor`.
    if let Some(patient) = params.get("patient")
        && !matches_patient(resource, patient)
    {
        return false;
    }
    if let Some(id) = params.get("_id")
        && !field_eq(resource, "id", id)
    {
        return false;
    }
    if let Some(status) = params.get("status")
        && !field_eq(resource, "status", status)
    {
        return false;
    }
    if let Some(date) = params.get("date") {
        let start = resource.get("start").and_then(Value::as_str).unwrap_or("");
        if !appointment_start_matches(start, date) {
            return false;
        }
    }
    if let Some(actor) = params.get("actor") {
        let found = resource
            .get("participant")
            .and_then(Value::as_array)
            .is_some_and(|participants| {
                participants.iter().any(|p| {
                    p.get("actor")
                        .and_then(|a| a.get("reference"))
                        .and_then(Value::as_str)
                        .is_some_and(|r| r.contains(actor))
                })
            });
        if !found {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wrapped_patient() -> Value {
        json!({
            "id": "p1",
            "data": {
                "id": "p1",
                "identifier": [
                    {"type": {"text": "MRN"}, "value": "MRN-abc123"},
                    {"type": {"text": "Insurance Member ID"}, "value": "MBR-def4567"}
                ],
                "name": [{
                    "use": "official",
                    "text": "Mary Johnson",
                    "family": "Johnson",
                    "given": ["Mary"]
                }],
                "gender": "female",
                "birthDate": "1962-04-14"
            },
            "retrieved_at": "2025-06-01T00:00:00+00:00"
        })
    }

    #[test]
    fn patient_family_is_case_insensitive_substring() {
        let patient = wrapped_patient();
        assert!(patient_matches(&patient, &SearchParams::from([("family", "john")])));
        assert!(!patient_matches(&patient, &SearchParams::from([("family", "smith")])));
    }

    #[test]
    fn patient_given_searches_joined_list() {
        let patient = wrapped_patient();
        assert!(patient_matches(&patient, &SearchParams::from([("given", "mary")])));
        assert!(!patient_matches(&patient, &SearchParams::from([("given", "robert")])));
    }

    #[test]
    fn patient_name_prefers_text() {
        let patient = wrapped_patient();
        assert!(patient_matches(&patient, &SearchParams::from([("name", "mary johnson")])));
    }

    #[test]
    fn patient_name_falls_back_to_given_family() {
        let patient = json!({
            "id": "p2",
            "data": {"name": [{"family": "Lee", "given": ["Ana", "Rose"]}]}
        });
        assert!(patient_matches(&patient, &SearchParams::from([("name", "ana rose lee")])));
    }

    #[test]
    fn patient_identifier_matches_any_value() {
        let patient = wrapped_patient();
        assert!(patient_matches(
            &patient,
            &SearchParams::from([("identifier", "MBR-def4567")])
        ));
        assert!(!patient_matches(&patient, &SearchParams::from([("identifier", "nope")])));
    }

    #[test]
    fn patient_filters_are_conjunctive() {
        let patient = wrapped_patient();
        assert!(patient_matches(
            &patient,
            &SearchParams::from([("gender", "female"), ("birthdate", "1962-04-14")])
        ));
        assert!(!patient_matches(
            &patient,
            &SearchParams::from([("gender", "female"), ("birthdate", "1990-01-01")])
        ));
    }

    #[test]
    fn encounter_class_reads_bare_coding() {
        let encounter = json!({
            "id": "e1",
            "status": "finished",
            "class": {"code": "AMB", "display": "Ambulatory"},
            "period": {"start": "2025-03-10T09:30:00Z"}
        });
        let params = SearchParams::from([("class", "AMB"), ("date", "2025-03")]);
        assert!(encounter_matches(&encounter, &params));
        assert!(!encounter_matches(&encounter, &SearchParams::from([("class", "IMP")])));
    }

    #[test]
    fn condition_clinical_status_uses_first_coding() {
        let condition = json!({
            "id": "c1",
            "clinicalStatus": {"coding": [{"code": "active"}]},
            "category": [{"coding": [{"code": "problem-list-item"}]}],
            "code": {"coding": [
                {"system": "http://hl7.org/fhir/sid/icd-10-cm", "code": "I10"},
                {"system": "http://snomed.info/sct", "code": "38341003"}
            ]}
        });
        assert!(condition_matches(
            &condition,
            &SearchParams::from([("clinical-status", "active"), ("code", "38341003")])
        ));
        assert!(!condition_matches(
            &condition,
            &SearchParams::from([("category", "encounter-diagnosis")])
        ));
    }

    #[test]
    fn observation_encounter_strips_prefix_both_sides() {
        let observation = json!({
            "id": "o1",
            "encounter": {"reference": "Encounter/e9"}
        });
        assert!(observation_matches(
            &observation,
            &SearchParams::from([("encounter", "Encounter/e9")])
        ));
        assert!(observation_matches(&observation, &SearchParams::from([("encounter", "e9")])));
        assert!(!observation_matches(&observation, &SearchParams::from([("encounter", "e1")])));
    }

    #[test]
    fn practitioner_role_matches_practitioner() {
        let role = json!({"practitioner": {"reference": "Practitioner/dr1"}});
        assert!(practitioner_role_matches(
            &role,
            &SearchParams::from([("practitioner", "dr1")])
        ));
        assert!(!practitioner_role_matches(
            &role,
            &SearchParams::from([("practitioner", "dr2")])
        ));
    }

    #[test]
    fn provenance_target_is_substring_match() {
        let provenance = json!({"target": [{"reference": "Condition/cond42"}]});
        assert!(provenance_matches(&provenance, &SearchParams::from([("target", "cond42")])));
        assert!(provenance_matches(
            &provenance,
            &SearchParams::from([("target", "Condition/cond42")])
        ));
        assert!(!provenance_matches(&provenance, &SearchParams::from([("target", "Patient/p1")])));
    }

    #[test]
    fn appointment_actor_and_date() {
        let appointment = json!({
            "id": "a1",
            "status": "booked",
            "start": "2025-11-05T14:00:00Z",
            "participant": [
                {"actor": {"reference": "Patient/p1", "display": "Johnson, Mary"}},
                {"actor": {"reference": "Location/org1"}}
            ]
        });
        assert!(appointment_matches(
            &appointment,
            &SearchParams::from([("actor", "Patient/p1"), ("date", "ge2025-11-01")])
        ));
        assert!(!appointment_matches(
            &appointment,
            &SearchParams::from([("date", "lt2025-11-05")])
        ));
        // patient routes through the generic matcher, which appointments
        // do not satisfy
        assert!(!appointment_matches(&appointment, &SearchParams::from([("patient", "p1")])));
    }

    #[test]
    fn coverage_beneficiary_aliases_patient() {
        let coverage = json!({"beneficiary": "Patient/p5", "payor": []});
        assert!(coverage_matches(&coverage, &SearchParams::from([("beneficiary", "p5")])));
        assert!(coverage_matches(&coverage, &SearchParams::from([("patient", "Patient/p5")])));
        assert!(!coverage_matches(&coverage, &SearchParams::from([("patient", "p6")])));
    }

    #[test]
    fn unknown_params_are_ignored() {
        let encounter = json!({"id": "e1", "status": "finished"});
        assert!(matches(
            ResourceType::Encounter,
            &encounter,
            &SearchParams::from([("_sort", "date"), ("status", "finished")])
        ));
    }
}
