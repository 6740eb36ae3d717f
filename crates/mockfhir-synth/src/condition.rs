//! Condition generator.

use crate::seed::{Seed, resource_id};
use crate::tables::{CLINICAL_STATUSES, CONDITION_CATEGORIES, MEDICAL_CONDITIONS, VERIFICATION_STATUSES};
use crate::util::{at_derived_time, date_string, datetime_string, patient_display_name};
use serde_json::{Value, json};
use time::{Date, Duration};

pub fn condition_id(patient_id: &str, condition_idx: usize) -> String {
    resource_id("eCond", &format!("{patient_id}_{condition_idx}"))
}

/// Number of conditions for a patient (2-5).
pub fn conditions_per_patient(patient_id: &str) -> usize {
    (Seed::new(patient_id).slice(0..2) % 4 + 2) as usize
}

pub fn generate_condition(
    patient_id: &str,
    patient_name: &str,
    condition_idx: usize,
    as_of: Date,
) -> Value {
    let seed = Seed::new(&format!("{patient_id}_{condition_idx}"));

    let condition = seed.pick(0..2, &MEDICAL_CONDITIONS);
    let clinical_status = seed.pick(2..4, &CLINICAL_STATUSES);
    let verification_status = seed.pick(4..6, &VERIFICATION_STATUSES);
    let category = seed.pick(6..8, &CONDITION_CATEGORIES);

    // Onset 1-10 years back, recorded up to a month later
    let years_ago = seed.slice(8..10) % 10 + 1;
    let onset = as_of - Duration::days(years_ago as i64 * 365);
    let days_after_onset = seed.slice(10..12) % 30;
    let recorded = onset + Duration::days(days_after_onset as i64);

    let mut resource = json!({
        "resourceType": "Condition",
        "id": condition_id(patient_id, condition_idx),
        "clinicalStatus": {
            "coding": [{
                "system": "http://terminology.hl7.org/CodeSystem/condition-clinical",
                "version": "4.0.0",
                "code": clinical_status.code,
                "display": clinical_status.display
            }],
            "text": clinical_status.text
        },
        "verificationStatus": {
            "coding": [{
                "system": "http://terminology.hl7.org/CodeSystem/condition-ver-status",
                "version": "4.0.0",
                "code": verification_status.code,
                "display": verification_status.display
            }],
            "text": verification_status.text
        },
        "category": [{
            "coding": [{
                "system": "http://terminology.hl7.org/CodeSystem/condition-category",
                "code": category.code,
                "display": category.display
            }],
            "text": category.text
        }],
        "code": {
            "coding": [
                {
                    "system": "http://hl7.org/fhir/sid/icd-10-cm",
                    "code": condition.icd10.code,
                    "display": condition.icd10.display
                },
                {
                    "system": "http://snomed.info/sct",
                    "code": condition.snomed.code,
                    "display": condition.snomed.display
                },
                {
                    "system": "http://hl7.org/fhir/sid/icd-9-cm",
                    "code": condition.icd9.code,
                    "display": condition.icd9.display
                }
            ],
            "text": condition.text
        },
        "subject": {
            "reference": format!("Patient/{patient_id}"),
            "display": patient_name
        },
        "onsetDateTime": date_string(onset),
        "recordedDate": date_string(recorded)
    });

    // Roughly a third of conditions carry a problem-overview note
    if seed.slice(12..14) % 100 < 30 {
        let note_time = at_derived_time(recorded, &seed, 14, 16);
        resource["note"] = json!([{
            "extension": [
                {
                    "valueString": "Formatting of this note might be different from the original.",
                    "url": "http://open.epic.com/FHIR/StructureDefinition/extension/data-conversion-warning"
                },
                {
                    "valueCodeableConcept": {
                        "coding": [{
                            "system": "http://loinc.org",
                            "code": "68608-9",
                            "display": "Summary note"
                        }],
                        "text": "Problem Overview"
                    },
                    "url": "http://hl7.org/fhir/StructureDefinition/annotationType"
                }
            ],
            "authorReference": {
                "reference": "Practitioner/ePractitioner123",
                "display": "Physician, MD"
            },
            "time": datetime_string(note_time),
            "text": "Condition noted during routine visit. Patient reports stable condition."
        }]);
    }

    resource
}

/// Conditions for all patients, wrapped as the searchset-bundle fixture.
pub fn generate_conditions_bundle(patients: &[Value], as_of: Date) -> Value {
    let mut entries = Vec::new();

    for patient in patients {
        let Some(patient_id) = patient.get("id").and_then(Value::as_str) else {
            continue;
        };
        let patient_name = patient_display_name(patient);

        for condition_idx in 0..conditions_per_patient(patient_id) {
            let resource = generate_condition(patient_id, &patient_name, condition_idx, as_of);
            entries.push(crate::output::bundle_entry("Condition", resource));
        }
    }

    crate::output::fixture_bundle("Condition", entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const AS_OF: Date = date!(2025 - 08 - 01);

    #[test]
    fn condition_count_is_two_to_five() {
        for id in ["ePtA", "ePtB", "ePtC", "ePtD", "ePtE"] {
            let n = conditions_per_patient(id);
            assert!((2..=5).contains(&n));
        }
    }

    #[test]
    fn condition_is_deterministic() {
        let a = generate_condition("ePt1", "Johnson, Mary", 0, AS_OF);
        let b = generate_condition("ePt1", "Johnson, Mary", 0, AS_OF);
        assert_eq!(a, b);
        // a different index yields a different id
        let c = generate_condition("ePt1", "Johnson, Mary", 1, AS_OF);
        assert_ne!(a["id"], c["id"]);
    }

    #[test]
    fn condition_carries_three_code_systems() {
        let condition = generate_condition("ePt1", "Johnson, Mary", 0, AS_OF);
        let codings = condition["code"]["coding"].as_array().unwrap();
        assert_eq!(codings.len(), 3);
        assert_eq!(codings[0]["system"], "http://hl7.org/fhir/sid/icd-10-cm");
        assert_eq!(codings[1]["system"], "http://snomed.info/sct");
        assert_eq!(codings[2]["system"], "http://hl7.org/fhir/sid/icd-9-cm");
    }

    #[test]
    fn recorded_date_is_on_or_after_onset() {
        for idx in 0..5 {
            let condition = generate_condition("ePt2", "Smith, John", idx, AS_OF);
            let onset = condition["onsetDateTime"].as_str().unwrap();
            let recorded = condition["recordedDate"].as_str().unwrap();
            assert!(recorded >= onset, "{recorded} < {onset}");
        }
    }

    #[test]
    fn bundle_totals_match_entries() {
        let patients = vec![
            serde_json::json!({"id": "ePt1", "data": {"name": [{"family": "A", "given": ["B"]}]}}),
            serde_json::json!({"id": "ePt2", "data": {"name": [{"family": "C", "given": ["D"]}]}}),
        ];
        let bundle = generate_conditions_bundle(&patients, AS_OF);
        let total = bundle["total"].as_u64().unwrap() as usize;
        assert_eq!(total, bundle["entry"].as_array().unwrap().len());
        assert!(total >= 4);
        assert_eq!(bundle["entry"][0]["search"]["mode"], "match");
    }
}
