//! Practitioner, PractitionerRole, Encounter, Procedure, Observation,
//! Provenance, and ExplanationOfBenefit generators.

use crate::seed::{Seed, resource_id};
use crate::tables::{
    ENCOUNTER_CLASSES, ENCOUNTER_STATUSES, ENCOUNTER_TYPES, OBSERVATION_CATEGORIES,
    OBSERVATION_CODES, OBSERVATION_STATUSES, PARTICIPANT_TYPES, PRACTITIONER_NAMES,
    PRACTITIONER_SPECIALTIES, PROCEDURE_CATEGORIES, PROCEDURE_CODES, PROCEDURE_STATUSES,
    PROVENANCE_AGENT_TYPES,
};
use crate::util::{at_derived_time, date_string, datetime_string, phone_number};
use serde_json::{Value, json};
use time::{Date, Duration};

/// How many practitioners the fixture set carries.
pub const PRACTITIONER_COUNT: usize = 10;

pub fn encounters_per_patient(patient_id: &str) -> usize {
    (Seed::new(patient_id).slice(0..2) % 3 + 2) as usize
}

pub fn procedures_per_patient(patient_id: &str) -> usize {
    (Seed::new(patient_id).slice(2..4) % 3 + 1) as usize
}

pub fn observations_per_patient(patient_id: &str) -> usize {
    (Seed::new(patient_id).slice(4..6) % 4 + 3) as usize
}

pub fn generate_practitioner(practitioner_idx: usize) -> Value {
    let (last_name, first_name) = PRACTITIONER_NAMES[practitioner_idx % PRACTITIONER_NAMES.len()];
    let specialty = &PRACTITIONER_SPECIALTIES[practitioner_idx % PRACTITIONER_SPECIALTIES.len()];

    let practitioner_id = resource_id("ePract", &format!("practitioner_{practitioner_idx}"));
    let npi = Seed::new(&format!("practitioner_{practitioner_idx}_npi")).digits(10);

    json!({
        "resourceType": "Practitioner",
        "id": practitioner_id,
        "identifier": [
            {
                "use": "usual",
                "type": {"text": "NPI"},
                "system": "http://hl7.org/fhir/sid/us-npi",
                "value": npi
            },
            {
                "use": "usual",
                "type": {"text": "PROVID"},
                "system": "urn:oid:1.2.840.114350.1.13.0.1.7.5.737384.6",
                "value": (1000 + practitioner_idx).to_string()
            }
        ],
        "active": true,
        "name": [{
            "use": "usual",
            "text": format!("{first_name} {last_name}, MD"),
            "family": last_name,
            "given": [first_name, &specialty.name[..3]]
        }],
        "qualification": [{
            "code": {
                "coding": [{
                    "system": "urn:oid:1.2.840.114350.1.13.0.1.7.4.836982.6000",
                    "code": "11",
                    "display": "MD"
                }],
                "text": "MD"
            }
        }]
    })
}

pub fn generate_practitioner_role(
    practitioner_id: &str,
    practitioner_name: &str,
    org_id: &str,
    role_idx: usize,
) -> Value {
    let specialty = &PRACTITIONER_SPECIALTIES[role_idx % PRACTITIONER_SPECIALTIES.len()];
    let role_id = resource_id("ePractRole", &format!("{practitioner_id}_{role_idx}"));

    json!({
        "resourceType": "PractitionerRole",
        "id": role_id,
        "active": true,
        "practitioner": {
            "reference": format!("Practitioner/{practitioner_id}"),
            "display": practitioner_name
        },
        "code": [{
            "coding": [
                {
                    "system": "urn:oid:1.2.840.114350.1.13.861.1.7.10.836982.1040",
                    "code": (10 + role_idx).to_string(),
                    "display": specialty.display
                },
                {
                    "system": "http://snomed.info/sct",
                    "code": "106289002",
                    "display": specialty.display
                }
            ],
            "text": specialty.display
        }],
        "specialty": [{
            "coding": [{
                "system": "urn:oid:1.2.840.114350.1.72.1.7.7.10.688867.4160",
                "code": (10 + role_idx).to_string(),
                "display": specialty.name
            }],
            "text": specialty.name
        }],
        "location": [{
            "reference": format!("Location/{org_id}")
        }],
        "telecom": [{
            "system": "phone",
            "value": phone_number(&format!("{practitioner_id}_role_{role_idx}_phone")),
            "use": "work"
        }]
    })
}

pub fn encounter_id(patient_id: &str, encounter_idx: usize) -> String {
    resource_id("eEnc", &format!("{patient_id}_{encounter_idx}"))
}

pub fn generate_encounter(
    patient_id: &str,
    patient_name: &str,
    org_id: &str,
    practitioner_id: &str,
    encounter_idx: usize,
    as_of: Date,
) -> Value {
    let seed = Seed::new(&format!("{patient_id}_encounter_{encounter_idx}"));

    let encounter_class = seed.pick(0..2, &ENCOUNTER_CLASSES);
    let encounter_type = seed.pick(2..4, &ENCOUNTER_TYPES);
    let status = *seed.pick(4..6, &ENCOUNTER_STATUSES);

    // 1-18 months back, 15-120 minutes long
    let months_ago = seed.slice(6..8) % 18 + 1;
    let start_date = as_of - Duration::days(months_ago as i64 * 30);
    let start = at_derived_time(start_date, &seed, 18, 20);
    let duration_minutes = 15 + seed.slice(22..24) % 106;
    let end = start + Duration::minutes(duration_minutes as i64);

    let participant_type = seed.pick(8..10, &PARTICIPANT_TYPES);

    json!({
        "resourceType": "Encounter",
        "id": encounter_id(patient_id, encounter_idx),
        "identifier": [{
            "use": "usual",
            "system": "urn:oid:1.2.840.114350.1.13.0.1.7.3.698084.8",
            "value": (20000 + seed.slice(10..14) % 99999).to_string()
        }],
        "status": status,
        "class": {
            "system": "urn:oid:1.2.840.114350.1.72.1.7.7.10.696784.13260",
            "code": encounter_class.code,
            "display": encounter_class.display
        },
        "type": [{
            "coding": [{
                "system": "urn:oid:1.2.840.114350.1.13.0.1.7.10.698084.10110",
                "code": encounter_type.code,
                "display": encounter_type.display
            }],
            "text": encounter_type.text
        }],
        "subject": {
            "reference": format!("Patient/{patient_id}"),
            "display": patient_name
        },
        "participant": [{
            "type": [{
                "coding": [{
                    "system": "http://terminology.hl7.org/CodeSystem/v3-ParticipationType",
                    "code": participant_type.code,
                    "display": participant_type.display
                }],
                "text": participant_type.display
            }],
            "period": {
                "start": datetime_string(start)
            },
            "individual": {
                "reference": format!("Practitioner/{practitioner_id}"),
                "type": "Practitioner",
                "display": "Physician, MD"
            }
        }],
        "period": {
            "start": datetime_string(start),
            "end": datetime_string(end)
        },
        "account": [{
            "identifier": {
                "system": "urn:oid:1.2.840.114350.1.13.0.1.7.2.726582",
                "value": (1_000_000 + seed.slice(14..18) % 999_999).to_string()
            },
            "display": patient_name.replace(", ", ",").to_uppercase()
        }],
        "location": [{
            "location": {
                "reference": format!("Location/{org_id}"),
                "display": "Medical Center Location"
            }
        }],
        "serviceProvider": {
            "reference": format!("Organization/{org_id}"),
            "display": "Medical Center"
        }
    })
}

pub fn generate_procedure(
    patient_id: &str,
    patient_name: &str,
    procedure_idx: usize,
    as_of: Date,
) -> Value {
    let seed = Seed::new(&format!("{patient_id}_procedure_{procedure_idx}"));

    let category = seed.pick(0..2, &PROCEDURE_CATEGORIES);
    let procedure_code = *seed.pick(2..4, &PROCEDURE_CODES);
    let status = *seed.pick(4..6, &PROCEDURE_STATUSES);

    let years_ago = seed.slice(6..8) % 5 + 1;
    let performed = as_of - Duration::days(years_ago as i64 * 365);

    json!({
        "resourceType": "Procedure",
        "id": resource_id("eProc", &format!("{patient_id}_{procedure_idx}")),
        "extension": [{
            "valueString": "Provider",
            "url": "http://open.epic.com/FHIR/StructureDefinition/extension/surgical-history-source"
        }],
        "status": status,
        "category": {
            "coding": [{
                "system": "http://snomed.info/sct",
                "code": category.code,
                "display": category.display
            }],
            "text": category.text
        },
        "code": {
            "text": procedure_code
        },
        "subject": {
            "reference": format!("Patient/{patient_id}"),
            "display": patient_name
        },
        "performedDateTime": date_string(performed)
    })
}

pub fn generate_observation(
    patient_id: &str,
    patient_name: &str,
    encounter_ref: &str,
    observation_idx: usize,
    as_of: Date,
) -> Value {
    let seed = Seed::new(&format!("{patient_id}_observation_{observation_idx}"));

    let category = seed.pick(0..2, &OBSERVATION_CATEGORIES);
    let obs_code = seed.pick(2..4, &OBSERVATION_CODES);
    let status = *seed.pick(4..6, &OBSERVATION_STATUSES);

    let months_ago = seed.slice(6..8) % 6 + 1;
    let effective_date = as_of - Duration::days(months_ago as i64 * 30);
    let effective = at_derived_time(effective_date, &seed, 12, 14);

    let value_text = observation_value_text(&seed, obs_code.display);

    json!({
        "resourceType": "Observation",
        "id": resource_id("eObs", &format!("{patient_id}_{observation_idx}")),
        "status": status,
        "category": [{
            "coding": [{
                "system": "http://terminology.hl7.org/CodeSystem/observation-category",
                "code": category.code,
                "display": category.display
            }],
            "text": category.text
        }],
        "code": {
            "coding": [{
                "system": "http://loinc.org",
                "code": obs_code.code,
                "display": obs_code.display
            }],
            "text": obs_code.text
        },
        "subject": {
            "reference": format!("Patient/{patient_id}"),
            "display": patient_name
        },
        "encounter": {
            "reference": encounter_ref,
            "identifier": {
                "use": "usual",
                "system": "urn:oid:1.2.840.114350.1.13.11511.1.7.3.698084.8",
                "value": (40000 + seed.slice(8..12) % 9999).to_string()
            },
            "display": "Encounter"
        },
        "effectiveDateTime": datetime_string(effective),
        "issued": datetime_string(effective + Duration::minutes(5)),
        "valueCodeableConcept": {
            "coding": [{
                "system": "http://snomed.info/sct",
                "code": "17621005"
            }],
            "text": value_text
        },
        "interpretation": [{
            "coding": [{
                "system": "http://terminology.hl7.org/CodeSystem/v3-ObservationInterpretation",
                "code": "N",
                "display": "Normal"
            }],
            "text": "Normal"
        }]
    })
}

fn observation_value_text(seed: &Seed, display: &str) -> String {
    if display.contains("Blood Pressure") {
        let systolic = 100 + seed.slice(16..18) % 41;
        let diastolic = 60 + seed.slice(18..20) % 31;
        format!("{systolic}/{diastolic} mmHg")
    } else if display.contains("Heart Rate") {
        format!("{} bpm", 60 + seed.slice(16..18) % 41)
    } else if display.contains("Temperature") {
        format!("{}.{} F", 97 + seed.slice(16..18) % 3, seed.slice(18..19) % 10)
    } else if display.contains("Glucose") {
        format!("{} mg/dL", 70 + seed.slice(16..18) % 71)
    } else {
        "Normal".to_string()
    }
}

pub fn generate_provenance(
    target_ref: &str,
    practitioner_id: &str,
    practitioner_name: &str,
    prov_idx: usize,
    as_of: Date,
) -> Value {
    let seed = Seed::new(&format!("{target_ref}_provenance_{prov_idx}"));

    let agent_type = seed.pick(0..2, &PROVENANCE_AGENT_TYPES);

    let months_ago = seed.slice(2..4) % 12 + 1;
    let recorded_date = as_of - Duration::days(months_ago as i64 * 30);
    let recorded = at_derived_time(recorded_date, &seed, 4, 6);

    json!({
        "resourceType": "Provenance",
        "id": resource_id("eProv", &format!("{target_ref}_{prov_idx}")),
        "target": [{
            "reference": target_ref
        }],
        "recorded": datetime_string(recorded),
        "agent": [{
            "type": {
                "coding": [{
                    "system": "http://terminology.hl7.org/CodeSystem/provenance-participant-type",
                    "code": agent_type.code,
                    "display": agent_type.display
                }],
                "text": agent_type.text
            },
            "who": {
                "reference": format!("Practitioner/{practitioner_id}"),
                "display": practitioner_name
            },
            "onBehalfOf": {
                "display": "Medical Center"
            }
        }]
    })
}

/// The fixed ExplanationOfBenefit bundle: the sandbox client is not
/// authorized for prior-auth data, so the searchset carries warnings
/// instead of results.
pub fn eob_bundle() -> Value {
    json!({
        "resourceType": "Bundle",
        "type": "searchset",
        "total": 0,
        "link": [{
            "relation": "self",
            "url": format!("{}/ExplanationOfBenefit?patient=*&_count=100", mockfhir_core::EPIC_FHIR_BASE)
        }],
        "entry": [{
            "fullUrl": "urn:uuid:d864bb09-2e8b-47ac-9cb0-6e3a46dc6613",
            "resource": {
                "resourceType": "OperationOutcome",
                "issue": [
                    {
                        "severity": "warning",
                        "code": "suppressed",
                        "details": {
                            "coding": [{
                                "system": "urn:oid:1.2.840.114350.1.13.0.1.7.2.657369",
                                "code": "59204",
                                "display": "The authenticated client's search request applies to a sub-resource that the client is not authorized for."
                            }],
                            "text": "The authenticated client's search request applies to a sub-resource that the client is not authorized for."
                        },
                        "diagnostics": "Client not authorized for ExplanationOfBenefit - Prior Auth."
                    },
                    {
                        "severity": "warning",
                        "code": "processing",
                        "details": {
                            "coding": [{
                                "system": "urn:oid:1.2.840.114350.1.13.0.1.7.2.657369",
                                "code": "4101",
                                "display": "Resource request returns no results."
                            }],
                            "text": "Resource request returns no results."
                        }
                    }
                ]
            },
            "search": {
                "mode": "outcome"
            }
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const AS_OF: Date = date!(2025 - 08 - 01);

    #[test]
    fn practitioner_pairs_name_and_specialty_by_index() {
        let practitioner = generate_practitioner(0);
        assert_eq!(practitioner["name"][0]["family"], "Smith");
        assert_eq!(practitioner["identifier"][1]["value"], "1000");
        assert!(practitioner["id"].as_str().unwrap().starts_with("ePract"));

        let other = generate_practitioner(7);
        assert_eq!(other["identifier"][1]["value"], "1007");
        assert_ne!(practitioner["id"], other["id"]);
    }

    #[test]
    fn practitioner_role_references_practitioner_and_location() {
        let role = generate_practitioner_role("ePractX", "John Smith, MD", "eLorg1", 1);
        assert_eq!(role["practitioner"]["reference"], "Practitioner/ePractX");
        assert_eq!(role["location"][0]["reference"], "Location/eLorg1");
        assert_eq!(role["code"][0]["coding"][0]["code"], "11");
    }

    #[test]
    fn encounter_period_has_start_before_end() {
        let encounter = generate_encounter("ePt1", "Johnson, Mary", "org1", "ePractX", 0, AS_OF);
        let start = encounter["period"]["start"].as_str().unwrap();
        let end = encounter["period"]["end"].as_str().unwrap();
        assert!(start < end);
        assert_eq!(encounter["account"][0]["display"], "JOHNSON,MARY");
        assert_eq!(encounter["subject"]["reference"], "Patient/ePt1");
    }

    #[test]
    fn encounter_ids_differ_per_index() {
        let a = encounter_id("ePt1", 0);
        let b = encounter_id("ePt1", 1);
        assert_ne!(a, b);
        assert!(a.starts_with("eEnc"));
    }

    #[test]
    fn procedure_performed_date_is_in_the_past() {
        let procedure = generate_procedure("ePt1", "Johnson, Mary", 0, AS_OF);
        let performed = procedure["performedDateTime"].as_str().unwrap();
        assert!(performed < "2025-08-01");
        assert_eq!(procedure["code"]["text"].as_str().unwrap().is_empty(), false);
    }

    #[test]
    fn observation_value_text_matches_code_kind() {
        for idx in 0..12 {
            let obs = generate_observation("ePt1", "Johnson, Mary", "Encounter/e1", idx, AS_OF);
            let display = obs["code"]["coding"][0]["display"].as_str().unwrap();
            let value = obs["valueCodeableConcept"]["text"].as_str().unwrap();
            match display {
                "Blood Pressure" => assert!(value.ends_with(" mmHg")),
                "Heart Rate" => assert!(value.ends_with(" bpm")),
                "Body Temperature" => assert!(value.ends_with(" F")),
                "Glucose" => assert!(value.ends_with(" mg/dL")),
                _ => assert_eq!(value, "Normal"),
            }
        }
    }

    #[test]
    fn observation_issued_five_minutes_after_effective() {
        let obs = generate_observation("ePt1", "Johnson, Mary", "Encounter/e1", 0, AS_OF);
        let effective = obs["effectiveDateTime"].as_str().unwrap();
        let issued = obs["issued"].as_str().unwrap();
        assert!(issued > effective);
    }

    #[test]
    fn provenance_targets_requested_reference() {
        let prov = generate_provenance("Patient/ePt1", "ePractX", "John Smith, MD", 0, AS_OF);
        assert_eq!(prov["target"][0]["reference"], "Patient/ePt1");
        assert_eq!(prov["agent"][0]["who"]["reference"], "Practitioner/ePractX");
        assert!(prov["id"].as_str().unwrap().starts_with("eProv"));
    }

    #[test]
    fn eob_bundle_carries_two_warnings() {
        let bundle = eob_bundle();
        assert_eq!(bundle["total"], 0);
        let issues = bundle["entry"][0]["resource"]["issue"].as_array().unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(bundle["entry"][0]["search"]["mode"], "outcome");
    }
}
