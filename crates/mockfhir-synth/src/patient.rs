//! Patient, Organization, and Coverage generators.
//!
//! Patients are emitted in the Epic retrieval wrapper
//! (`{id, data, retrieved_at}`); Coverage is the flat claims-side record
//! the original dataset carried rather than a strict FHIR Coverage.

use crate::seed::Seed;
use crate::tables::{
    FIRST_NAMES, HOSPITAL_NAMES, INSURANCE_NAMES, INSURANCE_TYPES, LAST_NAMES, MARITAL_STATUSES,
    ORG_STREET_NAMES, STREET_NAMES, US_CITIES,
};
use crate::util::phone_number;
use serde_json::{Value, json};
use time::Date;

pub fn generate_mrn(patient_id: &str) -> String {
    format!("MRN-{}", Seed::new(patient_id).last(6))
}

pub fn generate_member_id(patient_id: &str) -> String {
    format!("MBR-{}", Seed::new(patient_id).last(7))
}

pub fn generate_patient(patient_id: &str, org_id: &str, org_name: &str, as_of: Date) -> Value {
    let seed = Seed::new(patient_id);

    let gender = if seed.slice(0..1) % 2 == 0 { "female" } else { "male" };
    let first_name = *seed.pick(1..3, &FIRST_NAMES);
    let last_name = *seed.pick(3..5, &LAST_NAMES);
    let (city, state, zip_code) = *seed.pick(5..7, &US_CITIES);

    let street_num = 100 + seed.slice(16..20) % 9900;
    let street_name = *seed.pick(7..9, &STREET_NAMES);
    let street = format!("{street_num} {street_name} Street");

    let age = 18 + seed.slice(10..12) % 68;
    let birth_month = seed.slice(12..14) % 12 + 1;
    let birth_day = seed.slice(14..16) % 28 + 1;
    let birth_date = format!(
        "{}-{birth_month:02}-{birth_day:02}",
        as_of.year() as i64 - age as i64
    );

    let marital_status = *seed.pick(20..22, &MARITAL_STATUSES);

    let (clinical_sex_code, pronoun_code, pronoun_display) = if gender == "female" {
        ("248152002", "LA29519-8", "she/her/her/hers/herself")
    } else {
        ("248153007", "LA29520-6", "he/him/his/his/himself")
    };
    let legal_sex_text = format!(
        "{}{}",
        gender[..1].to_uppercase(),
        &gender[1..]
    );

    let full_name = format!("{first_name} {last_name}");

    json!({
        "resourceType": "Patient",
        "id": patient_id,
        "data": {
            "resourceType": "Patient",
            "id": patient_id,
            "extension": [
                {
                    "valueCodeableConcept": {
                        "coding": [{
                            "system": "urn:oid:1.2.840.114350.1.13.0.1.7.10.698084.130.657370.19999000",
                            "code": gender,
                            "display": gender
                        }],
                        "text": legal_sex_text
                    },
                    "url": "http://open.epic.com/FHIR/StructureDefinition/extension/legal-sex"
                },
                {
                    "valueCodeableConcept": {
                        "coding": [{
                            "system": "urn:oid:1.2.840.114350.1.13.0.1.7.10.698084.130.657370.19999000",
                            "code": gender,
                            "display": gender
                        }]
                    },
                    "url": "http://open.epic.com/FHIR/StructureDefinition/extension/sex-for-clinical-use"
                },
                {
                    "extension": [
                        {
                            "valueCoding": {
                                "system": "urn:oid:2.16.840.1.113883.6.238",
                                "code": "2106-3",
                                "display": "White"
                            },
                            "url": "ombCategory"
                        },
                        {
                            "valueString": "White",
                            "url": "text"
                        }
                    ],
                    "url": "http://hl7.org/fhir/us/core/StructureDefinition/us-core-race"
                },
                {
                    "extension": [
                        {
                            "valueString": "Not Hispanic or Latino",
                            "url": "text"
                        }
                    ],
                    "url": "http://hl7.org/fhir/us/core/StructureDefinition/us-core-ethnicity"
                },
                {
                    "valueCode": clinical_sex_code,
                    "url": "http://hl7.org/fhir/us/core/StructureDefinition/us-core-sex"
                },
                {
                    "valueCodeableConcept": {
                        "coding": [{
                            "system": "http://loinc.org",
                            "code": pronoun_code,
                            "display": pronoun_display
                        }]
                    },
                    "url": "http://open.epic.com/FHIR/StructureDefinition/extension/calculated-pronouns-to-use-for-text"
                }
            ],
            "identifier": [
                {
                    "use": "usual",
                    "type": {"text": "MRN"},
                    "system": "urn:mrn:gooclaim",
                    "value": generate_mrn(patient_id)
                },
                {
                    "use": "usual",
                    "type": {"text": "FHIR STU3"},
                    "system": "http://open.epic.com/FHIR/StructureDefinition/patient-fhir-id",
                    "value": patient_id
                },
                {
                    "use": "usual",
                    "type": {"text": "Insurance Member ID"},
                    "system": "urn:memberid:gooclaim",
                    "value": generate_member_id(patient_id)
                }
            ],
            "active": true,
            "name": [{
                "use": "official",
                "text": full_name,
                "family": last_name,
                "given": [first_name]
            }, {
                "use": "usual",
                "text": full_name,
                "family": last_name,
                "given": [first_name]
            }],
            "gender": gender,
            "birthDate": birth_date,
            "deceasedBoolean": false,
            "address": [{
                "use": "home",
                "text": format!("{street}\\r\\n{city} {state} {zip_code}\\r\\nUnited States of America"),
                "line": [street],
                "city": city,
                "state": state,
                "postalCode": zip_code,
                "country": "US",
                "period": {
                    "start": "2010-01-01"
                }
            }],
            "telecom": [{
                "system": "phone",
                "value": phone_number(&format!("{patient_id}_phone")),
                "use": "home"
            }],
            "maritalStatus": {
                "text": marital_status
            },
            "managingOrganization": {
                "reference": format!("Organization/{org_id}"),
                "display": org_name
            }
        },
        "retrieved_at": format!("{}T00:00:00+00:00", crate::util::date_string(as_of))
    })
}

pub fn generate_organization(org_id: &str, index: usize) -> Value {
    let seed = Seed::new(org_id);
    let hospital_name = HOSPITAL_NAMES[index % HOSPITAL_NAMES.len()];
    let (city, state, zip_code) = *seed.pick(0..2, &US_CITIES);

    let street_num = 100 + seed.slice(4..8) % 9900;
    let street_name = *seed.pick(2..4, &ORG_STREET_NAMES);
    let street = format!("{street_num} {street_name} Boulevard");

    let npi = Seed::new(&format!("{org_id}_npi")).digits(10);
    let tax_id = Seed::new(&format!("{org_id}_tax")).digits(9);

    json!({
        "resourceType": "Organization",
        "id": org_id,
        "identifier": [
            {
                "use": "usual",
                "type": {"text": "NPI"},
                "system": "http://hl7.org/fhir/sid/us-npi",
                "value": npi
            },
            {
                "use": "usual",
                "type": {"text": "TAX"},
                "system": "urn:oid:2.16.840.1.113883.4.4",
                "value": tax_id
            },
            {
                "use": "usual",
                "system": "urn:oid:1.2.840.114350.1.13.0.1.7.2.696570",
                "value": seed.last(5)
            }
        ],
        "active": true,
        "name": hospital_name,
        "address": [{
            "text": format!("{street}\\r\\n{city} {state} {zip_code}\\r\\nUnited States of America"),
            "line": [street],
            "city": city,
            "state": state,
            "postalCode": zip_code,
            "country": "United States of America"
        }]
    })
}

pub fn generate_coverage(patient_id: &str, org_id: &str, org_name: &str) -> Value {
    let seed = Seed::new(patient_id);
    let insurance_type = *seed.pick(0..1, &INSURANCE_TYPES);
    let insurance_name = *seed.pick(1..2, &INSURANCE_NAMES);
    let plan_code = seed.last(5);

    // The claims-side shape: explicit nulls where the upstream feed had no
    // data, not omitted keys.
    json!({
        "id": format!("cov-{patient_id}"),
        "status": "active",
        "type": insurance_type,
        "subscriber": "",
        "subscriber_id": null,
        "beneficiary": format!("Patient/{patient_id}"),
        "relationship": null,
        "period": null,
        "payor": [{
            "reference": format!("Organization/{org_id}"),
            "display": org_name
        }],
        "class": [{
            "type": {
                "code": "plan",
                "display": "Plan"
            },
            "value": plan_code,
            "name": insurance_name
        }, {
            "type": {
                "code": "group",
                "display": "Group"
            },
            "value": format!("GRP-{plan_code}"),
            "name": insurance_name
        }],
        "network": null,
        "cost_sharing": []
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const AS_OF: Date = date!(2025 - 08 - 01);

    #[test]
    fn patient_is_wrapped_and_deterministic() {
        let a = generate_patient("ePt1", "org1", "Community Hospital", AS_OF);
        let b = generate_patient("ePt1", "org1", "Community Hospital", AS_OF);
        assert_eq!(a, b);
        assert_eq!(a["id"], "ePt1");
        assert_eq!(a["data"]["id"], "ePt1");
        assert!(a["retrieved_at"].as_str().unwrap().ends_with("+00:00"));
    }

    #[test]
    fn patient_identifiers_carry_mrn_and_member_id() {
        let patient = generate_patient("ePt1", "org1", "Community Hospital", AS_OF);
        let identifiers = patient["data"]["identifier"].as_array().unwrap();
        assert_eq!(identifiers.len(), 3);
        assert!(identifiers[0]["value"].as_str().unwrap().starts_with("MRN-"));
        assert_eq!(identifiers[1]["value"], "ePt1");
        assert!(identifiers[2]["value"].as_str().unwrap().starts_with("MBR-"));
    }

    #[test]
    fn patient_gender_matches_extensions() {
        let patient = generate_patient("ePt1", "org1", "Community Hospital", AS_OF);
        let gender = patient["data"]["gender"].as_str().unwrap();
        assert!(gender == "male" || gender == "female");
        let legal_sex = &patient["data"]["extension"][0]["valueCodeableConcept"]["coding"][0];
        assert_eq!(legal_sex["code"], gender);
    }

    #[test]
    fn patient_birth_date_is_adult_range() {
        for id in ["ePtA", "ePtB", "ePtC", "ePtD"] {
            let patient = generate_patient(id, "org1", "X", AS_OF);
            let birth = patient["data"]["birthDate"].as_str().unwrap();
            let year: i32 = birth[..4].parse().unwrap();
            let age = AS_OF.year() - year;
            assert!((18..=85).contains(&age), "age {age} out of range");
        }
    }

    #[test]
    fn organization_identifiers_are_digit_strings() {
        let org = generate_organization("eLorg1", 3);
        assert_eq!(org["name"], "Metropolitan Medical Center");
        let npi = org["identifier"][0]["value"].as_str().unwrap();
        assert_eq!(npi.len(), 10);
        assert!(npi.chars().all(|c| c.is_ascii_digit()));
        let tax = org["identifier"][1]["value"].as_str().unwrap();
        assert_eq!(tax.len(), 9);
    }

    #[test]
    fn coverage_links_beneficiary_and_payor() {
        let coverage = generate_coverage("ePt1", "eLorg1", "Community Hospital");
        assert_eq!(coverage["id"], "cov-ePt1");
        assert_eq!(coverage["beneficiary"], "Patient/ePt1");
        assert_eq!(coverage["payor"][0]["reference"], "Organization/eLorg1");
        assert!(coverage["period"].is_null());
        assert_eq!(coverage["class"].as_array().unwrap().len(), 2);
        assert!(
            coverage["class"][1]["value"]
                .as_str()
                .unwrap()
                .starts_with("GRP-")
        );
    }
}
