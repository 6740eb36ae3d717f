//! Consent, Binary, and DocumentReference generators.

use crate::seed::{Seed, resource_id};
use crate::tables::{
    BINARY_CONTENT_TYPES, CONSENT_SCOPES, CONSENT_STATUSES, DOC_STATUSES, DOCUMENT_CATEGORIES,
    DOCUMENT_STATUSES, DOCUMENT_TYPES,
};
use crate::util::datetime_string;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Value, json};
use time::{Date, Duration, Time};

pub fn consents_per_patient(patient_id: &str) -> usize {
    (Seed::new(patient_id).slice(0..2) % 3 + 2) as usize
}

pub fn binaries_per_patient(patient_id: &str) -> usize {
    (Seed::new(patient_id).slice(2..4) % 4 + 3) as usize
}

pub fn docrefs_per_patient(patient_id: &str) -> usize {
    (Seed::new(patient_id).slice(4..6) % 4 + 2) as usize
}

pub fn generate_consent(
    patient_id: &str,
    patient_name: &str,
    consent_idx: usize,
    as_of: Date,
) -> Value {
    let seed = Seed::new(&format!("{patient_id}_consent_{consent_idx}"));

    let scope = seed.pick(0..2, &CONSENT_SCOPES);
    let status = *seed.pick(2..4, &CONSENT_STATUSES);

    let years_ago = seed.slice(4..6) % 5 + 1;
    let consent_date = as_of - Duration::days(years_ago as i64 * 365);
    let consent_time = consent_date.with_time(derived_hms(&seed, 14));

    let mut resource = json!({
        "resourceType": "Consent",
        "id": resource_id("eConsent", &format!("{patient_id}_{consent_idx}")),
        "identifier": [{
            "use": "usual",
            "system": "urn:oid:1.2.840.114350.1.13.0.1.7.2.686783",
            "value": (700_000 + seed.slice(6..10) % 99999).to_string()
        }],
        "status": status,
        "scope": {
            "coding": [{
                "system": "urn:oid:1.2.840.114350.1.13.0.1.7.4.686783.100",
                "code": scope.code,
                "display": scope.display
            }],
            "text": scope.text
        },
        "category": [{
            "coding": [
                {
                    "system": "urn:oid:1.2.840.114350.1.13.0.1.7.4.686783.100",
                    "code": scope.code,
                    "display": scope.display
                },
                {
                    "system": "http://loinc.org",
                    "code": "59284-0",
                    "display": "Consent Document"
                }
            ],
            "text": "Consent Document"
        }],
        "patient": {
            "reference": format!("Patient/{patient_id}"),
            "display": patient_name
        },
        "dateTime": datetime_string(consent_time),
        "policy": [{
            "extension": [{
                "valueCode": "unknown",
                "url": "http://hl7.org/fhir/StructureDefinition/data-absent-reason"
            }]
        }]
    });

    // Some consents point at a related encounter
    if seed.slice(10..12) % 100 < 40 {
        resource["provision"] = json!({
            "data": [{
                "meaning": "related",
                "reference": {
                    "reference": format!("Encounter/eEnc{}", &seed.hex()[12..20])
                }
            }]
        });
    }

    // Some carry a data-absent status extension
    if seed.slice(12..14) % 100 < 30 {
        resource["_status"] = json!({
            "extension": [{
                "valueCode": "unknown",
                "url": "http://hl7.org/fhir/StructureDefinition/data-absent-reason"
            }]
        });
    }

    resource
}

pub fn generate_binary(patient_id: &str, binary_idx: usize) -> Value {
    let seed = Seed::new(&format!("{patient_id}_binary_{binary_idx}"));

    let content_type = *seed.pick(0..2, &BINARY_CONTENT_TYPES);
    let payload = match content_type {
        "text/rtf" => {
            "{\\rtf1\\ansi\\deff0 {\\fonttbl {\\f0 Times New Roman;}} This is a synthetic RTF document.\\par}".to_string()
        }
        "text/html" => {
            "<html><body><h1>Clinical Document</h1><p>This is a synthetic HTML document.</p></body></html>".to_string()
        }
        "application/pdf" => {
            "%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\nxref\n0 1\ntrailer\n<< /Root 1 0 R >>\n%%EOF".to_string()
        }
        _ => {
            let id_head: String = patient_id.chars().take(10).collect();
            format!("This is a synthetic document for patient {id_head}...")
        }
    };

    json!({
        "resourceType": "Binary",
        "id": resource_id("eBinary", &format!("{patient_id}_{binary_idx}")),
        "contentType": content_type,
        "data": BASE64.encode(payload.as_bytes())
    })
}

pub fn generate_document_reference(
    patient_id: &str,
    patient_name: &str,
    doc_idx: usize,
    as_of: Date,
) -> Value {
    let seed = Seed::new(&format!("{patient_id}_docref_{doc_idx}"));

    let doc_type = seed.pick(0..2, &DOCUMENT_TYPES);
    let category = seed.pick(2..4, &DOCUMENT_CATEGORIES);
    let status = *seed.pick(4..6, &DOCUMENT_STATUSES);
    let doc_status = *seed.pick(6..8, &DOC_STATUSES);

    let months_ago = seed.slice(8..10) % 12 + 1;
    let doc_date = as_of - Duration::days(months_ago as i64 * 30);
    let doc_time = doc_date.with_time(derived_hms(&seed, 20));

    let identifier_value = (500_000 + seed.slice(10..14) % 99999).to_string();
    let html_binary_id = resource_id("eBinary", &format!("{patient_id}_docref_{doc_idx}"));
    let rtf_binary_id = resource_id("eBinary", &format!("{patient_id}_docref_{doc_idx}_rtf"));

    json!({
        "resourceType": "DocumentReference",
        "id": resource_id("eDocRef", &format!("{patient_id}_{doc_idx}")),
        "extension": [{
            "extension": [
                {
                    "valueCodeableConcept": {
                        "coding": [{
                            "system": "urn:oid:1.2.840.114350.1.72.1.7.7.10.696784.72072",
                            "code": "1",
                            "display": "Signer"
                        }],
                        "text": "Signer"
                    },
                    "url": "mode"
                },
                {
                    "valueDateTime": datetime_string(doc_time),
                    "url": "time"
                },
                {
                    "valueReference": {
                        "reference": "Practitioner/ePractitioner123",
                        "display": "Physician, MD"
                    },
                    "url": "party"
                }
            ],
            "url": "http://hl7.org/fhir/5.0/StructureDefinition/extension-DocumentReference.attester"
        }],
        "identifier": [
            {
                "system": "urn:oid:1.2.840.114350.1.13.11511.1.7.2.727879",
                "value": identifier_value
            },
            {
                "system": "urn:oid:1.2.840.114350.1.72.3.15",
                "value": format!("1.2.840.114350.1.13.11511.1.7.2.727879_{identifier_value}")
            }
        ],
        "status": status,
        "docStatus": doc_status,
        "type": {
            "coding": [
                {
                    "system": "urn:oid:1.2.840.114350.1.13.11511.1.7.4.737880.5010",
                    "code": doc_type.code,
                    "display": doc_type.display
                },
                {
                    "system": "http://loinc.org",
                    "code": doc_type.loinc.code,
                    "display": doc_type.loinc.display,
                    "userSelected": true
                }
            ],
            "text": doc_type.text
        },
        "category": [{
            "coding": [{
                "system": "http://hl7.org/fhir/us/core/CodeSystem/us-core-documentreference-category",
                "code": category.code,
                "display": category.display
            }],
            "text": category.text
        }],
        "subject": {
            "reference": format!("Patient/{patient_id}"),
            "display": patient_name
        },
        "date": datetime_string(doc_time),
        "author": [{
            "reference": "Practitioner/ePractitioner123",
            "type": "Practitioner",
            "display": "Physician, MD"
        }],
        "authenticator": {
            "extension": [{
                "valueDateTime": datetime_string(doc_time + Duration::minutes(5)),
                "url": "http://open.epic.com/FHIR/StructureDefinition/extension/clinical-note-authentication-instant"
            }],
            "reference": "Practitioner/ePractitioner123",
            "type": "Practitioner",
            "display": "Physician, MD"
        },
        "custodian": {
            "identifier": {
                "system": "urn:ietf:rfc:3986",
                "value": "urn:epic:cec.fsplyfin"
            },
            "display": "FHIR Playground"
        },
        "content": [
            {
                "attachment": {
                    "contentType": "text/html",
                    "url": format!("Binary/{html_binary_id}")
                },
                "format": {
                    "system": "http://ihe.net/fhir/ValueSet/IHE.FormatCode.codesystem",
                    "code": "urn:ihe:iti:xds:2017:mimeTypeSufficient",
                    "display": "mimeType Sufficient"
                }
            },
            {
                "attachment": {
                    "contentType": "text/rtf",
                    "url": format!("Binary/{rtf_binary_id}")
                },
                "format": {
                    "system": "http://ihe.net/fhir/ValueSet/IHE.FormatCode.codesystem",
                    "code": "urn:ihe:iti:xds:2017:mimeTypeSufficient",
                    "display": "mimeType Sufficient"
                }
            }
        ],
        "context": {
            "extension": [{
                "valueCodeableConcept": {
                    "coding": [
                        {
                            "system": "urn:oid:1.2.840.114350.1.13.11511.1.7.4.836982.1040",
                            "code": "1",
                            "display": "Physician"
                        },
                        {
                            "system": "urn:oid:2.16.840.1.113883.6.101",
                            "code": "207R00000X",
                            "display": "Internal Medicine Physician"
                        }
                    ],
                    "text": "Physician"
                },
                "url": "http://hl7.org/fhir/us/core/StructureDefinition/us-core-documentreference-custodian"
            }],
            "encounter": {
                "reference": format!("Encounter/eEnc{}", &seed.hex()[14..20]),
                "display": "Office Visit"
            },
            "period": {
                "start": datetime_string(doc_time)
            },
            "practiceSetting": {
                "coding": [{
                    "system": "urn:oid:1.2.840.114350.1.13.11511.1.7.4.836982.1040",
                    "code": "1",
                    "display": "General Practice"
                }],
                "text": "General Practice"
            }
        }
    })
}

/// Hash-derived time of day including seconds, for document timestamps.
fn derived_hms(seed: &Seed, at: usize) -> Time {
    let hour = 8 + (seed.slice(at..at + 2) % 10) as u8;
    let minute = (seed.slice(at + 2..at + 4) % 60) as u8;
    let second = (seed.slice(at + 4..at + 6) % 60) as u8;
    Time::from_hms(hour, minute, second).unwrap_or(Time::MIDNIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const AS_OF: Date = date!(2025 - 08 - 01);

    #[test]
    fn consent_counts_are_in_range() {
        for id in ["ePtA", "ePtB", "ePtC"] {
            assert!((2..=4).contains(&consents_per_patient(id)));
            assert!((3..=6).contains(&binaries_per_patient(id)));
            assert!((2..=5).contains(&docrefs_per_patient(id)));
        }
    }

    #[test]
    fn consent_scope_and_category_share_a_code() {
        let consent = generate_consent("ePt1", "Johnson, Mary", 0, AS_OF);
        let scope_code = consent["scope"]["coding"][0]["code"].as_str().unwrap();
        let category_code = consent["category"][0]["coding"][0]["code"].as_str().unwrap();
        assert_eq!(scope_code, category_code);
        assert_eq!(consent["patient"]["reference"], "Patient/ePt1");
    }

    #[test]
    fn consent_optional_blocks_are_deterministic() {
        let a = generate_consent("ePt1", "Johnson, Mary", 2, AS_OF);
        let b = generate_consent("ePt1", "Johnson, Mary", 2, AS_OF);
        assert_eq!(a, b);
    }

    #[test]
    fn binary_payload_round_trips_through_base64() {
        let binary = generate_binary("ePtExample123", 0);
        let data = binary["data"].as_str().unwrap();
        let decoded = BASE64.decode(data).unwrap();
        assert!(!decoded.is_empty());
        let content_type = binary["contentType"].as_str().unwrap();
        assert!(BINARY_CONTENT_TYPES.contains(&content_type));
    }

    #[test]
    fn plain_text_binary_names_the_patient() {
        // find an index whose content type is text/plain or xml fallback
        for idx in 0..20 {
            let binary = generate_binary("ePtExample123", idx);
            if binary["contentType"] == "text/plain" || binary["contentType"] == "application/xml" {
                let decoded = BASE64.decode(binary["data"].as_str().unwrap()).unwrap();
                let text = String::from_utf8(decoded).unwrap();
                assert!(text.contains("ePtExample"));
                return;
            }
        }
    }

    #[test]
    fn docref_attachments_reference_deterministic_binaries() {
        let docref = generate_document_reference("ePt1", "Johnson, Mary", 0, AS_OF);
        let html_url = docref["content"][0]["attachment"]["url"].as_str().unwrap();
        let rtf_url = docref["content"][1]["attachment"]["url"].as_str().unwrap();
        assert!(html_url.starts_with("Binary/eBinary"));
        assert!(rtf_url.starts_with("Binary/eBinary"));
        assert_ne!(html_url, rtf_url);

        let again = generate_document_reference("ePt1", "Johnson, Mary", 0, AS_OF);
        assert_eq!(docref, again);
    }

    #[test]
    fn docref_identifiers_share_the_numeric_suffix() {
        let docref = generate_document_reference("ePt1", "Johnson, Mary", 1, AS_OF);
        let short = docref["identifier"][0]["value"].as_str().unwrap();
        let long = docref["identifier"][1]["value"].as_str().unwrap();
        assert!(long.ends_with(short));
    }
}
