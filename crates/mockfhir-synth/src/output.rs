//! Fixture-file writers.
//!
//! Mirrors the shapes the loader expects: plain arrays, the coverage
//! wrapper, and searchset bundles with per-entry self links. Each step
//! reads its inputs back from the data directory, so steps can be re-run
//! independently as long as the core set exists.

use crate::appointments::rebind_appointments;
use crate::clinical::{
    self, PRACTITIONER_COUNT, encounter_id, encounters_per_patient, generate_encounter,
    generate_observation, generate_practitioner, generate_practitioner_role, generate_procedure,
    generate_provenance, observations_per_patient, procedures_per_patient,
};
use crate::condition::generate_conditions_bundle;
use crate::documents::{
    binaries_per_patient, consents_per_patient, docrefs_per_patient, generate_binary,
    generate_consent, generate_document_reference,
};
use crate::patient::{generate_coverage, generate_organization, generate_patient};
use crate::seed::Seed;
use crate::util::patient_display_name;
use crate::SEED_PAIRS;
use mockfhir_core::{CoreError, EPIC_FHIR_BASE, Result};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use time::Date;

/// Per-type counts of what a generation run produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeneratedCounts {
    pub patients: usize,
    pub organizations: usize,
    pub coverages: usize,
    pub conditions: usize,
    pub practitioners: usize,
    pub practitioner_roles: usize,
    pub encounters: usize,
    pub procedures: usize,
    pub observations: usize,
    pub provenances: usize,
    pub consents: usize,
    pub binaries: usize,
    pub document_references: usize,
    pub appointments_rebound: usize,
}

/// A bundle entry with Epic-style self link.
pub fn bundle_entry(resource_type: &str, resource: Value) -> Value {
    let id = resource.get("id").and_then(Value::as_str).unwrap_or("");
    let url = format!("{EPIC_FHIR_BASE}/{resource_type}/{id}");
    json!({
        "link": [{
            "relation": "self",
            "url": url
        }],
        "fullUrl": url,
        "resource": resource,
        "search": {"mode": "match"}
    })
}

/// Searchset bundle envelope for fixture files.
pub fn fixture_bundle(resource_type: &str, entries: Vec<Value>) -> Value {
    json!({
        "resourceType": "Bundle",
        "type": "searchset",
        "total": entries.len(),
        "link": [{
            "relation": "self",
            "url": format!("{EPIC_FHIR_BASE}/{resource_type}?patient=*&_count=100")
        }],
        "entry": entries
    })
}

fn write_json(dir: &Path, filename: &str, value: &Value) -> Result<()> {
    fs::create_dir_all(dir)?;
    let pretty = serde_json::to_string_pretty(value)?;
    fs::write(dir.join(filename), pretty)?;
    Ok(())
}

fn read_required(dir: &Path, filename: &str) -> Result<Value> {
    let path = dir.join(filename);
    if !path.exists() {
        return Err(CoreError::fixture(format!(
            "{filename} not found in {}; generate the core set first",
            dir.display()
        )));
    }
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CoreError::fixture(format!("{filename}: {e}")))
}

fn read_patients(dir: &Path) -> Result<Vec<Value>> {
    match read_required(dir, "patients.json")? {
        Value::Array(patients) => Ok(patients),
        _ => Err(CoreError::fixture("patients.json: expected a JSON array")),
    }
}

fn read_organizations(dir: &Path) -> Result<Vec<Value>> {
    match read_required(dir, "organisation.json")? {
        Value::Array(orgs) => Ok(orgs),
        _ => Err(CoreError::fixture("organisation.json: expected a JSON array")),
    }
}

/// Patients, organizations, and coverage from the seed pairs.
pub fn write_core(dir: &Path, as_of: Date) -> Result<GeneratedCounts> {
    let mut patients = Vec::new();
    let mut organizations = Vec::new();
    let mut coverages = Vec::new();
    let mut org_names: HashMap<&str, String> = HashMap::new();

    for (idx, &(patient_id, org_id)) in SEED_PAIRS.iter().enumerate() {
        if !org_names.contains_key(org_id) {
            let org = generate_organization(org_id, idx);
            let name = org
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("Medical Center")
                .to_string();
            org_names.insert(org_id, name);
            organizations.push(org);
        }
        let org_name = &org_names[org_id];

        patients.push(generate_patient(patient_id, org_id, org_name, as_of));
        coverages.push(generate_coverage(patient_id, org_id, org_name));
    }

    write_json(dir, "patients.json", &Value::Array(patients.clone()))?;
    write_json(dir, "organisation.json", &Value::Array(organizations.clone()))?;
    write_json(
        dir,
        "coverage.json",
        &json!({"total": coverages.len(), "coverage": coverages}),
    )?;

    tracing::info!(
        patients = patients.len(),
        organizations = organizations.len(),
        coverages = coverages.len(),
        "core fixture set written"
    );

    Ok(GeneratedCounts {
        patients: patients.len(),
        organizations: organizations.len(),
        coverages: coverages.len(),
        ..Default::default()
    })
}

/// The conditions bundle for every generated patient.
pub fn write_conditions(dir: &Path, as_of: Date) -> Result<GeneratedCounts> {
    let patients = read_patients(dir)?;
    let bundle = generate_conditions_bundle(&patients, as_of);
    let total = bundle.get("total").and_then(Value::as_u64).unwrap_or(0) as usize;
    write_json(dir, "conditionss.json", &bundle)?;

    tracing::info!(conditions = total, patients = patients.len(), "conditions written");

    Ok(GeneratedCounts {
        conditions: total,
        ..Default::default()
    })
}

/// Practitioners, roles, encounters, procedures, observations, the EOB
/// bundle, and provenance.
pub fn write_clinical(dir: &Path, as_of: Date) -> Result<GeneratedCounts> {
    let patients = read_patients(dir)?;
    let organizations = read_organizations(dir)?;
    if organizations.is_empty() {
        return Err(CoreError::fixture("organisation.json is empty"));
    }

    let practitioners: Vec<Value> = (0..PRACTITIONER_COUNT).map(generate_practitioner).collect();
    write_json(dir, "practitioner.json", &Value::Array(practitioners.clone()))?;

    let mut practitioner_roles = Vec::new();
    for (i, practitioner) in practitioners.iter().enumerate() {
        let practitioner_id = practitioner["id"].as_str().unwrap_or("");
        let practitioner_name = practitioner["name"][0]["text"].as_str().unwrap_or("");
        let org_id = organizations[i % organizations.len()]["id"]
            .as_str()
            .unwrap_or("");
        for role_idx in 0..(i % 2) + 1 {
            practitioner_roles.push(generate_practitioner_role(
                practitioner_id,
                practitioner_name,
                org_id,
                role_idx,
            ));
        }
    }
    write_json(
        dir,
        "practitonerrole.json",
        &Value::Array(practitioner_roles.clone()),
    )?;

    // Encounters, tracking ids per patient for observation references
    let mut encounter_entries = Vec::new();
    let mut patient_encounters: HashMap<String, Vec<String>> = HashMap::new();

    for (i, patient) in patients.iter().enumerate() {
        let patient_id = patient["id"].as_str().unwrap_or("").to_string();
        let patient_name = patient_display_name(patient);
        let org_id = organizations[i % organizations.len()]["id"]
            .as_str()
            .unwrap_or("");
        let practitioner_id = practitioners[i % practitioners.len()]["id"]
            .as_str()
            .unwrap_or("");

        for encounter_idx in 0..encounters_per_patient(&patient_id) {
            let encounter = generate_encounter(
                &patient_id,
                &patient_name,
                org_id,
                practitioner_id,
                encounter_idx,
                as_of,
            );
            patient_encounters
                .entry(patient_id.clone())
                .or_default()
                .push(encounter_id(&patient_id, encounter_idx));
            encounter_entries.push(bundle_entry("Encounter", encounter));
        }
    }
    let encounter_total = encounter_entries.len();
    write_json(
        dir,
        "encounterr.json",
        &fixture_bundle("Encounter", encounter_entries),
    )?;

    let mut procedure_entries = Vec::new();
    for patient in &patients {
        let patient_id = patient["id"].as_str().unwrap_or("");
        let patient_name = patient_display_name(patient);
        for procedure_idx in 0..procedures_per_patient(patient_id) {
            procedure_entries.push(bundle_entry(
                "Procedure",
                generate_procedure(patient_id, &patient_name, procedure_idx, as_of),
            ));
        }
    }
    let procedure_total = procedure_entries.len();
    write_json(
        dir,
        "procedure.json",
        &fixture_bundle("Procedure", procedure_entries),
    )?;

    let mut observations = Vec::new();
    for patient in &patients {
        let patient_id = patient["id"].as_str().unwrap_or("");
        let patient_name = patient_display_name(patient);
        let encounters = patient_encounters.get(patient_id);

        for obs_idx in 0..observations_per_patient(patient_id) {
            // Patients without encounters produce no observations
            let Some(encounters) = encounters.filter(|e| !e.is_empty()) else {
                continue;
            };
            let encounter_ref = format!("Encounter/{}", encounters[obs_idx % encounters.len()]);
            observations.push(generate_observation(
                patient_id,
                &patient_name,
                &encounter_ref,
                obs_idx,
                as_of,
            ));
        }
    }
    let observation_total = observations.len();
    write_json(dir, "observation.json", &Value::Array(observations))?;

    write_json(dir, "eob.json", &clinical::eob_bundle())?;

    let mut provenances = Vec::new();
    for (i, patient) in patients.iter().enumerate() {
        let patient_id = patient["id"].as_str().unwrap_or("");
        let practitioner = &practitioners[i % practitioners.len()];
        let practitioner_id = practitioner["id"].as_str().unwrap_or("");
        let practitioner_name = practitioner["name"][0]["text"].as_str().unwrap_or("");
        let patient_hash = Seed::new(patient_id);

        for (prov_idx, target_ref) in [
            format!("Patient/{patient_id}"),
            format!("Condition/eCond{}", patient_hash.prefix(20)),
            format!("Procedure/eProc{}", patient_hash.prefix(20)),
        ]
        .into_iter()
        .enumerate()
        {
            provenances.push(generate_provenance(
                &target_ref,
                practitioner_id,
                practitioner_name,
                prov_idx,
                as_of,
            ));
        }
    }
    let provenance_total = provenances.len();
    write_json(dir, "provenance.json", &Value::Array(provenances))?;

    tracing::info!(
        practitioners = practitioners.len(),
        practitioner_roles = practitioner_roles.len(),
        encounters = encounter_total,
        procedures = procedure_total,
        observations = observation_total,
        provenances = provenance_total,
        "clinical fixture set written"
    );

    Ok(GeneratedCounts {
        practitioners: practitioners.len(),
        practitioner_roles: practitioner_roles.len(),
        encounters: encounter_total,
        procedures: procedure_total,
        observations: observation_total,
        provenances: provenance_total,
        ..Default::default()
    })
}

/// Consents, binaries, and document references.
pub fn write_documents(dir: &Path, as_of: Date) -> Result<GeneratedCounts> {
    let patients = read_patients(dir)?;

    let mut consent_entries = Vec::new();
    let mut binaries = Vec::new();
    let mut docrefs = Vec::new();

    for patient in &patients {
        let patient_id = patient["id"].as_str().unwrap_or("");
        let patient_name = patient_display_name(patient);

        for consent_idx in 0..consents_per_patient(patient_id) {
            consent_entries.push(bundle_entry(
                "Consent",
                generate_consent(patient_id, &patient_name, consent_idx, as_of),
            ));
        }
        for binary_idx in 0..binaries_per_patient(patient_id) {
            binaries.push(generate_binary(patient_id, binary_idx));
        }
        for doc_idx in 0..docrefs_per_patient(patient_id) {
            docrefs.push(generate_document_reference(
                patient_id,
                &patient_name,
                doc_idx,
                as_of,
            ));
        }
    }

    let counts = GeneratedCounts {
        consents: consent_entries.len(),
        binaries: binaries.len(),
        document_references: docrefs.len(),
        ..Default::default()
    };

    write_json(dir, "consent.json", &fixture_bundle("Consent", consent_entries))?;
    write_json(dir, "binary.json", &Value::Array(binaries))?;
    write_json(dir, "docref.json", &Value::Array(docrefs))?;

    tracing::info!(
        consents = counts.consents,
        binaries = counts.binaries,
        document_references = counts.document_references,
        "document fixture set written"
    );

    Ok(counts)
}

/// Rewrites appointments.json against the generated patient set.
pub fn rebind_appointments_file(dir: &Path) -> Result<usize> {
    let patients = read_patients(dir)?;
    let organizations = read_organizations(dir)?;
    let mut appointments = read_required(dir, "appointments.json")?;

    let rebound = rebind_appointments(&mut appointments, &patients, &organizations);
    write_json(dir, "appointments.json", &appointments)?;

    tracing::info!(appointments = rebound, "appointment references rebound");
    Ok(rebound)
}

/// The whole pipeline: core, conditions, clinical, documents, plus the
/// appointment rebind when an appointments fixture is present.
pub fn write_all(dir: &Path, as_of: Date) -> Result<GeneratedCounts> {
    let mut counts = write_core(dir, as_of)?;

    let conditions = write_conditions(dir, as_of)?;
    counts.conditions = conditions.conditions;

    let clinical = write_clinical(dir, as_of)?;
    counts.practitioners = clinical.practitioners;
    counts.practitioner_roles = clinical.practitioner_roles;
    counts.encounters = clinical.encounters;
    counts.procedures = clinical.procedures;
    counts.observations = clinical.observations;
    counts.provenances = clinical.provenances;

    let documents = write_documents(dir, as_of)?;
    counts.consents = documents.consents;
    counts.binaries = documents.binaries;
    counts.document_references = documents.document_references;

    if dir.join("appointments.json").exists() {
        counts.appointments_rebound = rebind_appointments_file(dir)?;
    }

    Ok(counts)
}
