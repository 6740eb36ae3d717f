//! Wholesale fixture loading.
//!
//! Every fixture file is read once at process start. Missing files are
//! fine (the collection stays empty); a file that exists but does not
//! parse, or parses into the wrong shape, aborts startup.
//!
//! The file names, including their historical spellings, are the on-disk
//! contract shared with the generator suite.

use crate::store::FixtureStore;
use mockfhir_core::{CoreError, ResourceType, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Searchset bundles whose resources live in `entry[].resource`.
const BUNDLE_FIXTURES: [(ResourceType, &str); 4] = [
    (ResourceType::Encounter, "encounterr.json"),
    (ResourceType::Procedure, "procedure.json"),
    (ResourceType::Condition, "conditionss.json"),
    (ResourceType::Consent, "consent.json"),
];

/// Plain JSON arrays, loaded after the bundles.
const ARRAY_FIXTURES: [(ResourceType, &str); 4] = [
    (ResourceType::Observation, "observation.json"),
    (ResourceType::DocumentReference, "docref.json"),
    (ResourceType::Binary, "binary.json"),
    (ResourceType::Provenance, "provenance.json"),
];

/// Loads all fixture files from `dir` into an immutable store.
pub fn load_fixtures(dir: &Path) -> Result<FixtureStore> {
    let mut store = FixtureStore::new();

    if let Some(value) = read_json(dir, "patients.json")? {
        store.insert_collection(ResourceType::Patient, into_array(value, "patients.json")?);
    }

    if let Some(value) = read_json(dir, "organisation.json")? {
        store.insert_collection(
            ResourceType::Organization,
            into_array(value, "organisation.json")?,
        );
    }

    // Coverage ships wrapped as {total, coverage: [...]}.
    if let Some(value) = read_json(dir, "coverage.json")? {
        let coverages = value
            .get("coverage")
            .cloned()
            .unwrap_or(Value::Array(Vec::new()));
        store.insert_collection(
            ResourceType::Coverage,
            into_array(coverages, "coverage.json")?,
        );
    }

    if let Some(value) = read_json(dir, "practitioner.json")? {
        store.insert_collection(
            ResourceType::Practitioner,
            into_array(value, "practitioner.json")?,
        );
    }

    if let Some(value) = read_json(dir, "practitonerrole.json")? {
        store.insert_collection(
            ResourceType::PractitionerRole,
            into_array(value, "practitonerrole.json")?,
        );
    }

    for (resource_type, filename) in BUNDLE_FIXTURES {
        if let Some(value) = read_json(dir, filename)? {
            store.insert_collection(resource_type, bundle_resources(&value));
        }
    }

    for (resource_type, filename) in ARRAY_FIXTURES {
        if let Some(value) = read_json(dir, filename)? {
            store.insert_collection(resource_type, into_array(value, filename)?);
        }
    }

    if let Some(value) = read_json(dir, "eob.json")? {
        store.set_eob_bundle(value);
    }

    if let Some(value) = read_json(dir, "appointments.json")? {
        let appointments = value
            .get("appointments")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.get("full_resource"))
                    .filter(|resource| !resource.is_null())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        store.insert_collection(ResourceType::Appointment, appointments);
    }

    for resource_type in store.loaded_types() {
        tracing::debug!(
            resource_type = %resource_type,
            count = store.collection(*resource_type).len(),
            "fixture collection loaded"
        );
    }

    Ok(store)
}

fn read_json(dir: &Path, filename: &str) -> Result<Option<Value>> {
    let path = dir.join(filename);
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(&path)?;
    let value = serde_json::from_str(&contents)
        .map_err(|e| CoreError::fixture(format!("{filename}: {e}")))?;
    Ok(Some(value))
}

fn into_array(value: Value, filename: &str) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(CoreError::fixture(format!("{filename}: expected a JSON array"))),
    }
}

/// Extracts `entry[].resource` from a searchset bundle; anything that is
/// not bundle-shaped yields an empty collection, as the original loader
/// tolerated.
fn bundle_resources(value: &Value) -> Vec<Value> {
    value
        .get("entry")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| entry.get("resource").cloned().unwrap_or(Value::Object(Default::default())))
                .collect()
        })
        .unwrap_or_default()
}
