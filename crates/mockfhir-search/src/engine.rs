//! Search execution over the fixture store.

use crate::filter;
use crate::params::SearchParams;
use mockfhir_core::{CoreError, ResourceType, Result};
use mockfhir_store::FixtureStore;
use serde_json::Value;

/// Runs a search: validates required parameters, applies the per-type
/// filters, then truncates to `_count`.
pub fn search(
    store: &FixtureStore,
    resource_type: ResourceType,
    params: &SearchParams,
) -> Result<Vec<Value>> {
    validate(resource_type, params)?;

    let mut results: Vec<Value> = store
        .collection(resource_type)
        .iter()
        .filter(|resource| filter::matches(resource_type, resource, params))
        .cloned()
        .collect();

    if let Some(count) = params.count() {
        results.truncate(count);
    }

    Ok(results)
}

fn validate(resource_type: ResourceType, params: &SearchParams) -> Result<()> {
    // Epic rejects unscoped Observation searches.
    if resource_type == ResourceType::Observation
        && !params.contains("category")
        && !params.contains("code")
        && !params.contains("patient")
    {
        return Err(CoreError::invalid_search_param(
            "At least one of category, code, or patient parameter is required",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn observation_store() -> FixtureStore {
        let mut store = FixtureStore::new();
        store.insert_collection(
            ResourceType::Observation,
            vec![
                json!({
                    "id": "o1",
                    "subject": {"reference": "Patient/p1"},
                    "category": [{"coding": [{"code": "vital-signs"}]}],
                    "code": {"coding": [{"code": "8867-4"}]},
                    "effectiveDateTime": "2025-05-02T10:00:00Z"
                }),
                json!({
                    "id": "o2",
                    "subject": {"reference": "Patient/p2"},
                    "category": [{"coding": [{"code": "laboratory"}]}],
                    "code": {"coding": [{"code": "2339-0"}]},
                    "effectiveDateTime": "2025-06-15T10:00:00Z"
                }),
            ],
        );
        store
    }

    #[test]
    fn unscoped_observation_search_is_rejected() {
        let store = observation_store();
        let err = search(&store, ResourceType::Observation, &SearchParams::default()).unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("category, code, or patient"));
    }

    #[test]
    fn scoped_observation_search_filters() {
        let store = observation_store();
        let results = search(
            &store,
            ResourceType::Observation,
            &SearchParams::from([("patient", "p1")]),
        )
        .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["id"], "o1");
    }

    #[test]
    fn category_alone_satisfies_the_requirement() {
        let store = observation_store();
        let results = search(
            &store,
            ResourceType::Observation,
            &SearchParams::from([("category", "laboratory")]),
        )
        .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["id"], "o2");
    }

    #[test]
    fn count_truncates_results() {
        let store = observation_store();
        let results = search(
            &store,
            ResourceType::Observation,
            &SearchParams::from([("category", "vital-signs"), ("_count", "0")]),
        )
        .unwrap();
        assert!(results.is_empty());

        let mut store = FixtureStore::new();
        store.insert_collection(
            ResourceType::Practitioner,
            (0..5).map(|i| json!({"id": format!("dr{i}")})).collect(),
        );
        let results = search(
            &store,
            ResourceType::Practitioner,
            &SearchParams::from([("_count", "2")]),
        )
        .unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn no_filters_returns_whole_collection() {
        let store = observation_store();
        let results = search(
            &store,
            ResourceType::Observation,
            &SearchParams::from([("patient", "Patient/p1"), ("code", "8867-4")]),
        )
        .unwrap();
        assert_eq!(results.len(), 1);

        let everything = search(&store, ResourceType::Binary, &SearchParams::default()).unwrap();
        assert!(everything.is_empty());
    }
}
