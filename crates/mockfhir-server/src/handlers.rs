use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use mockfhir_api::{ApiError, searchset_bundle};
use mockfhir_core::ResourceType;
use mockfhir_search::{SearchParams, search};
use serde_json::{Value, json};
use std::collections::HashMap;

pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({
        "message": "mockfhir FHIR R4 API",
        "version": env!("CARGO_PKG_VERSION"),
        "resources": loaded_type_names(&state),
    });
    (StatusCode::OK, Json(body))
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({
        "status": "healthy",
        "resources_loaded": state.store.loaded_types().len(),
        "resource_types": loaded_type_names(&state),
    });
    (StatusCode::OK, Json(body))
}

pub async fn metadata(State(state): State<AppState>) -> impl IntoResponse {
    let resources: Vec<Value> = state
        .store
        .loaded_types()
        .iter()
        .map(|rt| json!({"type": rt.as_str(), "interaction": [{"code": "read"}, {"code": "search-type"}]}))
        .collect();
    let body = json!({
        "resourceType": "CapabilityStatement",
        "status": "active",
        "kind": "instance",
        "fhirVersion": "4.0.1",
        "software": { "name": "mockfhir", "version": env!("CARGO_PKG_VERSION") },
        "format": ["application/fhir+json"],
        "rest": [{
            "mode": "server",
            "resource": resources
        }]
    });
    (StatusCode::OK, Json(body))
}

pub async fn read_resource(
    State(state): State<AppState>,
    Path((resource_type, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let resource_type: ResourceType = resource_type
        .parse()
        .map_err(|_| ApiError::not_found(format!("Unknown resource type '{resource_type}'")))?;

    state
        .store
        .find_by_id(resource_type, &id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("{resource_type} {id} not found")))
}

pub async fn search_resource(
    State(state): State<AppState>,
    Path(resource_type): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let resource_type: ResourceType = resource_type
        .parse()
        .map_err(|_| ApiError::not_found(format!("Unknown resource type '{resource_type}'")))?;

    // The EOB fixture is a pre-built bundle served verbatim
    if resource_type == ResourceType::ExplanationOfBenefit {
        let bundle = state
            .store
            .eob_bundle()
            .cloned()
            .unwrap_or_else(|| json!({}));
        return Ok(Json(bundle));
    }

    // Binary is read-by-id only
    if resource_type == ResourceType::Binary {
        return Err(ApiError::not_found("Binary search is not supported"));
    }

    let params = SearchParams::new(params);
    let results = search(&state.store, resource_type, &params)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    Ok(Json(searchset_bundle(&results, resource_type.as_str())))
}

fn loaded_type_names(state: &AppState) -> Vec<&'static str> {
    state
        .store
        .loaded_types()
        .iter()
        .map(ResourceType::as_str)
        .collect()
}
