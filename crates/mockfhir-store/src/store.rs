use mockfhir_core::ResourceType;
use serde_json::Value;
use std::collections::HashMap;

/// Immutable in-memory fixture store.
///
/// Collections are populated once by the loader; the server only ever
/// reads from them, so the whole store is shared behind an `Arc` without
/// further synchronization.
#[derive(Debug, Default)]
pub struct FixtureStore {
    collections: HashMap<ResourceType, Vec<Value>>,
    /// Pre-built ExplanationOfBenefit bundle, served verbatim.
    eob_bundle: Option<Value>,
    /// Types whose fixture file was present, in load order.
    loaded: Vec<ResourceType>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a collection. Called by the loader; also the seam tests
    /// use to assemble small stores without touching the filesystem.
    pub fn insert_collection(&mut self, resource_type: ResourceType, resources: Vec<Value>) {
        self.collections.insert(resource_type, resources);
        self.loaded.push(resource_type);
    }

    pub fn set_eob_bundle(&mut self, bundle: Value) {
        self.eob_bundle = Some(bundle);
        self.loaded.push(ResourceType::ExplanationOfBenefit);
    }

    /// Resources of a type; empty for types without a fixture file.
    pub fn collection(&self, resource_type: ResourceType) -> &[Value] {
        self.collections
            .get(&resource_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The stored ExplanationOfBenefit bundle, if its fixture was present.
    pub fn eob_bundle(&self) -> Option<&Value> {
        self.eob_bundle.as_ref()
    }

    /// Types with a loaded fixture file, in load order.
    pub fn loaded_types(&self) -> &[ResourceType] {
        &self.loaded
    }

    /// Looks up a resource by id.
    ///
    /// Patient fixtures are wrapped (`{id, data, retrieved_at}`), so both
    /// the wrapper id and the inner `data.id` are checked; the wrapped form
    /// is returned, matching what the Epic sandbox hands back.
    pub fn find_by_id(&self, resource_type: ResourceType, id: &str) -> Option<&Value> {
        self.collection(resource_type).iter().find(|resource| {
            let direct = resource.get("id").and_then(Value::as_str) == Some(id);
            if resource_type == ResourceType::Patient {
                direct
                    || resource
                        .get("data")
                        .and_then(|d| d.get("id"))
                        .and_then(Value::as_str)
                        == Some(id)
            } else {
                direct
            }
        })
    }
}
