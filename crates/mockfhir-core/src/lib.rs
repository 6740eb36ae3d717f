pub mod error;
pub mod fhir;
pub mod reference;

pub use error::{CoreError, Result};
pub use fhir::{EPIC_FHIR_BASE, ResourceType};
pub use reference::{reference_id, strip_type_prefix, value_reference_id};
