use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Epic sandbox base URL stamped into bundle `fullUrl`s and self links.
pub const EPIC_FHIR_BASE: &str = "https://fhir.epic.com/interconnect-fhir-oauth/api/FHIR/R4";

/// Resource types served from the fixture store.
///
/// This is the closed set of Epic-compatible R4 types the mock exposes;
/// anything else is rejected at the routing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Patient,
    Organization,
    Coverage,
    Practitioner,
    PractitionerRole,
    Encounter,
    Procedure,
    Condition,
    Consent,
    Observation,
    DocumentReference,
    Binary,
    Provenance,
    ExplanationOfBenefit,
    Appointment,
}

impl ResourceType {
    /// All types in a stable order, used for loading and capability reporting.
    pub const ALL: [ResourceType; 15] = [
        ResourceType::Patient,
        ResourceType::Organization,
        ResourceType::Coverage,
        ResourceType::Practitioner,
        ResourceType::PractitionerRole,
        ResourceType::Encounter,
        ResourceType::Procedure,
        ResourceType::Condition,
        ResourceType::Consent,
        ResourceType::Observation,
        ResourceType::DocumentReference,
        ResourceType::Binary,
        ResourceType::Provenance,
        ResourceType::ExplanationOfBenefit,
        ResourceType::Appointment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Patient => "Patient",
            ResourceType::Organization => "Organization",
            ResourceType::Coverage => "Coverage",
            ResourceType::Practitioner => "Practitioner",
            ResourceType::PractitionerRole => "PractitionerRole",
            ResourceType::Encounter => "Encounter",
            ResourceType::Procedure => "Procedure",
            ResourceType::Condition => "Condition",
            ResourceType::Consent => "Consent",
            ResourceType::Observation => "Observation",
            ResourceType::DocumentReference => "DocumentReference",
            ResourceType::Binary => "Binary",
            ResourceType::Provenance => "Provenance",
            ResourceType::ExplanationOfBenefit => "ExplanationOfBenefit",
            ResourceType::Appointment => "Appointment",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Patient" => Ok(ResourceType::Patient),
            "Organization" => Ok(ResourceType::Organization),
            "Coverage" => Ok(ResourceType::Coverage),
            "Practitioner" => Ok(ResourceType::Practitioner),
            "PractitionerRole" => Ok(ResourceType::PractitionerRole),
            "Encounter" => Ok(ResourceType::Encounter),
            "Procedure" => Ok(ResourceType::Procedure),
            "Condition" => Ok(ResourceType::Condition),
            "Consent" => Ok(ResourceType::Consent),
            "Observation" => Ok(ResourceType::Observation),
            "DocumentReference" => Ok(ResourceType::DocumentReference),
            "Binary" => Ok(ResourceType::Binary),
            "Provenance" => Ok(ResourceType::Provenance),
            "ExplanationOfBenefit" => Ok(ResourceType::ExplanationOfBenefit),
            "Appointment" => Ok(ResourceType::Appointment),
            other => Err(CoreError::invalid_resource_type(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        for rt in ResourceType::ALL {
            let parsed: ResourceType = rt.as_str().parse().unwrap();
            assert_eq!(parsed, rt);
        }
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = "MedicationRequest".parse::<ResourceType>().unwrap_err();
        assert!(err.to_string().contains("MedicationRequest"));
    }

    #[test]
    fn test_all_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for rt in ResourceType::ALL {
            assert!(seen.insert(rt.as_str()));
        }
    }
}
