//! Appointment reference rebinding.
//!
//! `appointments.json` is authored outside the generator suite; this pass
//! rewrites each appointment's participant actors so patient and location
//! references line up with the generated patient and organization sets.

use mockfhir_core::reference::strip_type_prefix;
use serde_json::Value;

/// Rewrites participant references in place.
///
/// The i-th appointment is bound to the i-th (mod n) patient: its
/// `Patient/...` actor gets that patient's id and display name, and its
/// `Location/...` actor the patient's managing organization (falling back
/// to positional assignment when the patient has none).
pub fn rebind_appointments(
    appointments_data: &mut Value,
    patients: &[Value],
    organizations: &[Value],
) -> usize {
    if patients.is_empty() {
        return 0;
    }

    let patient_orgs: Vec<String> = patients
        .iter()
        .enumerate()
        .map(|(i, patient)| {
            let managed = patient
                .get("data")
                .and_then(|d| d.get("managingOrganization"))
                .and_then(|m| m.get("reference"))
                .and_then(Value::as_str)
                .unwrap_or("");
            if managed.is_empty() {
                organizations
                    .get(i % organizations.len().max(1))
                    .and_then(|o| o.get("id"))
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string()
            } else {
                strip_type_prefix(managed, "Organization").to_string()
            }
        })
        .collect();

    let Some(appointments) = appointments_data
        .get_mut("appointments")
        .and_then(Value::as_array_mut)
    else {
        return 0;
    };

    for (i, appointment) in appointments.iter_mut().enumerate() {
        let patient = &patients[i % patients.len()];
        let patient_id = patient.get("id").and_then(Value::as_str).unwrap_or("");
        let org_id = &patient_orgs[i % patient_orgs.len()];
        let display = display_name(patient);

        let Some(participants) = appointment
            .get_mut("full_resource")
            .and_then(|r| r.get_mut("participant"))
            .and_then(Value::as_array_mut)
        else {
            continue;
        };

        for participant in participants {
            let Some(actor) = participant.get_mut("actor").and_then(Value::as_object_mut) else {
                continue;
            };
            let reference = actor
                .get("reference")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();

            if reference.starts_with("Patient/") {
                actor.insert(
                    "reference".to_string(),
                    Value::String(format!("Patient/{patient_id}")),
                );
                if let Some(display) = &display {
                    actor.insert("display".to_string(), Value::String(display.clone()));
                }
            } else if reference.starts_with("Location/") {
                // location display stays as authored
                actor.insert(
                    "reference".to_string(),
                    Value::String(format!("Location/{org_id}")),
                );
            }
        }
    }

    appointments.len()
}

fn display_name(patient: &Value) -> Option<String> {
    let name = patient
        .get("data")
        .and_then(|d| d.get("name"))
        .and_then(Value::as_array)
        .and_then(|names| names.first())?;
    let given = name
        .get("given")
        .and_then(Value::as_array)
        .and_then(|g| g.first())
        .and_then(Value::as_str)?;
    let family = name.get("family").and_then(Value::as_str)?;
    if given.is_empty() || family.is_empty() {
        return None;
    }
    Some(format!("{family}, {given}"))
}
