//! Shared formatting and extraction helpers for the generators.

use crate::seed::Seed;
use serde_json::Value;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

pub(crate) fn date_string(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

pub(crate) fn datetime_string(dt: PrimitiveDateTime) -> String {
    dt.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
    ))
    .unwrap_or_default()
}

/// A date at a hash-derived working-hours time of day (08:00-17:59).
pub(crate) fn at_derived_time(date: Date, seed: &Seed, hour_at: usize, minute_at: usize) -> PrimitiveDateTime {
    let hour = 8 + (seed.slice(hour_at..hour_at + 2) % 10) as u8;
    let minute = (seed.slice(minute_at..minute_at + 2) % 60) as u8;
    date.with_time(Time::from_hms(hour, minute, 0).unwrap_or(Time::MIDNIGHT))
}

/// Display name in the Epic list form: `Family, Given`.
pub(crate) fn patient_display_name(patient: &Value) -> String {
    let name = patient
        .get("data")
        .and_then(|data| data.get("name"))
        .and_then(Value::as_array)
        .and_then(|names| names.first());

    if let Some(name) = name {
        let given = name
            .get("given")
            .and_then(Value::as_array)
            .and_then(|g| g.first())
            .and_then(Value::as_str)
            .unwrap_or("");
        let family = name.get("family").and_then(Value::as_str).unwrap_or("");
        if !given.is_empty() && !family.is_empty() {
            return format!("{family}, {given}");
        }
    }
    "Unknown Patient".to_string()
}

/// Hash-derived US phone number.
pub(crate) fn phone_number(seed_input: &str) -> String {
    let seed = Seed::new(seed_input);
    let area = 200 + seed.slice(0..4) % 800;
    let exchange = 200 + seed.slice(4..8) % 800;
    let number = 1000 + seed.slice(8..12) % 9000;
    format!("+1-{area}-{exchange}-{number:04}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::date;

    #[test]
    fn patient_display_name_formats_family_given() {
        let patient = json!({
            "id": "p1",
            "data": {"name": [{"family": "Johnson", "given": ["Mary"]}]}
        });
        assert_eq!(patient_display_name(&patient), "Johnson, Mary");
    }

    #[test]
    fn patient_display_name_falls_back_when_unwrapped() {
        assert_eq!(patient_display_name(&json!({"id": "p1"})), "Unknown Patient");
    }

    #[test]
    fn phone_number_is_stable_and_in_range() {
        let a = phone_number("ePt1_phone");
        assert_eq!(a, phone_number("ePt1_phone"));
        assert!(a.starts_with("+1-"));
        let parts: Vec<&str> = a.split('-').collect();
        assert_eq!(parts.len(), 4);
        assert!(parts[1].parse::<u32>().unwrap() >= 200);
        assert_eq!(parts[3].len(), 4);
    }

    #[test]
    fn derived_time_is_working_hours() {
        let seed = Seed::new("anything");
        let dt = at_derived_time(date!(2025 - 03 - 01), &seed, 0, 2);
        assert!((8..18).contains(&dt.hour()));
    }
}
