//! Appointment scheduling date matching.
//!
//! Epic's Appointment.Search accepts standard FHIR date prefixes
//! (`geYYYY-MM-DD`, `leYYYY-MM-DD`, `gtYYYY-MM-DD`, `ltYYYY-MM-DD`,
//! `eqYYYY-MM-DD`); comparison happens on the date component of
//! `Appointment.start`. Values without a prefix, and prefixed values whose
//! remainder does not parse as a date, degrade to substring matching so
//! partial dates like `2025-11` still work.

use time::Date;
use time::macros::format_description;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DatePrefix {
    Eq,
    Ge,
    Le,
    Gt,
    Lt,
}

impl DatePrefix {
    fn strip(param: &str) -> Option<(DatePrefix, &str)> {
        let prefix = match param.get(..2)? {
            "eq" => DatePrefix::Eq,
            "ge" => DatePrefix::Ge,
            "le" => DatePrefix::Le,
            "gt" => DatePrefix::Gt,
            "lt" => DatePrefix::Lt,
            _ => return None,
        };
        Some((prefix, &param[2..]))
    }

    fn compare(self, start: Date, filter: Date) -> bool {
        match self {
            DatePrefix::Eq => start == filter,
            DatePrefix::Ge => start >= filter,
            DatePrefix::Le => start <= filter,
            DatePrefix::Gt => start > filter,
            DatePrefix::Lt => start < filter,
        }
    }
}

/// Whether an appointment `start` value satisfies a `date` parameter.
///
/// Appointments without a start never match.
pub fn appointment_start_matches(start: &str, param: &str) -> bool {
    if start.is_empty() {
        return false;
    }

    let Some(start_date) = parse_iso_date(start) else {
        // Unparseable start, match on the raw string
        return start.contains(param);
    };

    let normalized = param.trim().to_lowercase();
    match DatePrefix::strip(&normalized) {
        Some((prefix, rest)) => match parse_iso_date(rest) {
            Some(filter_date) => prefix.compare(start_date, filter_date),
            None => start.contains(rest),
        },
        None => start.contains(param),
    }
}

/// Parses the calendar-date component of an ISO date or datetime string
/// (`2025-11-05` or `2025-11-05T14:00:00Z`).
fn parse_iso_date(value: &str) -> Option<Date> {
    let date_part = value.split('T').next().unwrap_or(value);
    Date::parse(date_part, format_description!("[year]-[month]-[day]")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "2025-11-05T14:00:00Z";

    #[test]
    fn ge_prefix_bounds() {
        assert!(appointment_start_matches(START, "ge2025-01-01"));
        assert!(appointment_start_matches(START, "ge2025-11-05"));
        assert!(!appointment_start_matches(START, "ge2025-12-01"));
    }

    #[test]
    fn le_prefix_bounds() {
        assert!(appointment_start_matches(START, "le2025-12-31"));
        assert!(appointment_start_matches(START, "le2025-11-05"));
        assert!(!appointment_start_matches(START, "le2025-01-01"));
    }

    #[test]
    fn gt_lt_are_strict() {
        assert!(!appointment_start_matches(START, "gt2025-11-05"));
        assert!(appointment_start_matches(START, "gt2025-11-04"));
        assert!(!appointment_start_matches(START, "lt2025-11-05"));
        assert!(appointment_start_matches(START, "lt2025-11-06"));
    }

    #[test]
    fn eq_compares_date_component_only() {
        assert!(appointment_start_matches(START, "eq2025-11-05"));
        assert!(!appointment_start_matches(START, "eq2025-11-06"));
    }

    #[test]
    fn partial_date_falls_back_to_substring() {
        assert!(appointment_start_matches(START, "2025-11"));
        assert!(!appointment_start_matches(START, "2025-12"));
    }

    #[test]
    fn prefixed_partial_date_falls_back_to_substring() {
        assert!(appointment_start_matches(START, "ge2025-11"));
        assert!(!appointment_start_matches(START, "genope"));
    }

    #[test]
    fn case_and_whitespace_are_normalized() {
        assert!(appointment_start_matches(START, " GE2025-01-01 "));
    }

    #[test]
    fn missing_start_never_matches() {
        assert!(!appointment_start_matches("", "ge2025-01-01"));
    }

    #[test]
    fn date_only_start_is_supported() {
        assert!(appointment_start_matches("2025-11-05", "eq2025-11-05"));
    }
}
