use std::collections::HashMap;

/// Parsed query-string parameters for a search request.
///
/// Parameters are kept as raw strings; interpretation (reference prefixes,
/// date prefixes, coded values) happens in the per-type filters. Unknown
/// parameters are simply never read, which makes them ignored by
/// construction.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    values: HashMap<String, String>,
}

impl SearchParams {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Raw parameter value, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// `_count` truncation limit. A value that does not parse as a
    /// non-negative integer is ignored.
    pub fn count(&self) -> Option<usize> {
        self.get("_count").and_then(|v| v.parse().ok())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for SearchParams {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_contains() {
        let params = SearchParams::from([("patient", "Patient/p1"), ("status", "active")]);
        assert_eq!(params.get("patient"), Some("Patient/p1"));
        assert!(params.contains("status"));
        assert!(!params.contains("category"));
    }

    #[test]
    fn count_parses_or_ignores() {
        assert_eq!(SearchParams::from([("_count", "5")]).count(), Some(5));
        assert_eq!(SearchParams::from([("_count", "abc")]).count(), None);
        assert_eq!(SearchParams::default().count(), None);
    }
}
