use thiserror::Error;

/// Core error types for mockfhir operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid FHIR resource type: {0}")]
    InvalidResourceType(String),

    #[error("Resource not found: {resource_type}/{id}")]
    ResourceNotFound { resource_type: String, id: String },

    #[error("Invalid search parameter: {message}")]
    InvalidSearchParam { message: String },

    #[error("Fixture error: {message}")]
    Fixture { message: String },

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    /// Create a new InvalidResourceType error
    pub fn invalid_resource_type(resource_type: impl Into<String>) -> Self {
        Self::InvalidResourceType(resource_type.into())
    }

    /// Create a new ResourceNotFound error
    pub fn resource_not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Create a new InvalidSearchParam error
    pub fn invalid_search_param(message: impl Into<String>) -> Self {
        Self::InvalidSearchParam {
            message: message.into(),
        }
    }

    /// Create a new Fixture error
    pub fn fixture(message: impl Into<String>) -> Self {
        Self::Fixture {
            message: message.into(),
        }
    }

    /// Create a new Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Check if this error is a client error (4xx category)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidResourceType(_)
                | Self::ResourceNotFound { .. }
                | Self::InvalidSearchParam { .. }
        )
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_not_found_error() {
        let err = CoreError::resource_not_found("Patient", "123");
        assert_eq!(err.to_string(), "Resource not found: Patient/123");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_invalid_search_param_error() {
        let err = CoreError::invalid_search_param("category or code required");
        assert!(err.to_string().contains("category or code required"));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_fixture_error_is_not_client_error() {
        let err = CoreError::fixture("patients.json is not an array");
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err: serde_json::Error =
            serde_json::from_str::<serde_json::Value>("{ nope }").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::JsonError(_)));
    }
}
