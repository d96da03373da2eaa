use thiserror::Error;

/// Result type alias using KermodError
pub type Result<T> = std::result::Result<T, KermodError>;

/// Comprehensive error taxonomy for kermod operations
///
/// Model-consistency problems are deliberately *not* represented here: the
/// validation engine reports those as [`crate::rules::ValidationIssue`]
/// values in a returned list, never as errors. This enum covers lookup
/// failures, structural misuse caught at mutation time, and serialization
/// failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KermodError {
    // ===== Lookup Errors =====
    /// Type not found in store
    #[error("Type not found: {type_id}")]
    TypeNotFound { type_id: String },

    /// Feature not found in store
    #[error("Feature not found: {feature_id}")]
    FeatureNotFound { feature_id: String },

    /// Multiplicity range not found in store
    #[error("Multiplicity range not found: {multiplicity_id}")]
    MultiplicityNotFound { multiplicity_id: String },

    /// Relationship not found in store
    #[error("Relationship not found: {relationship_id}")]
    RelationshipNotFound { relationship_id: String },

    /// Type operator not found in store
    #[error("Type operator not found: {operator_id}")]
    OperatorNotFound { operator_id: String },

    /// Package not found in store
    #[error("Package not found: {package_id}")]
    PackageNotFound { package_id: String },

    /// Feature value not found in store
    #[error("Feature value not found: {value_id}")]
    FeatureValueNotFound { value_id: String },

    /// Metadata feature not found in store
    #[error("Metadata feature not found: {metadata_id}")]
    MetadataFeatureNotFound { metadata_id: String },

    /// No element with the given id exists in the model
    #[error("Element not found: {element_id}")]
    ElementNotFound { element_id: String },

    // ===== Structural Errors =====
    /// A type listed itself among its own specialization targets
    #[error("Type cannot specialize itself: {type_id}")]
    SelfSpecialization { type_id: String },

    /// An operation was attempted on a kind that does not support it
    #[error("Operation '{op}' is not supported for element kind '{kind}'")]
    UnsupportedKind { op: String, kind: String },

    // ===== Serialization Errors =====
    /// A record carried a discriminator naming no known element kind
    #[error("Unknown element kind in record: {found}")]
    UnknownElementKind { found: String },

    /// A record was missing a required field
    #[error("Record is missing required field: {field}")]
    MissingField { field: String },

    /// A record was not a JSON object, or another serialization failure
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },
}

impl KermodError {
    /// Fold a serde_json error into the typed failure taxonomy.
    ///
    /// Missing-field failures are surfaced as [`KermodError::MissingField`]
    /// so callers can distinguish an incomplete record from a malformed one.
    pub fn from_serde(err: &serde_json::Error) -> Self {
        let message = err.to_string();
        if let Some(rest) = message.strip_prefix("missing field `") {
            if let Some(end) = rest.find('`') {
                return KermodError::MissingField {
                    field: rest[..end].to_string(),
                };
            }
        }
        KermodError::Serialization { reason: message }
    }
}

impl From<serde_json::Error> for KermodError {
    fn from(err: serde_json::Error) -> Self {
        Self::from_serde(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Probe {
        required: String,
    }

    #[test]
    fn test_missing_field_is_typed() {
        let err = serde_json::from_str::<Probe>("{}").unwrap_err();
        let mapped = KermodError::from_serde(&err);
        assert_eq!(
            mapped,
            KermodError::MissingField {
                field: "required".to_string()
            }
        );
    }

    #[test]
    fn test_other_serde_errors_map_to_serialization() {
        let err = serde_json::from_str::<Probe>("not json").unwrap_err();
        let mapped = KermodError::from_serde(&err);
        assert!(matches!(mapped, KermodError::Serialization { .. }));
    }

    #[test]
    fn test_error_display_includes_id() {
        let err = KermodError::TypeNotFound {
            type_id: "t-1".to_string(),
        };
        assert_eq!(err.to_string(), "Type not found: t-1");
    }
}
