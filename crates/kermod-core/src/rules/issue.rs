//! Structured validation findings
//!
//! The validation engine never throws: every constraint violation becomes a
//! [`ValidationIssue`] value in a returned list, safe to produce over an
//! inconsistent or partially built model.

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable classification of validation findings
///
/// Each code maps to a stable string used in reports and external API
/// responses; the mapping is part of the engine's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCode {
    SelfSpecialization,
    SpecializationCycle,
    InvalidLowerBound,
    InvalidUpperBound,
    EmptyOperands,
    MissingFirstOperand,
    MissingSecondOperand,
    MissingEndpoint,
    IncompatibleFlags,
    MissingTypeReference,
    UnknownTypeReference,
    UnknownFeatureReference,
    UndersizedConnector,
    PackageImportCycle,
}

impl ValidationCode {
    /// Get the stable error code for this finding class
    pub fn code(&self) -> &'static str {
        match self {
            ValidationCode::SelfSpecialization => "ERR_SELF_SPECIALIZATION",
            ValidationCode::SpecializationCycle => "ERR_SPECIALIZATION_CYCLE",
            ValidationCode::InvalidLowerBound => "ERR_INVALID_LOWER_BOUND",
            ValidationCode::InvalidUpperBound => "ERR_INVALID_UPPER_BOUND",
            ValidationCode::EmptyOperands => "ERR_EMPTY_OPERANDS",
            ValidationCode::MissingFirstOperand => "ERR_MISSING_FIRST_OPERAND",
            ValidationCode::MissingSecondOperand => "ERR_MISSING_SECOND_OPERAND",
            ValidationCode::MissingEndpoint => "ERR_MISSING_ENDPOINT",
            ValidationCode::IncompatibleFlags => "ERR_INCOMPATIBLE_FLAGS",
            ValidationCode::MissingTypeReference => "ERR_MISSING_TYPE_REFERENCE",
            ValidationCode::UnknownTypeReference => "ERR_UNKNOWN_TYPE_REFERENCE",
            ValidationCode::UnknownFeatureReference => "ERR_UNKNOWN_FEATURE_REFERENCE",
            ValidationCode::UndersizedConnector => "ERR_UNDERSIZED_CONNECTOR",
            ValidationCode::PackageImportCycle => "ERR_PACKAGE_IMPORT_CYCLE",
        }
    }

    /// Resolve a stable code string back to its finding class
    pub fn from_code(code: &str) -> Option<Self> {
        let all = [
            ValidationCode::SelfSpecialization,
            ValidationCode::SpecializationCycle,
            ValidationCode::InvalidLowerBound,
            ValidationCode::InvalidUpperBound,
            ValidationCode::EmptyOperands,
            ValidationCode::MissingFirstOperand,
            ValidationCode::MissingSecondOperand,
            ValidationCode::MissingEndpoint,
            ValidationCode::IncompatibleFlags,
            ValidationCode::MissingTypeReference,
            ValidationCode::UnknownTypeReference,
            ValidationCode::UnknownFeatureReference,
            ValidationCode::UndersizedConnector,
            ValidationCode::PackageImportCycle,
        ];
        all.into_iter().find(|candidate| candidate.code() == code)
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for ValidationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ValidationCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CodeVisitor;

        impl Visitor<'_> for CodeVisitor {
            type Value = ValidationCode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a stable validation code string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                ValidationCode::from_code(value)
                    .ok_or_else(|| E::custom(format!("unknown validation code: {value}")))
            }
        }

        deserializer.deserialize_str(CodeVisitor)
    }
}

/// One structural-consistency finding over a model snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// Id of the offending element
    pub element_id: String,

    /// Wire discriminator of the offending element's kind
    pub element_kind: String,

    /// Stable finding classification
    pub code: ValidationCode,

    /// Human-readable description naming the involved elements
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        element_id: impl Into<String>,
        element_kind: impl Into<String>,
        code: ValidationCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            element_kind: element_kind.into(),
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.code.code(),
            self.element_id,
            self.element_kind,
            self.message
        )
    }
}
