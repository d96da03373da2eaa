//! The validation engine
//!
//! Stateless constraint checks over a read-only model snapshot. One function
//! per constraint family in [`invariants`], an aggregate entry point in
//! [`validation`], structured findings in [`issue`].

pub mod invariants;
pub mod issue;
pub mod snapshot;
pub mod validation;

pub use issue::{ValidationCode, ValidationIssue};
pub use snapshot::ModelSnapshot;
pub use validation::{validate_model, validate_snapshot, validate_store};
