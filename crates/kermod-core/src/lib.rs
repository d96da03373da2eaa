//! kermod core - in-memory metamodel and constraint-validation engine
//!
//! This crate provides the foundational data structures and operations for a
//! KerML-style type system:
//! - Element/type/feature graph with ownership and specialization semantics
//! - Relationship edges and type operators (union/intersect/difference)
//! - A portable, tagged-record serialization contract with round-trip laws
//! - A stateless validation engine reporting structured findings
//!
//! Execution is single-threaded and synchronous: every mutation runs to
//! completion before returning, and validation reads an implicitly-consistent
//! snapshot with no isolation of its own. Multi-writer embedders must fence
//! the whole-model snapshot externally.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;
pub mod serialize;

// Re-export commonly used types
pub use errors::{KermodError, Result};
pub use model::{
    Element, ElementData, Feature, FeatureKind, Model, MultiplicityRange, Package, Relationship,
    Type, TypeKind, TypeOperator,
};
pub use ops::Store;
pub use rules::{validate_model, validate_snapshot, validate_store, ModelSnapshot, ValidationCode, ValidationIssue};
pub use serialize::{deserialize_element, deserialize_model, serialize_element, serialize_model};
