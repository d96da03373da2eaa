//! Logging facility
//!
//! Canonical field keys and event names live in `kermod_core_types::schema`;
//! this module owns subscriber initialization.

pub mod init;

pub use init::{init, Profile};
