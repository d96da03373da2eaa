//! Core types shared across kermod facilities
//!
//! This crate provides foundational types used by the error handling,
//! logging, and CLI surfaces:
//!
//! - **Correlation types**: RequestId, TraceId, SpanId, RequestContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId, SpanId, TraceId};
