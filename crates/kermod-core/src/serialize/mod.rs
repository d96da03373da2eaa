//! The serialization contract
//!
//! Bidirectional mapping between the live element graph and the portable
//! record format: tagged records per element (`__type` discriminator +
//! declared fields), assembled into a root `Model` record with
//! `rootPackageIds` and a flat `elements` array. This is the sole wire
//! format and must remain stable field-for-field.
//!
//! Round-trip laws: `deserialize(serialize(x))` is observationally equal to
//! `x`, and `serialize(deserialize(serialize(x)))` equals `serialize(x)`.

pub mod digest;
pub mod model_io;
pub mod record;

pub use digest::{compute_model_digest, compute_record_digest};
pub use model_io::{deserialize_model, serialize_model};
pub use record::{deserialize_element, deserialize_element_with_children, serialize_element};
