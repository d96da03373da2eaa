pub mod feature_ops;
pub mod operator_ops;
pub mod organization_ops;
pub mod relationship_ops;
pub mod store;
pub mod type_ops;

pub use organization_ops::{collect_model, store_from_model};
pub use store::Store;
