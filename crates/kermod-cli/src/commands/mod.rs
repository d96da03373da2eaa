pub mod inspect;
pub mod roundtrip;
pub mod validate;

use kermod_core::model::Model;
use kermod_core::serialize::deserialize_model;
use std::path::Path;

/// Load a model record file and reconstruct the model
pub fn load_model(path: &Path) -> Result<Model, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let record: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| format!("{} is not valid JSON: {}", path.display(), e))?;
    Ok(deserialize_model(&record)?)
}
