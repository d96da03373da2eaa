//! Roundtrip command
//!
//! Checks the serialization contract on a stored record: deserialize,
//! re-serialize, and compare digests.

use clap::Args;
use kermod_core::serialize::{compute_record_digest, serialize_model};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RoundtripArgs {
    /// Path to the model record file
    pub file: PathBuf,
}

pub fn execute(args: RoundtripArgs) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(&args.file)
        .map_err(|e| format!("cannot read {}: {}", args.file.display(), e))?;
    let stored: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| format!("{} is not valid JSON: {}", args.file.display(), e))?;

    let model = kermod_core::serialize::deserialize_model(&stored)?;
    let regenerated = serialize_model(&model)?;

    let stored_digest = compute_record_digest(&stored)?;
    let regenerated_digest = compute_record_digest(&regenerated)?;

    println!("stored:      {}", stored_digest);
    println!("regenerated: {}", regenerated_digest);

    if stored == regenerated {
        println!("round trip OK ({} element(s))", model.elements.len());
        Ok(())
    } else {
        Err("round trip mismatch: regenerated record differs from stored record".into())
    }
}
