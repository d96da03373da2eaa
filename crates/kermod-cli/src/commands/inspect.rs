//! Inspect command

use clap::Args;
use kermod_core::model::Element;
use kermod_core::serialize::compute_model_digest;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Path to the model record file
    pub file: PathBuf,
}

pub fn execute(args: InspectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let model = super::load_model(&args.file)?;

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for element in &model.elements {
        *counts.entry(element.kind_name()).or_insert(0) += 1;
    }

    println!("model: {}", model.element.id);
    if let Some(name) = &model.element.name {
        println!("name: {}", name);
    }
    println!("root packages: {}", model.root_package_ids.len());
    println!("elements: {}", model.elements.len());
    for (kind, count) in &counts {
        println!("  {:<20} {}", kind, count);
    }

    let owned_features: usize = model
        .elements
        .iter()
        .map(|e| match e {
            Element::Type(ty) => ty.features.len(),
            _ => 0,
        })
        .sum();
    println!("owned features: {}", owned_features);
    println!("digest: {}", compute_model_digest(&model)?);

    Ok(())
}
