//! Validate command

use clap::Args;
use kermod_core::rules::validate_model;
use kermod_core_types::schema;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the model record file
    pub file: PathBuf,

    /// Emit the findings as a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ValidateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let model = super::load_model(&args.file)?;
    let issues = validate_model(&model);

    if args.json {
        let mut report = serde_json::Map::new();
        report.insert(
            schema::FIELD_ELEMENT_COUNT.to_string(),
            serde_json::json!(model.elements.len()),
        );
        report.insert(
            schema::FIELD_ISSUE_COUNT.to_string(),
            serde_json::json!(issues.len()),
        );
        report.insert("issues".to_string(), serde_json::to_value(&issues)?);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for issue in &issues {
            println!("{}", issue);
        }
        println!(
            "{} element(s) checked, {} issue(s) found",
            model.elements.len(),
            issues.len()
        );
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(format!("{} validation issue(s) found", issues.len()).into())
    }
}
