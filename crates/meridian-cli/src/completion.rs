//! # Completion Subcommand
//!
//! Prints per-section and whole-profile completion for a profile file,
//! plus the missing-field list at the active stage.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use meridian_core::GrowthStage;
use meridian_profile::{
    missing_mandatory_fields, profile_completion, profile_mandatory_completion,
    section_completion, section_mandatory_completion, ProfileRecord,
};

use crate::validate::load_configuration;

/// Arguments for the completion subcommand.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Path to the configuration file (.json, .yaml, or .yml).
    #[arg(long)]
    pub config: PathBuf,

    /// Path to the profile record file (JSON).
    #[arg(long)]
    pub profile: PathBuf,

    /// Evaluate at this stage instead of the profile's recorded stage.
    #[arg(long)]
    pub stage: Option<GrowthStage>,
}

/// Run the completion subcommand.
pub fn run(args: &CompletionArgs) -> anyhow::Result<()> {
    let config = load_configuration(&args.config)?;
    let doc = std::fs::read_to_string(&args.profile)
        .with_context(|| format!("reading profile file {}", args.profile.display()))?;
    let mut record: ProfileRecord = serde_json::from_str(&doc)
        .with_context(|| format!("parsing profile file {}", args.profile.display()))?;
    if let Some(stage) = args.stage {
        record.stage = Some(stage);
    }

    let stage_label = record
        .stage
        .map(|s| s.to_string())
        .unwrap_or_else(|| "none".to_string());
    println!("Profile: {} (stage: {stage_label})", record.name);
    println!();

    for section in &config.sections {
        let data = record.section_data(&section.id);
        let overall = section_completion(section, data);
        let mandatory = section_mandatory_completion(section, data, record.stage);
        println!(
            "  {:<24} {overall:>3}% filled   mandatory {}/{} ({}%)",
            section.title, mandatory.completed, mandatory.total, mandatory.percentage
        );
    }

    let overall = profile_completion(&config, &record);
    let mandatory = profile_mandatory_completion(&config, &record);
    println!();
    println!(
        "Overall: {overall}% filled, mandatory {}/{} ({}%)",
        mandatory.completed, mandatory.total, mandatory.percentage
    );

    let missing = missing_mandatory_fields(&config, &record);
    if missing.is_empty() {
        println!("No mandatory fields missing.");
    } else {
        println!("Missing mandatory fields:");
        for field in &missing {
            println!(
                "  - {} > {} > {} ({})",
                field.section_title, field.group_name, field.label, field.key
            );
        }
    }
    Ok(())
}
