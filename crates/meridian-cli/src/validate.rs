//! # Validate Subcommand
//!
//! Parses a configuration file and runs load-time validation, reporting
//! the structured error on failure.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use meridian_config::ProfileConfiguration;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the configuration file (.json, .yaml, or .yml).
    #[arg(long)]
    pub config: PathBuf,
}

/// Load a configuration file, choosing the parser by file extension.
///
/// Unrecognized extensions fall back to JSON, the portal's native format.
pub fn load_configuration(path: &Path) -> anyhow::Result<ProfileConfiguration> {
    let doc = std::fs::read_to_string(path)
        .with_context(|| format!("reading configuration file {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let config = if is_yaml {
        ProfileConfiguration::from_yaml_str(&doc)
    } else {
        ProfileConfiguration::from_json_str(&doc)
    }
    .with_context(|| format!("validating configuration {}", path.display()))?;
    Ok(config)
}

/// Run the validate subcommand.
pub fn run(args: &ValidateArgs) -> anyhow::Result<()> {
    let config = load_configuration(&args.config)?;
    tracing::info!(path = %args.config.display(), "configuration valid");
    println!(
        "OK: {} section(s), {} field(s), {} stage(s)",
        config.sections.len(),
        config.field_count(),
        config.stages.len()
    );
    Ok(())
}
