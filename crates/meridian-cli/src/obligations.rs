//! # Obligations Subcommand
//!
//! Reporting-obligation dashboard for an obligations file: per-obligation
//! status at a reference time plus the summary counts and next due filing.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use meridian_core::Timestamp;
use meridian_report::{dashboard_summary, ReportingObligation, DEFAULT_DUE_SOON_WINDOW_DAYS};

/// Arguments for the obligations subcommand.
#[derive(Args, Debug)]
pub struct ObligationsArgs {
    /// Path to the obligations file (JSON array).
    #[arg(long)]
    pub obligations: PathBuf,

    /// Due-soon window in days.
    #[arg(long, default_value_t = DEFAULT_DUE_SOON_WINDOW_DAYS)]
    pub window: i64,

    /// Reference time (ISO8601, UTC with Z suffix). Defaults to now.
    #[arg(long)]
    pub as_of: Option<String>,
}

/// Run the obligations subcommand.
pub fn run(args: &ObligationsArgs) -> anyhow::Result<()> {
    let doc = std::fs::read_to_string(&args.obligations)
        .with_context(|| format!("reading obligations file {}", args.obligations.display()))?;
    let obligations: Vec<ReportingObligation> = serde_json::from_str(&doc)
        .with_context(|| format!("parsing obligations file {}", args.obligations.display()))?;

    let as_of = match &args.as_of {
        Some(s) => Timestamp::parse(s).context("parsing --as-of")?,
        None => Timestamp::now(),
    };

    println!("Obligations as of {as_of} (window: {} days)", args.window);
    for obligation in &obligations {
        let status = obligation.status(as_of, args.window);
        println!(
            "  {:<32} {} due {}  {status}",
            obligation.title, obligation.frequency, obligation.due_at
        );
    }

    let summary = dashboard_summary(&obligations, as_of, args.window);
    println!();
    println!(
        "Total {}: {} filed, {} upcoming, {} due soon, {} overdue",
        summary.total, summary.filed, summary.upcoming, summary.due_soon, summary.overdue
    );
    if let Some(next) = summary.next_due {
        if let Some(obligation) = obligations.iter().find(|o| o.id == next) {
            println!("Next due: {} ({})", obligation.title, obligation.due_at);
        }
    }
    Ok(())
}
