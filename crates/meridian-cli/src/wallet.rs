//! # Wallet Subcommand
//!
//! Document expiry report for a wallet file: per-document status at a
//! reference time plus the summary counts.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use meridian_core::Timestamp;
use meridian_wallet::{DocumentWallet, DEFAULT_EXPIRY_WINDOW_DAYS};

/// Arguments for the wallet subcommand.
#[derive(Args, Debug)]
pub struct WalletArgs {
    /// Path to the wallet file (JSON).
    #[arg(long)]
    pub wallet: PathBuf,

    /// Warning window in days for "expiring soon".
    #[arg(long, default_value_t = DEFAULT_EXPIRY_WINDOW_DAYS)]
    pub window: i64,

    /// Reference time (ISO8601, UTC with Z suffix). Defaults to now.
    #[arg(long)]
    pub as_of: Option<String>,
}

/// Run the wallet subcommand.
pub fn run(args: &WalletArgs) -> anyhow::Result<()> {
    let doc = std::fs::read_to_string(&args.wallet)
        .with_context(|| format!("reading wallet file {}", args.wallet.display()))?;
    let wallet: DocumentWallet = serde_json::from_str(&doc)
        .with_context(|| format!("parsing wallet file {}", args.wallet.display()))?;

    let as_of = match &args.as_of {
        Some(s) => Timestamp::parse(s).context("parsing --as-of")?,
        None => Timestamp::now(),
    };

    println!("Wallet as of {as_of} (window: {} days)", args.window);
    for document in &wallet {
        let status = document.expiry_status(as_of, args.window);
        let expiry = document
            .expires_at
            .map(|t| t.to_string())
            .unwrap_or_else(|| "never".to_string());
        println!("  {:<32} expires {expiry:<22} {status}", document.name);
    }

    let summary = wallet.summary_with_window(as_of, args.window);
    println!();
    println!(
        "Total {}: {} valid, {} expiring soon, {} expired",
        summary.total, summary.valid, summary.expiring_soon, summary.expired
    );
    Ok(())
}
