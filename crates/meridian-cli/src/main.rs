//! # meridian CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Meridian Compliance Portal toolchain.
///
/// Validates profile configurations, prints completion and missing-field
/// reports, and reports document expiry for the portal's data files.
#[derive(Parser, Debug)]
#[command(name = "meridian", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate a profile configuration file.
    Validate(meridian_cli::validate::ValidateArgs),
    /// Completion report for a profile.
    Completion(meridian_cli::completion::CompletionArgs),
    /// Document expiry report for a wallet.
    Wallet(meridian_cli::wallet::WalletArgs),
    /// Reporting-obligation dashboard.
    Obligations(meridian_cli::obligations::ObligationsArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => meridian_cli::validate::run(&args),
        Commands::Completion(args) => meridian_cli::completion::run(&args),
        Commands::Wallet(args) => meridian_cli::wallet::run(&args),
        Commands::Obligations(args) => meridian_cli::obligations::run(&args),
    }
}
