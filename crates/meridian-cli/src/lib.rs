//! # meridian-cli — Portal Command-Line Interface
//!
//! A thin operational surface over the domain crates: validate a profile
//! configuration, print completion reports for a profile file, and list
//! expiring wallet documents.
//!
//! ## Subcommands
//!
//! - `validate` — parse and validate a configuration file
//! - `completion` — completion and missing-field report for a profile
//! - `wallet` — document expiry report
//! - `obligations` — reporting-obligation dashboard
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to domain crates — no completion math here.

pub mod completion;
pub mod obligations;
pub mod validate;
pub mod wallet;
