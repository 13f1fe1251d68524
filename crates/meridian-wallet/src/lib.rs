//! # meridian-wallet — Document Wallet with Expiry Tracking
//!
//! Per-company document records (incorporation certificates, tax
//! registrations, permits) with issue and expiry dates, and the derived
//! expiry views the portal's wallet page renders.
//!
//! Expiry status is always *derived* against a caller-supplied reference
//! time — documents never store a status, so a wallet loaded today and a
//! wallet loaded next month disagree only through `as_of`, never through
//! stale persisted state.
//!
//! ## Crate Policy
//!
//! - Depends only on `meridian-core` internally.
//! - All status derivation is pure; nothing here reads the clock. Callers
//!   pass `Timestamp::now()` when they want wall-clock behavior.

pub mod document;
pub mod wallet;

pub use document::{Document, ExpiryStatus, DEFAULT_EXPIRY_WINDOW_DAYS};
pub use wallet::{DocumentWallet, WalletSummary};
