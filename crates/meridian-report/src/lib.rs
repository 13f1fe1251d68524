//! # meridian-report — Reporting Obligations & Dashboards
//!
//! The recurring filings a company owes (tax returns, annual reports,
//! regulatory submissions) and the dashboard views derived from them.
//!
//! - **Obligations** (`obligation.rs`): an obligation has a filing
//!   frequency and a due date; its status (upcoming, due soon, overdue,
//!   filed) is derived against a caller-supplied reference time, never
//!   stored. Filing is the one stateful transition, and double filing is
//!   rejected.
//!
//! - **Dashboard** (`dashboard.rs`): per-status counts across a company's
//!   obligations plus the next due filing.
//!
//! ## Crate Policy
//!
//! - Depends only on `meridian-core` internally.
//! - Status derivation is pure; nothing here reads the clock.

pub mod dashboard;
pub mod obligation;

pub use dashboard::{dashboard_summary, DashboardSummary};
pub use obligation::{
    FilingFrequency, ObligationError, ObligationStatus, ReportingObligation,
    DEFAULT_DUE_SOON_WINDOW_DAYS,
};
