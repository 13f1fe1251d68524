//! # Obligation Dashboard
//!
//! Aggregates a company's obligations into the counts and "next due"
//! pointer the reporting dashboard renders.

use serde::{Deserialize, Serialize};

use meridian_core::{ObligationId, Timestamp};

use crate::obligation::{ObligationStatus, ReportingObligation};

/// Per-status counts across a set of obligations, plus the next due one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Total obligations considered.
    pub total: usize,
    /// Filed for the current period.
    pub filed: usize,
    /// Not yet due, outside the window.
    pub upcoming: usize,
    /// Due within the window.
    pub due_soon: usize,
    /// Past due without a filing.
    pub overdue: usize,
    /// The unfiled obligation with the earliest due date, if any.
    pub next_due: Option<ObligationId>,
}

/// Summarize `obligations` at `as_of` with the given due-soon window.
///
/// `next_due` is the earliest-due unfiled obligation — overdue filings
/// qualify, since they are the most urgent thing on the dashboard. Ties
/// on the due date keep the first obligation in input order.
pub fn dashboard_summary(
    obligations: &[ReportingObligation],
    as_of: Timestamp,
    window_days: i64,
) -> DashboardSummary {
    let mut summary = DashboardSummary {
        total: obligations.len(),
        filed: 0,
        upcoming: 0,
        due_soon: 0,
        overdue: 0,
        next_due: None,
    };

    let mut earliest: Option<(Timestamp, ObligationId)> = None;
    for obligation in obligations {
        match obligation.status(as_of, window_days) {
            ObligationStatus::Filed => summary.filed += 1,
            ObligationStatus::Upcoming => summary.upcoming += 1,
            ObligationStatus::DueSoon { .. } => summary.due_soon += 1,
            ObligationStatus::Overdue { .. } => summary.overdue += 1,
        }
        if obligation.filed_at.is_none() {
            let is_earlier = earliest
                .map(|(due, _)| obligation.due_at < due)
                .unwrap_or(true);
            if is_earlier {
                earliest = Some((obligation.due_at, obligation.id));
            }
        }
    }
    summary.next_due = earliest.map(|(_, id)| id);
    summary
}
