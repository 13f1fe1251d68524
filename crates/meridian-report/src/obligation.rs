//! # Reporting Obligations
//!
//! A reporting obligation is a recurring filing with a due date. Status
//! is derived from the due date and the filing record against a reference
//! time; the only stored state change is `file()`, and rolling the
//! schedule forward one period resets it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use meridian_core::{ObligationId, Timestamp};

/// Default window for "due soon", in days.
pub const DEFAULT_DUE_SOON_WINDOW_DAYS: i64 = 14;

/// How often an obligation recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilingFrequency {
    /// Due every month.
    Monthly,
    /// Due every three months.
    Quarterly,
    /// Due once a year.
    Annual,
}

impl FilingFrequency {
    /// Length of one filing period in calendar months.
    pub fn period_months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Annual => 12,
        }
    }
}

impl std::fmt::Display for FilingFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Monthly => "MONTHLY",
            Self::Quarterly => "QUARTERLY",
            Self::Annual => "ANNUAL",
        };
        f.write_str(s)
    }
}

/// Derived status of an obligation at a reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObligationStatus {
    /// Filed for the current period.
    Filed,
    /// Not yet due and outside the due-soon window.
    Upcoming,
    /// Due within the window.
    DueSoon {
        /// Whole days until the due date.
        days_left: i64,
    },
    /// The due date has passed without a filing.
    Overdue {
        /// Whole days past the due date.
        days_overdue: i64,
    },
}

impl std::fmt::Display for ObligationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Filed => f.write_str("FILED"),
            Self::Upcoming => f.write_str("UPCOMING"),
            Self::DueSoon { days_left } => write!(f, "DUE_IN_{days_left}_DAYS"),
            Self::Overdue { days_overdue } => write!(f, "OVERDUE_{days_overdue}_DAYS"),
        }
    }
}

/// Errors raised by obligation transitions.
#[derive(Error, Debug)]
pub enum ObligationError {
    /// The obligation was already filed for the current period.
    #[error("obligation {obligation_id} is already filed for the period due {due_at}")]
    AlreadyFiled {
        /// The obligation identifier.
        obligation_id: ObligationId,
        /// The due date of the already-filed period.
        due_at: Timestamp,
    },
}

/// One recurring filing obligation for a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingObligation {
    /// Unique obligation identifier.
    pub id: ObligationId,
    /// Display title (e.g., "Monthly Sales Tax Return").
    pub title: String,
    /// Recurrence of the filing.
    pub frequency: FilingFrequency,
    /// Due date of the current period.
    pub due_at: Timestamp,
    /// When the current period was filed, if it has been.
    pub filed_at: Option<Timestamp>,
}

impl ReportingObligation {
    /// Create an unfiled obligation.
    pub fn new(title: impl Into<String>, frequency: FilingFrequency, due_at: Timestamp) -> Self {
        Self {
            id: ObligationId::new(),
            title: title.into(),
            frequency,
            due_at,
            filed_at: None,
        }
    }

    /// Derive the status at `as_of` with the given due-soon window.
    ///
    /// A filed obligation is `Filed` regardless of the reference time. An
    /// unfiled obligation due exactly at `as_of` is still `DueSoon` with
    /// zero days left; it becomes `Overdue` once `as_of` passes the due
    /// date.
    pub fn status(&self, as_of: Timestamp, window_days: i64) -> ObligationStatus {
        if self.filed_at.is_some() {
            return ObligationStatus::Filed;
        }
        if as_of > self.due_at {
            return ObligationStatus::Overdue {
                days_overdue: self.due_at.days_until(as_of),
            };
        }
        let days_left = as_of.days_until(self.due_at);
        if days_left <= window_days {
            ObligationStatus::DueSoon { days_left }
        } else {
            ObligationStatus::Upcoming
        }
    }

    /// Status with the default 14-day due-soon window.
    pub fn default_status(&self, as_of: Timestamp) -> ObligationStatus {
        self.status(as_of, DEFAULT_DUE_SOON_WINDOW_DAYS)
    }

    /// Mark the current period filed at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`ObligationError::AlreadyFiled`] if the current period has
    /// already been filed; roll the schedule forward with
    /// [`ReportingObligation::advance_due_date`] first.
    pub fn file(&mut self, at: Timestamp) -> Result<(), ObligationError> {
        if self.filed_at.is_some() {
            return Err(ObligationError::AlreadyFiled {
                obligation_id: self.id,
                due_at: self.due_at,
            });
        }
        self.filed_at = Some(at);
        Ok(())
    }

    /// Roll the due date forward one filing period and clear the filing
    /// record, opening the next period.
    pub fn advance_due_date(&mut self) {
        self.due_at = self.due_at.plus_months(self.frequency.period_months());
        self.filed_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn obligation(due: &str) -> ReportingObligation {
        ReportingObligation::new("Sales Tax Return", FilingFrequency::Monthly, ts(due))
    }

    // ── Status derivation ────────────────────────────────────────────

    #[test]
    fn test_far_future_due_is_upcoming() {
        let o = obligation("2026-09-30T00:00:00Z");
        assert_eq!(
            o.status(ts("2026-06-01T00:00:00Z"), 14),
            ObligationStatus::Upcoming
        );
    }

    #[test]
    fn test_inside_window_is_due_soon() {
        let o = obligation("2026-06-10T00:00:00Z");
        assert_eq!(
            o.status(ts("2026-06-01T00:00:00Z"), 14),
            ObligationStatus::DueSoon { days_left: 9 }
        );
    }

    #[test]
    fn test_due_exactly_now_is_due_soon_zero_days() {
        let o = obligation("2026-06-01T00:00:00Z");
        assert_eq!(
            o.status(ts("2026-06-01T00:00:00Z"), 14),
            ObligationStatus::DueSoon { days_left: 0 }
        );
    }

    #[test]
    fn test_past_due_is_overdue() {
        let o = obligation("2026-05-15T00:00:00Z");
        assert_eq!(
            o.status(ts("2026-06-01T00:00:00Z"), 14),
            ObligationStatus::Overdue { days_overdue: 17 }
        );
    }

    #[test]
    fn test_filed_obligation_is_filed_even_past_due() {
        let mut o = obligation("2026-05-15T00:00:00Z");
        o.file(ts("2026-05-10T00:00:00Z")).unwrap();
        assert_eq!(
            o.status(ts("2026-06-01T00:00:00Z"), 14),
            ObligationStatus::Filed
        );
    }

    #[test]
    fn test_window_boundary() {
        let o = obligation("2026-06-15T00:00:00Z");
        // Exactly 14 days out: due soon.
        assert_eq!(
            o.status(ts("2026-06-01T00:00:00Z"), 14),
            ObligationStatus::DueSoon { days_left: 14 }
        );
        // 15 days out: upcoming.
        assert_eq!(
            o.status(ts("2026-05-31T00:00:00Z"), 14),
            ObligationStatus::Upcoming
        );
    }

    // ── Filing transitions ───────────────────────────────────────────

    #[test]
    fn test_file_records_timestamp() {
        let mut o = obligation("2026-06-15T00:00:00Z");
        o.file(ts("2026-06-10T00:00:00Z")).unwrap();
        assert_eq!(o.filed_at, Some(ts("2026-06-10T00:00:00Z")));
    }

    #[test]
    fn test_double_filing_rejected() {
        let mut o = obligation("2026-06-15T00:00:00Z");
        o.file(ts("2026-06-10T00:00:00Z")).unwrap();
        let result = o.file(ts("2026-06-11T00:00:00Z"));
        match result {
            Err(ObligationError::AlreadyFiled { due_at, .. }) => {
                assert_eq!(due_at, ts("2026-06-15T00:00:00Z"));
            }
            other => panic!("expected AlreadyFiled, got: {other:?}"),
        }
        // First filing is untouched.
        assert_eq!(o.filed_at, Some(ts("2026-06-10T00:00:00Z")));
    }

    #[test]
    fn test_advance_due_date_monthly() {
        let mut o = obligation("2026-06-15T00:00:00Z");
        o.file(ts("2026-06-10T00:00:00Z")).unwrap();
        o.advance_due_date();
        assert_eq!(o.due_at, ts("2026-07-15T00:00:00Z"));
        assert!(o.filed_at.is_none());
        // Next period can be filed again.
        assert!(o.file(ts("2026-07-10T00:00:00Z")).is_ok());
    }

    #[test]
    fn test_advance_due_date_quarterly_and_annual() {
        let mut q = ReportingObligation::new(
            "Quarterly Return",
            FilingFrequency::Quarterly,
            ts("2026-03-31T00:00:00Z"),
        );
        q.advance_due_date();
        assert_eq!(q.due_at, ts("2026-06-30T00:00:00Z"));

        let mut a = ReportingObligation::new(
            "Annual Report",
            FilingFrequency::Annual,
            ts("2026-12-31T00:00:00Z"),
        );
        a.advance_due_date();
        assert_eq!(a.due_at, ts("2027-12-31T00:00:00Z"));
    }

    #[test]
    fn test_advance_clamps_month_end() {
        let mut o = ReportingObligation::new(
            "Month-End Filing",
            FilingFrequency::Monthly,
            ts("2026-01-31T00:00:00Z"),
        );
        o.advance_due_date();
        assert_eq!(o.due_at, ts("2026-02-28T00:00:00Z"));
    }

    // ── Display & serde ──────────────────────────────────────────────

    #[test]
    fn test_status_display() {
        assert_eq!(ObligationStatus::Filed.to_string(), "FILED");
        assert_eq!(ObligationStatus::Upcoming.to_string(), "UPCOMING");
        assert_eq!(
            ObligationStatus::DueSoon { days_left: 3 }.to_string(),
            "DUE_IN_3_DAYS"
        );
        assert_eq!(
            ObligationStatus::Overdue { days_overdue: 7 }.to_string(),
            "OVERDUE_7_DAYS"
        );
    }

    #[test]
    fn test_frequency_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&FilingFrequency::Quarterly).unwrap(),
            "\"quarterly\""
        );
    }

    #[test]
    fn test_obligation_serde_roundtrip() {
        let mut o = obligation("2026-06-15T00:00:00Z");
        o.file(ts("2026-06-10T00:00:00Z")).unwrap();
        let json = serde_json::to_string(&o).unwrap();
        let parsed: ReportingObligation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, o);
    }
}
