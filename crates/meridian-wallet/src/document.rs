//! # Document Records & Expiry Status
//!
//! A document is metadata plus dates; its expiry status is derived, never
//! stored. The warning window ("expiring soon") is a parameter so the
//! wallet page and the dashboard can use different horizons.

use serde::{Deserialize, Serialize};

use meridian_core::{DocumentId, Timestamp};

/// Default warning window for "expiring soon", in days.
pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 30;

/// Derived expiry state of a document at a reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryStatus {
    /// Not expired and outside the warning window (or no expiry date).
    Valid,
    /// Expires within the warning window.
    ExpiringSoon {
        /// Whole days until expiry (0 = expires within the next day).
        days_left: i64,
    },
    /// The expiry date has passed.
    Expired,
}

impl std::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => f.write_str("VALID"),
            Self::ExpiringSoon { days_left } => write!(f, "EXPIRING_IN_{days_left}_DAYS"),
            Self::Expired => f.write_str("EXPIRED"),
        }
    }
}

/// One document in a company's wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier.
    pub id: DocumentId,
    /// Display name (e.g., "Certificate of Incorporation").
    pub name: String,
    /// Free-form category used for grouping on the wallet page.
    pub category: String,
    /// When the document was issued.
    pub issued_at: Timestamp,
    /// When the document expires. `None` = never expires.
    pub expires_at: Option<Timestamp>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

impl Document {
    /// Create a document with no expiry date.
    pub fn new(name: impl Into<String>, category: impl Into<String>, issued_at: Timestamp) -> Self {
        Self {
            id: DocumentId::new(),
            name: name.into(),
            category: category.into(),
            issued_at,
            expires_at: None,
            notes: String::new(),
        }
    }

    /// Set the expiry date, builder-style.
    pub fn with_expiry(mut self, expires_at: Timestamp) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Derive the expiry status at `as_of` with the given warning window.
    ///
    /// A document expiring exactly at `as_of` is already `Expired`; a
    /// document expiring exactly `window_days` days out is the last one
    /// still counted as `ExpiringSoon`.
    pub fn expiry_status(&self, as_of: Timestamp, window_days: i64) -> ExpiryStatus {
        let Some(expires_at) = self.expires_at else {
            return ExpiryStatus::Valid;
        };
        if expires_at <= as_of {
            return ExpiryStatus::Expired;
        }
        let days_left = as_of.days_until(expires_at);
        if days_left <= window_days {
            ExpiryStatus::ExpiringSoon { days_left }
        } else {
            ExpiryStatus::Valid
        }
    }

    /// Expiry status with the default 30-day warning window.
    pub fn default_expiry_status(&self, as_of: Timestamp) -> ExpiryStatus {
        self.expiry_status(as_of, DEFAULT_EXPIRY_WINDOW_DAYS)
    }
}
