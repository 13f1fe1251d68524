//! # Document Wallet
//!
//! The per-company document collection. Insertion order is preserved for
//! display; adding a document with an id already present replaces the
//! earlier record in place (the portal's "upload new version" behavior).

use serde::{Deserialize, Serialize};

use meridian_core::{DocumentId, Timestamp};

use crate::document::{Document, ExpiryStatus, DEFAULT_EXPIRY_WINDOW_DAYS};

/// Aggregated expiry counts across a wallet at a reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSummary {
    /// Total documents in the wallet.
    pub total: usize,
    /// Documents outside the warning window (or with no expiry).
    pub valid: usize,
    /// Documents inside the warning window.
    pub expiring_soon: usize,
    /// Documents past their expiry date.
    pub expired: usize,
}

/// A company's documents, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentWallet {
    documents: Vec<Document>,
}

impl DocumentWallet {
    /// Create an empty wallet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document. If a document with the same id already exists it is
    /// replaced in place, keeping its display position.
    pub fn add(&mut self, document: Document) {
        match self.documents.iter_mut().find(|d| d.id == document.id) {
            Some(existing) => *existing = document,
            None => self.documents.push(document),
        }
    }

    /// Remove a document by id, returning it if present.
    pub fn remove(&mut self, id: &DocumentId) -> Option<Document> {
        let index = self.documents.iter().position(|d| &d.id == id)?;
        Some(self.documents.remove(index))
    }

    /// Look up a document by id.
    pub fn get(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| &d.id == id)
    }

    /// Iterate over documents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Number of documents in the wallet.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the wallet holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents that are inside the warning window at `as_of` (not yet
    /// expired), in insertion order.
    pub fn expiring_within(&self, window_days: i64, as_of: Timestamp) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|d| {
                matches!(
                    d.expiry_status(as_of, window_days),
                    ExpiryStatus::ExpiringSoon { .. }
                )
            })
            .collect()
    }

    /// Documents past their expiry date at `as_of`, in insertion order.
    pub fn expired(&self, as_of: Timestamp) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|d| d.expiry_status(as_of, 0) == ExpiryStatus::Expired)
            .collect()
    }

    /// Count documents per expiry status at `as_of` with the default
    /// warning window.
    pub fn summary(&self, as_of: Timestamp) -> WalletSummary {
        self.summary_with_window(as_of, DEFAULT_EXPIRY_WINDOW_DAYS)
    }

    /// Count documents per expiry status at `as_of` with an explicit
    /// warning window.
    pub fn summary_with_window(&self, as_of: Timestamp, window_days: i64) -> WalletSummary {
        let mut summary = WalletSummary {
            total: self.documents.len(),
            valid: 0,
            expiring_soon: 0,
            expired: 0,
        };
        for doc in &self.documents {
            match doc.expiry_status(as_of, window_days) {
                ExpiryStatus::Valid => summary.valid += 1,
                ExpiryStatus::ExpiringSoon { .. } => summary.expiring_soon += 1,
                ExpiryStatus::Expired => summary.expired += 1,
            }
        }
        summary
    }
}

impl<'a> IntoIterator for &'a DocumentWallet {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
