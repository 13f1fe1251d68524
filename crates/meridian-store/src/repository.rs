//! # Repository Trait & Company Record
//!
//! `CompanyRecord` aggregates everything the portal stores per company:
//! the profile, the document wallet, and the obligation list. The
//! repository trait is the seam the UI layer (out of scope) and the CLI
//! inject a concrete store through.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use meridian_core::CompanyId;
use meridian_profile::ProfileRecord;
use meridian_report::ReportingObligation;
use meridian_wallet::DocumentWallet;

/// Errors raised by repository operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record exists for the requested company.
    #[error("no record for {company_id}")]
    NotFound {
        /// The company that was looked up.
        company_id: CompanyId,
    },
}

/// Everything stored for one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// The company's profile (identity, stage, section data).
    pub profile: ProfileRecord,
    /// The company's document wallet.
    #[serde(default)]
    pub wallet: DocumentWallet,
    /// The company's reporting obligations.
    #[serde(default)]
    pub obligations: Vec<ReportingObligation>,
}

impl CompanyRecord {
    /// Create a record holding just a profile, with an empty wallet and
    /// no obligations.
    pub fn new(profile: ProfileRecord) -> Self {
        Self {
            profile,
            wallet: DocumentWallet::new(),
            obligations: Vec::new(),
        }
    }

    /// The company identifier.
    pub fn company_id(&self) -> CompanyId {
        self.profile.id
    }
}

/// The storage seam for company records.
///
/// Implementations own their data and their lifecycle. Callers receive a
/// repository by reference or injection — there is no global accessor.
pub trait ProfileRepository {
    /// Fetch a company's record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record exists for `id`.
    fn get(&self, id: CompanyId) -> Result<CompanyRecord, StoreError>;

    /// Store a record, replacing any existing record for the same company.
    fn put(&mut self, record: CompanyRecord);

    /// Remove a company's record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record exists for `id`.
    fn remove(&mut self, id: CompanyId) -> Result<CompanyRecord, StoreError>;

    /// Whether a record exists for `id`.
    fn contains(&self, id: CompanyId) -> bool;

    /// All stored company ids, in unspecified order.
    fn list_ids(&self) -> Vec<CompanyId>;
}
