//! # In-Memory Repository
//!
//! The default store: a `HashMap` owned by the repository value. The
//! original portal's module-global cache becomes this — constructed where
//! the application assembles its state, dropped when that owner goes away.

use std::collections::HashMap;

use meridian_core::CompanyId;

use crate::repository::{CompanyRecord, ProfileRepository, StoreError};

/// An in-memory [`ProfileRepository`].
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    records: HashMap<CompanyId, CompanyRecord>,
}

impl InMemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the repository holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProfileRepository for InMemoryRepository {
    fn get(&self, id: CompanyId) -> Result<CompanyRecord, StoreError> {
        self.records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { company_id: id })
    }

    fn put(&mut self, record: CompanyRecord) {
        let id = record.company_id();
        let replaced = self.records.insert(id, record).is_some();
        tracing::debug!(company = %id, replaced, "stored company record");
    }

    fn remove(&mut self, id: CompanyId) -> Result<CompanyRecord, StoreError> {
        let record = self
            .records
            .remove(&id)
            .ok_or(StoreError::NotFound { company_id: id })?;
        tracing::debug!(company = %id, "removed company record");
        Ok(record)
    }

    fn contains(&self, id: CompanyId) -> bool {
        self.records.contains_key(&id)
    }

    fn list_ids(&self) -> Vec<CompanyId> {
        self.records.keys().copied().collect()
    }
}
