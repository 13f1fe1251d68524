//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all identifiers in the portal. These prevent
//! accidental identifier confusion — you cannot pass a `DocumentId` where
//! a `CompanyId` is expected, and a field's storage key is distinct from
//! its display label at the type level.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a company profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub Uuid);

/// Unique identifier for a document in the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

/// Unique identifier for a reporting obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObligationId(pub Uuid);

/// Identifier for a profile section (tab).
///
/// Section ids come from configuration files and are stable, human-chosen
/// slugs (e.g., `"general"`, `"financial"`), not generated UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(pub String);

/// Key under which a field's value is stored in section data.
///
/// Distinct from the field's display label: the key is the storage/lookup
/// name, the label is what the portal renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey(pub String);

impl CompanyId {
    /// Generate a new random company identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CompanyId {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentId {
    /// Generate a new random document identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl ObligationId {
    /// Generate a new random obligation identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ObligationId {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionId {
    /// Wrap a section slug.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FieldKey {
    /// Wrap a field storage key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "company:{}", self.0)
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "document:{}", self.0)
    }
}

impl std::fmt::Display for ObligationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "obligation:{}", self.0)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for FieldKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_ids_are_unique() {
        assert_ne!(CompanyId::new(), CompanyId::new());
    }

    #[test]
    fn test_section_id_serde_is_transparent() {
        let id = SectionId::from("general");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"general\"");
        let parsed: SectionId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_field_key_serde_is_transparent() {
        let key = FieldKey::from("registration_number");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"registration_number\"");
    }

    #[test]
    fn test_display_prefixes() {
        let id = CompanyId::new();
        assert!(id.to_string().starts_with("company:"));
        let id = DocumentId::new();
        assert!(id.to_string().starts_with("document:"));
        let id = ObligationId::new();
        assert!(id.to_string().starts_with("obligation:"));
    }
}
