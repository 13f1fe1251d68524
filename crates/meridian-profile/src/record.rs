//! # Profile Records
//!
//! Runtime data for one company: field values and status labels per
//! section, plus the company's identity and growth stage.
//!
//! Absent values and empty strings both mean "not provided" — the
//! completion engine treats them identically, so editors are free to
//! store either.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use meridian_core::{CompanyId, FieldKey, GrowthStage, SectionId};

/// Per-section runtime data: field values and free-form status labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionData {
    /// Field values keyed by storage key. Absent and `""` both mean
    /// "not provided".
    #[serde(default)]
    pub values: HashMap<FieldKey, String>,
    /// Free-form per-field status labels (e.g., "pending verification").
    /// Display-only; not load-bearing for completion math.
    #[serde(default)]
    pub statuses: HashMap<FieldKey, String>,
}

impl SectionData {
    /// Create empty section data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a value for `key` is provided: present and non-empty after
    /// trimming whitespace.
    pub fn is_provided(&self, key: &FieldKey) -> bool {
        self.values
            .get(key)
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
    }

    /// Set a field value.
    pub fn set_value(&mut self, key: FieldKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    /// Set a field status label.
    pub fn set_status(&mut self, key: FieldKey, status: impl Into<String>) {
        self.statuses.insert(key, status.into());
    }
}

/// The full runtime record for one company.
///
/// Created once per business entity and mutated by the edit layer whenever
/// a field changes. The completion engine only ever reads it. Deletion is
/// out of scope for the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Unique company identifier.
    pub id: CompanyId,
    /// Company display name.
    pub name: String,
    /// Active growth stage, if one has been assigned yet.
    pub stage: Option<GrowthStage>,
    /// Section data keyed by section id. Sections with no data yet are
    /// simply absent.
    #[serde(default)]
    pub sections: HashMap<SectionId, SectionData>,
}

impl ProfileRecord {
    /// Create an empty profile with no stage assigned.
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stage: None,
            sections: HashMap::new(),
        }
    }

    /// The data for a section, if any has been recorded.
    pub fn section_data(&self, section_id: &SectionId) -> Option<&SectionData> {
        self.sections.get(section_id)
    }

    /// Mutable access to a section's data, creating it if absent.
    pub fn section_data_mut(&mut self, section_id: SectionId) -> &mut SectionData {
        self.sections.entry(section_id).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_provided_absent_key() {
        let data = SectionData::new();
        assert!(!data.is_provided(&FieldKey::from("name")));
    }

    #[test]
    fn test_is_provided_empty_and_whitespace() {
        let mut data = SectionData::new();
        data.set_value(FieldKey::from("a"), "");
        data.set_value(FieldKey::from("b"), "   ");
        data.set_value(FieldKey::from("c"), "\t\n");
        assert!(!data.is_provided(&FieldKey::from("a")));
        assert!(!data.is_provided(&FieldKey::from("b")));
        assert!(!data.is_provided(&FieldKey::from("c")));
    }

    #[test]
    fn test_is_provided_real_value() {
        let mut data = SectionData::new();
        data.set_value(FieldKey::from("name"), "Acme Ltd");
        assert!(data.is_provided(&FieldKey::from("name")));
        // Padded values still count.
        data.set_value(FieldKey::from("reg"), "  12345  ");
        assert!(data.is_provided(&FieldKey::from("reg")));
    }

    #[test]
    fn test_statuses_do_not_affect_provision() {
        let mut data = SectionData::new();
        data.set_status(FieldKey::from("name"), "pending verification");
        assert!(!data.is_provided(&FieldKey::from("name")));
    }

    #[test]
    fn test_new_profile_has_no_stage() {
        let profile = ProfileRecord::new(CompanyId::new(), "Acme Ltd");
        assert!(profile.stage.is_none());
        assert!(profile.sections.is_empty());
    }

    #[test]
    fn test_section_data_mut_creates_on_demand() {
        let mut profile = ProfileRecord::new(CompanyId::new(), "Acme Ltd");
        let id = SectionId::from("general");
        profile
            .section_data_mut(id.clone())
            .set_value(FieldKey::from("name"), "Acme Ltd");
        assert!(profile.section_data(&id).unwrap().is_provided(&FieldKey::from("name")));
    }

    #[test]
    fn test_profile_serde_roundtrip() {
        let mut profile = ProfileRecord::new(CompanyId::new(), "Acme Ltd");
        profile.stage = Some(GrowthStage::Growth);
        profile
            .section_data_mut(SectionId::from("general"))
            .set_value(FieldKey::from("name"), "Acme Ltd");
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: ProfileRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }
}
