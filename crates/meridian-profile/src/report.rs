//! # Missing-Field Report
//!
//! The ordered list of mandatory fields still blank at the company's
//! active stage. Dashboards render this as the "complete your profile"
//! warning list, so configuration order is preserved exactly.

use serde::{Deserialize, Serialize};

use meridian_config::ProfileConfiguration;
use meridian_core::{FieldKey, SectionId};

use crate::completion::is_field_mandatory;
use crate::record::ProfileRecord;

/// One mandatory field that has no value yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingField {
    /// Section the field belongs to.
    pub section_id: SectionId,
    /// Display title of that section.
    pub section_title: String,
    /// Display name of the enclosing group.
    pub group_name: String,
    /// The field's storage key.
    pub key: FieldKey,
    /// The field's display label.
    pub label: String,
}

/// Every field mandatory at the profile's active stage whose value is
/// blank, in configuration order (section, then group, then field).
///
/// A profile with no stage assigned has no mandatory fields, so the
/// report is empty — matching the resolver's `None`-stage behavior.
pub fn missing_mandatory_fields(
    config: &ProfileConfiguration,
    record: &ProfileRecord,
) -> Vec<MissingField> {
    let mut missing = Vec::new();
    for section in &config.sections {
        let data = record.section_data(&section.id);
        for group in &section.groups {
            for field in &group.fields {
                if !is_field_mandatory(field, record.stage) {
                    continue;
                }
                let provided = data.map(|d| d.is_provided(&field.key)).unwrap_or(false);
                if !provided {
                    missing.push(MissingField {
                        section_id: section.id.clone(),
                        section_title: section.title.clone(),
                        group_name: group.name.clone(),
                        key: field.key.clone(),
                        label: field.label.clone(),
                    });
                }
            }
        }
    }
    missing
}
