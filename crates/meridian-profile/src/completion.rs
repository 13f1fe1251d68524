//! # Completion Engine
//!
//! Pure functions deriving completion metrics from a configuration tree
//! and a profile record. Re-run on every relevant edit; no hidden state,
//! no side effects, no error conditions.
//!
//! ## Zero-Denominator Convention
//!
//! - All-fields completion of an empty denominator is **0** — an empty
//!   group shows as "nothing filled in".
//! - Mandatory completion of an empty denominator is **100** — a group
//!   with no mandatory fields at the active stage is vacuously complete
//!   and must not block progress indicators.
//!
//! The asymmetry is inherited portal behavior. Both conventions are
//! load-bearing for the dashboards; do not unify them.

use serde::{Deserialize, Serialize};

use meridian_config::{FieldDescriptor, FieldGroup, ProfileConfiguration, Section};
use meridian_core::GrowthStage;

use crate::record::{ProfileRecord, SectionData};

/// Whether `field` is mandatory at `stage`.
///
/// True iff a stage is assigned and it is a member of the field's
/// mandatory set. A company with no stage yet has no mandatory fields,
/// and a field with an empty mandatory set is never mandatory.
pub fn is_field_mandatory(field: &FieldDescriptor, stage: Option<GrowthStage>) -> bool {
    match stage {
        Some(s) => field.mandatory.contains(&s),
        None => false,
    }
}

/// Mandatory-field completion counts at some scope (group, section, or
/// whole profile), plus the derived percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandatoryCompletion {
    /// Mandatory fields with a non-blank value.
    pub completed: usize,
    /// Mandatory fields at the active stage.
    pub total: usize,
    /// `round(completed/total*100)`; exactly 100 when `total` is 0.
    pub percentage: u8,
}

impl MandatoryCompletion {
    /// Build from raw counts, applying the zero-denominator-is-100 rule.
    pub fn from_counts(completed: usize, total: usize) -> Self {
        Self {
            completed,
            total,
            percentage: percentage_or(completed, total, 100),
        }
    }

    /// Whether every mandatory field is filled in (vacuously true when
    /// there are none).
    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }
}

/// Percentage of all fields in `group` with a non-blank value.
///
/// `data` is the section data for the group's enclosing section; `None`
/// (section never touched) counts every field as not provided. Returns 0
/// for a zero-field group.
pub fn group_completion(group: &FieldGroup, data: Option<&SectionData>) -> u8 {
    let (completed, total) = field_counts(group.fields.iter(), data, None, CountScope::All);
    percentage_or(completed, total, 0)
}

/// Mandatory completion for one group at the given stage.
pub fn group_mandatory_completion(
    group: &FieldGroup,
    data: Option<&SectionData>,
    stage: Option<GrowthStage>,
) -> MandatoryCompletion {
    let (completed, total) =
        field_counts(group.fields.iter(), data, stage, CountScope::MandatoryOnly);
    MandatoryCompletion::from_counts(completed, total)
}

/// Percentage of all fields in `section` with a non-blank value.
///
/// Counts are summed across groups before the percentage is taken, so a
/// large group weighs more than a small one. Zero-denominator rule: 0.
pub fn section_completion(section: &Section, data: Option<&SectionData>) -> u8 {
    let (completed, total) = field_counts(section.fields(), data, None, CountScope::All);
    percentage_or(completed, total, 0)
}

/// Mandatory completion for one section at the given stage.
pub fn section_mandatory_completion(
    section: &Section,
    data: Option<&SectionData>,
    stage: Option<GrowthStage>,
) -> MandatoryCompletion {
    let (completed, total) = field_counts(section.fields(), data, stage, CountScope::MandatoryOnly);
    MandatoryCompletion::from_counts(completed, total)
}

/// Percentage of all configured fields with a non-blank value, across the
/// whole profile. Zero-denominator rule: 0.
pub fn profile_completion(config: &ProfileConfiguration, record: &ProfileRecord) -> u8 {
    let mut completed = 0;
    let mut total = 0;
    for section in &config.sections {
        let data = record.section_data(&section.id);
        let (c, t) = field_counts(section.fields(), data, None, CountScope::All);
        completed += c;
        total += t;
    }
    percentage_or(completed, total, 0)
}

/// Mandatory completion across the whole configuration at the profile's
/// active stage.
///
/// Counts are summed across all sections, then the percentage is derived
/// once — never an average of per-section percentages.
pub fn profile_mandatory_completion(
    config: &ProfileConfiguration,
    record: &ProfileRecord,
) -> MandatoryCompletion {
    let mut completed = 0;
    let mut total = 0;
    for section in &config.sections {
        let data = record.section_data(&section.id);
        let (c, t) = field_counts(section.fields(), data, record.stage, CountScope::MandatoryOnly);
        completed += c;
        total += t;
    }
    MandatoryCompletion::from_counts(completed, total)
}

/// Which fields a count covers.
#[derive(Clone, Copy)]
enum CountScope {
    /// Every field.
    All,
    /// Only fields mandatory at the given stage.
    MandatoryOnly,
}

/// Count (completed, total) over `fields`, scoped per `scope`.
fn field_counts<'a>(
    fields: impl Iterator<Item = &'a FieldDescriptor>,
    data: Option<&SectionData>,
    stage: Option<GrowthStage>,
    scope: CountScope,
) -> (usize, usize) {
    let mut completed = 0;
    let mut total = 0;
    for field in fields {
        if let CountScope::MandatoryOnly = scope {
            if !is_field_mandatory(field, stage) {
                continue;
            }
        }
        total += 1;
        if data.map(|d| d.is_provided(&field.key)).unwrap_or(false) {
            completed += 1;
        }
    }
    (completed, total)
}

/// `round(completed/total*100)` as a u8, or `when_empty` if `total` is 0.
fn percentage_or(completed: usize, total: usize, when_empty: u8) -> u8 {
    if total == 0 {
        return when_empty;
    }
    // completed <= total, so the result is always in [0, 100].
    ((completed as f64 / total as f64) * 100.0).round() as u8
}
