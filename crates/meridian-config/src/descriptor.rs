//! # Field Descriptors, Groups, and Sections
//!
//! The node types of the configuration tree. Ordering is significant at
//! every level: groups iterate in declaration order, fields iterate in
//! declaration order, and that order drives both display and aggregation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use meridian_core::{FieldKey, GrowthStage, SectionId};

/// Metadata for one collectible data point.
///
/// A descriptor does not hold a value — values live in per-company section
/// data, keyed by [`FieldDescriptor::key`]. The `mandatory` set names the
/// growth stages at which the field is required; an empty set means the
/// field is always optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique identifier for this field across the whole configuration.
    pub id: String,
    /// Display label rendered by the portal.
    pub label: String,
    /// Key under which the field's value is stored and looked up.
    pub key: FieldKey,
    /// Stages at which this field is mandatory. Empty = always optional.
    #[serde(default)]
    pub mandatory: BTreeSet<GrowthStage>,
}

impl FieldDescriptor {
    /// Whether this field is mandatory at any stage at all.
    pub fn is_ever_mandatory(&self) -> bool {
        !self.mandatory.is_empty()
    }
}

/// A named, ordered collection of field descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGroup {
    /// Display name of the group.
    pub name: String,
    /// Fields in display/aggregation order.
    pub fields: Vec<FieldDescriptor>,
}

impl FieldGroup {
    /// Number of fields in the group.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// A top-level profile section (tab).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Stable section identifier, referenced by per-company section data.
    pub id: SectionId,
    /// Display title of the tab.
    pub title: String,
    /// Groups in display/aggregation order.
    pub groups: Vec<FieldGroup>,
}

impl Section {
    /// Iterate over every field in the section, in configuration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.groups.iter().flat_map(|g| g.fields.iter())
    }

    /// Total number of fields across all groups.
    pub fn field_count(&self) -> usize {
        self.groups.iter().map(FieldGroup::field_count).sum()
    }
}
