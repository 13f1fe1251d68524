//! # Profile Configuration — Load and Validate
//!
//! The full configuration tree plus the set of valid growth stages, with
//! one-shot validation at load time.
//!
//! Validation is a trust boundary: documents that fail are rejected with
//! structured errors naming the offending section and field. Once a
//! configuration validates, the completion engine trusts it completely —
//! there is no per-calculation revalidation.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use meridian_core::{GrowthStage, SectionId};

use crate::descriptor::Section;

/// Error raised when a configuration fails load-time validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document could not be parsed as JSON.
    #[error("configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document could not be parsed as YAML.
    #[error("configuration is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The configuration declares no sections at all.
    #[error("configuration has no sections")]
    NoSections,

    /// The configuration declares an empty valid-stage set.
    #[error("configuration has an empty stage set")]
    NoStages,

    /// A section has a blank id or title.
    #[error("section {index} has a blank {what}")]
    BlankSectionField {
        /// Zero-based position of the section.
        index: usize,
        /// Which attribute was blank ("id" or "title").
        what: &'static str,
    },

    /// Two sections share the same id.
    #[error("duplicate section id: {section_id}")]
    DuplicateSectionId {
        /// The repeated section id.
        section_id: SectionId,
    },

    /// A field has a blank id, label, or key.
    #[error("field in section {section_id} has a blank {what}")]
    BlankFieldAttribute {
        /// Section containing the field.
        section_id: SectionId,
        /// Which attribute was blank ("id", "label", or "key").
        what: &'static str,
    },

    /// Two fields share the same id anywhere in the configuration.
    #[error("duplicate field id {field_id} (second occurrence in section {section_id})")]
    DuplicateFieldId {
        /// The repeated field id.
        field_id: String,
        /// Section of the second occurrence.
        section_id: SectionId,
    },

    /// Two fields within one section share the same storage key.
    #[error("duplicate field key {field_key} in section {section_id}")]
    DuplicateFieldKey {
        /// The repeated storage key.
        field_key: String,
        /// Section containing both fields.
        section_id: SectionId,
    },

    /// A field is marked mandatory at a stage the configuration does not allow.
    #[error("field {field_id} in section {section_id} is mandatory at {stage}, which is not in the configuration's stage set")]
    StageNotAllowed {
        /// The offending field.
        field_id: String,
        /// Section containing the field.
        section_id: SectionId,
        /// The disallowed stage.
        stage: GrowthStage,
    },
}

fn default_stages() -> BTreeSet<GrowthStage> {
    GrowthStage::ALL.into_iter().collect()
}

/// The full profile configuration: ordered sections plus the valid stage set.
///
/// Immutable for the lifetime of the process — this is configuration, not
/// runtime state. Construct via [`ProfileConfiguration::from_json_str`] or
/// [`ProfileConfiguration::from_yaml_str`], both of which validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfiguration {
    /// Sections in display order.
    pub sections: Vec<Section>,
    /// Stages a company in this deployment may hold. Defaults to all four.
    #[serde(default = "default_stages")]
    pub stages: BTreeSet<GrowthStage>,
}

impl ProfileConfiguration {
    /// Parse and validate a configuration from a JSON document.
    pub fn from_json_str(doc: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(doc)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from a YAML document.
    pub fn from_yaml_str(doc: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(doc)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration tree.
    ///
    /// Enforces:
    /// - at least one section and a non-empty stage set;
    /// - non-blank section ids and titles, unique section ids;
    /// - non-blank field ids, labels, and keys;
    /// - field ids unique across the whole configuration;
    /// - field keys unique within their section;
    /// - every mandatory stage is a member of the valid stage set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::NoSections);
        }
        if self.stages.is_empty() {
            return Err(ConfigError::NoStages);
        }

        let mut section_ids: HashSet<&SectionId> = HashSet::new();
        let mut field_ids: HashSet<&str> = HashSet::new();

        for (index, section) in self.sections.iter().enumerate() {
            if section.id.as_str().trim().is_empty() {
                return Err(ConfigError::BlankSectionField { index, what: "id" });
            }
            if section.title.trim().is_empty() {
                return Err(ConfigError::BlankSectionField { index, what: "title" });
            }
            if !section_ids.insert(&section.id) {
                return Err(ConfigError::DuplicateSectionId {
                    section_id: section.id.clone(),
                });
            }

            // Keys are scoped per section: two sections may both store a
            // "notes" key, but one section may not store it twice.
            let mut keys_in_section: HashSet<&str> = HashSet::new();

            for field in section.fields() {
                if field.id.trim().is_empty() {
                    return Err(ConfigError::BlankFieldAttribute {
                        section_id: section.id.clone(),
                        what: "id",
                    });
                }
                if field.label.trim().is_empty() {
                    return Err(ConfigError::BlankFieldAttribute {
                        section_id: section.id.clone(),
                        what: "label",
                    });
                }
                if field.key.as_str().trim().is_empty() {
                    return Err(ConfigError::BlankFieldAttribute {
                        section_id: section.id.clone(),
                        what: "key",
                    });
                }
                if !field_ids.insert(field.id.as_str()) {
                    return Err(ConfigError::DuplicateFieldId {
                        field_id: field.id.clone(),
                        section_id: section.id.clone(),
                    });
                }
                if !keys_in_section.insert(field.key.as_str()) {
                    return Err(ConfigError::DuplicateFieldKey {
                        field_key: field.key.as_str().to_string(),
                        section_id: section.id.clone(),
                    });
                }
                for stage in &field.mandatory {
                    if !self.stages.contains(stage) {
                        return Err(ConfigError::StageNotAllowed {
                            field_id: field.id.clone(),
                            section_id: section.id.clone(),
                            stage: *stage,
                        });
                    }
                }
            }
        }

        tracing::debug!(
            sections = self.sections.len(),
            fields = self.field_count(),
            "configuration validated"
        );
        Ok(())
    }

    /// Look up a section by id.
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// Total number of fields across every section.
    pub fn field_count(&self) -> usize {
        self.sections.iter().map(Section::field_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FieldDescriptor, FieldGroup};
    use meridian_core::FieldKey;

    fn field(id: &str, key: &str, mandatory: &[GrowthStage]) -> FieldDescriptor {
        FieldDescriptor {
            id: id.to_string(),
            label: format!("Label {id}"),
            key: FieldKey::from(key),
            mandatory: mandatory.iter().copied().collect(),
        }
    }

    fn section(id: &str, fields: Vec<FieldDescriptor>) -> Section {
        Section {
            id: SectionId::from(id),
            title: format!("Title {id}"),
            groups: vec![FieldGroup {
                name: "Main".to_string(),
                fields,
            }],
        }
    }

    fn valid_config() -> ProfileConfiguration {
        ProfileConfiguration {
            sections: vec![
                section(
                    "general",
                    vec![
                        field("company_name", "name", &[GrowthStage::Startup]),
                        field("reg_number", "registration", &[GrowthStage::Growth]),
                    ],
                ),
                section("financial", vec![field("revenue", "revenue", &[])]),
            ],
            stages: GrowthStage::ALL.into_iter().collect(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_no_sections_rejected() {
        let config = ProfileConfiguration {
            sections: vec![],
            stages: GrowthStage::ALL.into_iter().collect(),
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoSections)));
    }

    #[test]
    fn test_empty_stage_set_rejected() {
        let mut config = valid_config();
        config.stages.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoStages)));
    }

    #[test]
    fn test_duplicate_section_id_rejected() {
        let mut config = valid_config();
        config.sections.push(section("general", vec![field("x", "x", &[])]));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateSectionId { .. })
        ));
    }

    #[test]
    fn test_duplicate_field_id_rejected_across_sections() {
        let mut config = valid_config();
        config
            .sections
            .push(section("extra", vec![field("revenue", "other_key", &[])]));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateFieldId { .. })
        ));
    }

    #[test]
    fn test_duplicate_key_within_section_rejected() {
        let config = ProfileConfiguration {
            sections: vec![section(
                "general",
                vec![field("a", "same", &[]), field("b", "same", &[])],
            )],
            stages: GrowthStage::ALL.into_iter().collect(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateFieldKey { .. })
        ));
    }

    #[test]
    fn test_same_key_in_different_sections_allowed() {
        let config = ProfileConfiguration {
            sections: vec![
                section("general", vec![field("a", "notes", &[])]),
                section("financial", vec![field("b", "notes", &[])]),
            ],
            stages: GrowthStage::ALL.into_iter().collect(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mandatory_stage_outside_stage_set_rejected() {
        let config = ProfileConfiguration {
            sections: vec![section(
                "general",
                vec![field("a", "a", &[GrowthStage::Enterprise])],
            )],
            stages: [GrowthStage::Startup, GrowthStage::Growth].into_iter().collect(),
        };
        match config.validate() {
            Err(ConfigError::StageNotAllowed { field_id, stage, .. }) => {
                assert_eq!(field_id, "a");
                assert_eq!(stage, GrowthStage::Enterprise);
            }
            other => panic!("expected StageNotAllowed, got: {other:?}"),
        }
    }

    #[test]
    fn test_blank_field_key_rejected() {
        let config = ProfileConfiguration {
            sections: vec![section("general", vec![field("a", "   ", &[])])],
            stages: GrowthStage::ALL.into_iter().collect(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BlankFieldAttribute { what: "key", .. })
        ));
    }

    // ── Document parsing ─────────────────────────────────────────────

    #[test]
    fn test_from_json_str() {
        let doc = r#"{
            "sections": [{
                "id": "general",
                "title": "General",
                "groups": [{
                    "name": "Identity",
                    "fields": [
                        {"id": "company_name", "label": "Company name", "key": "name",
                         "mandatory": ["startup", "growth", "mature", "enterprise"]},
                        {"id": "website", "label": "Website", "key": "website"}
                    ]
                }]
            }]
        }"#;
        let config = ProfileConfiguration::from_json_str(doc).unwrap();
        assert_eq!(config.sections.len(), 1);
        assert_eq!(config.field_count(), 2);
        // Stage set defaults to all four when omitted.
        assert_eq!(config.stages.len(), 4);
    }

    #[test]
    fn test_from_yaml_str() {
        let doc = "
sections:
  - id: general
    title: General
    groups:
      - name: Identity
        fields:
          - id: company_name
            label: Company name
            key: name
            mandatory: [startup]
stages: [startup, growth]
";
        let config = ProfileConfiguration::from_yaml_str(doc).unwrap();
        assert_eq!(config.stages.len(), 2);
        assert_eq!(config.field_count(), 1);
    }

    #[test]
    fn test_from_json_str_rejects_invalid_tree() {
        // Valid JSON, invalid configuration: duplicate keys in one section.
        let doc = r#"{
            "sections": [{
                "id": "general",
                "title": "General",
                "groups": [{
                    "name": "Main",
                    "fields": [
                        {"id": "a", "label": "A", "key": "same"},
                        {"id": "b", "label": "B", "key": "same"}
                    ]
                }]
            }]
        }"#;
        assert!(ProfileConfiguration::from_json_str(doc).is_err());
    }

    #[test]
    fn test_section_lookup() {
        let config = valid_config();
        assert!(config.section(&SectionId::from("general")).is_some());
        assert!(config.section(&SectionId::from("missing")).is_none());
    }
}
