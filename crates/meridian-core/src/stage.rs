//! # Company Growth Stages
//!
//! Defines `GrowthStage`, the company lifecycle stage that drives which
//! profile fields are mandatory. The set is fixed: a field descriptor names
//! the stages at which it is required, and the completion engine resolves
//! applicability against the company's current stage.
//!
//! Stages are conceptually ordered from least to most mature (the derived
//! `Ord` reflects this), but the completion engine never relies on that
//! ordering — only on set membership.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The lifecycle stage of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    /// Newly formed company, minimal reporting footprint.
    Startup,
    /// Scaling company with first substantive filing obligations.
    Growth,
    /// Established company with the full standard obligation set.
    Mature,
    /// Large company subject to extended disclosure requirements.
    Enterprise,
}

/// Error parsing a growth stage from a string.
#[derive(Error, Debug)]
#[error("unknown growth stage: {0:?} (expected startup, growth, mature, or enterprise)")]
pub struct ParseStageError(pub String);

impl GrowthStage {
    /// All stages, least to most mature.
    pub const ALL: [GrowthStage; 4] = [
        Self::Startup,
        Self::Growth,
        Self::Mature,
        Self::Enterprise,
    ];

    /// The lowercase slug used in configuration files and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Growth => "growth",
            Self::Mature => "mature",
            Self::Enterprise => "enterprise",
        }
    }
}

impl std::str::FromStr for GrowthStage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "startup" => Ok(Self::Startup),
            "growth" => Ok(Self::Growth),
            "mature" => Ok(Self::Mature),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(ParseStageError(other.to_string())),
        }
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Startup => "STARTUP",
            Self::Growth => "GROWTH",
            Self::Mature => "MATURE",
            Self::Enterprise => "ENTERPRISE",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_ordering_least_to_most_mature() {
        assert!(GrowthStage::Startup < GrowthStage::Growth);
        assert!(GrowthStage::Growth < GrowthStage::Mature);
        assert!(GrowthStage::Mature < GrowthStage::Enterprise);
    }

    #[test]
    fn test_from_str_accepts_slugs() {
        assert_eq!(GrowthStage::from_str("startup").unwrap(), GrowthStage::Startup);
        assert_eq!(GrowthStage::from_str("Growth").unwrap(), GrowthStage::Growth);
        assert_eq!(GrowthStage::from_str(" mature ").unwrap(), GrowthStage::Mature);
        assert_eq!(
            GrowthStage::from_str("ENTERPRISE").unwrap(),
            GrowthStage::Enterprise
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(GrowthStage::from_str("megacorp").is_err());
        assert!(GrowthStage::from_str("").is_err());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&GrowthStage::Enterprise).unwrap();
        assert_eq!(json, "\"enterprise\"");
        let parsed: GrowthStage = serde_json::from_str("\"growth\"").unwrap();
        assert_eq!(parsed, GrowthStage::Growth);
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(GrowthStage::Startup.to_string(), "STARTUP");
        assert_eq!(GrowthStage::Enterprise.to_string(), "ENTERPRISE");
    }

    #[test]
    fn test_all_covers_every_stage() {
        assert_eq!(GrowthStage::ALL.len(), 4);
        for stage in GrowthStage::ALL {
            assert_eq!(
                GrowthStage::from_str(stage.as_str()).unwrap(),
                stage
            );
        }
    }
}
