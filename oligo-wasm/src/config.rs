//! Calculator configuration supplied by the caller as JSON.
//!
//! Every field is optional:
//!
//! ```json
//! { "building_blocks": {"A": 331.2, "C": 307.2, "G": 347.2, "T": 322.2}, "decimals": 2 }
//! ```
//!
//! A missing `building_blocks` object means the default table; a present but
//! partial one leaves the other bases absent, which [`CalculatorConfig::check`]
//! then rejects.

use serde::{Deserialize, Serialize};

use oligo_core::{OligoError, Result};
use oligo_seq::BuildingBlockTable;

/// Largest number of decimal places accepted for display.
pub const MAX_DECIMALS: usize = 20;

fn default_decimals() -> usize {
    2
}

/// Settings for one calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub building_blocks: BuildingBlockTable,
    /// Decimal places for formatted weights and percentages.
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            building_blocks: BuildingBlockTable::default(),
            decimals: default_decimals(),
        }
    }
}

impl CalculatorConfig {
    /// Parse a config object. Blank input yields the default config.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| OligoError::Parse(format!("calculator config: {e}")))
    }

    /// Validate the building blocks and display settings.
    pub fn check(&self) -> Result<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(OligoError::InvalidInput(format!(
                "decimals must be at most {MAX_DECIMALS}, got {}",
                self.decimals
            )));
        }
        self.building_blocks.check()
    }
}

/// Parse a building-block table given as a JSON object keyed by base.
///
/// Blank input yields the default table. Keys are case-insensitive; unknown
/// keys are rejected. Values are not checked here.
pub fn parse_building_blocks(json: &str) -> Result<BuildingBlockTable> {
    if json.trim().is_empty() {
        return Ok(BuildingBlockTable::default());
    }
    serde_json::from_str(json).map_err(|e| OligoError::Parse(format!("building blocks: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oligo_seq::Base;

    #[test]
    fn blank_is_default() {
        assert_eq!(CalculatorConfig::from_json("").unwrap(), CalculatorConfig::default());
        assert_eq!(CalculatorConfig::from_json("{}").unwrap(), CalculatorConfig::default());
        assert_eq!(parse_building_blocks("  ").unwrap(), BuildingBlockTable::default());
    }

    #[test]
    fn full_config() {
        let cfg = CalculatorConfig::from_json(
            r#"{"building_blocks": {"A": 1, "C": 2, "G": 3, "T": 4}, "decimals": 4}"#,
        )
        .unwrap();
        assert_eq!(cfg.building_blocks, BuildingBlockTable::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(cfg.decimals, 4);
        assert!(cfg.check().is_ok());
    }

    #[test]
    fn lowercase_keys_accepted() {
        let table = parse_building_blocks(r#"{"a": 10.5, "c": 1, "g": 1, "t": 1}"#).unwrap();
        assert_eq!(table.get(Base::A), Some(10.5));
    }

    #[test]
    fn partial_table_leaves_bases_absent() {
        let table = parse_building_blocks(r#"{"A": 331.2}"#).unwrap();
        assert_eq!(table.get(Base::C), None);
        assert_eq!(table.invalid_bases(), vec![Base::C, Base::G, Base::T]);
    }

    #[test]
    fn unknown_key_is_parse_error() {
        let err = parse_building_blocks(r#"{"A": 1, "U": 2}"#).unwrap_err();
        assert!(matches!(err, OligoError::Parse(_)));
        assert!(CalculatorConfig::from_json(r#"{"precision": 3}"#).is_err());
    }

    #[test]
    fn non_numeric_weight_is_parse_error() {
        assert!(parse_building_blocks(r#"{"A": "heavy"}"#).is_err());
        assert!(parse_building_blocks("[1, 2]").is_err());
    }

    #[test]
    fn check_rejects_too_many_decimals() {
        let cfg = CalculatorConfig {
            decimals: 21,
            ..CalculatorConfig::default()
        };
        assert!(matches!(cfg.check(), Err(OligoError::InvalidInput(_))));
    }

    #[test]
    fn check_rejects_bad_weights() {
        let cfg = CalculatorConfig::from_json(r#"{"building_blocks": {"A": 0, "C": 1, "G": 1, "T": -2}}"#)
            .unwrap();
        assert_eq!(
            cfg.check(),
            Err(OligoError::InvalidBuildingBlock(
                "invalid molecular weight values for: A, T".into()
            ))
        );
    }
}
