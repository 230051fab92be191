//! Parser for the exported card artifacts.
//!
//! The offline pipeline exports its processed tables as JSON:
//! - `creatures.json`: array of creature records
//! - `training_features.json`: array of (commander, recommended_creature) rows
//! - `commander_patterns.json`: map of commander -> consensus pattern summary
//!
//! This module deserializes the raw records and converts them into the
//! validated domain types, rejecting unknown color symbols and negative
//! combat stats instead of letting them reach the scoring code.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Creature record as exported by the offline pipeline.
///
/// Field names match the processed-table columns, so the export stays a
/// straight serialization of the pipeline's dataframe.
#[derive(Debug, Deserialize)]
struct RawCreature {
    name: String,
    #[serde(default)]
    oracle_text_clean: Option<String>,
    #[serde(default)]
    power_clean: Option<f32>,
    #[serde(default)]
    toughness_clean: Option<f32>,
    #[serde(default)]
    color_identity_parsed: Vec<String>,
    #[serde(default)]
    keywords_parsed: Vec<String>,
    /// Whitespace-separated secondary type tags
    #[serde(default)]
    secondary_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTrainingExample {
    commander: String,
    recommended_creature: String,
}

fn open_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| DataLoadError::ParseError {
        file: path.display().to_string(),
        source,
    })
}

/// Parse a single-letter color symbol ("W", "U", "B", "R", "G")
fn parse_color(s: &str) -> Result<Color> {
    match s {
        "W" => Ok(Color::White),
        "U" => Ok(Color::Blue),
        "B" => Ok(Color::Black),
        "R" => Ok(Color::Red),
        "G" => Ok(Color::Green),
        _ => Err(DataLoadError::InvalidValue {
            field: "color_identity".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Validate a combat stat: absent is fine, negative is not
fn parse_stat(field: &str, value: Option<f32>) -> Result<Option<f32>> {
    match value {
        Some(v) if v < 0.0 || !v.is_finite() => Err(DataLoadError::InvalidValue {
            field: field.to_string(),
            value: v.to_string(),
        }),
        other => Ok(other),
    }
}

fn convert_creature(raw: RawCreature) -> Result<Creature> {
    let color_identity = raw
        .color_identity_parsed
        .iter()
        .map(|s| parse_color(s))
        .collect::<Result<Vec<Color>>>()?;

    let secondary_types = raw
        .secondary_type
        .as_deref()
        .unwrap_or("")
        .split_whitespace()
        .map(|s| s.to_string())
        .collect();

    Ok(Creature {
        oracle_text: raw.oracle_text_clean.unwrap_or_default(),
        power: parse_stat("power_clean", raw.power_clean)?,
        toughness: parse_stat("toughness_clean", raw.toughness_clean)?,
        color_identity,
        keywords: raw.keywords_parsed,
        secondary_types,
        name: raw.name,
    })
}

/// Parse the creatures.json artifact into catalog-order creatures
pub fn parse_creatures(path: &Path) -> Result<Vec<Creature>> {
    let raw: Vec<RawCreature> = open_json(path)?;
    raw.into_iter().map(convert_creature).collect()
}

/// Parse the training_features.json artifact
pub fn parse_training_examples(path: &Path) -> Result<Vec<TrainingExample>> {
    let raw: Vec<RawTrainingExample> = open_json(path)?;
    Ok(raw
        .into_iter()
        .map(|r| TrainingExample {
            commander: r.commander,
            recommended_creature: r.recommended_creature,
        })
        .collect())
}

/// Parse the commander_patterns.json artifact
pub fn parse_commander_patterns(path: &Path) -> Result<CommanderPatterns> {
    open_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert!(matches!(parse_color("U").unwrap(), Color::Blue));
        assert!(matches!(parse_color("G").unwrap(), Color::Green));
        assert!(parse_color("X").is_err());
        assert!(parse_color("").is_err());
    }

    #[test]
    fn test_parse_stat_rejects_negative() {
        assert_eq!(parse_stat("power_clean", Some(3.0)).unwrap(), Some(3.0));
        assert_eq!(parse_stat("power_clean", None).unwrap(), None);
        assert!(parse_stat("power_clean", Some(-1.0)).is_err());
        assert!(parse_stat("power_clean", Some(f32::NAN)).is_err());
    }

    #[test]
    fn test_convert_creature_splits_secondary_types() {
        let raw = RawCreature {
            name: "Sage of Hours".to_string(),
            oracle_text_clean: Some("remove all counters".to_string()),
            power_clean: Some(1.0),
            toughness_clean: Some(1.0),
            color_identity_parsed: vec!["U".to_string()],
            keywords_parsed: vec![],
            secondary_type: Some("Human Wizard".to_string()),
        };

        let creature = convert_creature(raw).unwrap();
        assert_eq!(creature.secondary_types, vec!["Human", "Wizard"]);
        assert_eq!(creature.color_identity, vec![Color::Blue]);
    }

    #[test]
    fn test_convert_creature_defaults() {
        let raw = RawCreature {
            name: "Blank".to_string(),
            oracle_text_clean: None,
            power_clean: None,
            toughness_clean: None,
            color_identity_parsed: vec![],
            keywords_parsed: vec![],
            secondary_type: None,
        };

        let creature = convert_creature(raw).unwrap();
        assert!(creature.oracle_text.is_empty());
        assert!(creature.secondary_types.is_empty());
        assert_eq!(creature.power, None);
        assert_eq!(creature.power_toughness(), "-/-");
    }
}
