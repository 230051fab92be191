//! CardIndex building logic.
//!
//! Builds the in-memory index from the exported artifacts:
//! - Load and convert the creature catalog and training-feature table
//! - Build the name and commander -> companions indices
//! - Validate integrity (unique names)

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;

impl CardIndex {
    /// Load the catalog and training features from an artifact directory.
    ///
    /// Expects `creatures.json` and `training_features.json` under
    /// `data_dir`. The two files are parsed in parallel; catalog order
    /// from the artifact is preserved.
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        let creatures_path = data_dir.join("creatures.json");
        let features_path = data_dir.join("training_features.json");

        let (creatures, examples) = rayon::join(
            || parser::parse_creatures(&creatures_path),
            || parser::parse_training_examples(&features_path),
        );
        let creatures = creatures?;
        let examples = examples?;

        Self::from_parts(creatures, examples)
    }

    /// Build an index from already-parsed records.
    ///
    /// Split out from `load_from_files` so tests and benches can build
    /// an index without touching the filesystem.
    pub fn from_parts(
        creatures: Vec<Creature>,
        examples: Vec<TrainingExample>,
    ) -> Result<Self> {
        let mut index = CardIndex::new();

        for creature in creatures {
            let name = creature.name.clone();
            if !index.insert_creature(creature) {
                return Err(DataLoadError::DuplicateName { name });
            }
        }

        for example in examples {
            index.insert_example(example);
        }

        index.validate()?;
        Ok(index)
    }

    /// Validate data integrity.
    ///
    /// Training examples referencing creatures absent from the catalog
    /// are allowed (historical data mentions renamed and removed cards;
    /// the engine skips them at query time). Commanders themselves must
    /// be non-empty names though, or the companion index is useless.
    pub fn validate(&self) -> Result<()> {
        for example in &self.examples {
            if example.commander.is_empty() {
                return Err(DataLoadError::ValidationError(
                    "training example with empty commander name".to_string(),
                ));
            }
            if example.recommended_creature.is_empty() {
                return Err(DataLoadError::ValidationError(
                    "training example with empty creature name".to_string(),
                ));
            }
        }
        Ok(())
    }
}
