//! Core domain types for the card catalog and training data.
//!
//! This module defines the structures the recommendation engine queries:
//! creatures, color identity, training examples, and the per-commander
//! consensus pattern summary produced by the offline analytics job.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Color identity
// =============================================================================

/// The five color symbols used for color-identity legality.
///
/// A creature's (or commander's) color identity is a possibly-empty set
/// of these; the empty set means colorless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    /// The single-letter symbol used in the exported artifacts ("U" for blue).
    pub fn symbol(&self) -> &'static str {
        match self {
            Color::White => "W",
            Color::Blue => "U",
            Color::Black => "B",
            Color::Red => "R",
            Color::Green => "G",
        }
    }
}

// =============================================================================
// Creature
// =============================================================================

/// One unique card in the catalog.
///
/// `power`/`toughness` are `None` for rows without combat stats; an
/// absent stat never satisfies a numeric threshold downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    /// Unique identifier across the catalog
    pub name: String,
    /// Normalized rules text (may be empty)
    pub oracle_text: String,
    pub power: Option<f32>,
    pub toughness: Option<f32>,
    /// Empty = colorless
    pub color_identity: Vec<Color>,
    pub keywords: Vec<String>,
    /// Secondary card-type tags ("Wizard", "Artifact", ...)
    pub secondary_types: Vec<String>,
}

impl Creature {
    /// Length of the normalized oracle text in characters.
    pub fn oracle_length(&self) -> usize {
        self.oracle_text.chars().count()
    }

    /// Formatted power/toughness for display, e.g. "2/4".
    ///
    /// Rows without combat stats render as "-/-".
    pub fn power_toughness(&self) -> String {
        match (self.power, self.toughness) {
            (Some(p), Some(t)) => format!("{:.0}/{:.0}", p, t),
            _ => "-/-".to_string(),
        }
    }
}

// =============================================================================
// Training data and pattern summary
// =============================================================================

/// One (commander, historically-recommended creature) pair from the
/// offline training-feature table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    pub commander: String,
    pub recommended_creature: String,
}

/// Consensus patterns mined for one commander.
///
/// Each entry is `(value, support_count)`. The 80% support threshold is
/// applied by the offline job before export; the engine treats these
/// lists as already filtered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommanderPattern {
    #[serde(default)]
    pub consensus_keywords: Vec<(String, u32)>,
    #[serde(default)]
    pub consensus_types: Vec<(String, u32)>,
}

/// Per-commander pattern summaries, keyed by commander name.
///
/// Loaded once and injected into the engine (never ambient state), so
/// queries stay read-only and testable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommanderPatterns(pub HashMap<String, CommanderPattern>);

impl CommanderPatterns {
    pub fn get(&self, commander: &str) -> Option<&CommanderPattern> {
        self.0.get(commander)
    }

    /// Insert (or replace) the pattern summary for a commander
    pub fn insert(&mut self, commander: impl Into<String>, pattern: CommanderPattern) {
        self.0.insert(commander.into(), pattern);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// CardIndex - the in-memory card database
// =============================================================================

/// Holds the creature catalog and training examples with fast lookups.
///
/// Catalog order is preserved in `creatures`: it is the tie-break order
/// for equal recommendation scores, so it must survive indexing.
#[derive(Debug, Default)]
pub struct CardIndex {
    /// Catalog in artifact order
    pub(crate) creatures: Vec<Creature>,
    /// name -> position in `creatures`
    pub(crate) by_name: HashMap<String, usize>,

    /// All training examples in table order
    pub(crate) examples: Vec<TrainingExample>,
    /// commander -> companion creature names, table order preserved
    pub(crate) companion_index: HashMap<String, Vec<String>>,
}

impl CardIndex {
    /// Creates a new, empty CardIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a creature by name
    pub fn get(&self, name: &str) -> Option<&Creature> {
        self.by_name.get(name).map(|&i| &self.creatures[i])
    }

    /// Get a creature's position in catalog order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// The whole catalog, in catalog order
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Companion creature names recorded for a commander.
    ///
    /// Returns an empty slice for commanders with no training data.
    pub fn companions_of(&self, commander: &str) -> &[String] {
        self.companion_index
            .get(commander)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All commander names that have training data, sorted for stable
    /// display in a selection UI.
    pub fn commander_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.companion_index.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Insert a creature into the index.
    ///
    /// Returns `false` (and leaves the index unchanged) if the name is
    /// already present; the loader turns that into a hard error.
    pub fn insert_creature(&mut self, creature: Creature) -> bool {
        if self.by_name.contains_key(&creature.name) {
            return false;
        }
        self.by_name
            .insert(creature.name.clone(), self.creatures.len());
        self.creatures.push(creature);
        true
    }

    /// Insert a training example and update the companion index
    pub fn insert_example(&mut self, example: TrainingExample) {
        self.companion_index
            .entry(example.commander.clone())
            .or_default()
            .push(example.recommended_creature.clone());
        self.examples.push(example);
    }

    /// Get counts for debugging/validation: (creatures, examples, commanders)
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.creatures.len(),
            self.examples.len(),
            self.companion_index.len(),
        )
    }
}
