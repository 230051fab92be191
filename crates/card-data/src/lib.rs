//! # Card Data Crate
//!
//! This crate handles loading and indexing the prebuilt card artifacts
//! produced by the offline data-preparation pipeline.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Creature, Color, TrainingExample,
//!   CommanderPatterns, CardIndex)
//! - **parser**: Deserialize the exported JSON artifacts into validated
//!   domain types
//! - **index**: Build the CardIndex with fast name and companion lookups
//! - **error**: Error types for artifact loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use card_data::{CardIndex, CommanderPatterns};
//! use std::path::Path;
//!
//! let index = CardIndex::load_from_files(Path::new("data/processed"))?;
//! let patterns =
//!     CommanderPatterns::load_from_file(Path::new("data/processed/commander_patterns.json"))?;
//!
//! let creature = index.get("Baleful Strix").unwrap();
//! println!("{} is {}", creature.name, creature.power_toughness());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

use std::path::Path;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    CardIndex,
    Color,
    CommanderPattern,
    CommanderPatterns,
    Creature,
    TrainingExample,
};

impl CommanderPatterns {
    /// Load the per-commander pattern summary artifact
    pub fn load_from_file(path: &Path) -> Result<Self> {
        parser::parse_commander_patterns(path)
    }
}
