//! # Recommender Crate
//!
//! The commander recommendation engine: scoring and ranking of catalog
//! creatures for a chosen commander.
//!
//! ## Components
//!
//! - **engine**: `RecommendationEngine` - text-similarity ranking with
//!   consensus boosts, pattern boosts, and penalties
//! - **patterns**: power/toughness pattern detection over a commander's
//!   historical companions
//! - **legality**: the color-identity legality rule
//! - **config**: the six scoring knobs with their defaults
//! - **types**: `Recommendation`, `CommanderInfo`, `PtPatterns`
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::{RecommendationEngine, ScoringConfig, DEFAULT_TOP_K};
//! use card_data::{CardIndex, CommanderPatterns};
//! use vectorizer::TfidfModel;
//! use std::sync::Arc;
//!
//! let index = Arc::new(CardIndex::load_from_files("data/processed".as_ref())?);
//! let patterns = CommanderPatterns::load_from_file("data/processed/commander_patterns.json".as_ref())?;
//! let model = TfidfModel::load_from_file("data/processed/tfidf_model.json".as_ref())?;
//!
//! let engine = RecommendationEngine::new(model, patterns, index, ScoringConfig::default())?;
//! let recs = engine.get_recommendations("Atraxa, Praetors' Voice", DEFAULT_TOP_K, true);
//! for rec in recs.iter().take(10) {
//!     println!("{:.3}  {}", rec.final_score, rec.creature_name);
//! }
//! ```
//!
//! ## Concurrency
//!
//! The engine never mutates shared state after construction; queries
//! allocate their own intermediates. A `RecommendationEngine` behind an
//! `Arc` can therefore serve concurrent read-only queries without locks.

// Public modules
pub mod config;
pub mod engine;
pub mod legality;
pub mod patterns;
pub mod types;

// Re-export commonly used types
pub use config::ScoringConfig;
pub use engine::{DEFAULT_TOP_K, EngineError, RecommendationEngine};
pub use legality::is_legal_for_commander;
pub use patterns::detect_pt_patterns;
pub use types::{CommanderInfo, PtPatterns, Recommendation};
