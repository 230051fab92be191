//! The recommendation engine.
//!
//! Ranks every legal catalog creature for a chosen commander by oracle
//! text similarity to the commander's historical companions, then
//! adjusts the ranking with deck-building convention boosts and
//! penalties.
//!
//! ## Algorithm
//! 1. Look up the commander's companions in the training table
//! 2. Average their precomputed embeddings into a target embedding
//! 3. Cosine similarity between the target and every catalog creature
//! 4. Per creature: legality filter, consensus keyword/type boosts,
//!    power/toughness pattern boosts, known-companion and short-text
//!    penalties
//! 5. Sort by final score, truncate to top_k
//!
//! All data is loaded once at construction and never mutated, so a
//! constructed engine is safe to query concurrently.

use std::collections::HashSet;
use std::sync::Arc;

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, instrument};

use card_data::{CardIndex, CommanderPatterns, Creature};
use vectorizer::{TfidfModel, cosine_similarity};

use crate::config::ScoringConfig;
use crate::legality::is_legal_for_commander;
use crate::patterns::detect_pt_patterns;
use crate::types::{CommanderInfo, Recommendation};

/// Default number of recommendations returned by a query
pub const DEFAULT_TOP_K: usize = 100;

/// Oracle texts shorter than this (in characters) take the short-text penalty
const SHORT_TEXT_LENGTH: usize = 40;

/// Construction failures. None of these are recoverable at query time,
/// so a partially-built engine is never handed out.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Creature catalog is empty")]
    EmptyCatalog,

    #[error("Similarity model is incompatible with the catalog: {0}")]
    IncompatibleModel(String),
}

/// The recommendation engine.
///
/// Owns the card index, the fitted similarity model, the per-commander
/// pattern summary, and the scoring configuration. One embedding per
/// catalog creature is precomputed at construction; every query reuses
/// that cache.
pub struct RecommendationEngine {
    index: Arc<CardIndex>,
    patterns: CommanderPatterns,
    model: TfidfModel,
    config: ScoringConfig,
    /// One embedding per creature, in catalog order
    embeddings: Vec<Vec<f32>>,
}

impl RecommendationEngine {
    /// Build an engine from the prebuilt artifacts.
    ///
    /// Precomputes all creature embeddings (O(catalog), parallelized).
    /// Fails fast on an empty catalog or a degenerate model instead of
    /// handing out an engine that cannot score anything.
    pub fn new(
        model: TfidfModel,
        patterns: CommanderPatterns,
        index: Arc<CardIndex>,
        config: ScoringConfig,
    ) -> Result<Self, EngineError> {
        if index.creatures().is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        if model.dimension() == 0 {
            return Err(EngineError::IncompatibleModel(
                "model dimension is zero".to_string(),
            ));
        }

        info!(
            creatures = index.creatures().len(),
            dimension = model.dimension(),
            "Precomputing creature embeddings"
        );
        let embeddings: Vec<Vec<f32>> = index
            .creatures()
            .par_iter()
            .map(|creature| model.transform(&creature.oracle_text))
            .collect();

        info!(
            creatures = index.creatures().len(),
            commanders = index.commander_names().len(),
            "Recommendation engine ready"
        );

        Ok(Self {
            index,
            patterns,
            model,
            config,
            embeddings,
        })
    }

    /// The scoring configuration this engine was built with
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// The shared card index
    pub fn index(&self) -> &CardIndex {
        &self.index
    }

    /// All commander names with training data, sorted (for selection UIs)
    pub fn commander_names(&self) -> Vec<&str> {
        self.index.commander_names()
    }

    /// Rank catalog creatures for a commander.
    ///
    /// Returns at most `top_k` recommendations sorted by final score
    /// descending; ties keep catalog order. An unknown commander, a
    /// commander missing from the catalog, or a commander none of whose
    /// companions resolve against the catalog all yield an empty list -
    /// "no prior data" is a normal condition, not an error.
    ///
    /// With `include_known == false`, known companions are dropped from
    /// the output instead of being penalized.
    #[instrument(skip(self), fields(commander = commander_name))]
    pub fn get_recommendations(
        &self,
        commander_name: &str,
        top_k: usize,
        include_known: bool,
    ) -> Vec<Recommendation> {
        let companions = self.index.companions_of(commander_name);
        if companions.is_empty() {
            debug!("No training data for commander");
            return Vec::new();
        }

        let Some(commander) = self.index.get(commander_name) else {
            debug!("Commander not found in catalog");
            return Vec::new();
        };
        let commander_colors = &commander.color_identity;

        // Consensus patterns (empty lists if the commander has no summary)
        let pattern = self.patterns.get(commander_name);
        let consensus_keywords: Vec<&str> = pattern
            .map(|p| p.consensus_keywords.iter().map(|(kw, _)| kw.as_str()).collect())
            .unwrap_or_default();
        let consensus_types: Vec<&str> = pattern
            .map(|p| p.consensus_types.iter().map(|(st, _)| st.as_str()).collect())
            .unwrap_or_default();

        // Resolve companions against the catalog; dangling references
        // are skipped (historical data mentions removed cards)
        let known: HashSet<&str> = companions.iter().map(String::as_str).collect();
        let resolved: Vec<usize> = companions
            .iter()
            .filter_map(|name| self.index.position(name))
            .collect();
        if resolved.is_empty() {
            debug!("No companions resolved against the catalog");
            return Vec::new();
        }

        let resolved_creatures: Vec<&Creature> = resolved
            .iter()
            .map(|&i| &self.index.creatures()[i])
            .collect();
        let pt_patterns = detect_pt_patterns(&resolved_creatures);

        // Target embedding: element-wise mean of resolved companion embeddings
        let target = self.mean_embedding(&resolved);

        // One similarity per catalog creature
        let similarities: Vec<f32> = self
            .embeddings
            .par_iter()
            .map(|embedding| cosine_similarity(&target, embedding))
            .collect();

        let cfg = &self.config;
        let mut recommendations = Vec::new();

        for (creature, &similarity) in self.index.creatures().iter().zip(&similarities) {
            // Never recommend the commander to itself
            if creature.name == commander_name {
                continue;
            }

            let is_known = known.contains(creature.name.as_str());
            if !include_known && is_known {
                continue;
            }

            if !is_legal_for_commander(&creature.color_identity, commander_colors) {
                continue;
            }

            let mut score = similarity;
            let mut boosts = Vec::new();

            // Keyword consensus boost: first match only
            if creature
                .keywords
                .iter()
                .any(|kw| consensus_keywords.contains(&kw.as_str()))
            {
                score += cfg.keyword_boost;
                boosts.push(format!("Keyword +{:.2}", cfg.keyword_boost));
            }

            // Secondary type consensus boost: first matching consensus type only
            for consensus_type in &consensus_types {
                if creature.secondary_types.iter().any(|t| t == consensus_type) {
                    score += cfg.type_boost;
                    boosts.push(format!("Type({}) +{:.2}", consensus_type, cfg.type_boost));
                    break;
                }
            }

            // Power/toughness pattern boosts: gated on the commander-level
            // flags, each applied at most once, independently stackable
            if pt_patterns.high_power && creature.power.is_some_and(|p| p >= 4.0) {
                score += cfg.power_boost;
                boosts.push(format!("HighPower +{:.2}", cfg.power_boost));
            }
            if pt_patterns.low_power && creature.power.is_some_and(|p| p <= 2.0) {
                score += cfg.power_boost;
                boosts.push(format!("LowPower +{:.2}", cfg.power_boost));
            }
            if pt_patterns.high_toughness
                && matches!((creature.power, creature.toughness), (Some(p), Some(t)) if t > p)
            {
                score += cfg.toughness_boost;
                boosts.push(format!("HighToughness +{:.2}", cfg.toughness_boost));
            }

            // Multiplicative penalties, after all boosts, compounding
            let mut penalties = Vec::new();
            if is_known {
                score *= cfg.known_penalty;
                penalties.push(format!("Known -{:.0}%", (1.0 - cfg.known_penalty) * 100.0));
            }

            let oracle_length = creature.oracle_length();
            if oracle_length < SHORT_TEXT_LENGTH {
                score *= cfg.short_text_penalty;
                penalties.push(format!(
                    "ShortText -{:.0}%",
                    (1.0 - cfg.short_text_penalty) * 100.0
                ));
            }

            recommendations.push(Recommendation {
                creature_name: creature.name.clone(),
                base_similarity: similarity,
                final_score: score,
                boosts,
                penalties,
                is_known,
                power_toughness: creature.power_toughness(),
                oracle_length,
            });
        }

        // Stable sort: equal scores keep catalog order
        recommendations.sort_by(|a, b| b.final_score.partial_cmp(&a.final_score).unwrap());
        recommendations.truncate(top_k);

        debug!(count = recommendations.len(), "Generated recommendations");
        recommendations
    }

    /// Display summary for a commander, or `None` if it has no training
    /// data. Pure read-only query; no scoring.
    pub fn get_commander_info(&self, commander_name: &str) -> Option<CommanderInfo> {
        let companions = self.index.companions_of(commander_name);
        if companions.is_empty() {
            return None;
        }

        let pattern = self.patterns.get(commander_name).cloned().unwrap_or_default();
        let resolved: Vec<&Creature> = companions
            .iter()
            .filter_map(|name| self.index.get(name))
            .collect();

        Some(CommanderInfo {
            total_companions: companions.len(),
            consensus_keywords: pattern.consensus_keywords,
            consensus_types: pattern.consensus_types,
            pt_patterns: detect_pt_patterns(&resolved),
        })
    }

    /// Element-wise mean of the precomputed embeddings at `positions`
    fn mean_embedding(&self, positions: &[usize]) -> Vec<f32> {
        let mut target = vec![0.0f32; self.model.dimension()];
        for &pos in positions {
            for (acc, &value) in target.iter_mut().zip(&self.embeddings[pos]) {
                *acc += value;
            }
        }
        let count = positions.len() as f32;
        for value in target.iter_mut() {
            *value /= count;
        }
        target
    }
}
