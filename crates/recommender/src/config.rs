//! Scoring configuration for the recommendation engine.

/// The six scoring knobs, fixed at engine construction.
///
/// Boosts are additive on top of the base similarity; penalties are
/// multiplicative and compound (applied after all boosts).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Added once if any creature keyword matches a consensus keyword (default: 0.1)
    pub keyword_boost: f32,
    /// Added once if any secondary type matches a consensus type (default: 0.1)
    pub type_boost: f32,
    /// Added per matching power pattern (default: 0.05)
    pub power_boost: f32,
    /// Added if the high-toughness pattern matches (default: 0.05)
    pub toughness_boost: f32,
    /// Multiplier for known companions (default: 0.85, i.e. -15%)
    pub known_penalty: f32,
    /// Multiplier for oracle text under 40 characters (default: 0.90, i.e. -10%)
    pub short_text_penalty: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keyword_boost: 0.1,
            type_boost: 0.1,
            power_boost: 0.05,
            toughness_boost: 0.05,
            known_penalty: 0.85,
            short_text_penalty: 0.90,
        }
    }
}

impl ScoringConfig {
    /// Configure the keyword consensus boost (default: 0.1)
    pub fn with_keyword_boost(mut self, boost: f32) -> Self {
        self.keyword_boost = boost;
        self
    }

    /// Configure the secondary type consensus boost (default: 0.1)
    pub fn with_type_boost(mut self, boost: f32) -> Self {
        self.type_boost = boost;
        self
    }

    /// Configure the power pattern boost (default: 0.05)
    pub fn with_power_boost(mut self, boost: f32) -> Self {
        self.power_boost = boost;
        self
    }

    /// Configure the toughness pattern boost (default: 0.05)
    pub fn with_toughness_boost(mut self, boost: f32) -> Self {
        self.toughness_boost = boost;
        self
    }

    /// Configure the known-companion penalty multiplier (default: 0.85)
    pub fn with_known_penalty(mut self, penalty: f32) -> Self {
        self.known_penalty = penalty;
        self
    }

    /// Configure the short-oracle-text penalty multiplier (default: 0.90)
    pub fn with_short_text_penalty(mut self, penalty: f32) -> Self {
        self.short_text_penalty = penalty;
        self
    }
}
