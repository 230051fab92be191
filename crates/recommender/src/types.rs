//! Output types produced by the recommendation engine.

/// One ranked recommendation with its scoring breakdown.
///
/// `boosts` and `penalties` carry human-readable labels in the order
/// they were applied, so a display layer can explain the score.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub creature_name: String,
    /// Cosine similarity against the commander's target embedding,
    /// before any boost or penalty
    pub base_similarity: f32,
    pub final_score: f32,
    /// Labels like "Keyword +0.10" or "HighPower +0.05"
    pub boosts: Vec<String>,
    /// Labels like "Known -15%" or "ShortText -10%"
    pub penalties: Vec<String>,
    /// Whether this creature is a known companion of the commander
    pub is_known: bool,
    /// Formatted power/toughness, e.g. "2/4" ("-/-" without combat stats)
    pub power_toughness: String,
    /// Length of the normalized oracle text in characters
    pub oracle_length: usize,
}

/// Commander-level power/toughness pattern flags.
///
/// Derived from the commander's resolved companions. The flags are
/// independent: a commander whose companions cluster at both ends can
/// have `high_power` and `low_power` set at the same time, and a
/// candidate is then checked against each flag on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PtPatterns {
    /// >= 75% of resolved companions have power >= 4
    pub high_power: bool,
    /// >= 75% of resolved companions have power <= 2
    pub low_power: bool,
    /// >= 80% of resolved companions have toughness strictly above power
    pub high_toughness: bool,
}

/// Display summary for a commander, returned by `get_commander_info`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommanderInfo {
    /// Number of training examples recorded for this commander
    pub total_companions: usize,
    /// Consensus keywords with their support counts
    pub consensus_keywords: Vec<(String, u32)>,
    /// Consensus secondary types with their support counts
    pub consensus_types: Vec<(String, u32)>,
    pub pt_patterns: PtPatterns,
}
