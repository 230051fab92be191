//! Color-identity legality rule.
//!
//! A deck may only contain cards whose color identity is a subset of
//! the commander's color identity. Colorless cards fit in any deck; a
//! colorless commander admits only colorless cards.

use card_data::Color;

/// Whether a creature with `creature_colors` is legal under a commander
/// with `commander_colors`.
pub fn is_legal_for_commander(creature_colors: &[Color], commander_colors: &[Color]) -> bool {
    if creature_colors.is_empty() {
        return true;
    }
    if commander_colors.is_empty() {
        return false;
    }
    creature_colors
        .iter()
        .all(|color| commander_colors.contains(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_data::Color::*;

    #[test]
    fn test_colorless_creature_always_legal() {
        assert!(is_legal_for_commander(&[], &[White, Blue]));
        assert!(is_legal_for_commander(&[], &[]));
    }

    #[test]
    fn test_subset_rule() {
        assert!(is_legal_for_commander(&[Blue], &[White, Blue, Black]));
        assert!(is_legal_for_commander(&[Blue, Black], &[White, Blue, Black]));
        assert!(!is_legal_for_commander(&[Red], &[White, Blue, Black]));
        assert!(!is_legal_for_commander(&[Blue, Red], &[White, Blue, Black]));
    }

    #[test]
    fn test_colorless_commander_rejects_colored() {
        assert!(!is_legal_for_commander(&[Green], &[]));
    }
}
