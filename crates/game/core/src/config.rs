//! Static rule configuration.

/// Rule parameters shared by the engine and runtime.
///
/// The defaults reproduce the canonical game: three rounds and a
/// celebration batch of 100 particles. The two-dice-per-side shape is
/// structural ([`crate::DicePair`]), not configurable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of rounds played before a winner is declared.
    pub rounds_per_game: u8,
    /// Particles spawned when the player's win celebration starts.
    pub celebration_particles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds_per_game: 3,
            celebration_particles: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_canonical_game() {
        let config = GameConfig::default();
        assert_eq!(config.rounds_per_game, 3);
        assert_eq!(config.celebration_particles, 100);
    }
}
