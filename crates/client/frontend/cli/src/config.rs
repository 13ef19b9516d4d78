//! CLI-specific configuration for the terminal UI.
use std::env;

/// CLI terminal UI configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Fixed dice seed for reproducible games (unset: OS entropy).
    pub dice_seed: Option<u64>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DICE_DUEL_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    /// - `DICE_DUEL_SEED` - Dice seed for reproducible games
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("DICE_DUEL_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }
        config.dice_seed = read_env::<u64>("DICE_DUEL_SEED");

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of the message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
