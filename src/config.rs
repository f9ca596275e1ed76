use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::games::tictactoe::{FirstPlayerMode, GameMode};

const MAX_BOT_DELAY_MS: u64 = 10_000;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub first_player: FirstPlayerMode,
    /// Pacing delay before the computer's reply, purely cosmetic.
    pub bot_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsComputer,
            first_player: FirstPlayerMode::HumanFirst,
            bot_delay_ms: 500,
        }
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "Bot delay ({} ms) cannot exceed {} ms",
                self.bot_delay_ms, MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}

pub fn parse_config(content: &str) -> Result<SessionConfig, String> {
    let config: SessionConfig =
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to parse config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

/// Missing file is not an error; the defaults apply.
pub fn load_config(file_path: &str) -> Result<SessionConfig, String> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Ok(SessionConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file {}: {}", file_path, e))?;

    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.mode, GameMode::HumanVsComputer);
        assert_eq!(config.first_player, FirstPlayerMode::HumanFirst);
        assert_eq!(config.bot_delay_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let config = parse_config(
            "mode: HumanVsHuman\nfirst_player: Random\nbot_delay_ms: 250\n",
        )
        .unwrap();
        assert_eq!(config.mode, GameMode::HumanVsHuman);
        assert_eq!(config.first_player, FirstPlayerMode::Random);
        assert_eq!(config.bot_delay_ms, 250);
    }

    #[test]
    fn test_parse_config_applies_defaults() {
        let config = parse_config("mode: HumanVsHuman\n").unwrap();
        assert_eq!(config.bot_delay_ms, 500);
    }

    #[test]
    fn test_parse_config_rejects_excessive_delay() {
        let result = parse_config("bot_delay_ms: 60000\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let config = load_config("/nonexistent/tictactoe.yaml").unwrap();
        assert_eq!(config.bot_delay_ms, 500);
    }
}
