//! Shared configuration types for CLI commands

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::tictactoe::Mark;

/// Common configuration shared across commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
            verbose: false,
        }
    }
}

/// Who opens an interactive game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstTurn {
    Human,
    #[value(alias = "ai")]
    Engine,
}

/// Interactive game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Mark played by the human
    pub human: Mark,

    /// Who moves first; asked at the start of every game when unset
    pub first: Option<FirstTurn>,

    /// Print node counts and the move value after each engine move
    pub show_stats: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: Mark::X,
            first: None,
            show_stats: true,
        }
    }
}

/// Engine-versus-opponent series configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games
    pub games: usize,

    /// Opponent type
    pub opponent: String,

    /// Mark played by the engine
    pub engine: Mark,

    /// Mark that opens every game
    pub first: Mark,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            opponent: "random".to_string(),
            engine: Mark::X,
            first: Mark::X,
        }
    }
}

/// Everything that can be set from a config file
///
/// Every section and field is optional in the file; missing values fall back
/// to the defaults above. Command-line flags override the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub common: CommonConfig,
    pub play: PlayConfig,
    #[serde(rename = "match")]
    pub matches: MatchConfig,
}

impl AppConfig {
    /// Load a JSON config file
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Serialization`] if it is not valid config JSON.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config: AppConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> crate::Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    fn validate(&self) -> crate::Result<()> {
        if self.matches.games == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "match.games must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "play": {{ "human": "O" }}, "match": {{ "games": 5 }} }}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.play.human, Mark::O);
        assert!(config.play.show_stats);
        assert_eq!(config.matches.games, 5);
        assert_eq!(config.matches.opponent, "random");
        assert_eq!(config.common, CommonConfig::default());
    }

    #[test]
    fn test_first_turn_names() {
        let config: PlayConfig = serde_json::from_str(r#"{ "first": "engine" }"#).unwrap();
        assert_eq!(config.first, Some(FirstTurn::Engine));
    }

    #[test]
    fn test_zero_games_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "match": {{ "games": 0 }} }}"#).unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("match.games"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AppConfig::load(Path::new("/nonexistent/noughts.json")).unwrap_err();
        assert!(err.to_string().contains("noughts.json"));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(AppConfig::load_or_default(None).unwrap(), AppConfig::default());
    }
}
