//! Simulator configuration management.
//!
//! Consolidates all environment variable reads and applies command-line
//! overrides on top.

/// Largest field the simulator will generate
pub const MAX_PLAYERS: usize = 1024;

/// Values given on the command line, which win over the environment
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub players: Option<usize>,
    pub seed: Option<u64>,
    pub max_score: Option<u32>,
    pub title: Option<String>,
    pub json: bool,
}

/// Complete simulator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of players to register and seed
    pub players: usize,
    /// Tournament title
    pub title: String,
    /// RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Highest score a simulated player can post
    pub max_score: u32,
    /// Dump the final bracket as JSON
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            players: 8,
            title: "Simulated Open".to_string(),
            seed: None,
            max_score: 21,
            json: false,
        }
    }
}

impl SimConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `SIM_PLAYERS`, `SIM_TITLE`, `SIM_SEED`, `SIM_MAX_SCORE` and
    /// `SIM_JSON`. Anything set in `overrides` takes precedence. Values that
    /// fail to parse are reported rather than silently replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but malformed
    pub fn from_env(overrides: CliOverrides) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let players = match overrides.players {
            Some(players) => players,
            None => parse_env_or("SIM_PLAYERS", defaults.players)?,
        };

        let title = overrides
            .title
            .or_else(|| std::env::var("SIM_TITLE").ok())
            .unwrap_or(defaults.title);

        let seed = match overrides.seed {
            Some(seed) => Some(seed),
            None => parse_env_opt("SIM_SEED")?,
        };

        let max_score = match overrides.max_score {
            Some(max_score) => max_score,
            None => parse_env_or("SIM_MAX_SCORE", defaults.max_score)?,
        };

        let json = overrides.json || parse_env_or("SIM_JSON", defaults.json)?;

        Ok(Self {
            players,
            title,
            seed,
            max_score,
            json,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players < 4 || !self.players.is_power_of_two() {
            return Err(ConfigError::Invalid {
                var: "SIM_PLAYERS".to_string(),
                reason: format!("Must be a power of two of at least 4, got {}", self.players),
            });
        }

        if self.players > MAX_PLAYERS {
            return Err(ConfigError::Invalid {
                var: "SIM_PLAYERS".to_string(),
                reason: format!("Must be at most {MAX_PLAYERS}"),
            });
        }

        // Two distinct scores need at least 0 and 1
        if self.max_score == 0 {
            return Err(ConfigError::Invalid {
                var: "SIM_MAX_SCORE".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "SIM_TITLE".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    Ok(parse_env_opt(key)?.unwrap_or(default))
}

fn parse_env_opt<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                var: key.to_string(),
                reason: format!("Cannot parse {raw:?}"),
            }),
        Err(_) => Ok(None),
    }
}
