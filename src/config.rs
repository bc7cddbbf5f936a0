/// Settings for the binaries, read from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `tracing` filter directive for the stderr logger.
    pub log_filter: String,
    /// Number of games `selfplay` runs.
    pub games: u32,
    /// Fixed RNG seed for `selfplay`; entropy when unset.
    pub seed: Option<u64>,
}

pub const DEFAULT_LOG_FILTER: &str = "pawns_chess=warn";
pub const DEFAULT_GAMES: u32 = 1000;

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        AppConfig {
            log_filter: lookup("PAWNS_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            games: lookup("SELFPLAY_GAMES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_GAMES),
            seed: lookup("SELFPLAY_SEED").and_then(|v| v.parse().ok()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            games: DEFAULT_GAMES,
            seed: None,
        }
    }
}
