//! Engine configuration loaded from TOML.

use crate::orchestrator::SearchPolicy;
use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{DepthBudgets, SearchMode, Searcher};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for search-driven players.
///
/// ```toml
/// search = "alpha-beta"
/// randomize_opening = true
///
/// [depth]
/// size3 = 10
/// size4 = 8
/// size5 = 6
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Search algorithm.
    #[serde(default)]
    search: SearchMode,

    /// Alpha-beta depth per board size.
    #[serde(default)]
    depth: DepthBudgets,

    /// Play the first move of a game at random.
    #[serde(default = "default_randomize_opening")]
    randomize_opening: bool,
}

fn default_randomize_opening() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search: SearchMode::default(),
            depth: DepthBudgets::default(),
            randomize_opening: default_randomize_opening(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(search = %config.search, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the search algorithm.
    pub fn with_search(mut self, search: SearchMode) -> Self {
        self.search = search;
        self
    }

    /// Overrides the depth for one board size.
    ///
    /// # Errors
    ///
    /// Rejects negative depths, like the file loader does.
    pub fn with_depth(mut self, size: usize, depth: i32) -> Result<Self, ConfigError> {
        match size {
            3 => self.depth.size3 = depth,
            4 => self.depth.size4 = depth,
            _ => self.depth.size5 = depth,
        }
        self.validate()?;
        Ok(self)
    }

    /// Search policy for a match.
    pub fn policy(&self) -> SearchPolicy {
        SearchPolicy {
            searcher: Searcher::new(self.search),
            budgets: self.depth,
            randomize_opening: self.randomize_opening,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let depths = [self.depth.size3, self.depth.size4, self.depth.size5];
        if depths.iter().any(|&d| d < 0) {
            return Err(ConfigError::new(format!(
                "Depth budgets must not be negative, got {:?}",
                depths
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
