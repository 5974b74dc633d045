use crate::constants::*;
use crate::{EngineError, Grid};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How food placement behaves once the random sampling budget runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPolicy {
    /// Give up with `BoardFullOrUnlucky`.
    #[default]
    RandomRetry,
    /// Fall back to the first empty cell in index order.
    RandomThenScan,
}

/// Configuration for a game session, fixed once the engine is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cell the snake head starts on
    pub start_index: usize,
    /// Height of the grid
    pub num_rows: usize,
    /// Width of the grid
    pub num_cols: usize,
    /// Period of the external tick driver
    pub tick_interval_ms: u64,
    pub food_policy: FoodPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_index: DEFAULT_START_INDEX,
            num_rows: DEFAULT_NUM_ROWS,
            num_cols: DEFAULT_NUM_COLS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            food_policy: FoodPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid and a start cell
    pub fn new(num_rows: usize, num_cols: usize, start_index: usize) -> Self {
        Self {
            start_index,
            num_rows,
            num_cols,
            ..Default::default()
        }
    }

    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn grid(&self) -> Result<Grid, EngineError> {
        Grid::new(self.num_rows, self.num_cols)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let grid = self.grid()?;
        if !grid.contains(self.start_index) {
            return Err(EngineError::InvalidConfig(format!(
                "start index {} is outside the {}x{} grid",
                self.start_index, self.num_rows, self.num_cols
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(EngineError::InvalidConfig(
                "tick interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.start_index, 20);
        assert_eq!(config.num_rows, 20);
        assert_eq!(config.num_cols, 20);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.food_policy, FoodPolicy::RandomRetry);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_config() {
        assert!(GameConfig::new(0, 5, 0).validate().is_err());
        assert!(GameConfig::new(5, 5, 25).validate().is_err());

        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::new(5, 5, 12)
        };
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"num_rows": 8, "food_policy": "random_then_scan"}"#).unwrap();
        assert_eq!(config.num_rows, 8);
        assert_eq!(config.num_cols, DEFAULT_NUM_COLS);
        assert_eq!(config.food_policy, FoodPolicy::RandomThenScan);
    }

    #[test]
    fn test_load_reports_bad_file() {
        let path = std::env::temp_dir().join("torus-snake-missing-config.json");
        let _ = std::fs::remove_file(&path);
        assert!(GameConfig::load(&path).is_err());
    }
}
