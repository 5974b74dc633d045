use crate::render::types::RenderConfig;
use anyhow::Result;
use clap::Parser;
use common::{FoodPolicy, GameConfig};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "torus-snake", about = "Snake on a wrap-around grid, in the terminal")]
pub struct Args {
    /// JSON file with a base game configuration; flags below override it
    #[arg(long, env = "TORUS_SNAKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Grid height in cells
    #[arg(long, env = "TORUS_SNAKE_ROWS")]
    pub rows: Option<usize>,

    /// Grid width in cells
    #[arg(long, env = "TORUS_SNAKE_COLS")]
    pub cols: Option<usize>,

    /// Cell index the snake head starts on
    #[arg(long, env = "TORUS_SNAKE_START_INDEX")]
    pub start_index: Option<usize>,

    /// Milliseconds between ticks
    #[arg(long, env = "TORUS_SNAKE_TICK_MS")]
    pub tick_ms: Option<u64>,

    /// Terminal columns per grid cell
    #[arg(long, env = "TORUS_SNAKE_CELL_SIZE", default_value_t = 2)]
    pub cell_size: usize,

    /// Seed for food placement, for reproducible games
    #[arg(long, env = "TORUS_SNAKE_SEED")]
    pub seed: Option<u64>,

    /// Scan for a free cell when random food placement runs out of attempts
    #[arg(long, env = "TORUS_SNAKE_SCAN_FALLBACK")]
    pub scan_fallback: bool,

    /// Where to write logs (stdout belongs to the game screen)
    #[arg(long, env = "TORUS_SNAKE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub game: GameConfig,
    pub render: RenderConfig,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
}

impl Settings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.game.tick_interval_ms)
    }
}

impl Args {
    pub fn into_settings(self) -> Result<Settings> {
        let mut game = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(rows) = self.rows {
            game.num_rows = rows;
        }
        if let Some(cols) = self.cols {
            game.num_cols = cols;
        }
        if let Some(start_index) = self.start_index {
            game.start_index = start_index;
        }
        if let Some(tick_ms) = self.tick_ms {
            game.tick_interval_ms = tick_ms;
        }
        if self.scan_fallback {
            game.food_policy = FoodPolicy::RandomThenScan;
        }
        game.validate()?;

        let log_file = self
            .log_file
            .unwrap_or_else(|| std::env::temp_dir().join("torus-snake.log"));

        Ok(Settings {
            game,
            render: RenderConfig::with_cell_size(self.cell_size),
            seed: self.seed,
            log_file,
        })
    }
}
