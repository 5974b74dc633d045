/// Default tick interval in milliseconds for the driver loop
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Default grid height
pub const DEFAULT_NUM_ROWS: usize = 20;

/// Default grid width
pub const DEFAULT_NUM_COLS: usize = 20;

/// Default starting cell of the snake head
pub const DEFAULT_START_INDEX: usize = 20;

/// Random samples tried before food placement gives up
pub const MAX_FOOD_PLACEMENT_ATTEMPTS: usize = 500;
