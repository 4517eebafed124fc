/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Number of tiles generated for the staggered grid screen
    pub const GRID_ITEM_COUNT: usize = 100;

    /// Smallest tile height in CSS pixels (inclusive)
    pub const GRID_MIN_HEIGHT: u16 = 100;

    /// Largest tile height in CSS pixels (exclusive)
    pub const GRID_MAX_HEIGHT: u16 = 300;
}
