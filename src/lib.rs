//! Maze Chase - A tile-based maze arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze, entities, adversary wandering, scoring)
//! - `session`: Input mapping and fixed-timestep driving for a presentation layer
//! - `highscores`: In-memory leaderboard for the current session
//! - `settings`: Runtime configuration

pub mod highscores;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use session::{Key, Screen, Session};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Edge length of one maze tile in pixels
    pub const TILE_SIZE: i32 = 32;
    /// Maze rows
    pub const ROW_COUNT: usize = 21;
    /// Maze columns
    pub const COLUMN_COUNT: usize = 19;

    /// Board dimensions in pixels
    pub const BOARD_WIDTH: i32 = COLUMN_COUNT as i32 * TILE_SIZE;
    pub const BOARD_HEIGHT: i32 = ROW_COUNT as i32 * TILE_SIZE;

    /// Pixels moved per tick by every entity
    pub const ENTITY_SPEED: i32 = TILE_SIZE / 4;

    /// Pickups are small squares centred inside their tile
    pub const PICKUP_SIZE: i32 = 4;
    pub const PICKUP_INSET: i32 = 14;
    /// Score awarded per pickup
    pub const PICKUP_REWARD: u32 = 10;

    /// Lives at the start of every game
    pub const STARTING_LIVES: u8 = 3;

    /// Fixed simulation rate (50 ms per tick)
    pub const TICK_RATE_HZ: u32 = 20;
    /// Maximum ticks run per `Session::advance` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
