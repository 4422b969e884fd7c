//! Lane Dodger - A lane-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement legality, collisions, round state)
//! - `game`: Round shell (intents, ticks, high score, snapshots)
//! - `platform`: Device-agnostic input mapping
//! - `tuning`: Data-driven geometry and difficulty

pub mod error;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use error::ConfigError;
pub use game::Game;
pub use highscores::HighScores;
pub use settings::Settings;
pub use snapshot::Snapshot;
pub use tuning::{Difficulty, Tuning};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Play field dimensions
    pub const WIDTH: i32 = 480;
    pub const HEIGHT: i32 = 640;
    pub const FPS: u32 = 60;

    /// Road layout
    pub const LANE_COUNT: usize = 3;
    pub const ROAD_MARGIN: i32 = 20;

    /// Player car
    pub const PLAYER_WIDTH: i32 = 50;
    pub const PLAYER_HEIGHT: i32 = 90;
    /// Pixels moved per forward (up) step
    pub const FORWARD_STEP: f32 = 60.0;
    /// Pixels moved per backward (down) step
    pub const BACKWARD_STEP: f32 = 60.0;
    pub const PLAYER_MIN_Y: f32 = 80.0;
    pub const PLAYER_MAX_Y: f32 = (HEIGHT - PLAYER_HEIGHT - 20) as f32;

    /// Obstacle cars before per-spawn size variation
    pub const OBSTACLE_BASE_WIDTH: i32 = 52;
    pub const OBSTACLE_BASE_HEIGHT: i32 = 80;
    /// Size floors after random shrink
    pub const OBSTACLE_MIN_WIDTH: i32 = 36;
    pub const OBSTACLE_MIN_HEIGHT: i32 = 48;
    /// Inclusive size variation ranges
    pub const OBSTACLE_WIDTH_VARIATION: (i32, i32) = (-6, 8);
    pub const OBSTACLE_HEIGHT_VARIATION: (i32, i32) = (-8, 10);
    /// Extra distance above the screen a new obstacle may spawn at
    pub const OBSTACLE_SPAWN_OFFSET_MAX: i32 = 120;

    /// Vertical inflation (total, split top/bottom) applied to obstacles
    /// when checking lane changes
    pub const PROXIMITY_MARGIN: i32 = 8;

    /// Difficulty curve
    pub const BASE_SPEED: f32 = 150.0;
    pub const SPEED_PER_POINT: f32 = 6.0;
    pub const SPEED_JITTER_MIN: f32 = 0.9;
    pub const SPEED_JITTER_SPAN: f32 = 0.5;
    pub const SPAWN_INTERVAL_START: f32 = 1.2;
    pub const SPAWN_INTERVAL_PER_POINT: f32 = 0.025;
    pub const SPAWN_INTERVAL_FLOOR: f32 = 0.45;
    /// Interval a fresh round starts with (recomputed on the first tick)
    pub const INITIAL_SPAWN_INTERVAL: f32 = 1.25;

    /// On-screen forward/backward buttons
    pub const BUTTON_WIDTH: i32 = 56;
    pub const BUTTON_HEIGHT: i32 = 36;
    pub const BUTTON_PAD: i32 = 10;
}
