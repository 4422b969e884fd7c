//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod lanes;
pub mod legality;
pub mod obstacle;
pub mod player;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod track;

pub use autopilot::idle_intent;
pub use lanes::Lanes;
pub use legality::{
    Side, can_move_to_lane, first_overlap, try_change_lane, try_move_backward, try_move_forward,
    try_move_left, try_move_right,
};
pub use obstacle::{Obstacle, ObstacleColor};
pub use player::{Player, Travel};
pub use rect::Rect;
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, RoundState};
pub use tick::{Intent, apply_intent, tick};
pub use track::Track;
