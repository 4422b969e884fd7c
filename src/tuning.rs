//! Data-driven geometry and difficulty
//!
//! Every field defaults to the value in [`crate::consts`], so a partial JSON
//! block only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Difficulty curve knobs. Score feeds both obstacle speed and spawn cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Difficulty {
    /// Obstacle speed at score 0 (pixels/s)
    pub base_speed: f32,
    /// Speed added per point scored
    pub speed_per_point: f32,
    /// Lower bound of the per-spawn speed multiplier
    pub jitter_min: f32,
    /// Width of the multiplier range, so jitter is in `[min, min + span)`
    pub jitter_span: f32,
    pub spawn_interval_start: f32,
    pub spawn_interval_per_point: f32,
    pub spawn_interval_floor: f32,
    pub initial_spawn_interval: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED,
            speed_per_point: SPEED_PER_POINT,
            jitter_min: SPEED_JITTER_MIN,
            jitter_span: SPEED_JITTER_SPAN,
            spawn_interval_start: SPAWN_INTERVAL_START,
            spawn_interval_per_point: SPAWN_INTERVAL_PER_POINT,
            spawn_interval_floor: SPAWN_INTERVAL_FLOOR,
            initial_spawn_interval: INITIAL_SPAWN_INTERVAL,
        }
    }
}

impl Difficulty {
    /// Obstacle speed before jitter
    pub fn base_speed(&self, score: u64) -> f32 {
        self.base_speed + self.speed_per_point * score as f32
    }

    /// Seconds between spawns, non-increasing in score and floored
    pub fn spawn_interval(&self, score: u64) -> f32 {
        (self.spawn_interval_start - self.spawn_interval_per_point * score as f32)
            .max(self.spawn_interval_floor)
    }
}

/// Road geometry, player travel and difficulty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub width: i32,
    pub height: i32,
    pub lane_count: usize,
    pub road_margin: i32,

    pub player_width: i32,
    pub player_height: i32,
    pub player_min_y: f32,
    pub player_max_y: f32,
    pub forward_step: f32,
    pub backward_step: f32,

    pub obstacle_base_width: i32,
    pub obstacle_base_height: i32,

    pub difficulty: Difficulty,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            lane_count: LANE_COUNT,
            road_margin: ROAD_MARGIN,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_min_y: PLAYER_MIN_Y,
            player_max_y: PLAYER_MAX_Y,
            forward_step: FORWARD_STEP,
            backward_step: BACKWARD_STEP,

            obstacle_base_width: OBSTACLE_BASE_WIDTH,
            obstacle_base_height: OBSTACLE_BASE_HEIGHT,

            difficulty: Difficulty::default(),
        }
    }
}

impl Tuning {
    /// Width of the drivable road between the margins
    pub fn road_width(&self) -> i32 {
        self.width - self.road_margin * 2
    }

    /// Reject geometry the lane model and player bounds can't be built from
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.lane_count < 1 {
            return invalid("lane_count must be at least 1".into());
        }
        if self.width <= 0 || self.height <= 0 {
            return invalid(format!(
                "play field must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if self.road_margin < 0 {
            return invalid(format!("road_margin must be >= 0, got {}", self.road_margin));
        }
        // Each lane needs at least one pixel
        let lanes = i32::try_from(self.lane_count).unwrap_or(i32::MAX);
        if self.road_width() < lanes {
            return invalid(format!(
                "road width {} can't hold {} lanes",
                self.road_width(),
                self.lane_count
            ));
        }
        if self.player_width <= 0 || self.player_height <= 0 {
            return invalid("player size must be positive".into());
        }
        if self.obstacle_base_width <= 0 || self.obstacle_base_height <= 0 {
            return invalid("obstacle base size must be positive".into());
        }
        if !(self.player_min_y <= self.player_max_y) {
            return invalid(format!(
                "player_min_y {} exceeds player_max_y {}",
                self.player_min_y, self.player_max_y
            ));
        }
        if !(self.forward_step >= 0.0 && self.backward_step >= 0.0) {
            return invalid("movement steps must be >= 0".into());
        }

        let d = &self.difficulty;
        if !(d.jitter_span > 0.0 && d.jitter_min > 0.0) {
            return invalid("speed jitter range must be positive and non-empty".into());
        }
        if !(d.spawn_interval_floor > 0.0) {
            return invalid("spawn_interval_floor must be > 0".into());
        }
        if !(d.base_speed.is_finite() && d.speed_per_point.is_finite()) {
            return invalid("obstacle speed must be finite".into());
        }

        Ok(())
    }
}
