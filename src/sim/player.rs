//! The player's car
//!
//! Holds lane and vertical position only. The rectangle is derived from
//! them on demand, so it can never drift out of sync with the lane.

use serde::{Deserialize, Serialize};

use super::lanes::Lanes;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Vertical travel limits and step sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Travel {
    pub min_y: f32,
    pub max_y: f32,
    pub forward_step: f32,
    pub backward_step: f32,
}

impl Travel {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            min_y: tuning.player_min_y,
            max_y: tuning.player_max_y,
            forward_step: tuning.forward_step,
            backward_step: tuning.backward_step,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub lane: usize,
    /// Top edge in screen space (smaller is further up the road)
    pub y: f32,
    pub width: i32,
    pub height: i32,
    pub travel: Travel,
}

impl Player {
    /// New player in the middle lane, parked at the bottom of its travel
    pub fn new(tuning: &Tuning, lanes: &Lanes) -> Self {
        let travel = Travel::from_tuning(tuning);
        Self {
            lane: lanes.middle(),
            y: travel.max_y,
            width: tuning.player_width,
            height: tuning.player_height,
            travel,
        }
    }

    /// Rectangle the player would occupy in `lane` at its current height
    pub fn rect_in_lane(&self, lane: usize, lanes: &Lanes) -> Rect {
        let center_x = lanes.center_x(lane);
        Rect::new(center_x - self.width / 2, self.y as i32, self.width, self.height)
    }

    pub fn rect(&self, lanes: &Lanes) -> Rect {
        self.rect_in_lane(self.lane, lanes)
    }

    /// Move up the road by one step, clamped at `min_y`
    pub fn move_forward(&mut self) {
        self.y = (self.y - self.travel.forward_step).max(self.travel.min_y);
    }

    /// Move down the road by one step, clamped at `max_y`
    pub fn move_backward(&mut self) {
        self.y = (self.y + self.travel.backward_step).min(self.travel.max_y);
    }
}
