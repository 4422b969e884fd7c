//! Obstacle cars driving down the road

use glam::{IVec2, Vec2};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::lanes::Lanes;
use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Cosmetic body color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleColor {
    Red,
    Blue,
    Yellow,
    Purple,
}

impl ObstacleColor {
    pub const ALL: [ObstacleColor; 4] = [
        ObstacleColor::Red,
        ObstacleColor::Blue,
        ObstacleColor::Yellow,
        ObstacleColor::Purple,
    ];

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            ObstacleColor::Red => [200, 50, 50],
            ObstacleColor::Blue => [20, 120, 220],
            ObstacleColor::Yellow => [230, 180, 20],
            ObstacleColor::Purple => [150, 50, 190],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub lane: usize,
    /// Top-left corner; x is fixed by the lane, y advances every tick
    pub pos: Vec2,
    pub size: IVec2,
    /// Downward speed (pixels/s)
    pub speed: f32,
    pub color: ObstacleColor,
}

impl Obstacle {
    /// Place an obstacle of `size` in `lane` with its top edge at `y`
    pub fn new(id: u32, lane: usize, y: f32, size: IVec2, speed: f32, lanes: &Lanes) -> Self {
        let x = lanes.center_x(lane) - size.x / 2;
        Self {
            id,
            lane,
            pos: Vec2::new(x as f32, y),
            size,
            speed,
            color: ObstacleColor::Red,
        }
    }

    /// Spawn above the visible area with randomized size and color
    pub fn spawn<R: Rng + ?Sized>(
        id: u32,
        lane: usize,
        speed: f32,
        tuning: &Tuning,
        lanes: &Lanes,
        rng: &mut R,
    ) -> Self {
        let (w_lo, w_hi) = OBSTACLE_WIDTH_VARIATION;
        let (h_lo, h_hi) = OBSTACLE_HEIGHT_VARIATION;
        let width =
            (tuning.obstacle_base_width + rng.random_range(w_lo..=w_hi)).max(OBSTACLE_MIN_WIDTH);
        let height =
            (tuning.obstacle_base_height + rng.random_range(h_lo..=h_hi)).max(OBSTACLE_MIN_HEIGHT);
        let y = -height - rng.random_range(0..=OBSTACLE_SPAWN_OFFSET_MAX);

        let mut obstacle = Self::new(id, lane, y as f32, IVec2::new(width, height), speed, lanes);
        obstacle.color = *ObstacleColor::ALL.choose(rng).unwrap_or(&ObstacleColor::Red);
        obstacle
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Drive down the road for `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.pos.y += self.speed * dt;
    }

    /// True once the top edge is below `bottom`
    pub fn is_past(&self, bottom: i32) -> bool {
        self.rect().top() > bottom
    }
}
