//! Read-only view of a round for rendering and the HUD

use serde::Serialize;

use crate::sim::{GamePhase, ObstacleColor, Rect, RoundState, Track};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub lane: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub rect: Rect,
    pub color: ObstacleColor,
}

/// Everything a frontend needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub score: u64,
    pub high_score: u64,
    pub phase: GamePhase,
    pub player: PlayerView,
    /// Spawn order
    pub obstacles: Vec<ObstacleView>,
    /// X of the dashed lines between lanes
    pub lane_separators: Vec<i32>,
}

impl Snapshot {
    pub fn capture(state: &RoundState, track: &Track, high_score: u64) -> Self {
        Self {
            score: state.score,
            high_score,
            phase: state.phase,
            player: PlayerView {
                rect: state.player.rect(&track.lanes),
                lane: state.player.lane,
            },
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    rect: o.rect(),
                    color: o.color,
                })
                .collect(),
            lane_separators: track.lanes.separators(track.tuning.road_margin).collect(),
        }
    }
}
