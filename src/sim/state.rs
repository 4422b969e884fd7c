//! Round state and core simulation types
//!
//! One `RoundState` is live at a time. Reset throws it away and builds a
//! new one; nothing carries over except what the caller passes in.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::player::Player;
use super::spawner::Spawner;
use super::track::Track;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player crashed; waits for a reset
    GameOver,
}

/// Things that happened during a tick, for audio/HUD collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ObstacleSpawned { id: u32, lane: usize },
    /// Obstacle left the bottom of the screen; score is the new total
    ObstacleRetired { id: u32, score: u64 },
    /// Player hit an obstacle and the round ended
    Crashed { obstacle_id: u32, score: u64 },
}

#[derive(Debug, Clone)]
pub struct RoundState {
    /// Seed this round's RNG started from
    pub seed: u64,
    pub rng: Pcg32,
    pub player: Player,
    /// Oldest spawn first
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub spawner: Spawner,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    next_id: u32,
}

impl RoundState {
    /// Fresh round: player parked in the middle lane, empty road
    pub fn new(seed: u64, track: &Track) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&track.tuning, &track.lanes),
            obstacles: Vec::new(),
            score: 0,
            spawner: Spawner::new(&track.tuning.difficulty),
            phase: GamePhase::Playing,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round() {
        let track = Track::default();
        let mut state = RoundState::new(42, &track);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.lane, 1);
        assert_eq!(state.spawner.interval, 1.25);
        assert_eq!(state.next_entity_id(), 1);
        assert_eq!(state.next_entity_id(), 2);
    }
}
