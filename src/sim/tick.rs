//! Per-frame simulation step
//!
//! Input intents are applied first (`apply_intent`), then `tick` advances
//! the road. The two never interleave within a frame.

use super::legality::{
    first_overlap, try_move_backward, try_move_forward, try_move_left, try_move_right,
};
use super::spawner::spawn_obstacle;
use super::state::{GameEvent, GamePhase, RoundState};
use super::track::Track;

/// Device-agnostic player intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    LaneLeft,
    LaneRight,
    Forward,
    Backward,
    /// Start a new round (only honoured after game over)
    Reset,
    Quit,
}

/// Apply a movement intent to the player
///
/// Returns whether the move was committed. Non-movement intents and any
/// intent after game over are ignored here; the shell handles reset/quit.
pub fn apply_intent(state: &mut RoundState, intent: Intent, track: &Track) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    let lanes = &track.lanes;
    let player = &mut state.player;
    let obstacles = &state.obstacles;
    match intent {
        Intent::LaneLeft => try_move_left(player, lanes, obstacles),
        Intent::LaneRight => try_move_right(player, lanes, obstacles),
        Intent::Forward => try_move_forward(player, lanes, obstacles),
        Intent::Backward => try_move_backward(player, lanes, obstacles),
        Intent::Reset | Intent::Quit => false,
    }
}

/// Advance the round by `dt` seconds
///
/// Spawn, advance, retire (scoring), then check for a crash. Does nothing
/// once the round is over.
pub fn tick(state: &mut RoundState, track: &Track, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;
    let tuning = &track.tuning;

    if state.spawner.step(dt, state.score, &tuning.difficulty) {
        let id = state.next_entity_id();
        let obstacle = spawn_obstacle(id, state.score, tuning, &track.lanes, &mut state.rng);
        log::debug!(
            "Spawned obstacle {} in lane {} at {:.0} px/s",
            id,
            obstacle.lane,
            obstacle.speed
        );
        events.push(GameEvent::ObstacleSpawned {
            id,
            lane: obstacle.lane,
        });
        state.obstacles.push(obstacle);
    }

    for obstacle in &mut state.obstacles {
        obstacle.advance(dt);
    }

    let bottom = track.bottom();
    let (retired, active): (Vec<_>, Vec<_>) = std::mem::take(&mut state.obstacles)
        .into_iter()
        .partition(|o| o.is_past(bottom));
    for obstacle in &retired {
        state.score += 1;
        events.push(GameEvent::ObstacleRetired {
            id: obstacle.id,
            score: state.score,
        });
    }
    state.obstacles = active;

    let player_rect = state.player.rect(&track.lanes);
    if let Some(hit) = first_overlap(&player_rect, &state.obstacles) {
        state.phase = GamePhase::GameOver;
        log::info!("Crashed into obstacle {} with score {}", hit.id, state.score);
        events.push(GameEvent::Crashed {
            obstacle_id: hit.id,
            score: state.score,
        });
    }

    events
}
