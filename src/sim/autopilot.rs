//! Idle/demo mode: a simple driver that plays the game by itself
//!
//! It only ever suggests intents; the legality engine still decides
//! whether they happen.

use super::legality::{Side, can_move_to_lane, neighbour_lane};
use super::state::{GamePhase, RoundState};
use super::tick::Intent;
use super::track::Track;

/// How far above the player's roof an obstacle counts as a threat (pixels)
pub const LOOKAHEAD: i32 = 220;

/// Whether anything in `lane` is bearing down on the player
fn lane_threatened(state: &RoundState, lane: usize) -> bool {
    let top = state.player.y as i32 - LOOKAHEAD;
    let bottom = state.player.y as i32 + state.player.height;
    state
        .obstacles
        .iter()
        .filter(|o| o.lane == lane)
        .any(|o| {
            let r = o.rect();
            r.bottom() > top && r.top() < bottom
        })
}

/// Suggest an intent for this frame, or None to keep driving straight
pub fn idle_intent(state: &RoundState, track: &Track) -> Option<Intent> {
    if state.phase == GamePhase::GameOver {
        return Some(Intent::Reset);
    }

    let lane = state.player.lane;
    if !lane_threatened(state, lane) {
        // Drift back down when the road is quiet
        return (state.player.y < state.player.travel.max_y).then_some(Intent::Backward);
    }

    // Prefer a lane that is both enterable now and clear ahead
    let escape = [Side::Left, Side::Right].into_iter().find(|&side| {
        neighbour_lane(lane, side, &track.lanes).is_some_and(|target| {
            can_move_to_lane(&state.player, target, &track.lanes, &state.obstacles)
                && !lane_threatened(state, target)
        })
    });

    match escape {
        Some(Side::Left) => Some(Intent::LaneLeft),
        Some(Side::Right) => Some(Intent::LaneRight),
        None => Some(Intent::Backward),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;
    use glam::IVec2;

    #[test]
    fn test_quiet_road_keeps_lane() {
        let track = Track::default();
        let state = RoundState::new(1, &track);
        assert_eq!(idle_intent(&state, &track), None);
    }

    #[test]
    fn test_dodges_threat_ahead() {
        let track = Track::default();
        let mut state = RoundState::new(1, &track);
        state.obstacles = vec![Obstacle::new(
            1,
            1,
            350.0,
            IVec2::new(52, 80),
            200.0,
            &track.lanes,
        )];
        assert_eq!(idle_intent(&state, &track), Some(Intent::LaneLeft));

        state.player.lane = 0;
        state.obstacles[0].lane = 0;
        assert_eq!(idle_intent(&state, &track), Some(Intent::LaneRight));
    }

    #[test]
    fn test_resets_after_crash() {
        let track = Track::default();
        let mut state = RoundState::new(1, &track);
        state.phase = GamePhase::GameOver;
        assert_eq!(idle_intent(&state, &track), Some(Intent::Reset));
    }
}
