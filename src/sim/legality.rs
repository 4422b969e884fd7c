//! Movement legality: which player moves the obstacle layout allows
//!
//! Lane changes and vertical moves are checked two different ways:
//!
//! - Lane changes use a pure predicate ([`can_move_to_lane`]) evaluated
//!   before anything is mutated. It also treats a thin band above and below
//!   each obstacle as occupied ([`PROXIMITY_MARGIN`]) so a sideways move can't
//!   slide into a car that is about to touch.
//! - Forward/backward moves are applied first, clamped, and then undone by
//!   the opposite move if the new rectangle overlaps an obstacle exactly.
//!   Because the undo goes through the same clamping, a move that was
//!   shortened by a clamp is not a perfect inverse of its undo.

use super::lanes::Lanes;
use super::obstacle::Obstacle;
use super::player::Player;
use super::rect::Rect;
use crate::consts::PROXIMITY_MARGIN;

/// Direction of a lane change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// First obstacle whose exact rectangle overlaps `rect`
pub fn first_overlap<'a>(rect: &Rect, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    obstacles.iter().find(|o| rect.overlaps(&o.rect()))
}

/// Whether the player could sit in `target` at its current height
///
/// Rejects on the first obstacle that overlaps the hypothetical rectangle,
/// either exactly or once inflated vertically by [`PROXIMITY_MARGIN`].
pub fn can_move_to_lane(
    player: &Player,
    target: usize,
    lanes: &Lanes,
    obstacles: &[Obstacle],
) -> bool {
    let target_rect = player.rect_in_lane(target, lanes);
    for obstacle in obstacles {
        let rect = obstacle.rect();
        if target_rect.overlaps(&rect) {
            return false;
        }
        if target_rect.overlaps(&rect.inflate(0, PROXIMITY_MARGIN)) {
            return false;
        }
    }
    true
}

/// Neighbouring lane on `side`, or None at the road edge
pub fn neighbour_lane(lane: usize, side: Side, lanes: &Lanes) -> Option<usize> {
    match side {
        Side::Left => lane.checked_sub(1),
        Side::Right if lane < lanes.last() => Some(lane + 1),
        Side::Right => None,
    }
}

/// Change lane if the neighbouring lane exists and is clear
///
/// Returns whether the move was committed; on rejection the player is
/// untouched.
pub fn try_change_lane(
    player: &mut Player,
    side: Side,
    lanes: &Lanes,
    obstacles: &[Obstacle],
) -> bool {
    let Some(target) = neighbour_lane(player.lane, side, lanes) else {
        return false;
    };
    if !can_move_to_lane(player, target, lanes, obstacles) {
        log::debug!("Lane change {:?} blocked at lane {}", side, player.lane);
        return false;
    }
    player.lane = target;
    true
}

pub fn try_move_left(player: &mut Player, lanes: &Lanes, obstacles: &[Obstacle]) -> bool {
    try_change_lane(player, Side::Left, lanes, obstacles)
}

pub fn try_move_right(player: &mut Player, lanes: &Lanes, obstacles: &[Obstacle]) -> bool {
    try_change_lane(player, Side::Right, lanes, obstacles)
}

/// Step forward, then step back if that put the player inside an obstacle
///
/// Returns false if the move was reverted.
pub fn try_move_forward(player: &mut Player, lanes: &Lanes, obstacles: &[Obstacle]) -> bool {
    player.move_forward();
    if first_overlap(&player.rect(lanes), obstacles).is_some() {
        log::debug!("Forward move clipped an obstacle, backing off");
        player.move_backward();
        return false;
    }
    true
}

/// Step backward, then step forward if that put the player inside an obstacle
///
/// Returns false if the move was reverted.
pub fn try_move_backward(player: &mut Player, lanes: &Lanes, obstacles: &[Obstacle]) -> bool {
    player.move_backward();
    if first_overlap(&player.rect(lanes), obstacles).is_some() {
        log::debug!("Backward move clipped an obstacle, pulling forward");
        player.move_forward();
        return false;
    }
    true
}
