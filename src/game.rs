//! Game shell: owns the live round and everything that outlives it
//!
//! One frame is `frame(intents, dt)`: drain intents, tick the round, then
//! persist the high score if the round just ended.

use crate::highscores::HighScores;
use crate::sim::{GameEvent, GamePhase, Intent, RoundState, Track, apply_intent, tick};
use crate::snapshot::Snapshot;

/// Offset between consecutive round seeds
const SEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

pub struct Game {
    track: Track,
    round: RoundState,
    high_scores: HighScores,
    running: bool,
}

impl Game {
    pub fn new(track: Track, high_scores: HighScores, seed: u64) -> Self {
        log::info!("Round started with seed {}", seed);
        let round = RoundState::new(seed, &track);
        Self {
            track,
            round,
            high_scores,
            running: true,
        }
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Mutable access for frontends and tests that stage a layout directly
    pub fn round_mut(&mut self) -> &mut RoundState {
        &mut self.round
    }

    pub fn phase(&self) -> GamePhase {
        self.round.phase
    }

    pub fn score(&self) -> u64 {
        self.round.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_scores.best()
    }

    /// False once a quit intent has been handled
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handle one intent; returns whether it changed anything
    pub fn handle_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Quit => {
                log::info!("Quit requested");
                self.running = false;
                true
            }
            Intent::Reset if self.round.phase == GamePhase::GameOver => {
                self.reset();
                true
            }
            Intent::Reset => false,
            _ => apply_intent(&mut self.round, intent, &self.track),
        }
    }

    /// Advance the round and persist a new high score on game over
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let events = tick(&mut self.round, &self.track, dt);
        for event in &events {
            if let GameEvent::Crashed { score, .. } = event {
                log::info!("Game over! Final score: {}", score);
                self.high_scores.record(*score);
            }
        }
        events
    }

    /// One full frame: every pending intent, then one tick
    pub fn frame<I>(&mut self, intents: I, dt: f32) -> Vec<GameEvent>
    where
        I: IntoIterator<Item = Intent>,
    {
        for intent in intents {
            self.handle_intent(intent);
            if !self.running {
                return Vec::new();
            }
        }
        self.update(dt)
    }

    /// Throw the round away and start a new one
    pub fn reset(&mut self) {
        let seed = self.round.seed.wrapping_add(SEED_STEP);
        log::info!("Round started with seed {}", seed);
        self.round = RoundState::new(seed, &self.track);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.round, &self.track, self.high_scores.best())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;
    use glam::IVec2;

    fn game() -> Game {
        Game::new(Track::default(), HighScores::in_memory(5), 1)
    }

    fn crash(game: &mut Game, score: u64) {
        let lanes = game.track().lanes.clone();
        let round = game.round_mut();
        round.score = score;
        round.obstacles = vec![Obstacle::new(1, 1, 520.0, IVec2::new(52, 80), 0.0, &lanes)];
        game.update(0.01);
        assert_eq!(game.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_crash_records_high_score() {
        let mut g = game();
        crash(&mut g, 9);
        assert_eq!(g.high_score(), 9);
    }

    #[test]
    fn test_low_score_keeps_high_score() {
        let mut g = game();
        crash(&mut g, 2);
        assert_eq!(g.high_score(), 5);
    }

    #[test]
    fn test_reset_only_after_game_over() {
        let mut g = game();
        assert!(!g.handle_intent(Intent::Reset));

        crash(&mut g, 3);
        let old_seed = g.round().seed;
        assert!(g.handle_intent(Intent::Reset));
        assert_eq!(g.phase(), GamePhase::Playing);
        assert_eq!(g.score(), 0);
        assert!(g.round().obstacles.is_empty());
        assert_ne!(g.round().seed, old_seed);
    }

    #[test]
    fn test_quit_stops_frame() {
        let mut g = game();
        let events = g.frame([Intent::Quit, Intent::LaneLeft], 10.0);
        assert!(events.is_empty());
        assert!(!g.is_running());
        assert_eq!(g.round().player.lane, 1);
    }

    #[test]
    fn test_frame_applies_intents_before_tick() {
        let mut g = game();
        g.frame([Intent::LaneLeft, Intent::Forward], 1.0 / 60.0);
        assert_eq!(g.round().player.lane, 0);
        assert_eq!(g.round().player.y, 470.0);
        assert_eq!(g.round().time_ticks, 1);
    }

    #[test]
    fn test_snapshot() {
        let mut g = game();
        g.handle_intent(Intent::LaneRight);
        let snap = g.snapshot();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.high_score, 5);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.player.lane, 2);
        assert_eq!(snap.player.rect.x, 360);
        assert_eq!(snap.lane_separators, vec![166, 312]);
        assert!(serde_json::to_string(&snap).is_ok());
    }
}
