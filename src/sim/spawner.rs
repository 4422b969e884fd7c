//! Obstacle spawn cadence and speed

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::lanes::Lanes;
use super::obstacle::Obstacle;
use crate::tuning::{Difficulty, Tuning};

/// Accumulates frame time and releases one obstacle per interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    pub timer: f32,
    /// Recomputed from the live score every tick
    pub interval: f32,
}

impl Spawner {
    pub fn new(difficulty: &Difficulty) -> Self {
        Self {
            timer: 0.0,
            interval: difficulty.initial_spawn_interval,
        }
    }

    /// Advance the timer and return whether an obstacle is due
    pub fn step(&mut self, dt: f32, score: u64, difficulty: &Difficulty) -> bool {
        self.interval = difficulty.spawn_interval(score);
        self.timer += dt;
        if self.timer >= self.interval {
            self.timer = 0.0;
            true
        } else {
            false
        }
    }
}

/// Base speed scaled by a uniform jitter in `[jitter_min, jitter_min + jitter_span)`
pub fn roll_speed<R: Rng + ?Sized>(difficulty: &Difficulty, score: u64, rng: &mut R) -> f32 {
    let jitter = difficulty.jitter_min + rng.random::<f32>() * difficulty.jitter_span;
    difficulty.base_speed(score) * jitter
}

/// Roll a lane (any lane, the player's included) and a speed, then spawn
pub fn spawn_obstacle<R: Rng + ?Sized>(
    id: u32,
    score: u64,
    tuning: &Tuning,
    lanes: &Lanes,
    rng: &mut R,
) -> Obstacle {
    let lane = rng.random_range(0..lanes.count());
    let speed = roll_speed(&tuning.difficulty, score, rng);
    Obstacle::spawn(id, lane, speed, tuning, lanes, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Track;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawns_once_per_interval() {
        let d = Difficulty::default();
        let mut spawner = Spawner::new(&d);
        assert_eq!(spawner.interval, 1.25);

        let mut spawned = 0;
        // 0.1s frames at score 0 (interval 1.2): due on the 12th frame
        for frame in 1..=12 {
            if spawner.step(0.1, 0, &d) {
                spawned += 1;
                assert_eq!(frame, 12);
            }
        }
        assert_eq!(spawned, 1);
        assert_eq!(spawner.timer, 0.0);
        assert!((spawner.interval - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_interval_tracks_score() {
        let d = Difficulty::default();
        let mut spawner = Spawner::new(&d);
        spawner.step(0.01, 40, &d);
        assert!((spawner.interval - 0.45).abs() < 1e-5);
        spawner.step(0.01, 1000, &d);
        assert_eq!(spawner.interval, d.spawn_interval_floor);
    }

    #[test]
    fn test_speed_jitter_range() {
        let d = Difficulty::default();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..1000 {
            let speed = roll_speed(&d, 40, &mut rng);
            assert!(speed >= 390.0 * 0.9 - 1e-3);
            assert!(speed < 390.0 * 1.4);
        }
    }

    #[test]
    fn test_every_lane_eligible() {
        let track = Track::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut seen = [false; 3];
        for id in 0..200 {
            let o = spawn_obstacle(id, 0, &track.tuning, &track.lanes, &mut rng);
            seen[o.lane] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_seeded_spawns_repeat() {
        let track = Track::default();
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for id in 0..20 {
            let oa = spawn_obstacle(id, id as u64, &track.tuning, &track.lanes, &mut a);
            let ob = spawn_obstacle(id, id as u64, &track.tuning, &track.lanes, &mut b);
            assert_eq!(oa, ob);
        }
    }
}
