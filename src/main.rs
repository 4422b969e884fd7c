//! Lane Dodger entry point
//!
//! Native builds have no window yet, so the binary runs headless rounds
//! driven by the idle-mode autopilot and logs how they went.
//!
//! Usage: `lane-dodger [settings.json]`

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use lane_dodger::sim::{GamePhase, Track, idle_intent};
use lane_dodger::{Game, HighScores, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Lane Dodger (native) starting...");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Settings::FILE_NAME.to_string());
    let settings = match Settings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let track = match Track::new(settings.tuning.clone()) {
        Ok(track) => track,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let seed = settings.seed.unwrap_or_else(clock_seed);
    let high_scores = HighScores::load(&settings.high_score_file);
    let mut game = Game::new(track, high_scores, seed);

    run_demo(&mut game, &settings);

    log::info!("High score: {}", game.high_score());
    ExitCode::SUCCESS
}

/// Play `demo_rounds` rounds with the autopilot at a fixed frame step
fn run_demo(game: &mut Game, settings: &Settings) {
    let dt = settings.frame_dt();
    let max_frames = (settings.max_round_seconds * settings.frame_rate as f32) as u64;

    for round in 1..=settings.demo_rounds {
        let mut frames = 0;
        while game.phase() == GamePhase::Playing && frames < max_frames {
            let intent = idle_intent(game.round(), game.track());
            game.frame(intent, dt);
            frames += 1;
        }

        let seconds = frames as f32 * dt;
        match game.phase() {
            GamePhase::GameOver => log::info!(
                "Round {}: crashed after {:.1}s with score {}",
                round,
                seconds,
                game.score()
            ),
            GamePhase::Playing => log::info!(
                "Round {}: survived {:.1}s with score {}",
                round,
                seconds,
                game.score()
            ),
        }
        if let Ok(json) = serde_json::to_string(&game.snapshot()) {
            log::debug!("Final frame: {}", json);
        }

        game.reset();
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
