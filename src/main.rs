//! Native entry point: runs a short headless session
//!
//! There is no renderer backend wired up yet, so the binary drives the
//! full simulation loop against the null collaborators for a few seconds
//! and exits. Useful as a smoke test and a pacing check under `RUST_LOG`.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use polyroids::Tuning;
use polyroids::audio::NullAudio;
use polyroids::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use polyroids::input::InputState;
use polyroids::render::NullRenderer;
use polyroids::runner::{LoopConfig, spawn_loop};
use polyroids::sim::{Arena, GameState};

const SMOKE_RUN: Duration = Duration::from_secs(3);

fn main() {
    env_logger::init();

    let tuning = Tuning::load(std::path::Path::new("tuning.json"));
    let seed: u64 = rand::random();
    log::info!("session seed {seed}");

    let state = GameState::new(seed, Arena::new(ARENA_WIDTH, ARENA_HEIGHT), tuning);
    let input = Arc::new(InputState::new());
    let handle = spawn_loop(
        state,
        Arc::clone(&input),
        NullRenderer,
        NullAudio,
        LoopConfig::default(),
    );

    thread::sleep(SMOKE_RUN);
    input.request_quit();

    match handle.join() {
        Ok(Ok(())) => log::info!("clean shutdown"),
        Ok(Err(err)) => {
            log::error!("simulation loop failed: {err}");
            std::process::exit(1);
        }
        Err(_) => {
            log::error!("simulation thread panicked");
            std::process::exit(1);
        }
    }
}
