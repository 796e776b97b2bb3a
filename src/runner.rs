//! Fixed-timestep simulation loop
//!
//! Runs the simulation at a fixed rate on its own thread: tick, render,
//! dispatch audio, then sleep out the rest of the period. Sleep jitter is
//! measured and paid back the next frame. When ticks overrun, the overrun
//! accumulates and is worked off with extra render-free ticks, bounded per
//! frame; any backlog still left after the bound is dropped so the game
//! slows down instead of spiraling.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::audio::AudioSink;
use crate::consts::{MAX_FRAME_SKIPS, MAX_TICKS_WITHOUT_SLEEP, SIM_HZ};
use crate::input::InputState;
use crate::render::{RenderError, Renderer, build_scene};
use crate::sim::{GameState, tick};

#[derive(Debug, Error)]
pub enum LoopError {
    #[error("renderer failed: {0}")]
    Render(#[from] RenderError),
}

/// Loop pacing knobs; the defaults come from the crate constants
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    /// Target simulation rate (ticks per second)
    pub sim_hz: u32,
    /// Catch-up ticks allowed per real frame before backlog is dropped
    pub max_catch_up_ticks: u32,
    /// Consecutive sleepless frames before yielding the processor
    pub max_frames_without_sleep: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            sim_hz: SIM_HZ,
            max_catch_up_ticks: MAX_FRAME_SKIPS,
            max_frames_without_sleep: MAX_TICKS_WITHOUT_SLEEP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CatchUpPlan {
    ticks: u32,
    remaining: Duration,
    dropped: Duration,
}

/// Decide how many render-free ticks to run against an accumulated
/// overrun
///
/// At most `max_ticks` are planned; a backlog still worth a full period
/// beyond that is dropped rather than carried, so a long stall slows the
/// game down instead of fast-forwarding it later.
fn plan_catch_up(mut backlog: Duration, period: Duration, max_ticks: u32) -> CatchUpPlan {
    let mut ticks = 0u32;
    while backlog >= period && ticks < max_ticks {
        backlog -= period;
        ticks += 1;
    }
    if backlog >= period {
        CatchUpPlan {
            ticks,
            remaining: Duration::ZERO,
            dropped: backlog,
        }
    } else {
        CatchUpPlan {
            ticks,
            remaining: backlog,
            dropped: Duration::ZERO,
        }
    }
}

/// Drive the simulation until quit is requested or the renderer fails
pub fn run_loop<R, A>(
    state: &mut GameState,
    input: &InputState,
    renderer: &mut R,
    audio: &mut A,
    config: &LoopConfig,
) -> Result<(), LoopError>
where
    R: Renderer,
    A: AudioSink,
{
    let period = Duration::from_secs_f64(1.0 / config.sim_hz.max(1) as f64);
    let dt = period.as_secs_f32();
    log::info!(
        "simulation loop at {} Hz, catch-up bound {}",
        config.sim_hz,
        config.max_catch_up_ticks
    );

    let mut before = Instant::now();
    let mut oversleep = Duration::ZERO;
    let mut backlog = Duration::ZERO;
    let mut sleepless_frames = 0u32;

    loop {
        if input.take_quit() {
            log::info!("quit requested, stopping simulation loop");
            return Ok(());
        }

        let snapshot = input.snapshot();
        tick(state, &snapshot, dt);
        renderer.render(&build_scene(state))?;
        for event in state.drain_events() {
            audio.play(event.into());
        }

        let after = Instant::now();
        let work = after.saturating_duration_since(before);
        if work + oversleep < period {
            let nap = period - work - oversleep;
            thread::sleep(nap);
            let woke = Instant::now();
            // Sleep usually runs long; charge the difference to next frame
            oversleep = woke.saturating_duration_since(after).saturating_sub(nap);
            before = woke;
            sleepless_frames = 0;
        } else {
            backlog += (work + oversleep).saturating_sub(period);
            oversleep = Duration::ZERO;
            before = after;
            sleepless_frames += 1;
            if sleepless_frames >= config.max_frames_without_sleep {
                thread::yield_now();
                sleepless_frames = 0;
                before = Instant::now();
            }
        }

        let plan = plan_catch_up(backlog, period, config.max_catch_up_ticks);
        backlog = plan.remaining;
        for _ in 0..plan.ticks {
            let snapshot = input.snapshot();
            tick(state, &snapshot, dt);
        }
        if plan.dropped > Duration::ZERO {
            log::warn!(
                "dropped {} ms of simulation backlog after {} catch-up ticks",
                plan.dropped.as_millis(),
                plan.ticks
            );
        }
    }
}

/// Run the loop on a dedicated thread
pub fn spawn_loop<R, A>(
    mut state: GameState,
    input: Arc<InputState>,
    mut renderer: R,
    mut audio: A,
    config: LoopConfig,
) -> thread::JoinHandle<Result<(), LoopError>>
where
    R: Renderer + Send + 'static,
    A: AudioSink + Send + 'static,
{
    thread::spawn(move || run_loop(&mut state, &input, &mut renderer, &mut audio, &config))
}
