//! Thread-shared input intents
//!
//! The platform layer writes intents from whatever raw events it gets;
//! the simulation thread snapshots them once per tick. Movement and fire
//! are levels (held or not), pause and quit are edges consumed on read.

use std::sync::atomic::{AtomicBool, Ordering};

/// Shared input flags, written by the platform and read by the runner
///
/// Plain last-write-wins atomics; the intents are leveled so relaxed
/// ordering is enough.
#[derive(Debug, Default)]
pub struct InputState {
    left: AtomicBool,
    right: AtomicBool,
    forward: AtomicBool,
    backward: AtomicBool,
    fire: AtomicBool,
    pause: AtomicBool,
    quit: AtomicBool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_left(&self, held: bool) {
        self.left.store(held, Ordering::Relaxed);
    }

    pub fn set_right(&self, held: bool) {
        self.right.store(held, Ordering::Relaxed);
    }

    pub fn set_forward(&self, held: bool) {
        self.forward.store(held, Ordering::Relaxed);
    }

    pub fn set_backward(&self, held: bool) {
        self.backward.store(held, Ordering::Relaxed);
    }

    pub fn set_fire(&self, held: bool) {
        self.fire.store(held, Ordering::Relaxed);
    }

    /// Request a pause toggle; consumed by the next snapshot
    pub fn toggle_pause(&self) {
        self.pause.store(true, Ordering::Relaxed);
    }

    /// Request shutdown; consumed by the runner
    pub fn request_quit(&self) {
        self.quit.store(true, Ordering::Relaxed);
    }

    /// Consume the quit edge
    pub fn take_quit(&self) -> bool {
        self.quit.swap(false, Ordering::Relaxed)
    }

    /// Sample the levels and consume the pause edge
    pub fn snapshot(&self) -> crate::sim::TickInput {
        crate::sim::TickInput {
            left: self.left.load(Ordering::Relaxed),
            right: self.right.load(Ordering::Relaxed),
            forward: self.forward.load(Ordering::Relaxed),
            backward: self.backward.load(Ordering::Relaxed),
            fire: self.fire.load(Ordering::Relaxed),
            pause: self.pause.swap(false, Ordering::Relaxed),
        }
    }
}
