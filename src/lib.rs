//! Polyroids - a screen-wrap asteroids arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, actors, collisions, game state)
//! - `runner`: Fixed-timestep simulation thread with catch-up
//! - `render`: Draw-ordered scene snapshots for an external renderer
//! - `audio`: Fire-and-forget sound cues for an external audio backend
//! - `input`: Thread-shared input intents
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod input;
pub mod render;
pub mod runner;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target simulation rate (ticks per second)
    pub const SIM_HZ: u32 = 144;
    /// Catch-up updates allowed per real frame before backlog is dropped
    pub const MAX_FRAME_SKIPS: u32 = 12;
    /// Consecutive sleepless frames before yielding the processor
    pub const MAX_TICKS_WITHOUT_SLEEP: u32 = 16;

    /// Default arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;
}

/// An RGB color handed through to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(mut angle: f32) -> f32 {
    angle %= 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}

/// Unit vector pointing along a heading given in degrees
#[inline]
pub fn heading_vec(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }

    #[test]
    fn test_heading_vec_axes() {
        assert!((heading_vec(0.0) - Vec2::X).length() < 1e-6);
        assert!((heading_vec(90.0) - Vec2::Y).length() < 1e-6);
        assert!((heading_vec(180.0) + Vec2::X).length() < 1e-6);
    }
}
