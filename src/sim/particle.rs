//! Particles: background stars and explosion fragments

use glam::Vec2;
use rand::Rng;

use super::motion::{Arena, Body};
use crate::Rgb;

/// A drifting square particle
///
/// Stars have no lifetime and drift for the whole session; explosion
/// fragments expire within a second.
#[derive(Debug, Clone)]
pub struct Particle {
    pub body: Body,
    pub color: Rgb,
    /// Seconds remaining, `None` for immortal particles
    pub lifetime: Option<f32>,
}

impl Particle {
    pub const STAR_COLOR: Rgb = Rgb::new(54, 27, 68);

    /// A background star at a random position
    ///
    /// A single random scale drives both size and drift speed, so distant
    /// stars are small and slow.
    pub fn star<R: Rng>(rng: &mut R, arena: &Arena) -> Self {
        let scale: f32 = rng.random();
        let pos = Vec2::new(
            rng.random_range(0.0..arena.width),
            rng.random_range(0.0..arena.height),
        );
        let mut body = Body::new(pos, Vec2::splat(scale * 3.0));
        body.vel = Vec2::new(scale * 50.0, scale * 25.0);
        Self {
            body,
            color: Self::STAR_COLOR,
            lifetime: None,
        }
    }

    /// One explosion fragment scattered from a point
    pub fn explosion<R: Rng>(rng: &mut R, pos: Vec2, color: Rgb) -> Self {
        let mut body = Body::new(pos, Vec2::ONE);
        body.vel = Vec2::new(
            rng.random_range(-128.0..128.0),
            rng.random_range(-128.0..128.0),
        );
        Self {
            body,
            color,
            lifetime: Some(rng.random()),
        }
    }

    pub fn step(&mut self, dt: f32, arena: &Arena) {
        self.body.step(dt, arena);
    }

    pub fn decrease_time(&mut self, dt: f32) {
        if let Some(t) = &mut self.lifetime {
            *t -= dt;
        }
    }

    /// False once an expiring particle has run out
    pub fn has_time(&self) -> bool {
        self.lifetime.is_none_or(|t| t > 0.0)
    }
}
