//! Asteroids: three size tiers, procedural polygon shapes, splitting

use glam::Vec2;
use rand::Rng;

use super::motion::{Arena, Body};
use crate::tuning::Tuning;
use crate::{Rgb, heading_vec};

/// Asteroid size tier, also the bounding box edge length in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Large,
    Medium,
    Small,
}

impl SizeTier {
    /// Bounding box edge length (pixels)
    pub fn length(self) -> f32 {
        match self {
            SizeTier::Large => 128.0,
            SizeTier::Medium => 64.0,
            SizeTier::Small => 32.0,
        }
    }

    /// Score awarded for destroying this tier (smaller is worth more)
    pub fn points(self) -> u32 {
        (2.0 * SizeTier::Large.length() / self.length()) as u32
    }

    /// The next tier down, or `None` for the smallest
    pub fn smaller(self) -> Option<SizeTier> {
        match self {
            SizeTier::Large => Some(SizeTier::Medium),
            SizeTier::Medium => Some(SizeTier::Small),
            SizeTier::Small => None,
        }
    }
}

/// A drifting asteroid
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub body: Body,
    pub tier: SizeTier,
    /// Travel direction in degrees
    pub heading: f32,
    /// Closed polygon outline, vertex offsets from the body center
    pub shape: Vec<Vec2>,
}

impl Asteroid {
    pub const COLOR: Rgb = Rgb::new(110, 55, 32);

    /// Spawn a fresh large asteroid at a random position with a random
    /// heading and speed
    pub fn random<R: Rng>(rng: &mut R, arena: &Arena, tuning: &Tuning) -> Self {
        let tier = SizeTier::Large;
        let pos = Vec2::new(
            rng.random_range(0.0..arena.width),
            rng.random_range(0.0..arena.height),
        );
        let heading = rng.random_range(0.0..360.0);
        let speed = rng.random_range(tuning.asteroid_min_speed..tuning.asteroid_max_speed);
        Self::with_motion(rng, tier, pos, heading, speed)
    }

    /// Spawn one child of a destroyed asteroid, one tier down, centered on
    /// the parent and deflected from the parent's heading
    ///
    /// Returns `None` for a [`SizeTier::Small`] parent, which shatters
    /// without children.
    pub fn split_from<R: Rng>(rng: &mut R, parent: &Asteroid, tuning: &Tuning) -> Option<Self> {
        let tier = parent.tier.smaller()?;
        let pos = parent.body.center() - Vec2::splat(tier.length() / 2.0);
        let heading = parent.heading
            + rng.random_range(-tuning.split_direction_offset..tuning.split_direction_offset);
        let speed = parent.body.vel.length();
        Some(Self::with_motion(rng, tier, pos, heading, speed))
    }

    fn with_motion<R: Rng>(rng: &mut R, tier: SizeTier, pos: Vec2, heading: f32, speed: f32) -> Self {
        let mut body = Body::new(pos, Vec2::splat(tier.length()));
        body.vel = heading_vec(heading) * speed;
        Self {
            body,
            tier,
            heading,
            shape: Self::random_shape(rng, tier),
        }
    }

    /// Generate the polygon outline: 16 to 31 vertices at equal angular
    /// steps, radius jittered around half the tier length
    fn random_shape<R: Rng>(rng: &mut R, tier: SizeTier) -> Vec<Vec2> {
        let count = rng.random_range(16..32);
        let jitter = tier.length() / 16.0;
        let base = tier.length() / 2.0;
        (0..count)
            .map(|i| {
                let angle = 360.0 * i as f32 / count as f32;
                let radius = base + rng.random_range(-jitter..jitter);
                heading_vec(angle) * radius
            })
            .collect()
    }

    /// Hit test against the bounding circle
    ///
    /// The polygon is close enough to a circle that the approximation is
    /// not noticeable in play.
    pub fn contains(&self, point: Vec2) -> bool {
        self.body.center().distance(point) <= self.tier.length() / 2.0
    }

    pub fn step(&mut self, dt: f32, arena: &Arena) {
        self.body.step(dt, arena);
    }

    /// Polygon vertices in world space
    pub fn world_shape(&self) -> Vec<Vec2> {
        let center = self.body.center();
        self.shape.iter().map(|v| center + *v).collect()
    }
}
