//! Bullets fired from the player's nose

use glam::Vec2;

use super::motion::{Arena, Body};
use super::player::Player;
use crate::tuning::Tuning;
use crate::{Rgb, heading_vec};

/// Bullet bounding box edge length (pixels)
pub const BULLET_SIZE: f32 = 8.0;

/// A short-lived projectile
#[derive(Debug, Clone)]
pub struct Bullet {
    pub body: Body,
    /// Seconds of flight remaining
    pub lifetime: f32,
}

impl Bullet {
    pub const COLOR: Rgb = Rgb::new(41, 168, 255);

    /// Fire from the player's center along its heading
    ///
    /// Muzzle speed is added to the ship's own velocity so bullets inherit
    /// momentum.
    pub fn fired_by(player: &Player, tuning: &Tuning) -> Self {
        let mut body = Body::new(
            player.body.center() - Vec2::splat(BULLET_SIZE / 2.0),
            Vec2::splat(BULLET_SIZE),
        );
        body.vel = player.body.vel + heading_vec(player.heading) * tuning.bullet_speed;
        Self {
            body,
            lifetime: tuning.bullet_lifetime,
        }
    }

    pub fn step(&mut self, dt: f32, arena: &Arena) {
        self.body.step(dt, arena);
    }

    pub fn decrease_time(&mut self, dt: f32) {
        self.lifetime -= dt;
    }

    pub fn has_time(&self) -> bool {
        self.lifetime > 0.0
    }
}
