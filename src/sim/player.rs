//! The player ship: thrust, turning, friction, shield and hull geometry

use glam::Vec2;

use super::motion::{Arena, Body};
use crate::tuning::Tuning;
use crate::{Rgb, heading_vec, normalize_degrees};

/// Turn input direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// Thrust input direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thrust {
    Forward,
    Backward,
}

/// Ship bounding box edge length (pixels)
pub const PLAYER_SIZE: f32 = 32.0;

/// The player ship
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// Facing direction in degrees, normalized to [0, 360)
    pub heading: f32,
    /// Shield seconds remaining, floored at zero
    pub shield_time: f32,
    /// Hull vertices from the last [`Player::update_hull`] call; also the
    /// collision probe points against asteroids
    pub hull: [Vec2; 3],
}

impl Player {
    pub const COLOR: Rgb = Rgb::new(113, 141, 48);
    pub const SHIELD_COLOR: Rgb = Rgb::new(41, 168, 255);

    pub fn new() -> Self {
        let mut player = Self {
            body: Body::new(Vec2::ZERO, Vec2::splat(PLAYER_SIZE)),
            heading: 0.0,
            shield_time: 0.0,
            hull: [Vec2::ZERO; 3],
        };
        player.update_hull();
        player
    }

    /// Recenter with zero velocity and heading and a fresh shield
    pub fn reset(&mut self, arena: &Arena, tuning: &Tuning) {
        self.body.pos = arena.center() - self.body.size / 2.0;
        self.body.vel = Vec2::ZERO;
        self.heading = 0.0;
        self.shield_time = tuning.shield_time;
        self.update_hull();
    }

    /// Rotate the ship by its angular speed
    pub fn turn(&mut self, dt: f32, dir: Turn, tuning: &Tuning) {
        let delta = tuning.angular_speed * dt;
        self.heading = normalize_degrees(match dir {
            Turn::Left => self.heading - delta,
            Turn::Right => self.heading + delta,
        });
    }

    /// Apply thrust along the current heading
    pub fn accelerate(&mut self, dt: f32, dir: Thrust, tuning: &Tuning) {
        let thrust = heading_vec(self.heading) * tuning.acceleration * dt;
        match dir {
            Thrust::Forward => self.body.vel += thrust,
            Thrust::Backward => self.body.vel -= thrust,
        }
    }

    /// Move with wrap, then decelerate along the velocity direction
    ///
    /// Friction opposes the velocity vector, not the heading, and each
    /// component clamps at zero rather than overshooting into reverse.
    pub fn step(&mut self, dt: f32, arena: &Arena, tuning: &Tuning) {
        self.body.step(dt, arena);
        let vel = self.body.vel;
        if vel == Vec2::ZERO {
            return;
        }
        let fric = vel.normalize() * tuning.friction * dt;
        self.body.vel.x = if vel.x.abs() <= fric.x.abs() {
            0.0
        } else {
            vel.x - fric.x
        };
        self.body.vel.y = if vel.y.abs() <= fric.y.abs() {
            0.0
        } else {
            vel.y - fric.y
        };
    }

    pub fn activate_shield(&mut self, tuning: &Tuning) {
        self.shield_time = tuning.shield_time;
    }

    pub fn has_shield(&self) -> bool {
        self.shield_time > 0.0
    }

    /// Count the shield down, floored at zero
    pub fn decrease_time(&mut self, dt: f32) {
        self.shield_time = (self.shield_time - dt).max(0.0);
    }

    /// Recompute the hull triangle from the current center and heading
    ///
    /// Nose along the heading, wings mirrored through the center at
    /// heading ± 30 degrees.
    pub fn update_hull(&mut self) {
        let mid = self.body.center();
        let radius = self.body.size.x / 2.0;
        self.hull = [
            mid + radius * heading_vec(self.heading),
            mid - radius * heading_vec(self.heading + 30.0),
            mid - radius * heading_vec(self.heading - 30.0),
        ];
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arena() -> Arena {
        Arena::new(800.0, 600.0)
    }

    #[test]
    fn test_turn_normalizes_heading() {
        let tuning = Tuning::default();
        let mut player = Player::new();
        player.turn(0.5, Turn::Left, &tuning); // -180
        assert_eq!(player.heading, 180.0);
        player.turn(1.0, Turn::Right, &tuning); // +360
        assert_eq!(player.heading, 180.0);
    }

    #[test]
    fn test_accelerate_along_heading() {
        let tuning = Tuning::default();
        let mut player = Player::new();
        player.heading = 90.0;
        player.accelerate(0.1, Thrust::Forward, &tuning);
        assert!(player.body.vel.x.abs() < 1e-3);
        assert!((player.body.vel.y - 64.0).abs() < 1e-3);
        player.accelerate(0.1, Thrust::Backward, &tuning);
        assert!(player.body.vel.length() < 1e-3);
    }

    #[test]
    fn test_friction_stops_at_exactly_zero() {
        let tuning = Tuning::default();
        let mut player = Player::new();
        player.body.pos = Vec2::new(400.0, 300.0);
        player.body.vel = Vec2::new(30.0, -10.0);
        for _ in 0..200 {
            player.step(1.0 / 144.0, &arena(), &tuning);
        }
        assert_eq!(player.body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_shield_counts_down_and_floors() {
        let tuning = Tuning::default();
        let mut player = Player::new();
        player.activate_shield(&tuning);
        assert!(player.has_shield());
        player.decrease_time(2.0);
        assert!(player.has_shield());
        player.decrease_time(2.0);
        assert_eq!(player.shield_time, 0.0);
        assert!(!player.has_shield());
    }

    #[test]
    fn test_hull_nose_points_along_heading() {
        let mut player = Player::new();
        player.body.pos = Vec2::new(100.0, 100.0);
        player.heading = 0.0;
        player.update_hull();
        let center = player.body.center();
        assert!((player.hull[0] - (center + Vec2::new(16.0, 0.0))).length() < 1e-4);
        // Wings sit behind the center
        assert!(player.hull[1].x < center.x);
        assert!(player.hull[2].x < center.x);
    }

    #[test]
    fn test_reset_recenters_with_shield() {
        let tuning = Tuning::default();
        let mut player = Player::new();
        player.body.vel = Vec2::new(100.0, 100.0);
        player.heading = 123.0;
        player.reset(&arena(), &tuning);
        assert_eq!(player.body.center(), Vec2::new(400.0, 300.0));
        assert_eq!(player.body.vel, Vec2::ZERO);
        assert_eq!(player.heading, 0.0);
        assert!(player.has_shield());
    }

    proptest! {
        /// With no thrust, repeated steps strictly shrink speed until it
        /// reaches exactly zero, never flipping sign.
        #[test]
        fn prop_friction_is_monotonic(
            vx in -400.0f32..400.0,
            vy in -400.0f32..400.0,
        ) {
            let tuning = Tuning::default();
            let arena = arena();
            let mut player = Player::new();
            player.body.pos = Vec2::new(400.0, 300.0);
            player.body.vel = Vec2::new(vx, vy);
            let mut last_speed = player.body.vel.length();
            for _ in 0..400 {
                let sign_before = (player.body.vel.x.signum(), player.body.vel.y.signum());
                player.step(1.0 / 144.0, &arena, &tuning);
                let speed = player.body.vel.length();
                prop_assert!(speed <= last_speed);
                if player.body.vel.x != 0.0 {
                    prop_assert_eq!(player.body.vel.x.signum(), sign_before.0);
                }
                if player.body.vel.y != 0.0 {
                    prop_assert_eq!(player.body.vel.y.signum(), sign_before.1);
                }
                last_speed = speed;
                if speed == 0.0 {
                    break;
                }
            }
            prop_assert_eq!(player.body.vel, Vec2::ZERO);
        }
    }
}
