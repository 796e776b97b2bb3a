//! Shared motion model: position/velocity integration with screen wrap
//!
//! Every movable object embeds a [`Body`]. Wrapping teleports the body to
//! the opposite edge once its bounds fully leave the arena on an axis; it
//! never reflects and never touches velocity.

use glam::Vec2;

/// Arena bounds, fixed for the session and passed into the motion model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the arena
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Position, velocity and bounding size shared by all movable entities
///
/// `pos` is the top-left corner of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    /// Center of the bounding box
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Integrate one timestep and wrap around the arena edges
    ///
    /// An entity that fully exits on one side reappears just off-screen on
    /// the opposite side, offset by its own size so it slides in rather
    /// than popping in clipped.
    pub fn step(&mut self, dt: f32, arena: &Arena) {
        self.pos += self.vel * dt;
        if self.pos.x > arena.width {
            self.pos.x = -self.size.x;
        } else if self.pos.x + self.size.x < 0.0 {
            self.pos.x = arena.width;
        }
        if self.pos.y > arena.height {
            self.pos.y = -self.size.y;
        } else if self.pos.y + self.size.y < 0.0 {
            self.pos.y = arena.height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_step_integrates_velocity() {
        let arena = Arena::new(800.0, 600.0);
        let mut body = Body::new(Vec2::new(100.0, 100.0), Vec2::splat(32.0));
        body.vel = Vec2::new(50.0, -20.0);
        body.step(0.5, &arena);
        assert_eq!(body.pos, Vec2::new(125.0, 90.0));
        assert_eq!(body.vel, Vec2::new(50.0, -20.0));
    }

    #[test]
    fn test_wrap_right_to_left() {
        let arena = Arena::new(800.0, 600.0);
        let mut body = Body::new(Vec2::new(799.0, 100.0), Vec2::splat(32.0));
        body.vel = Vec2::new(100.0, 0.0);
        body.step(0.1, &arena);
        // Reappears just off the left edge
        assert_eq!(body.pos.x, -32.0);
    }

    #[test]
    fn test_wrap_left_to_right() {
        let arena = Arena::new(800.0, 600.0);
        let mut body = Body::new(Vec2::new(-31.0, 100.0), Vec2::splat(32.0));
        body.vel = Vec2::new(-100.0, 0.0);
        body.step(0.1, &arena);
        assert_eq!(body.pos.x, 800.0);
    }

    #[test]
    fn test_wrap_vertical() {
        let arena = Arena::new(800.0, 600.0);
        let mut body = Body::new(Vec2::new(100.0, 599.5), Vec2::splat(8.0));
        body.vel = Vec2::new(0.0, 50.0);
        body.step(0.1, &arena);
        assert_eq!(body.pos.y, -8.0);

        body.pos = Vec2::new(100.0, -8.5);
        body.vel = Vec2::new(0.0, -50.0);
        body.step(0.1, &arena);
        assert_eq!(body.pos.y, 600.0);
    }

    #[test]
    fn test_no_wrap_inside_bounds() {
        let arena = Arena::new(800.0, 600.0);
        let mut body = Body::new(Vec2::new(400.0, 300.0), Vec2::splat(32.0));
        body.vel = Vec2::new(10.0, 10.0);
        body.step(1.0, &arena);
        assert_eq!(body.pos, Vec2::new(410.0, 310.0));
    }

    proptest! {
        /// After a step from an in-bounds position with bounded velocity the
        /// body stays within [-size, extent] on both axes.
        #[test]
        fn prop_wrap_keeps_body_near_arena(
            x in 0.0f32..800.0,
            y in 0.0f32..600.0,
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            size in 1.0f32..128.0,
        ) {
            let arena = Arena::new(800.0, 600.0);
            let mut body = Body::new(Vec2::new(x, y), Vec2::splat(size));
            body.vel = Vec2::new(vx, vy);
            body.step(1.0 / 144.0, &arena);
            prop_assert!(body.pos.x >= -size && body.pos.x <= arena.width);
            prop_assert!(body.pos.y >= -size && body.pos.y <= arena.height);
        }
    }
}
