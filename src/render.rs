//! Draw-ordered scene snapshots for an external renderer
//!
//! The simulation never draws; it builds a [`Scene`] each tick and hands
//! it across the [`Renderer`] boundary. Field order is draw order.

use glam::Vec2;
use thiserror::Error;

use crate::Rgb;
use crate::sim::{Asteroid, Bullet, GamePhase, GameState, Particle, Player};

/// Background fill color
pub const BACKGROUND_COLOR: Rgb = Rgb::new(23, 12, 26);
/// HUD text color
pub const HUD_COLOR: Rgb = Rgb::new(178, 163, 255);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render backend failed: {0}")]
    Backend(String),
}

/// An axis-aligned filled square (stars, bullets, explosion fragments)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub color: Rgb,
}

/// A filled polygon with world-space vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
    pub color: Rgb,
}

/// The player ship as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    pub hull: [Vec2; 3],
    pub color: Rgb,
    /// Shield seconds remaining; zero means no shield ring
    pub shield_time: f32,
    pub shield_color: Rgb,
}

/// On-screen status text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hud {
    Playing { score: u32, lives: u32, level: u32 },
    Paused { score: u32, lives: u32, level: u32 },
    GameOver { score: u32, level: u32 },
}

/// Everything drawn for one frame, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Rgb,
    pub stars: Vec<Square>,
    pub bullets: Vec<Square>,
    pub asteroids: Vec<Polygon>,
    /// Absent once the run has ended
    pub ship: Option<Ship>,
    pub particles: Vec<Square>,
    pub hud: Hud,
    pub hud_color: Rgb,
}

fn square(particle: &Particle) -> Square {
    Square {
        pos: particle.body.pos,
        size: particle.body.size.x,
        color: particle.color,
    }
}

/// Snapshot the game state into a draw-ordered scene
pub fn build_scene(state: &GameState) -> Scene {
    let ship = (state.phase != GamePhase::GameOver).then(|| Ship {
        hull: state.player.hull,
        color: Player::COLOR,
        shield_time: state.player.shield_time,
        shield_color: Player::SHIELD_COLOR,
    });
    let hud = match state.phase {
        GamePhase::Active => Hud::Playing {
            score: state.score,
            lives: state.lives,
            level: state.level,
        },
        GamePhase::Paused => Hud::Paused {
            score: state.score,
            lives: state.lives,
            level: state.level,
        },
        GamePhase::GameOver => Hud::GameOver {
            score: state.score,
            level: state.level,
        },
    };
    Scene {
        background: BACKGROUND_COLOR,
        stars: state.stars.iter().map(square).collect(),
        bullets: state
            .bullets
            .iter()
            .map(|b| Square {
                pos: b.body.pos,
                size: b.body.size.x,
                color: Bullet::COLOR,
            })
            .collect(),
        asteroids: state
            .asteroids
            .iter()
            .map(|a| Polygon {
                vertices: a.world_shape(),
                color: Asteroid::COLOR,
            })
            .collect(),
        ship,
        particles: state.particles.iter().map(square).collect(),
        hud,
        hud_color: HUD_COLOR,
    }
}

/// Renderer boundary; failure here aborts the game loop
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> Result<(), RenderError>;
}

/// Renderer that draws nothing, for headless runs and tests
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _scene: &Scene) -> Result<(), RenderError> {
        Ok(())
    }
}
