//! Game state: phase, score, collections, spawning

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::asteroid::Asteroid;
use super::bullet::Bullet;
use super::motion::Arena;
use super::particle::Particle;
use super::player::Player;
use crate::Rgb;
use crate::tuning::Tuning;
use glam::Vec2;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Active,
    /// Simulation frozen, toggled by the pause intent
    Paused,
    /// Run ended; ambient entities keep drifting until restart
    GameOver,
}

/// Something audible happened this tick
///
/// Accumulated during the tick and drained by the runner, so audio
/// dispatch never happens mid-simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    AsteroidDestroyed,
    LaserFired,
    PlayerCollision,
    /// Start (or restart) the background music loop
    Music,
}

/// Complete game state, owned by the simulation thread
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub arena: Arena,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    /// 1-based level counter
    pub level: u32,
    pub player: Player,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    /// Explosion fragments
    pub particles: Vec<Particle>,
    /// Background stars, drawn behind everything else
    pub stars: Vec<Particle>,
    /// Seconds until the next bullet may fire while the trigger is held
    pub fire_cooldown: f32,
    /// Fire level sampled last tick, for edge detection
    pub prev_fire: bool,
    /// Events raised this tick, drained by the runner
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session
    pub fn new(seed: u64, arena: Arena, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            tuning,
            phase: GamePhase::Active,
            score: 0,
            lives: 0,
            level: 1,
            player: Player::new(),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            particles: Vec::new(),
            stars: Vec::new(),
            fire_cooldown: 0.0,
            prev_fire: false,
            events: Vec::new(),
        };
        state.start_session();
        state
    }

    /// Reset everything for a fresh run, reusing the RNG stream
    pub fn start_session(&mut self) {
        self.phase = GamePhase::Active;
        self.score = 0;
        self.lives = self.tuning.start_lives;
        self.level = 1;
        self.bullets.clear();
        self.particles.clear();
        self.fire_cooldown = 0.0;
        self.spawn_stars();
        self.spawn_level_asteroids();
        let arena = self.arena;
        self.player.reset(&arena, &self.tuning);
        self.events.push(GameEvent::Music);
    }

    fn spawn_stars(&mut self) {
        self.stars.clear();
        for _ in 0..self.tuning.star_particles {
            let star = Particle::star(&mut self.rng, &self.arena);
            self.stars.push(star);
        }
    }

    /// Populate `level + offset` fresh large asteroids
    pub fn spawn_level_asteroids(&mut self) {
        self.asteroids.clear();
        let count = self.level + self.tuning.level_offset;
        for _ in 0..count {
            let asteroid = Asteroid::random(&mut self.rng, &self.arena, &self.tuning);
            self.asteroids.push(asteroid);
        }
    }

    /// Scatter an explosion burst from a point
    pub fn spawn_explosion(&mut self, pos: Vec2, color: Rgb) {
        for _ in 0..self.tuning.explosion_particles {
            let fragment = Particle::explosion(&mut self.rng, pos, color);
            self.particles.push(fragment);
        }
    }

    /// Fire a bullet from the player and start the cooldown
    pub fn fire_bullet(&mut self) {
        self.bullets.push(Bullet::fired_by(&self.player, &self.tuning));
        self.fire_cooldown = self.tuning.bullet_delay;
        self.events.push(GameEvent::LaserFired);
    }

    /// Take the events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
