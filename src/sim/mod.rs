//! Deterministic game simulation
//!
//! Everything in here is pure state manipulation driven by `tick`; no
//! clocks, threads or I/O. The runner owns the timing.

pub mod asteroid;
pub mod bullet;
pub mod motion;
pub mod particle;
pub mod player;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, SizeTier};
pub use bullet::Bullet;
pub use motion::{Arena, Body};
pub use particle::Particle;
pub use player::{Player, Thrust, Turn};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
