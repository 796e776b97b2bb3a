//! Fire-and-forget sound cues for an external audio backend

use crate::sim::GameEvent;

/// A sound the game wants played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    AsteroidDestroyed,
    LaserFired,
    PlayerCollision,
    /// Background music loop, restarted on each new session
    Music,
}

impl From<GameEvent> for SoundCue {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::AsteroidDestroyed => SoundCue::AsteroidDestroyed,
            GameEvent::LaserFired => SoundCue::LaserFired,
            GameEvent::PlayerCollision => SoundCue::PlayerCollision,
            GameEvent::Music => SoundCue::Music,
        }
    }
}

/// Audio backend boundary
///
/// Playback cannot fail the game loop; a sink that is missing a resource
/// deals with that itself.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Sink that discards every cue, for headless runs and tests
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}
