//! Data-driven game balance
//!
//! All gameplay numbers live here so feel can be adjusted without touching
//! simulation code. Defaults match the classic balance; an optional JSON
//! override file can replace them at startup.

use serde::{Deserialize, Serialize};

/// Gameplay balance values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at the start of a session
    pub start_lives: u32,
    /// Asteroids per level = level + this offset
    pub level_offset: u32,
    /// Seconds between bullets while fire is held
    pub bullet_delay: f32,
    /// Particles per explosion burst
    pub explosion_particles: u32,
    /// Background stars spawned per session
    pub star_particles: u32,

    /// Player deceleration opposing the velocity vector (px/s^2)
    pub friction: f32,
    /// Player thrust (px/s^2)
    pub acceleration: f32,
    /// Player turn rate (degrees/s)
    pub angular_speed: f32,
    /// Shield duration granted on spawn/reset (seconds)
    pub shield_time: f32,

    /// Muzzle speed added along the firing direction (px/s)
    pub bullet_speed: f32,
    /// Bullet lifetime (seconds)
    pub bullet_lifetime: f32,

    /// Fresh asteroid speed range (px/s)
    pub asteroid_min_speed: f32,
    pub asteroid_max_speed: f32,
    /// Child heading offset from the parent, either way (degrees)
    pub split_direction_offset: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_lives: 5,
            level_offset: 3,
            bullet_delay: 0.2,
            explosion_particles: 64,
            star_particles: 128,
            friction: 256.0,
            acceleration: 640.0,
            angular_speed: 360.0,
            shield_time: 3.0,
            bullet_speed: 1280.0,
            bullet_lifetime: 1.0,
            asteroid_min_speed: 64.0,
            asteroid_max_speed: 128.0,
            split_direction_offset: 25.0,
        }
    }
}

impl Tuning {
    /// True when every value can actually drive the simulation
    ///
    /// The speed and split ranges feed uniform sampling and must be
    /// non-empty; a session needs at least one life.
    fn is_usable(&self) -> bool {
        self.start_lives >= 1
            && self.asteroid_min_speed < self.asteroid_max_speed
            && self.split_direction_offset > 0.0
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Self>(&json) {
                Ok(tuning) if tuning.is_usable() => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Ok(_) => {
                    log::warn!(
                        "Ignoring out-of-range tuning file {}, using defaults",
                        path.display()
                    );
                    Self::default()
                }
                Err(err) => {
                    log::warn!("Ignoring malformed tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_balance() {
        let t = Tuning::default();
        assert_eq!(t.start_lives, 5);
        assert_eq!(t.level_offset, 3);
        assert_eq!(t.friction, 256.0);
        assert_eq!(t.bullet_speed, 1280.0);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let t: Tuning = serde_json::from_str(r#"{"start_lives": 3}"#).unwrap();
        assert_eq!(t.start_lives, 3);
        assert_eq!(t.level_offset, 3);
        assert_eq!(t.acceleration, 640.0);
    }

    fn load_json(name: &str, json: &str) -> Tuning {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, json).unwrap();
        let t = Tuning::load(&path);
        std::fs::remove_file(&path).ok();
        t
    }

    #[test]
    fn test_load_rejects_inverted_speed_range() {
        // min >= max would make asteroid speed sampling panic
        let t = load_json("polyroids_inverted_speed.json", r#"{"asteroid_min_speed": 200.0}"#);
        assert_eq!(t.asteroid_min_speed, 64.0);
        assert_eq!(t.asteroid_max_speed, 128.0);
    }

    #[test]
    fn test_load_rejects_zero_split_offset() {
        let t = load_json("polyroids_zero_split.json", r#"{"split_direction_offset": 0.0}"#);
        assert_eq!(t.split_direction_offset, 25.0);
    }

    #[test]
    fn test_load_rejects_zero_lives() {
        let t = load_json("polyroids_zero_lives.json", r#"{"start_lives": 0}"#);
        assert_eq!(t.start_lives, 5);
    }

    #[test]
    fn test_load_keeps_usable_override() {
        let t = load_json("polyroids_usable.json", r#"{"start_lives": 3, "friction": 100.0}"#);
        assert_eq!(t.start_lives, 3);
        assert_eq!(t.friction, 100.0);
    }
}
