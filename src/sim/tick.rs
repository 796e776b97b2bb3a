//! Fixed timestep simulation tick
//!
//! Advances the whole game deterministically: ambient motion, player
//! control, bullet/asteroid and player/asteroid resolution, level and
//! game-over transitions.

use super::asteroid::Asteroid;
use super::bullet::Bullet;
use super::player::{Player, Thrust, Turn};
use super::state::{GameEvent, GamePhase, GameState};

/// Input intents for a single tick
///
/// All flags are levels except `pause`, which arrives as an edge already
/// consumed from the shared input state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub backward: bool,
    pub fire: bool,
    pub pause: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // A clean press this tick; restart after game over wants a press, not
    // a trigger still held from the final shot.
    let fire_edge = input.fire && !state.prev_fire;
    state.prev_fire = input.fire;

    if input.pause {
        match state.phase {
            GamePhase::Active => state.phase = GamePhase::Paused,
            GamePhase::Paused => state.phase = GamePhase::Active,
            GamePhase::GameOver => {}
        }
    }
    if state.phase == GamePhase::Paused {
        return;
    }

    // Ambient motion runs in every unpaused phase
    let arena = state.arena;
    for asteroid in &mut state.asteroids {
        asteroid.step(dt, &arena);
    }
    for particle in &mut state.particles {
        particle.decrease_time(dt);
    }
    state.particles.retain(|p| p.has_time());
    for particle in &mut state.particles {
        particle.step(dt, &arena);
    }
    for star in &mut state.stars {
        star.step(dt, &arena);
    }

    if state.phase == GamePhase::GameOver {
        if fire_edge {
            state.start_session();
        }
        return;
    }

    // Player movement and control
    state.player.step(dt, &arena, &state.tuning);
    state.player.decrease_time(dt);
    if input.left {
        state.player.turn(dt, Turn::Left, &state.tuning);
    }
    if input.right {
        state.player.turn(dt, Turn::Right, &state.tuning);
    }
    if input.forward {
        state.player.accelerate(dt, Thrust::Forward, &state.tuning);
    }
    if input.backward {
        state.player.accelerate(dt, Thrust::Backward, &state.tuning);
    }
    state.player.update_hull();

    // Bullets age out, then fly
    for bullet in &mut state.bullets {
        bullet.decrease_time(dt);
    }
    state.bullets.retain(|b| b.has_time());
    for bullet in &mut state.bullets {
        bullet.step(dt, &arena);
    }

    // Holding the trigger fires on a cadence; releasing it clears the
    // cooldown so the next press fires immediately.
    if input.fire {
        state.fire_cooldown -= dt;
        if state.fire_cooldown <= 0.0 {
            state.fire_bullet();
        }
    } else {
        state.fire_cooldown = 0.0;
    }

    resolve_bullet_hits(state);
    resolve_player_hit(state);

    if state.phase == GamePhase::Active && state.asteroids.is_empty() {
        state.level += 1;
        state.spawn_level_asteroids();
        state.bullets.clear();
        let arena = state.arena;
        state.player.reset(&arena, &state.tuning);
    }
}

/// Bullet vs asteroid: first hit wins both ways
///
/// The scan is immutable and collects hit pairs; removal, scoring,
/// explosions and splits are applied afterwards so nothing mutates the
/// collections mid-iteration.
fn resolve_bullet_hits(state: &mut GameState) {
    let mut bullet_hit = vec![false; state.bullets.len()];
    let mut asteroid_hit = vec![false; state.asteroids.len()];
    let mut hits: Vec<(usize, usize)> = Vec::new();

    for (bi, bullet) in state.bullets.iter().enumerate() {
        for (ai, asteroid) in state.asteroids.iter().enumerate() {
            if asteroid_hit[ai] {
                continue;
            }
            if asteroid.contains(bullet.body.center()) {
                bullet_hit[bi] = true;
                asteroid_hit[ai] = true;
                hits.push((bi, ai));
                break;
            }
        }
    }

    let mut children = Vec::new();
    for &(bi, ai) in &hits {
        let bullet_pos = state.bullets[bi].body.center();
        let asteroid_pos = state.asteroids[ai].body.center();
        let points = state.asteroids[ai].tier.points();
        state.spawn_explosion(bullet_pos, Bullet::COLOR);
        state.spawn_explosion(asteroid_pos, Asteroid::COLOR);
        state.score += points;
        for _ in 0..2 {
            if let Some(child) =
                Asteroid::split_from(&mut state.rng, &state.asteroids[ai], &state.tuning)
            {
                children.push(child);
            }
        }
        state.events.push(GameEvent::AsteroidDestroyed);
    }

    let mut i = 0;
    state.bullets.retain(|_| {
        let keep = !bullet_hit[i];
        i += 1;
        keep
    });
    let mut i = 0;
    state.asteroids.retain(|_| {
        let keep = !asteroid_hit[i];
        i += 1;
        keep
    });
    state.asteroids.extend(children);
}

/// Player vs asteroid: probe the hull vertices, at most one life per tick
fn resolve_player_hit(state: &mut GameState) {
    if state.player.has_shield() {
        return;
    }
    let mut hit = None;
    'scan: for (ai, asteroid) in state.asteroids.iter().enumerate() {
        for &vertex in &state.player.hull {
            if asteroid.contains(vertex) {
                hit = Some((ai, vertex));
                break 'scan;
            }
        }
    }
    let Some((ai, vertex)) = hit else {
        return;
    };

    let asteroid_pos = state.asteroids[ai].body.center();
    state.spawn_explosion(vertex, Player::COLOR);
    state.spawn_explosion(asteroid_pos, Asteroid::COLOR);
    let mut children = Vec::new();
    for _ in 0..2 {
        if let Some(child) =
            Asteroid::split_from(&mut state.rng, &state.asteroids[ai], &state.tuning)
        {
            children.push(child);
        }
    }
    state.asteroids.remove(ai);
    state.asteroids.extend(children);

    state.lives -= 1;
    let arena = state.arena;
    state.player.reset(&arena, &state.tuning);
    state.events.push(GameEvent::PlayerCollision);
    log::debug!("player hit, {} lives left", state.lives);

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.bullets.clear();
        log::info!("game over at score {}", state.score);
    }
}
