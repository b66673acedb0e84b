//! Fixed timestep simulation tick
//!
//! One call advances the world by one frame: scroll, spawns, movement,
//! collisions, cleanup. Host loops feed it at the advisory ~16 ms cadence.

use rand::Rng;

use super::collision::spheres_overlap;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input flags for a single tick (one-shot; the host clears them after each
/// consumed step)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move one lane counter-clockwise
    pub steer_left: bool,
    /// Move one lane clockwise
    pub steer_right: bool,
    /// Fire a projectile from the current lane
    pub fire: bool,
    /// Restart after game over
    pub reset: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Game over freezes the simulation; only the reset input stays live
    if state.phase == GamePhase::GameOver {
        if input.reset {
            state.reset();
        }
        return;
    }

    // Steering wraps around the 12 lanes
    if input.steer_left {
        state.lane = (state.lane + NUM_LANES - 1) % NUM_LANES;
        state.ship.set_lane(state.lane);
    }
    if input.steer_right {
        state.lane = (state.lane + 1) % NUM_LANES;
        state.ship.set_lane(state.lane);
    }
    if input.fire {
        state.ship.fire(state.lane);
    }

    // 1. Scroll the ring marker pool; markers past the near boundary recycle
    //    to the far end
    for z in &mut state.rings {
        *z += state.scroll_speed;
        if *z > TUNNEL_NEAR {
            *z = TUNNEL_FAR;
        }
    }

    // 2. Ship cooldown and projectile motion/cleanup
    state.ship.update(dt);

    // 3. Probabilistic obstacle spawn at a random lane on the far boundary
    if state.rng.random_range(0..100) < OBSTACLE_SPAWN_PCT {
        let lane = state.rng.random_range(0..NUM_LANES);
        state.spawn_obstacle(lane);
    }

    // 4. Timed enemy spawn
    state.enemy_spawn_timer += dt;
    if state.enemy_spawn_timer > ENEMY_SPAWN_INTERVAL {
        state.spawn_enemy();
        state.enemy_spawn_timer = 0.0;
    }

    let ship_pos = state.ship.pos;
    let mut collided = false;

    // 5. Obstacles scroll toward the camera; a ship overlap ends the run,
    //    anything past the near boundary is dropped
    let scroll = state.scroll_speed;
    state.obstacles.retain_mut(|obstacle| {
        obstacle.update(scroll);
        if obstacle.collides_with_sphere(ship_pos, SHIP_HIT_RADIUS) {
            collided = true;
        }
        obstacle.pos.z <= TUNNEL_NEAR
    });

    // 6. Enemies home toward the ship. Order per enemy: advance, drop if
    //    inactive, trade with a projectile (first hit wins, scores, and
    //    consumes the shot), and only then the terminal ship test. An enemy
    //    that is both hit and touching the ship resolves as a hit.
    let mut i = 0;
    while i < state.enemies.len() {
        state.enemies[i].update(ship_pos);

        if !state.enemies[i].active {
            state.enemies.remove(i);
            continue;
        }

        let enemy = &state.enemies[i];
        if let Some(shot) = state
            .ship
            .projectiles
            .iter()
            .position(|shot| enemy.is_hit(shot))
        {
            state.ship.projectiles.remove(shot);
            state.enemies.remove(i);
            state.score += 1;
            continue;
        }

        if spheres_overlap(ship_pos, SHIP_HIT_RADIUS, enemy.pos, enemy.radius) {
            collided = true;
        }
        i += 1;
    }

    if collided {
        state.phase = GamePhase::GameOver;
    }
}
