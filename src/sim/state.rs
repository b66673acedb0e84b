//! Game state and core simulation types
//!
//! Entity containers are owned exclusively by [`GameState`]; the tick function
//! is the only mutation site. Entity removal always goes through filtering or
//! index compaction, never deletion mid-iteration.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::{lane_angle, ring_point};

use super::collision::within_hit_range;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended by a terminal collision; only reset input is live
    GameOver,
}

/// A shot fired by the ship, traveling straight toward the far end
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub pos: Vec3,
}

impl Projectile {
    pub fn new(pos: Vec3) -> Self {
        Self { pos }
    }
}

/// The player's ship, pinned to one of the 12 lane points on the tunnel ring
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec3,
    /// Render extents (width, height, length)
    pub dim: Vec3,
    /// Live shots, exclusively owned; culled past the far boundary or on hit
    pub projectiles: Vec<Projectile>,
    /// Seconds since the last shot; a fresh ship starts with a full reload
    reload_timer: f32,
}

impl Ship {
    pub fn new(lane: usize) -> Self {
        Self {
            pos: ring_point(lane_angle(lane), SHIP_Z),
            dim: Vec3::new(0.3, 0.2, 0.5),
            projectiles: Vec::new(),
            reload_timer: RELOAD_SECS,
        }
    }

    /// Teleport to the ring point for the given lane (index wraps) at the
    /// fixed ship depth.
    pub fn set_lane(&mut self, lane: usize) {
        self.pos = ring_point(lane_angle(lane), SHIP_Z);
    }

    /// Advance the fire cooldown and every live projectile; drop shots that
    /// pass the far tunnel boundary.
    pub fn update(&mut self, dt: f32) {
        self.reload_timer += dt;
        for shot in &mut self.projectiles {
            shot.pos.z -= PROJECTILE_STEP;
        }
        self.projectiles.retain(|shot| shot.pos.z >= TUNNEL_FAR);
    }

    /// Fire one shot from the given lane at the ship's depth. No-op while the
    /// cooldown is below the reload threshold.
    pub fn fire(&mut self, lane: usize) {
        if self.reload_timer < RELOAD_SECS {
            return;
        }
        self.projectiles
            .push(Projectile::new(ring_point(lane_angle(lane), self.pos.z)));
        self.reload_timer = 0.0;
    }
}

/// A homing enemy. Lifecycle is one-way: active, then inactive once it passes
/// the camera side of the origin, then removed at the next cleanup pass.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec3,
    pub radius: f32,
    pub active: bool,
}

impl Enemy {
    pub fn new(pos: Vec3) -> Self {
        Self {
            pos,
            radius: ENEMY_RADIUS,
            active: true,
        }
    }

    /// Step toward the target. A zero-length offset produces no movement
    /// rather than a NaN direction.
    pub fn update(&mut self, target: Vec3) {
        let dir = (target - self.pos).normalize_or_zero();
        self.pos += dir * ENEMY_SPEED;

        if self.pos.z > 0.0 {
            self.active = false;
        }
    }

    /// True iff the shot is strictly within radius + hit margin
    pub fn is_hit(&self, shot: &Projectile) -> bool {
        within_hit_range(self.pos, self.radius, shot.pos)
    }
}

/// A static hazard drifting toward the camera along the tunnel axis.
///
/// Immutable after creation except for depth. The spawn policy only ever
/// creates non-destructible obstacles; the destructible branch is kept for
/// the renderer and collision path but is currently unreachable.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub pos: Vec3,
    pub size: f32,
    pub destructible: bool,
}

impl Obstacle {
    pub fn new(pos: Vec3, size: f32, destructible: bool) -> Self {
        Self {
            pos,
            size,
            destructible,
        }
    }

    /// Bounding-sphere radius (half the cube edge)
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    pub fn update(&mut self, scroll_speed: f32) {
        self.pos.z += scroll_speed;
    }

    /// Inclusive sphere-sphere test against another bounding sphere
    pub fn collides_with_sphere(&self, center: Vec3, radius: f32) -> bool {
        let sum = self.radius() + radius;
        self.pos.distance_squared(center) <= sum * sum
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// The player's ship
    pub ship: Ship,
    /// Live obstacles, insertion order
    pub obstacles: Vec<Obstacle>,
    /// Live enemies, insertion order
    pub enemies: Vec<Enemy>,
    /// Ring marker depths; wrap from the near back to the far boundary
    pub rings: Vec<f32>,
    /// Per-frame depth increment for markers and obstacles
    pub scroll_speed: f32,
    /// Accumulates toward the next enemy spawn
    pub enemy_spawn_timer: f32,
    /// Current lane index on the tunnel ring
    pub lane: usize,
    /// Enemies destroyed this run
    pub score: u32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new run with the given seed
    pub fn new(seed: u64) -> Self {
        let rings = (0..RING_COUNT)
            .map(|i| TUNNEL_FAR + i as f32 * RING_SPACING)
            .collect();

        Self {
            seed,
            phase: GamePhase::Playing,
            ship: Ship::new(0),
            obstacles: Vec::new(),
            enemies: Vec::new(),
            rings,
            scroll_speed: SCROLL_SPEED,
            enemy_spawn_timer: 0.0,
            lane: 0,
            score: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn one non-destructible obstacle at the far boundary on the given
    /// lane.
    pub fn spawn_obstacle(&mut self, lane: usize) {
        let pos = ring_point(lane_angle(lane), TUNNEL_FAR);
        self.obstacles.push(Obstacle::new(pos, OBSTACLE_SIZE, false));
    }

    /// Spawn one enemy at a random angle on a ring slightly inside the tunnel
    /// wall, well beyond the ship's depth.
    pub fn spawn_enemy(&mut self) {
        let angle = (self.rng.random_range(0..360) as f32).to_radians();
        let pos = Vec3::new(
            ENEMY_SPAWN_RADIUS * angle.cos(),
            ENEMY_SPAWN_RADIUS * angle.sin(),
            self.ship.pos.z - ENEMY_SPAWN_DISTANCE,
        );
        self.enemies.push(Enemy::new(pos));
    }

    /// Start a fresh run after game over: clear hazards, zero the score and
    /// spawn timer, and put the ship back on lane 0. In-flight projectiles
    /// and ring markers carry over.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.enemies.clear();
        self.phase = GamePhase::Playing;
        self.lane = 0;
        self.enemy_spawn_timer = 0.0;
        self.score = 0;
        self.ship.set_lane(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_set_lane_ring_positions() {
        let mut ship = Ship::new(0);
        for lane in 0..NUM_LANES {
            ship.set_lane(lane);
            let angle = lane as f32 * (TAU / NUM_LANES as f32);
            assert!((ship.pos.x - TUNNEL_RADIUS * angle.cos()).abs() < 1e-6);
            assert!((ship.pos.y - TUNNEL_RADIUS * angle.sin()).abs() < 1e-6);
            assert_eq!(ship.pos.z, SHIP_Z);
        }
    }

    #[test]
    fn test_set_lane_wraps_modulo() {
        let mut a = Ship::new(0);
        let mut b = Ship::new(0);
        a.set_lane(3);
        b.set_lane(3 + NUM_LANES * 4);
        assert_eq!(a.pos, b.pos);
    }

    #[test]
    fn test_fire_respects_reload_threshold() {
        let mut ship = Ship::new(0);

        // Fresh ship fires immediately
        ship.fire(0);
        assert_eq!(ship.projectiles.len(), 1);

        // Second shot inside the reload window is swallowed
        ship.fire(0);
        assert_eq!(ship.projectiles.len(), 1);

        // Accrue just under the threshold: still blocked
        ship.update(RELOAD_SECS - 0.01);
        ship.fire(0);
        assert_eq!(ship.projectiles.len(), 1);

        // At the threshold the next shot goes out
        ship.update(0.01);
        ship.fire(0);
        assert_eq!(ship.projectiles.len(), 2);
    }

    #[test]
    fn test_projectiles_culled_past_far_boundary() {
        let mut ship = Ship::new(0);
        ship.projectiles
            .push(Projectile::new(Vec3::new(0.5, 0.0, TUNNEL_FAR + 0.1)));
        ship.update(FRAME_DT);
        assert!(ship.projectiles.is_empty());
    }

    #[test]
    fn test_enemy_goes_inactive_past_origin() {
        let mut enemy = Enemy::new(Vec3::new(0.0, 0.0, -0.05));
        // Homing toward a target behind the origin carries it past z = 0
        enemy.update(Vec3::new(0.0, 0.0, 1.0));
        assert!(enemy.pos.z > 0.0);
        assert!(!enemy.active);
    }

    #[test]
    fn test_enemy_zero_offset_is_guarded() {
        let target = Vec3::new(0.3, 0.2, -2.0);
        let mut enemy = Enemy::new(target);
        enemy.update(target);
        assert_eq!(enemy.pos, target);
        assert!(enemy.active);
    }

    #[test]
    fn test_obstacle_collision_is_inclusive() {
        // Centers 1.0 apart, radii 0.15 + 0.85 sum exactly to the distance
        let obstacle = Obstacle::new(Vec3::ZERO, OBSTACLE_SIZE, false);
        assert!(obstacle.collides_with_sphere(Vec3::new(1.0, 0.0, 0.0), 0.85));
        assert!(!obstacle.collides_with_sphere(Vec3::new(1.0, 0.0, 0.0), 0.84));
    }

    #[test]
    fn test_ring_pool_spans_the_tunnel() {
        let state = GameState::new(7);
        assert_eq!(state.rings.len(), RING_COUNT);
        assert_eq!(state.rings[0], TUNNEL_FAR);
        let last = state.rings[RING_COUNT - 1];
        assert!((last - (TUNNEL_FAR + (RING_COUNT - 1) as f32 * RING_SPACING)).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_any_lane_lands_on_the_ring(lane in 0usize..1000) {
            let mut ship = Ship::new(0);
            ship.set_lane(lane);
            let radial = (ship.pos.x * ship.pos.x + ship.pos.y * ship.pos.y).sqrt();
            prop_assert!((radial - TUNNEL_RADIUS).abs() < 1e-5);
            prop_assert_eq!(ship.pos.z, SHIP_Z);
        }
    }
}
