//! Tunelius - a 12-sided tunnel dodge-and-shoot arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: User preferences

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Advisory host update cadence (~16 ms timer)
    pub const FRAME_DT: f32 = 0.016;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Number of discrete lanes on the tunnel cross-section
    pub const NUM_LANES: usize = 12;
    /// Tunnel cross-section radius
    pub const TUNNEL_RADIUS: f32 = 0.5;
    /// Far boundary: obstacle spawn depth and projectile kill plane
    pub const TUNNEL_FAR: f32 = -30.0;
    /// Near boundary behind the camera where scrolled-out entities are dropped
    pub const TUNNEL_NEAR: f32 = 10.0;
    /// Fixed pool of ring depth markers for the infinite-tunnel illusion
    pub const RING_COUNT: usize = 50;
    /// Depth spacing between consecutive ring markers
    pub const RING_SPACING: f32 = 0.5;

    /// Per-frame depth increment for tunnel markers and obstacles
    pub const SCROLL_SPEED: f32 = 0.04;

    /// Ship depth (fixed for the whole run)
    pub const SHIP_Z: f32 = -1.5;
    /// Ship bounding-sphere radius for terminal collisions
    pub const SHIP_HIT_RADIUS: f32 = 0.25;
    /// Seconds the fire cooldown must reach before the next shot
    pub const RELOAD_SECS: f32 = 0.7;
    /// Per-frame projectile travel toward the far end
    pub const PROJECTILE_STEP: f32 = 0.15;

    /// Enemy homing step per frame
    pub const ENEMY_SPEED: f32 = 0.1;
    /// Enemy bounding-sphere radius
    pub const ENEMY_RADIUS: f32 = 0.3;
    /// Slack added to the enemy radius for projectile hits
    pub const HIT_MARGIN: f32 = 0.05;
    /// Seconds between enemy spawns
    pub const ENEMY_SPAWN_INTERVAL: f32 = 2.0;
    /// Enemies appear on a ring slightly inside the tunnel wall...
    pub const ENEMY_SPAWN_RADIUS: f32 = TUNNEL_RADIUS * 0.7;
    /// ...this far beyond the ship's depth
    pub const ENEMY_SPAWN_DISTANCE: f32 = 20.0;

    /// Obstacle cube edge length
    pub const OBSTACLE_SIZE: f32 = 0.3;
    /// Percent chance per frame of spawning an obstacle
    pub const OBSTACLE_SPAWN_PCT: u32 = 2;
}

/// Angle of a lane on the tunnel cross-section (lane index wraps)
#[inline]
pub fn lane_angle(lane: usize) -> f32 {
    (lane % consts::NUM_LANES) as f32 * (std::f32::consts::TAU / consts::NUM_LANES as f32)
}

/// Point on the tunnel wall at the given angle and depth
#[inline]
pub fn ring_point(angle: f32, z: f32) -> Vec3 {
    Vec3::new(
        consts::TUNNEL_RADIUS * angle.cos(),
        consts::TUNNEL_RADIUS * angle.sin(),
        z,
    )
}
