//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{spheres_overlap, within_hit_range};
pub use state::{Enemy, GamePhase, GameState, Obstacle, Projectile, Ship};
pub use tick::{TickInput, tick};
