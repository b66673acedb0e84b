//! Shape generation for the tunnel scene
//!
//! The simulation runs in 3D tunnel space; everything is projected onto the
//! 2D color pipeline with a single perspective divide against a fixed camera
//! looking down the tunnel axis.

use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::consts::NUM_LANES;
use crate::settings::QualityPreset;
use crate::sim::GameState;
use crate::{lane_angle, ring_point};

/// Camera depth on the near side of the scene
pub const CAMERA_Z: f32 = 5.0;
/// Perspective scale (45-degree vertical field of view)
const FOCAL: f32 = 2.414;
/// Geometry closer to the camera than this is culled
const NEAR_PLANE: f32 = 0.5;
/// Screen-space half width of wireframe lines
const LINE_WIDTH: f32 = 0.004;

/// Project a tunnel-space point to screen space; `None` behind the camera
pub fn project(p: Vec3) -> Option<Vec2> {
    let depth = CAMERA_Z - p.z;
    if depth < NEAR_PLANE {
        return None;
    }
    Some(Vec2::new(p.x, p.y) * (FOCAL / depth))
}

/// Screen-space size of a world-space extent at the given depth
fn projected_extent(world: f32, z: f32) -> f32 {
    world * FOCAL / (CAMERA_Z - z)
}

/// One thick line segment between two screen points (two triangles)
fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4], out: &mut Vec<Vertex>) {
    let dir = (b - a).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * width;

    let (a1, a2) = (a + perp, a - perp);
    let (b1, b2) = (b + perp, b - perp);

    out.push(Vertex::new(a1.x, a1.y, color));
    out.push(Vertex::new(a2.x, a2.y, color));
    out.push(Vertex::new(b1.x, b1.y, color));

    out.push(Vertex::new(b1.x, b1.y, color));
    out.push(Vertex::new(a2.x, a2.y, color));
    out.push(Vertex::new(b2.x, b2.y, color));
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Wireframe 12-gon for one tunnel ring marker
pub fn ring_outline(z: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(NUM_LANES * 6);

    for lane in 0..NUM_LANES {
        let a = project(ring_point(lane_angle(lane), z));
        let b = project(ring_point(lane_angle(lane + 1), z));
        if let (Some(a), Some(b)) = (a, b) {
            line(a, b, LINE_WIDTH, color, &mut vertices);
        }
    }

    vertices
}

/// The ship as a forward-pointing triangle
pub fn ship(pos: Vec3, dim: Vec3) -> Vec<Vertex> {
    let Some(center) = project(pos) else {
        return Vec::new();
    };
    let w = projected_extent(dim.x / 2.0, pos.z);
    let h = projected_extent(dim.y / 2.0, pos.z);

    vec![
        Vertex::new(center.x, center.y + h, colors::SHIP),
        Vertex::new(center.x - w, center.y - h, colors::SHIP),
        Vertex::new(center.x + w, center.y - h, colors::SHIP),
    ]
}

/// A projectile as a small filled quad
pub fn projectile(pos: Vec3) -> Vec<Vertex> {
    let Some(center) = project(pos) else {
        return Vec::new();
    };
    let half = projected_extent(0.05, pos.z);
    quad(center, half, colors::PROJECTILE)
}

/// An enemy as a disc with two side pods
pub fn enemy(pos: Vec3, radius: f32, segments: u32) -> Vec<Vertex> {
    let Some(center) = project(pos) else {
        return Vec::new();
    };
    let r = projected_extent(radius, pos.z);

    let mut vertices = circle(center, r, colors::ENEMY, segments);
    for side in [-1.0f32, 1.0] {
        let pod = center + Vec2::new(side * r, 0.0);
        vertices.extend(circle(pod, r / 3.0, colors::ENEMY_POD, segments / 2));
    }
    vertices
}

/// An obstacle cube: filled when destructible, wireframe otherwise
pub fn obstacle(pos: Vec3, size: f32, destructible: bool) -> Vec<Vertex> {
    let Some(center) = project(pos) else {
        return Vec::new();
    };
    let half = projected_extent(size / 2.0, pos.z);

    if destructible {
        quad(center, half, colors::OBSTACLE_SOLID)
    } else {
        square_outline(center, half, colors::OBSTACLE_WIRE)
    }
}

fn quad(center: Vec2, half: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (l, r) = (center.x - half, center.x + half);
    let (b, t) = (center.y - half, center.y + half);
    vec![
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
        Vertex::new(l, t, color),
        Vertex::new(l, t, color),
        Vertex::new(r, b, color),
        Vertex::new(r, t, color),
    ]
}

fn square_outline(center: Vec2, half: f32, color: [f32; 4]) -> Vec<Vertex> {
    let corners = [
        center + Vec2::new(-half, -half),
        center + Vec2::new(half, -half),
        center + Vec2::new(half, half),
        center + Vec2::new(-half, half),
    ];

    let mut vertices = Vec::with_capacity(4 * 6);
    for i in 0..4 {
        line(corners[i], corners[(i + 1) % 4], LINE_WIDTH, color, &mut vertices);
    }
    vertices
}

/// Build the full frame: tunnel rings, enemies, ship and shots, obstacles
pub fn scene(state: &GameState, quality: QualityPreset) -> Vec<Vertex> {
    let segments = quality.circle_segments();
    let stride = quality.ring_stride();

    let mut vertices = Vec::new();

    for z in state.rings.iter().step_by(stride) {
        vertices.extend(ring_outline(*z, colors::TUNNEL_RING));
    }

    for e in &state.enemies {
        if e.active {
            vertices.extend(enemy(e.pos, e.radius, segments));
        }
    }

    vertices.extend(ship(state.ship.pos, state.ship.dim));
    for shot in &state.ship.projectiles {
        vertices.extend(projectile(shot.pos));
    }

    for o in &state.obstacles {
        vertices.extend(obstacle(o.pos, o.size, o.destructible));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_behind_camera_is_culled() {
        assert!(project(Vec3::new(0.0, 0.0, CAMERA_Z)).is_none());
        assert!(project(Vec3::new(0.0, 0.0, -1.5)).is_some());
    }

    #[test]
    fn test_projection_shrinks_with_depth() {
        let near = project(Vec3::new(0.5, 0.0, -1.5)).unwrap();
        let far = project(Vec3::new(0.5, 0.0, -20.0)).unwrap();
        assert!(near.x > far.x);
    }

    #[test]
    fn test_scene_includes_ship_triangle() {
        let state = GameState::new(1);
        let vertices = scene(&state, QualityPreset::Medium);
        // At minimum the ring pool and the ship triangle are present
        assert!(vertices.len() > 3);
        assert!(vertices.iter().any(|v| v.color == colors::SHIP));
    }
}
