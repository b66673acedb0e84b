//! Bounding-sphere collision tests
//!
//! Every entity is approximated by a sphere. Overlap compares squared center
//! distance against squared summed radii so no square root is taken on the
//! hot path; the projectile hit test stays in plain distance units to match
//! its margin constant.

use glam::Vec3;

use crate::consts::HIT_MARGIN;

/// Strict sphere-sphere overlap: touching spheres do not count.
///
/// Used for the terminal ship-vs-enemy check.
#[inline]
pub fn spheres_overlap(a: Vec3, radius_a: f32, b: Vec3, radius_b: f32) -> bool {
    let sum = radius_a + radius_b;
    a.distance_squared(b) < sum * sum
}

/// Projectile hit test: strictly inside radius + hit margin.
///
/// A shot at exactly the threshold distance is a miss.
#[inline]
pub fn within_hit_range(target: Vec3, target_radius: f32, shot: Vec3) -> bool {
    target.distance(shot) < target_radius + HIT_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spheres_overlap_strict_boundary() {
        let a = Vec3::ZERO;
        let b = Vec3::new(1.0, 0.0, 0.0);

        // Sum of radii exactly equals the distance: no overlap
        assert!(!spheres_overlap(a, 0.5, b, 0.5));
        // Slightly larger radii: overlap
        assert!(spheres_overlap(a, 0.6, b, 0.5));
        // Well apart
        assert!(!spheres_overlap(a, 0.2, b, 0.2));
    }

    #[test]
    fn test_within_hit_range_strict_boundary() {
        let enemy = Vec3::new(0.0, 0.0, -5.0);
        let radius = 0.3;
        let threshold = radius + HIT_MARGIN;

        // A shot at exactly the threshold distance is a miss
        assert!(!within_hit_range(
            enemy,
            radius,
            Vec3::new(threshold, 0.0, -5.0)
        ));
        assert!(within_hit_range(enemy, radius, Vec3::new(0.34, 0.0, -5.0)));
        assert!(within_hit_range(enemy, radius, enemy));
    }

    proptest! {
        #[test]
        fn prop_spheres_overlap_symmetric(
            ax in -10.0f32..10.0, ay in -10.0f32..10.0, az in -10.0f32..10.0,
            bx in -10.0f32..10.0, by in -10.0f32..10.0, bz in -10.0f32..10.0,
            ra in 0.0f32..2.0, rb in 0.0f32..2.0,
        ) {
            let a = Vec3::new(ax, ay, az);
            let b = Vec3::new(bx, by, bz);
            prop_assert_eq!(
                spheres_overlap(a, ra, b, rb),
                spheres_overlap(b, rb, a, ra)
            );
        }

        #[test]
        fn prop_hit_range_contains_overlap_center(
            x in -10.0f32..10.0, y in -10.0f32..10.0, z in -10.0f32..10.0,
            radius in 0.01f32..2.0,
        ) {
            // A shot at the target center always hits
            let target = Vec3::new(x, y, z);
            prop_assert!(within_hit_range(target, radius, target));
        }
    }
}
