use crate::traversal::constants::WALL_ANGLE_DEG;
use bevy::prelude::*;

/// A single ray/scene intersection: where the ray landed and the surface
/// normal at that point. Produced per cast and discarded after use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub point: Vec3,
    pub normal: Vec3,
}

impl SurfaceHit {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }
}

/// The three surface buckets the pipeline knows how to traverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// Steeper than `WALL_ANGLE_DEG`, climbed with a zigzag ascent
    Wall,
    /// Steeper than the configured max slope but not a wall, stair-stepped
    SteepSlope,
    /// Flat ground or an abyss edge, bridged forward
    Walkable,
}

/// Angle in degrees between a surface normal and world-up.
pub fn surface_angle_deg(normal: Vec3) -> f32 {
    let n = normal.normalize_or_zero();
    n.dot(Vec3::Y).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Buckets a hit by how steep the surface under it is.
pub fn classify_surface(hit: &SurfaceHit, max_slope_deg: f32) -> SurfaceKind {
    let angle = surface_angle_deg(hit.normal);

    if angle > WALL_ANGLE_DEG {
        SurfaceKind::Wall
    } else if angle > max_slope_deg {
        SurfaceKind::SteepSlope
    } else {
        SurfaceKind::Walkable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit_with_normal(normal: Vec3) -> SurfaceHit {
        SurfaceHit::new(Vec3::ZERO, normal)
    }

    #[test]
    fn test_flat_ground_angle_is_zero() {
        let angle = surface_angle_deg(Vec3::Y);
        assert!(angle.abs() < 1e-4);
    }

    #[test]
    fn test_vertical_wall_angle_is_ninety() {
        let angle = surface_angle_deg(Vec3::X);
        assert!((angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_unnormalized_normal_is_tolerated() {
        let angle = surface_angle_deg(Vec3::new(0.0, 10.0, 0.0));
        assert!(angle.abs() < 1e-4);
    }

    #[test]
    fn test_wall_selected_above_eighty_degrees() {
        // Vertical face
        assert_eq!(
            classify_surface(&hit_with_normal(Vec3::X), 45.0),
            SurfaceKind::Wall
        );

        // 85 degrees from up, just past the wall threshold
        let steep = Vec3::new(85f32.to_radians().sin(), 85f32.to_radians().cos(), 0.0);
        assert_eq!(
            classify_surface(&hit_with_normal(steep), 45.0),
            SurfaceKind::Wall
        );
    }

    #[test]
    fn test_steep_slope_between_thresholds() {
        // 60 degrees: steeper than a 45 degree max slope, flatter than a wall
        let slope = Vec3::new(60f32.to_radians().sin(), 60f32.to_radians().cos(), 0.0);
        assert_eq!(
            classify_surface(&hit_with_normal(slope), 45.0),
            SurfaceKind::SteepSlope
        );
    }

    #[test]
    fn test_walkable_at_or_below_max_slope() {
        assert_eq!(
            classify_surface(&hit_with_normal(Vec3::Y), 45.0),
            SurfaceKind::Walkable
        );

        // 30 degrees stays walkable under a 45 degree max slope
        let gentle = Vec3::new(30f32.to_radians().sin(), 30f32.to_radians().cos(), 0.0);
        assert_eq!(
            classify_surface(&hit_with_normal(gentle), 45.0),
            SurfaceKind::Walkable
        );
    }

    #[test]
    fn test_max_slope_is_exclusive_boundary() {
        // Exactly at the configured max slope counts as walkable
        let at_max = Vec3::new(45f32.to_radians().sin(), 45f32.to_radians().cos(), 0.0);
        let angle = surface_angle_deg(at_max);
        assert!((angle - 45.0).abs() < 1e-3);
        assert_eq!(
            classify_surface(&hit_with_normal(at_max), angle),
            SurfaceKind::Walkable
        );
    }
}
