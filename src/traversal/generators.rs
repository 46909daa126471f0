use bevy::prelude::*;

/// Straight bridge from `start` to `end`, split into `segments` uniform
/// pieces. Returns `segments + 1` points including both endpoints.
pub fn bridge_points(start: Vec3, end: Vec3, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| start.lerp(end, i as f32 / segments as f32))
        .collect()
}

/// Zigzag ascent from `base` toward `top`, alternating lateral offsets of
/// `width` while rising `height_step` per point.
///
/// The lateral direction lies in the wall face: climb direction crossed
/// with the wall normal. For a vertical climb against an axis-aligned wall
/// this is a horizontal direction along the wall; if the two are parallel
/// any perpendicular of the climb direction is used instead.
pub fn zigzag_points(
    base: Vec3,
    top: Vec3,
    wall_normal: Vec3,
    width: f32,
    height_step: f32,
    steps: u32,
) -> Vec<Vec3> {
    let climb = (top - base).normalize_or_zero();
    let mut lateral = climb.cross(wall_normal.normalize_or_zero());
    if lateral.length_squared() < 1e-6 {
        lateral = climb.any_orthonormal_vector();
    }
    let side = lateral.normalize_or_zero() * width;

    let mut points = Vec::with_capacity(steps as usize);
    let mut current = base;

    for i in 0..steps {
        current += Vec3::Y * height_step;
        current += if i % 2 == 0 { side } else { -side };
        points.push(current);
    }

    points
}

/// Staircase approximation of a slope: `steps` points, each advancing `run`
/// along the facing direction and rising `rise`.
pub fn staircase_points(start: Vec3, facing: Vec3, run: f32, rise: f32, steps: u32) -> Vec<Vec3> {
    let forward = facing.normalize_or_zero();

    let mut points = Vec::with_capacity(steps as usize);
    let mut current = start;

    for _ in 0..steps {
        current += Vec3::Y * rise;
        current += forward * run;
        points.push(current);
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_has_six_points_for_five_segments() {
        let start = Vec3::new(0.0, -500.0, 0.0);
        let end = Vec3::new(1000.0, -500.0, 0.0);
        let points = bridge_points(start, end, 5);

        assert_eq!(points.len(), 6);
        assert_eq!(points[0], start);
        assert_eq!(*points.last().unwrap(), end);
    }

    #[test]
    fn test_bridge_interpolates_monotonically() {
        let start = Vec3::ZERO;
        let end = Vec3::new(500.0, -100.0, 0.0);
        let points = bridge_points(start, end, 5);

        for pair in points.windows(2) {
            assert!(pair[1].x > pair[0].x);
            assert!(pair[1].y < pair[0].y);
        }

        // Uniform spacing along the span
        let step = points[1] - points[0];
        for pair in points.windows(2) {
            assert!((pair[1] - pair[0] - step).length() < 1e-3);
        }
    }

    #[test]
    fn test_bridge_degenerate_span_collapses_to_start() {
        let start = Vec3::new(3.0, 4.0, 5.0);
        let points = bridge_points(start, start, 5);
        assert_eq!(points.len(), 6);
        assert!(points.iter().all(|p| *p == start));
    }

    #[test]
    fn test_zigzag_returns_exactly_ten_points() {
        let base = Vec3::ZERO;
        let top = Vec3::Y * 1000.0;
        let points = zigzag_points(base, top, Vec3::X, 300.0, 150.0, 10);
        assert_eq!(points.len(), 10);
    }

    #[test]
    fn test_zigzag_alternates_offset_sign() {
        let base = Vec3::ZERO;
        let top = Vec3::Y * 1000.0;
        let points = zigzag_points(base, top, Vec3::X, 300.0, 150.0, 10);

        // Against an X-facing wall the lateral axis is Z; the running sum of
        // alternating offsets swings between one side and the centerline.
        let offsets: Vec<f32> = points.iter().map(|p| p.z).collect();
        for (i, pair) in offsets.windows(2).enumerate() {
            let delta = pair[1] - pair[0];
            assert!(delta.abs() > 1.0, "step {i} did not move laterally");
            if i % 2 == 0 {
                assert!(delta > 0.0);
            } else {
                assert!(delta < 0.0);
            }
        }
    }

    #[test]
    fn test_zigzag_rises_by_height_step_each_point() {
        let base = Vec3::ZERO;
        let top = Vec3::Y * 1000.0;
        let points = zigzag_points(base, top, Vec3::X, 300.0, 150.0, 10);

        for (i, p) in points.iter().enumerate() {
            assert!((p.y - 150.0 * (i + 1) as f32).abs() < 1e-3);
        }
    }

    #[test]
    fn test_zigzag_vertical_climb_still_has_lateral_motion() {
        // Wall normal parallel to the climb direction would zero the cross
        // product; the generator must still pick a sideways axis.
        let points = zigzag_points(Vec3::ZERO, Vec3::Y * 1000.0, Vec3::Y, 300.0, 150.0, 10);
        assert_eq!(points.len(), 10);

        let horizontal = Vec3::new(points[0].x, 0.0, points[0].z);
        assert!(horizontal.length() > 1.0);
    }

    #[test]
    fn test_staircase_returns_exactly_ten_points() {
        let points = staircase_points(Vec3::ZERO, Vec3::X, 100.0, 50.0, 10);
        assert_eq!(points.len(), 10);
    }

    #[test]
    fn test_staircase_constant_run_and_rise() {
        let start = Vec3::new(10.0, 20.0, 30.0);
        let points = staircase_points(start, Vec3::X, 100.0, 50.0, 10);

        let mut expected = start;
        for p in &points {
            expected += Vec3::new(100.0, 50.0, 0.0);
            assert!((*p - expected).length() < 1e-3);
        }

        let last = points.last().unwrap();
        assert!((last.x - start.x - 1000.0).abs() < 1e-3);
        assert!((last.y - start.y - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_staircase_normalizes_facing() {
        let fast = staircase_points(Vec3::ZERO, Vec3::X * 42.0, 100.0, 50.0, 10);
        let unit = staircase_points(Vec3::ZERO, Vec3::X, 100.0, 50.0, 10);
        assert_eq!(fast, unit);
    }
}
