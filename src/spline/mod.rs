use crate::traversal::constants::SPLINE_SAMPLES_PER_SEGMENT;
use bevy::prelude::*;

/// A renderable/traversable curve owned by a spawned curve-host entity.
///
/// Control points are appended in world space; `rebuild` recomputes the
/// internal representation (a cumulative arc-length table over Catmull-Rom
/// samples) so the curve can be sampled uniformly by fraction or distance.
#[derive(Component, Debug, Clone, Default)]
pub struct Spline {
    points: Vec<Vec3>,
    arc_lengths: Vec<f32>,
}

impl Spline {
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut spline = Self {
            points: points.into_iter().collect(),
            arc_lengths: Vec::new(),
        };
        spline.rebuild();
        spline
    }

    pub fn clear_points(&mut self) {
        self.points.clear();
        self.arc_lengths.clear();
    }

    pub fn add_point(&mut self, point: Vec3) {
        self.points.push(point);
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Recomputes the arc-length table. Call after the control points
    /// change; sampling before the first rebuild sees an empty curve.
    pub fn rebuild(&mut self) {
        self.arc_lengths.clear();
        if self.points.len() < 2 {
            return;
        }

        let samples = (self.points.len() - 1) * SPLINE_SAMPLES_PER_SEGMENT;
        self.arc_lengths.reserve(samples + 1);
        self.arc_lengths.push(0.0);

        let mut total = 0.0;
        let mut previous = self.position_at(0.0);
        for i in 1..=samples {
            let t = i as f32 / samples as f32;
            let current = self.position_at(t);
            total += previous.distance(current);
            self.arc_lengths.push(total);
            previous = current;
        }
    }

    pub fn total_length(&self) -> f32 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Curve position at normalized `t` in [0, 1].
    pub fn sample(&self, t: f32) -> Vec3 {
        self.position_at(t.clamp(0.0, 1.0))
    }

    /// Curve position `distance` units along the rebuilt curve.
    pub fn sample_at_distance(&self, distance: f32) -> Vec3 {
        let total = self.total_length();
        if total <= 0.0 {
            return self.points.first().copied().unwrap_or(Vec3::ZERO);
        }
        let target = distance.clamp(0.0, total);

        // The table is monotone; find the bracketing samples and blend.
        let idx = self
            .arc_lengths
            .partition_point(|&len| len < target)
            .max(1)
            .min(self.arc_lengths.len() - 1);
        let before = self.arc_lengths[idx - 1];
        let after = self.arc_lengths[idx];
        let span = (after - before).max(f32::EPSILON);
        let frac = (idx - 1) as f32 + (target - before) / span;

        self.sample(frac / (self.arc_lengths.len() - 1) as f32)
    }

    /// Catmull-Rom position at `t` across the whole control polygon, with
    /// endpoints duplicated so the curve passes through both ends.
    fn position_at(&self, t: f32) -> Vec3 {
        match self.points.len() {
            0 => Vec3::ZERO,
            1 => self.points[0],
            _ => {
                let segments = self.points.len() - 1;
                let scaled = t * segments as f32;
                let seg = (scaled as usize).min(segments - 1);
                let local = scaled - seg as f32;

                let p0 = self.points[seg.saturating_sub(1)];
                let p1 = self.points[seg];
                let p2 = self.points[seg + 1];
                let p3 = self.points[(seg + 2).min(self.points.len() - 1)];

                catmull_rom(p0, p1, p2, p3, local)
            }
        }
    }
}

fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - 3.0 * p2 + p0 - p3) * t3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_spline() -> Spline {
        Spline::from_points((0..6).map(|i| Vec3::new(i as f32 * 100.0, 0.0, 0.0)))
    }

    #[test]
    fn test_sample_hits_end_control_points() {
        let spline = straight_spline();
        assert!((spline.sample(0.0) - Vec3::ZERO).length() < 1e-3);
        assert!((spline.sample(1.0) - Vec3::new(500.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_straight_line_length() {
        let spline = straight_spline();
        assert!((spline.total_length() - 500.0).abs() < 1.0);
    }

    #[test]
    fn test_arc_length_table_is_monotone() {
        let spline = Spline::from_points([
            Vec3::ZERO,
            Vec3::new(100.0, 50.0, 0.0),
            Vec3::new(150.0, 50.0, 120.0),
            Vec3::new(300.0, -20.0, 100.0),
        ]);

        for pair in spline.arc_lengths.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!(spline.total_length() > 0.0);
    }

    #[test]
    fn test_clear_resets_curve() {
        let mut spline = straight_spline();
        spline.clear_points();
        assert_eq!(spline.point_count(), 0);
        assert_eq!(spline.total_length(), 0.0);
    }

    #[test]
    fn test_add_points_then_rebuild() {
        let mut spline = Spline::default();
        spline.add_point(Vec3::ZERO);
        spline.add_point(Vec3::new(0.0, 100.0, 0.0));

        // Not rebuilt yet: no internal representation
        assert_eq!(spline.total_length(), 0.0);

        spline.rebuild();
        assert!((spline.total_length() - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_sample_at_distance_midpoint() {
        let spline = straight_spline();
        let mid = spline.sample_at_distance(250.0);
        assert!((mid - Vec3::new(250.0, 0.0, 0.0)).length() < 5.0);
    }

    #[test]
    fn test_sample_at_distance_clamps() {
        let spline = straight_spline();
        assert!((spline.sample_at_distance(-50.0) - Vec3::ZERO).length() < 1e-3);
        let past_end = spline.sample_at_distance(10_000.0);
        assert!((past_end - Vec3::new(500.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_single_point_spline_is_degenerate() {
        let spline = Spline::from_points([Vec3::new(7.0, 8.0, 9.0)]);
        assert_eq!(spline.total_length(), 0.0);
        assert_eq!(spline.sample(0.5), Vec3::new(7.0, 8.0, 9.0));
    }
}
