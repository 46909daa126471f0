use bevy::prelude::*;
use derive_more::{Display, From, Mul};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Mul, Display, From)]
pub struct Speed(pub f32);

impl Speed {
    pub fn new(value: f32) -> Self {
        Self(value.max(0.0))
    }

    pub const ZERO: Speed = Speed(0.0);
}

impl std::ops::Mul<Speed> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: Speed) -> Self::Output {
        self * rhs.0
    }
}

/// The character whose surroundings get probed. Its transform supplies the
/// probe origin and facing direction.
#[derive(Component)]
pub struct ProbeAgent {
    pub speed: Speed,
}

#[derive(Component)]
pub struct Ground;

#[derive(Component)]
pub struct SceneLight;

#[derive(Component)]
pub struct CameraFollow {
    pub offset: Vec3,
}

/// Marker for a spawned curve-host entity. The entity owns a `Spline` and
/// lives on under ECS ownership after this crate is done with it.
#[derive(Component)]
pub struct CurveHost;

/// Reveal animation state for a freshly built curve: the rendered portion
/// grows from the first point to the full curve over `duration` seconds.
#[derive(Component, Debug, Clone, Copy)]
pub struct SplineReveal {
    pub elapsed: f32,
    pub duration: f32,
}

impl SplineReveal {
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration: duration.max(0.0),
        }
    }

    pub fn advance(&mut self, delta: f32) {
        self.elapsed = (self.elapsed + delta).min(self.duration);
    }

    /// Fraction of the curve currently visible, in [0, 1].
    pub fn fraction(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn finished(&self) -> bool {
        self.fraction() >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_positive_values() {
        let speed = Speed::new(-5.0);
        assert_eq!(speed.0, 0.0); // Negative values clamped to 0

        let positive_speed = Speed::new(10.0);
        assert_eq!(positive_speed.0, 10.0);
    }

    #[test]
    fn test_reveal_progresses_and_clamps() {
        let mut reveal = SplineReveal::new(2.0);
        assert_eq!(reveal.fraction(), 0.0);

        reveal.advance(1.0);
        assert!((reveal.fraction() - 0.5).abs() < 1e-5);
        assert!(!reveal.finished());

        reveal.advance(5.0);
        assert_eq!(reveal.fraction(), 1.0);
        assert!(reveal.finished());
    }

    #[test]
    fn test_zero_duration_reveal_is_instant() {
        let reveal = SplineReveal::new(0.0);
        assert_eq!(reveal.fraction(), 1.0);
        assert!(reveal.finished());
    }
}
