use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// A downward probe distance constrained to [50.0, 10000.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct DetectionRange(f32);

impl DetectionRange {
    const MIN: f32 = 50.0;
    const MAX: f32 = 10000.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for DetectionRange {
    fn default() -> Self {
        Self::new(1000.0)
    }
}

/// A walkable slope limit in degrees, constrained to [5.0, 79.0].
/// The upper bound stays below the fixed wall cutoff at 80 degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct SlopeAngle(f32);

impl SlopeAngle {
    const MIN: f32 = 5.0;
    const MAX: f32 = 79.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for SlopeAngle {
    fn default() -> Self {
        Self::new(45.0)
    }
}

/// A sideways offset width constrained to [10.0, 1000.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct LateralWidth(f32);

impl LateralWidth {
    const MIN: f32 = 10.0;
    const MAX: f32 = 1000.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for LateralWidth {
    fn default() -> Self {
        Self::new(300.0)
    }
}

/// A vertical rise per step constrained to [1.0, 500.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct StepHeight(f32);

impl StepHeight {
    const MIN: f32 = 1.0;
    const MAX: f32 = 500.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for StepHeight {
    fn default() -> Self {
        Self::new(150.0)
    }
}

/// A horizontal advance per step constrained to [10.0, 1000.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct StepLength(f32);

impl StepLength {
    const MIN: f32 = 10.0;
    const MAX: f32 = 1000.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for StepLength {
    fn default() -> Self {
        Self::new(100.0)
    }
}

/// A downward probe offset for span probing, constrained to [50.0, 5000.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct DropDepth(f32);

impl DropDepth {
    const MIN: f32 = 50.0;
    const MAX: f32 = 5000.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for DropDepth {
    fn default() -> Self {
        Self::new(500.0)
    }
}

/// An iteration budget constrained to [1, 64]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
pub struct StepCount(u32);

impl StepCount {
    const MIN: u32 = 1;
    const MAX: u32 = 64;

    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for StepCount {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_types_clamp() {
        assert_eq!(DetectionRange::new(5.0).get(), 50.0);
        assert_eq!(DetectionRange::new(1_000_000.0).get(), 10000.0);
        assert_eq!(SlopeAngle::new(89.0).get(), 79.0);
        assert_eq!(SlopeAngle::new(-10.0).get(), 5.0);
        assert_eq!(StepCount::new(0).get(), 1);
        assert_eq!(StepCount::new(500).get(), 64);
    }

    #[test]
    fn test_defaults_match_probe_tuning() {
        assert_eq!(DetectionRange::default().get(), 1000.0);
        assert_eq!(SlopeAngle::default().get(), 45.0);
        assert_eq!(LateralWidth::default().get(), 300.0);
        assert_eq!(StepHeight::default().get(), 150.0);
        assert_eq!(StepLength::default().get(), 100.0);
        assert_eq!(DropDepth::default().get(), 500.0);
        assert_eq!(StepCount::default().get(), 10);
    }
}
