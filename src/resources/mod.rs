use crate::config::range_types::*;
use crate::traversal::TraversalConfig;
use crate::traversal::constants::{DEFAULT_REVEAL_SECS, DEFAULT_TRACE_LINGER_SECS};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default)]
pub struct ForgeConfig {
    pub settings: TraversalSettings,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TraversalSettings {
    // Probe settings
    pub detection_range: DetectionRange,
    pub max_slope_angle: SlopeAngle,

    // Bridge settings
    pub bridge_segments: StepCount,
    pub span_probe_steps: StepCount,
    pub span_step_size: StepLength,
    pub span_drop_depth: DropDepth,

    // Wall-zigzag settings
    pub zigzag_width: LateralWidth,
    pub zigzag_height_step: StepHeight,
    pub zigzag_steps: StepCount,

    // Slope-staircase settings
    pub stair_steps: StepCount,
    pub stair_run: StepLength,
    pub stair_rise: StepHeight,

    // Presentation settings
    pub show_probe_traces: bool,
    pub trace_linger_secs: f32,
    pub reveal_secs: f32,
}

impl Default for TraversalSettings {
    fn default() -> Self {
        Self {
            // Probe settings
            detection_range: DetectionRange::default(),
            max_slope_angle: SlopeAngle::default(),

            // Bridge settings
            bridge_segments: StepCount::new(5),
            span_probe_steps: StepCount::new(20),
            span_step_size: StepLength::new(100.0),
            span_drop_depth: DropDepth::new(500.0),

            // Wall-zigzag settings
            zigzag_width: LateralWidth::new(300.0),
            zigzag_height_step: StepHeight::new(150.0),
            zigzag_steps: StepCount::new(10),

            // Slope-staircase settings
            stair_steps: StepCount::new(10),
            stair_run: StepLength::new(100.0),
            stair_rise: StepHeight::new(50.0),

            // Presentation settings
            show_probe_traces: true,
            trace_linger_secs: DEFAULT_TRACE_LINGER_SECS,
            reveal_secs: DEFAULT_REVEAL_SECS,
        }
    }
}

impl TraversalSettings {
    /// Flattens the clamped settings into the plain tuning struct the
    /// pipeline consumes.
    pub fn to_tuning(&self) -> TraversalConfig {
        TraversalConfig {
            detection_range: self.detection_range.get(),
            max_slope_deg: self.max_slope_angle.get(),

            bridge_segments: self.bridge_segments.get(),
            span_probe_steps: self.span_probe_steps.get(),
            span_step_size: self.span_step_size.get(),
            span_drop_depth: self.span_drop_depth.get(),

            zigzag_width: self.zigzag_width.get(),
            zigzag_height_step: self.zigzag_height_step.get(),
            zigzag_steps: self.zigzag_steps.get(),

            stair_steps: self.stair_steps.get(),
            stair_run: self.stair_run.get(),
            stair_rise: self.stair_rise.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_pipeline_defaults() {
        let tuning = TraversalSettings::default().to_tuning();
        let reference = TraversalConfig::default();

        assert_eq!(tuning.detection_range, reference.detection_range);
        assert_eq!(tuning.max_slope_deg, reference.max_slope_deg);
        assert_eq!(tuning.bridge_segments, reference.bridge_segments);
        assert_eq!(tuning.span_probe_steps, reference.span_probe_steps);
        assert_eq!(tuning.zigzag_width, reference.zigzag_width);
        assert_eq!(tuning.zigzag_height_step, reference.zigzag_height_step);
        assert_eq!(tuning.zigzag_steps, reference.zigzag_steps);
        assert_eq!(tuning.stair_steps, reference.stair_steps);
        assert_eq!(tuning.stair_run, reference.stair_run);
        assert_eq!(tuning.stair_rise, reference.stair_rise);
    }

    #[test]
    fn test_settings_toml_round_trip() {
        let config = ForgeConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: ForgeConfig = toml::from_str(&text).unwrap();

        assert_eq!(
            back.settings.detection_range.get(),
            config.settings.detection_range.get()
        );
        assert_eq!(
            back.settings.zigzag_steps.get(),
            config.settings.zigzag_steps.get()
        );
        assert!(back.settings.show_probe_traces);
    }
}
