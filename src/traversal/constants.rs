/// Constants for the traversal pipeline
/// Surfaces steeper than this are climbed as walls rather than slopes
pub const WALL_ANGLE_DEG: f32 = 80.0;

/// Default probing values
pub const DEFAULT_DETECTION_RANGE: f32 = 1000.0;
pub const DEFAULT_MAX_SLOPE_DEG: f32 = 45.0;

/// Default values for the bridge generator
pub const DEFAULT_BRIDGE_SEGMENTS: u32 = 5;
pub const DEFAULT_SPAN_PROBE_STEPS: u32 = 20;
pub const DEFAULT_SPAN_STEP_SIZE: f32 = 100.0;
pub const DEFAULT_SPAN_DROP_DEPTH: f32 = 500.0;

/// Default values for the wall-zigzag generator
pub const DEFAULT_ZIGZAG_WIDTH: f32 = 300.0;
pub const DEFAULT_ZIGZAG_HEIGHT_STEP: f32 = 150.0;
pub const DEFAULT_ZIGZAG_STEPS: u32 = 10;

/// Default values for the slope-staircase generator
pub const DEFAULT_STAIR_STEPS: u32 = 10;
pub const DEFAULT_STAIR_RUN: f32 = 100.0;
pub const DEFAULT_STAIR_RISE: f32 = 50.0;

/// Debug and presentation timing
pub const DEFAULT_TRACE_LINGER_SECS: f32 = 5.0;
pub const DEFAULT_REVEAL_SECS: f32 = 2.0;

/// Curve sampling resolution when rebuilding a spline's arc-length table
pub const SPLINE_SAMPLES_PER_SEGMENT: usize = 8;
