use crate::traversal::classify::{SurfaceHit, SurfaceKind, classify_surface};
use crate::traversal::constants::*;
use crate::traversal::errors::{WayforgeError, WayforgeResult};
use crate::traversal::generators::{bridge_points, staircase_points, zigzag_points};
use bevy::prelude::*;

/// Scene query seam. Implementations cast a segment through their world and
/// return the nearest hit. `&mut self` lets implementations record traced
/// segments for debug rendering.
pub trait GroundProbe {
    fn cast(&mut self, start: Vec3, end: Vec3) -> Option<SurfaceHit>;
}

/// Tuning knobs consumed by one pipeline pass. Built from the persisted
/// settings at invocation time; plain numbers so the pipeline can be tested
/// without any engine state.
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    pub detection_range: f32,
    pub max_slope_deg: f32,

    pub bridge_segments: u32,
    pub span_probe_steps: u32,
    pub span_step_size: f32,
    pub span_drop_depth: f32,

    pub zigzag_width: f32,
    pub zigzag_height_step: f32,
    pub zigzag_steps: u32,

    pub stair_steps: u32,
    pub stair_run: f32,
    pub stair_rise: f32,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            detection_range: DEFAULT_DETECTION_RANGE,
            max_slope_deg: DEFAULT_MAX_SLOPE_DEG,

            bridge_segments: DEFAULT_BRIDGE_SEGMENTS,
            span_probe_steps: DEFAULT_SPAN_PROBE_STEPS,
            span_step_size: DEFAULT_SPAN_STEP_SIZE,
            span_drop_depth: DEFAULT_SPAN_DROP_DEPTH,

            zigzag_width: DEFAULT_ZIGZAG_WIDTH,
            zigzag_height_step: DEFAULT_ZIGZAG_HEIGHT_STEP,
            zigzag_steps: DEFAULT_ZIGZAG_STEPS,

            stair_steps: DEFAULT_STAIR_STEPS,
            stair_run: DEFAULT_STAIR_RUN,
            stair_rise: DEFAULT_STAIR_RISE,
        }
    }
}

/// Output of one pipeline pass: which surface was found under the origin
/// and the curve control points planned for it. Ownership of the points
/// passes to the curve builder.
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalPlan {
    pub surface: SurfaceKind,
    pub points: Vec<Vec3>,
}

/// One full detection pass: probe straight down, classify the surface under
/// the origin, and plan points for it. Stateless; every call re-enters with
/// fresh local state.
pub fn plan_traversal<P: GroundProbe>(
    probe: &mut P,
    origin: Vec3,
    facing: Vec3,
    config: &TraversalConfig,
) -> WayforgeResult<TraversalPlan> {
    let down = origin + Vec3::NEG_Y * config.detection_range;
    let hit = probe
        .cast(origin, down)
        .ok_or(WayforgeError::NoGroundDetected {
            range: config.detection_range,
        })?;

    let surface = classify_surface(&hit, config.max_slope_deg);
    let forward = horizontal_dir(facing);

    let points = match surface {
        SurfaceKind::Wall => {
            let top = hit.point + Vec3::Y * config.detection_range;
            zigzag_points(
                hit.point,
                top,
                hit.normal,
                config.zigzag_width,
                config.zigzag_height_step,
                config.zigzag_steps,
            )
        }
        SurfaceKind::SteepSlope => staircase_points(
            hit.point,
            forward,
            config.stair_run,
            config.stair_rise,
            config.stair_steps,
        ),
        SurfaceKind::Walkable => {
            let end = find_span_end(probe, hit.point, forward, config);
            bridge_points(hit.point, end, config.bridge_segments)
        }
    };

    Ok(TraversalPlan { surface, points })
}

/// Walks forward from `start` in fixed-size steps, dropping a probe at each
/// one, and returns the first ground point found. If the step budget runs
/// out the last probed position is returned as a best-effort far endpoint,
/// not a failure.
pub fn find_span_end<P: GroundProbe>(
    probe: &mut P,
    start: Vec3,
    facing: Vec3,
    config: &TraversalConfig,
) -> Vec3 {
    let step = facing.normalize_or_zero() * config.span_step_size;
    let drop = Vec3::NEG_Y * config.span_drop_depth;
    let mut end = start;

    for _ in 0..config.span_probe_steps {
        if let Some(hit) = probe.cast(end + step, end + step + drop) {
            return hit.point;
        }
        end += step;
    }

    end
}

/// Whether any geometry lies within `distance` below `start`.
pub fn ground_below<P: GroundProbe>(probe: &mut P, start: Vec3, distance: f32) -> bool {
    probe
        .cast(start, start + Vec3::NEG_Y * distance)
        .is_some()
}

/// Projects a facing vector onto the ground plane. Looking straight up or
/// down has no horizontal component; fall back to -Z, the forward axis.
fn horizontal_dir(facing: Vec3) -> Vec3 {
    let flat = Vec3::new(facing.x, 0.0, facing.z).normalize_or_zero();
    if flat == Vec3::ZERO { Vec3::NEG_Z } else { flat }
}
