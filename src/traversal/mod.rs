pub mod builder;
pub mod classify;
pub mod constants;
pub mod errors;
pub mod generators;
pub mod pipeline;

pub use builder::{SplineSpawner, build_curve};
pub use classify::{SurfaceHit, SurfaceKind, classify_surface, surface_angle_deg};
pub use errors::{WayforgeError, WayforgeResult};
pub use generators::{bridge_points, staircase_points, zigzag_points};
pub use pipeline::{
    GroundProbe, TraversalConfig, TraversalPlan, find_span_end, ground_below, plan_traversal,
};
