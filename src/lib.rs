pub mod components;
pub mod config;
pub mod plugins;
pub mod resources;
pub mod spline;
pub mod traversal;

// Selective re-exports for external consumers

// Plugins - main.rs needs all plugins
pub use plugins::*;

// Core pipeline types the demo binaries and embedding game logic need
pub use resources::{ForgeConfig, TraversalSettings};
pub use spline::Spline;
pub use traversal::errors::{WayforgeError, WayforgeResult};
pub use traversal::{
    GroundProbe, SurfaceHit, SurfaceKind, TraversalConfig, TraversalPlan, build_curve,
    plan_traversal,
};
