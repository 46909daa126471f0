use crate::spline::Spline;
use crate::traversal::errors::{WayforgeError, WayforgeResult};
use bevy::prelude::*;

/// Object-spawner seam for curve hosts. The production implementation
/// spawns an ECS entity; tests substitute a recording fake.
pub trait SplineSpawner {
    /// Handle to a spawned host.
    type Host: Copy;

    /// Spawns a curve-host object at `origin`, or `None` on failure.
    fn spawn(&mut self, origin: Vec3) -> Option<Self::Host>;

    /// Borrows the spline owned by a spawned host, if it has one.
    fn spline_mut(&mut self, host: Self::Host) -> Option<&mut Spline>;
}

/// Builds a curve from an ordered point sequence: spawns a host at the
/// first point, clears any pre-existing points on its spline, appends every
/// point in world space, and rebuilds the curve's internal representation.
///
/// Preconditions are checked before anything is touched, so a failed build
/// leaves no partial state: fewer than 2 points refuses without spawning,
/// and a host without a spline produces no curve.
pub fn build_curve<S: SplineSpawner>(spawner: &mut S, points: &[Vec3]) -> WayforgeResult<S::Host> {
    if points.len() < 2 {
        return Err(WayforgeError::InsufficientPoints {
            count: points.len(),
        });
    }

    let origin = points[0];
    let host = spawner
        .spawn(origin)
        .ok_or(WayforgeError::SpawnFailed { origin })?;
    let spline = spawner
        .spline_mut(host)
        .ok_or(WayforgeError::SplineMissing)?;

    spline.clear_points();
    for &point in points {
        spline.add_point(point);
    }
    spline.rebuild();

    Ok(host)
}
