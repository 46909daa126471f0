use crate::components::SplineReveal;
use crate::plugins::probe::TraceVisuals;
use crate::spline::Spline;
use bevy::prelude::*;

const CURVE_SAMPLES: usize = 64;

pub struct SplineRenderPlugin;

impl Plugin for SplineRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (advance_spline_reveal, draw_splines, draw_probe_traces),
        );
    }
}

fn advance_spline_reveal(mut reveals: Query<&mut SplineReveal>, time: Res<Time>) {
    for mut reveal in reveals.iter_mut() {
        if !reveal.finished() {
            reveal.advance(time.delta_secs());
        }
    }
}

/// Draws every curve as a sampled polyline. A curve still revealing is
/// drawn only up to its visible fraction, with a marker at the growing tip.
fn draw_splines(splines: Query<(&Spline, Option<&SplineReveal>)>, mut gizmos: Gizmos) {
    for (spline, reveal) in splines.iter() {
        if spline.point_count() < 2 {
            continue;
        }

        let fraction = reveal.map(|r| r.fraction()).unwrap_or(1.0);
        let visible = ((CURVE_SAMPLES as f32 * fraction) as usize).max(1);

        let polyline = (0..=visible).map(|i| spline.sample(i as f32 / CURVE_SAMPLES as f32));
        gizmos.linestrip(polyline, Color::srgb(0.2, 0.8, 0.9));

        if fraction < 1.0 {
            let tip = spline.sample(visible as f32 / CURVE_SAMPLES as f32);
            gizmos.sphere(tip, 8.0, Color::srgb(0.9, 0.9, 0.2));
        }
    }
}

/// Renders recently traced probe segments until their linger time runs out.
fn draw_probe_traces(mut traces: ResMut<TraceVisuals>, mut gizmos: Gizmos, time: Res<Time>) {
    traces.tick(time.delta_secs());
    for segment in traces.segments() {
        gizmos.line(segment.start, segment.end, Color::srgb(0.9, 0.15, 0.15));
    }
}
