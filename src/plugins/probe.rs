use crate::components::{CurveHost, ProbeAgent, SplineReveal};
use crate::resources::ForgeConfig;
use crate::spline::Spline;
use crate::traversal::{
    GroundProbe, SplineSpawner, SurfaceHit, build_curve, plan_traversal,
};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// "Detect environment now": the single entry point. External game logic
/// fires this; the next update runs one full probe/classify/build pass per
/// event.
#[derive(Event)]
pub struct DetectEnvironment;

pub struct TraversalPlugin;

impl Plugin for TraversalPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DetectEnvironment>()
            .init_resource::<TraceVisuals>()
            .add_systems(Update, detect_environment);
    }
}

/// Probe segments waiting to be drawn, each lingering for a fixed duration
/// after the cast that produced it.
#[derive(Resource, Default)]
pub struct TraceVisuals {
    segments: Vec<TraceSegment>,
}

pub struct TraceSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub remaining: f32,
}

impl TraceVisuals {
    pub fn push(&mut self, start: Vec3, end: Vec3, linger: f32) {
        self.segments.push(TraceSegment {
            start,
            end,
            remaining: linger,
        });
    }

    /// Ages all segments and drops the expired ones.
    pub fn tick(&mut self, delta: f32) {
        for segment in &mut self.segments {
            segment.remaining -= delta;
        }
        self.segments.retain(|segment| segment.remaining > 0.0);
    }

    pub fn segments(&self) -> &[TraceSegment] {
        &self.segments
    }
}

/// Scene query over the rapier world. Casts exclude the probing agent's
/// own collider and, when a sink is attached, record every traced segment
/// for debug rendering.
pub struct RapierProbe<'a, 'w> {
    context: &'a RapierContext<'w>,
    ignore: Entity,
    traces: Option<&'a mut TraceVisuals>,
    linger: f32,
}

impl<'a, 'w> RapierProbe<'a, 'w> {
    pub fn new(
        context: &'a RapierContext<'w>,
        ignore: Entity,
        traces: Option<&'a mut TraceVisuals>,
        linger: f32,
    ) -> Self {
        Self {
            context,
            ignore,
            traces,
            linger,
        }
    }
}

impl GroundProbe for RapierProbe<'_, '_> {
    fn cast(&mut self, start: Vec3, end: Vec3) -> Option<SurfaceHit> {
        if let Some(traces) = self.traces.as_mut() {
            traces.push(start, end, self.linger);
        }

        let segment = end - start;
        let distance = segment.length();
        if distance <= f32::EPSILON {
            return None;
        }

        let filter = QueryFilter::default().exclude_collider(self.ignore);
        self.context
            .cast_ray_and_get_normal(start, segment / distance, distance, true, filter)
            .map(|(_, intersection)| SurfaceHit::new(intersection.point, intersection.normal))
    }
}

/// Curve-host spawner over `Commands`. The spline is staged and only
/// inserted on `flush`, so an aborted build leaves no half-populated
/// component on the spawned entity.
pub struct CurveHostSpawner<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    reveal_secs: f32,
    staged: Option<(Entity, Spline)>,
}

impl<'a, 'w, 's> CurveHostSpawner<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>, reveal_secs: f32) -> Self {
        Self {
            commands,
            reveal_secs,
            staged: None,
        }
    }

    /// Attaches the populated spline to the spawned host.
    pub fn flush(mut self) {
        if let Some((host, spline)) = self.staged.take() {
            self.commands.entity(host).insert(spline);
        }
    }
}

impl SplineSpawner for CurveHostSpawner<'_, '_, '_> {
    type Host = Entity;

    fn spawn(&mut self, origin: Vec3) -> Option<Entity> {
        let host = self
            .commands
            .spawn((
                Transform::from_translation(origin),
                CurveHost,
                SplineReveal::new(self.reveal_secs),
                Name::new("curve-host"),
            ))
            .id();
        self.staged = Some((host, Spline::default()));
        Some(host)
    }

    fn spline_mut(&mut self, host: Entity) -> Option<&mut Spline> {
        self.staged
            .as_mut()
            .filter(|(staged_host, _)| *staged_host == host)
            .map(|(_, spline)| spline)
    }
}

/// One stateless pipeline pass per trigger: probe down, classify, generate
/// points, spawn and populate a curve host. Every failure in the taxonomy
/// is a logged warning; the pass aborts and nothing is left half-done.
fn detect_environment(
    mut events: EventReader<DetectEnvironment>,
    rapier: ReadRapierContext,
    agents: Query<(Entity, &Transform), With<ProbeAgent>>,
    config: Res<ForgeConfig>,
    mut traces: ResMut<TraceVisuals>,
    mut commands: Commands,
) {
    if events.is_empty() {
        return;
    }
    let triggers = events.read().count();

    let Ok(context) = rapier.single() else {
        return;
    };
    let Ok((agent, transform)) = agents.single() else {
        warn!("No probe agent in the scene, skipping environment detection");
        return;
    };

    let settings = &config.settings;
    let tuning = settings.to_tuning();

    for _ in 0..triggers {
        let trace_sink = if settings.show_probe_traces {
            Some(traces.as_mut())
        } else {
            None
        };
        let mut probe = RapierProbe::new(&context, agent, trace_sink, settings.trace_linger_secs);

        let plan = match plan_traversal(&mut probe, transform.translation, *transform.forward(), &tuning)
        {
            Ok(plan) => plan,
            Err(err) => {
                warn!("Environment detection aborted: {err}");
                continue;
            }
        };

        info!(
            "Surface below agent classified as {:?}, {} points planned",
            plan.surface,
            plan.points.len()
        );

        let mut spawner = CurveHostSpawner::new(&mut commands, settings.reveal_secs);
        match build_curve(&mut spawner, &plan.points) {
            Ok(host) => {
                spawner.flush();
                info!("Curve host {host:?} spawned for {:?} traversal", plan.surface);
            }
            Err(err) => warn!("Curve not created: {err}"),
        }
    }
}
