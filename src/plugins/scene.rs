use crate::components::*;
use crate::plugins::probe::DetectEnvironment;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Demo world sized to the probe defaults: a chasm the bridge generator can
/// span, a near-vertical slab for the zigzag climb, and a steep ramp for
/// the staircase.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene)
            .add_systems(Update, (move_agent, trigger_detection, follow_camera));
    }
}

const AGENT_SPEED: f32 = 400.0;
const ROCK_SCATTER_SEED: u64 = 7;

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let platform_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 0.5, 0.3),
        ..default()
    });

    // Near platform, top surface at y = 0
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(1200.0, 100.0, 1200.0))),
        MeshMaterial3d(platform_material.clone()),
        Transform::from_xyz(-400.0, -50.0, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(600.0, 50.0, 600.0),
        Ground,
    ));

    // Far platform across the chasm (gap from x = 200 to x = 700)
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(1200.0, 100.0, 1200.0))),
        MeshMaterial3d(platform_material.clone()),
        Transform::from_xyz(1300.0, -50.0, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(600.0, 50.0, 600.0),
        Ground,
    ));

    // Leaning slab: face tilted 82 degrees from horizontal, classified as a
    // wall when the downward probe clips it
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(600.0, 20.0, 600.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.5, 0.45, 0.4),
            ..default()
        })),
        Transform {
            translation: Vec3::new(-750.0, 280.0, -450.0),
            rotation: Quat::from_rotation_z(82f32.to_radians()),
            ..default()
        },
        RigidBody::Fixed,
        Collider::cuboid(300.0, 10.0, 300.0),
    ));

    // Steep ramp: 60 degrees, between the walkable limit and the wall cutoff
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(600.0, 20.0, 600.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.55, 0.5, 0.35),
            ..default()
        })),
        Transform {
            translation: Vec3::new(-750.0, 150.0, 450.0),
            rotation: Quat::from_rotation_z(60f32.to_radians()),
            ..default()
        },
        RigidBody::Fixed,
        Collider::cuboid(300.0, 10.0, 300.0),
    ));

    spawn_rocks(&mut commands, &mut meshes, &mut materials);

    // Probe agent
    commands.spawn((
        Mesh3d(meshes.add(Capsule3d::new(40.0, 100.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.8, 0.2, 0.2),
            ..default()
        })),
        Transform::from_xyz(0.0, 90.0, 0.0),
        RigidBody::KinematicPositionBased,
        Collider::capsule_y(50.0, 40.0),
        ProbeAgent {
            speed: Speed::new(AGENT_SPEED),
        },
    ));

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform {
            translation: Vec3::new(0.0, 800.0, 0.0),
            rotation: Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4),
            ..default()
        },
        SceneLight,
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: false,
    });

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(700.0, 1100.0, 700.0).looking_at(Vec3::ZERO, Vec3::Y),
        CameraFollow {
            offset: Vec3::new(700.0, 1100.0, 700.0),
        },
    ));
}

fn spawn_rocks(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let mut rng = Pcg64::seed_from_u64(ROCK_SCATTER_SEED);
    let rock_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.5, 0.5, 0.5),
        ..default()
    });

    for _ in 0..12 {
        let radius = rng.gen_range(15.0..45.0);
        let x = rng.gen_range(-950.0..150.0);
        let z = rng.gen_range(-550.0..550.0);

        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(8, 6))),
            MeshMaterial3d(rock_material.clone()),
            Transform::from_xyz(x, radius * 0.5, z),
            RigidBody::Fixed,
            Collider::ball(radius),
        ));
    }
}

fn move_agent(
    mut agents: Query<(&mut Transform, &ProbeAgent)>,
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let mut direction = Vec3::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        direction -= Vec3::Z;
    }
    if keys.pressed(KeyCode::KeyS) {
        direction += Vec3::Z;
    }
    if keys.pressed(KeyCode::KeyA) {
        direction -= Vec3::X;
    }
    if keys.pressed(KeyCode::KeyD) {
        direction += Vec3::X;
    }

    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return;
    }

    for (mut transform, agent) in agents.iter_mut() {
        transform.translation += direction * agent.speed * time.delta_secs();
        transform.look_to(direction, Vec3::Y);
    }
}

/// Space fires the parameterless trigger the probe plugin listens for.
fn trigger_detection(
    keys: Res<ButtonInput<KeyCode>>,
    mut events: EventWriter<DetectEnvironment>,
) {
    if keys.just_pressed(KeyCode::Space) {
        events.write(DetectEnvironment);
    }
}

fn follow_camera(
    agents: Query<&Transform, (With<ProbeAgent>, Without<CameraFollow>)>,
    mut cameras: Query<(&mut Transform, &CameraFollow), Without<ProbeAgent>>,
) {
    let Ok(agent_transform) = agents.single() else {
        return;
    };
    for (mut camera_transform, follow) in cameras.iter_mut() {
        camera_transform.translation = agent_transform.translation + follow.offset;
        camera_transform.look_at(agent_transform.translation, Vec3::Y);
    }
}
