use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use wayforge::config::load_config;
use wayforge::plugins::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Wayforge - Procedural Traversal".into(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(RapierDebugRenderPlugin::default())
        .insert_resource(load_config())
        .add_plugins((
            ScenePlugin,
            TraversalPlugin,
            SplineRenderPlugin,
            SettingsUiPlugin,
        ))
        .run();
}
