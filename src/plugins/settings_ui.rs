use crate::config::range_types::*;
use crate::config::save_config;
use crate::resources::{ForgeConfig, TraversalSettings};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};

/// Macro to create sliders for range-safe types
macro_rules! range_safe_slider {
    ($ui:expr, $value:expr, $range:expr, $text:expr, $suffix:expr, $type:ty) => {{
        let mut temp_value = $value.get();
        let response = $ui.add(
            egui::Slider::new(&mut temp_value, $range)
                .text($text)
                .suffix($suffix),
        );
        *$value = <$type>::new(temp_value);
        response
    }};
}

/// Live tuning panel: the runtime counterpart of editor-exposed fields.
/// Values apply to the next detection pass immediately; Save persists them.
pub struct SettingsUiPlugin;

impl Plugin for SettingsUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_systems(Startup, setup_ui_camera)
            .add_systems(EguiPrimaryContextPass, settings_window);
    }
}

fn setup_ui_camera(mut commands: Commands) {
    // UI camera rendering after the 3D camera
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            ..default()
        },
    ));
}

fn settings_window(mut contexts: EguiContexts, mut config: ResMut<ForgeConfig>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Traversal Settings")
        .default_width(340.0)
        .show(ctx, |ui| {
            ui.heading("Probe");
            range_safe_slider!(
                ui,
                &mut config.settings.detection_range,
                50.0..=10000.0,
                "detection range",
                " u",
                DetectionRange
            );
            range_safe_slider!(
                ui,
                &mut config.settings.max_slope_angle,
                5.0..=79.0,
                "max walkable slope",
                "°",
                SlopeAngle
            );

            ui.separator();
            ui.heading("Bridge");
            range_safe_slider!(
                ui,
                &mut config.settings.bridge_segments,
                1..=64,
                "segments",
                "",
                StepCount
            );
            range_safe_slider!(
                ui,
                &mut config.settings.span_probe_steps,
                1..=64,
                "span probes",
                "",
                StepCount
            );
            range_safe_slider!(
                ui,
                &mut config.settings.span_step_size,
                10.0..=1000.0,
                "span step",
                " u",
                StepLength
            );
            range_safe_slider!(
                ui,
                &mut config.settings.span_drop_depth,
                50.0..=5000.0,
                "span drop",
                " u",
                DropDepth
            );

            ui.separator();
            ui.heading("Wall zigzag");
            range_safe_slider!(
                ui,
                &mut config.settings.zigzag_width,
                10.0..=1000.0,
                "width",
                " u",
                LateralWidth
            );
            range_safe_slider!(
                ui,
                &mut config.settings.zigzag_height_step,
                1.0..=500.0,
                "height step",
                " u",
                StepHeight
            );
            range_safe_slider!(
                ui,
                &mut config.settings.zigzag_steps,
                1..=64,
                "steps",
                "",
                StepCount
            );

            ui.separator();
            ui.heading("Slope staircase");
            range_safe_slider!(
                ui,
                &mut config.settings.stair_steps,
                1..=64,
                "steps",
                "",
                StepCount
            );
            range_safe_slider!(
                ui,
                &mut config.settings.stair_run,
                10.0..=1000.0,
                "run",
                " u",
                StepLength
            );
            range_safe_slider!(
                ui,
                &mut config.settings.stair_rise,
                1.0..=500.0,
                "rise",
                " u",
                StepHeight
            );

            ui.separator();
            ui.heading("Presentation");
            ui.checkbox(&mut config.settings.show_probe_traces, "show probe traces");
            ui.add(
                egui::Slider::new(&mut config.settings.trace_linger_secs, 0.0..=20.0)
                    .text("trace linger")
                    .suffix(" s"),
            );
            ui.add(
                egui::Slider::new(&mut config.settings.reveal_secs, 0.0..=10.0)
                    .text("curve reveal")
                    .suffix(" s"),
            );

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    if let Err(err) = save_config(&config) {
                        warn!("Failed to save config: {err}");
                    }
                }
                if ui.button("Reset to defaults").clicked() {
                    config.settings = TraversalSettings::default();
                }
                ui.label("Space: detect, WASD: move");
            });
        });
}
