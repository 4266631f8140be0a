use crate::camera::components::MainCamera;
use crate::presentation::events::*;
use crate::presentation::logic::{PresentationState, RESET_INPUT};
use crate::scene::components::ThermometerLabel;
use crate::ui::PANEL_WIDTH;
use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use thermoconv::{ColorSample, TemperatureScale};

/// Text currently in the temperature field. Kept apart from
/// [`PresentationState`] because egui edits it in place every frame.
#[derive(Resource, Default)]
pub struct TemperatureField {
    pub text: String,
}

pub fn init_temperature_field(mut commands: Commands, state: Res<PresentationState>) {
    commands.insert_resource(TemperatureField {
        text: state.raw_input().to_string(),
    });
}

pub fn render_control_panel(
    mut contexts: EguiContexts,
    state: Res<PresentationState>,
    field: Option<ResMut<TemperatureField>>,
    mut input_events: MessageWriter<TemperatureInputChanged>,
    mut scale_events: MessageWriter<ScaleSelected>,
    mut reset_events: MessageWriter<ResetRequested>,
    mut rotation_events: MessageWriter<RotationToggled>,
    mut app_exit_events: MessageWriter<AppExit>,
) {
    let Some(mut field) = field else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let frame = state.frame();
    let active = state.active_unit();

    egui::SidePanel::right("control_panel")
        .exact_width(PANEL_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Temperature Converter");
            ui.add_space(10.0);

            // Scale tabs
            ui.horizontal(|ui| {
                for scale in TemperatureScale::ALL {
                    if ui.selectable_label(scale == active, scale.name()).clicked()
                        && scale != active
                    {
                        scale_events.write(ScaleSelected { scale });
                    }
                }
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            ui.label(format!("Temperature in {}", active.name()));
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut field.text)
                        .desired_width(PANEL_WIDTH - 110.0)
                        .hint_text("0"),
                );
                if response.changed() {
                    input_events.write(TemperatureInputChanged {
                        raw: field.text.clone(),
                    });
                }

                if ui.button("Reset").clicked() {
                    field.text = RESET_INPUT.to_string();
                    reset_events.write(ResetRequested);
                }
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            ui.heading("Converted");
            ui.add_space(5.0);
            for reading in &frame.readings {
                let mut value = egui::RichText::new(&reading.readout).size(20.0);
                if reading.scale == active {
                    value = value.strong().color(ramp_color(reading.color));
                }
                ui.horizontal(|ui| {
                    ui.label(reading.scale.name());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(value);
                    });
                });
            }

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            ui.heading("View");
            ui.add_space(5.0);
            if ui.button(state.rotation_label()).clicked() {
                rotation_events.write(RotationToggled);
            }
            ui.label("Drag to orbit, scroll to zoom");

            ui.add_space(20.0);
            ui.separator();
            ui.add_space(10.0);

            if ui.button("Quit").clicked() {
                app_exit_events.write(AppExit::Success);
            }
        });
}

/// Writes each scale name over its label plate, behind the side panel.
pub fn render_thermometer_labels(
    mut contexts: EguiContexts,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    labels: Query<(&ThermometerLabel, &GlobalTransform)>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    let painter = ctx.layer_painter(egui::LayerId::background());
    for (label, transform) in &labels {
        // Plates behind the camera have no viewport position.
        let Ok(position) = camera.world_to_viewport(camera_transform, transform.translation())
        else {
            continue;
        };
        painter.text(
            egui::pos2(position.x, position.y),
            egui::Align2::CENTER_CENTER,
            label.scale.name(),
            egui::FontId::proportional(18.0),
            egui::Color32::from_gray(20),
        );
    }
}

fn ramp_color(sample: ColorSample) -> egui::Color32 {
    let [r, g, b] = sample.to_array();
    egui::Color32::from_rgb(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}
