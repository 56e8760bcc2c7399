use crate::ui::plots::{phase_plot, time_series_plot, trajectory_3d_pane};
use crate::ui::viewdata::ViewFrame;
use egui::{CentralPanel, ScrollArea, TopBottomPanel, Vec2};

/// === Main window ===
pub fn main_window(
    ctx: &egui::Context,
    frame: &ViewFrame,
    rot: &mut [f32; 2],
    auto_rotate: &mut bool,
) {
    TopBottomPanel::top("top").show(ctx, |ui| {
        ui.heading("Ordyn — Order/Energy Trajectory Viewer");
        let meta = &frame.meta;
        ui.label(format!(
            "scheme {} | dt {} | T {} | steps {} | goal {}",
            meta.scheme, meta.dt, meta.t_total, meta.steps, meta.goal
        ));
    });

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.heading("State-Space Trajectory");
            ui.allocate_ui_with_layout(
                Vec2::new(ui.available_width(), 420.0),
                egui::Layout::top_down(egui::Align::LEFT),
                |ui| {
                    trajectory_3d_pane(ui, frame, rot, auto_rotate);
                },
            );

            ui.separator();

            ui.columns(3, |cols| {
                time_series_plot(
                    &mut cols[0],
                    "Order over time",
                    &frame.t,
                    &frame.order,
                    "Order (O)",
                );
                time_series_plot(
                    &mut cols[1],
                    "Energy over time",
                    &frame.t,
                    &frame.energy,
                    "Energy (E)",
                );
                time_series_plot(
                    &mut cols[2],
                    "Messiness over time",
                    &frame.t,
                    &frame.messiness,
                    "Messiness (M)",
                );
            });

            ui.separator();

            ui.heading("Order vs Energy Phase Plane");
            phase_plot(
                ui,
                "phase_plane",
                &frame.order,
                &frame.energy,
                "Order (O)",
                "Energy (E)",
            );
        });
    });
}
