use egui_plot::{Line, Plot, PlotPoints};

use crate::sim::trajectory::Trajectory;
use crate::ui::viewdata::ViewFrame;

/// Upper bound on drawn 3D polyline segments; longer trajectories are
/// strided down so the painter pass stays cheap at repaint rate.
const MAX_SEGMENTS: usize = 6000;

/// One state variable over time.
pub fn time_series_plot(ui: &mut egui::Ui, title: &str, t: &[f64], ys: &[f64], label: &str) {
    let points: PlotPoints = t
        .iter()
        .zip(ys.iter())
        .filter(|(t, y)| t.is_finite() && y.is_finite())
        .map(|(&t, &y)| [t, y])
        .collect();
    let line = Line::new(label, points);

    ui.vertical(|ui| {
        ui.label(title);

        Plot::new(title)
            .height(160.0)
            .allow_scroll(false)
            .allow_drag(false)
            .x_axis_formatter(|mark, _| format!("{:.1}", mark.value))
            .y_axis_formatter(|mark, _| format!("{:.2}", mark.value))
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    });
}

/// Order against energy, time implicit along the curve.
pub fn phase_plot(
    ui: &mut egui::Ui,
    title: &str,
    xs: &[f64],
    ys: &[f64],
    x_label: &str,
    y_label: &str,
) {
    let points: PlotPoints = xs
        .iter()
        .zip(ys.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| [x, y])
        .collect();
    let line = Line::new(format!("{y_label} vs {x_label}"), points);

    Plot::new(title)
        .height(220.0)
        .allow_scroll(false)
        .allow_drag(false)
        .x_axis_formatter(|mark, _| format!("{:.2}", mark.value))
        .y_axis_formatter(|mark, _| format!("{:.2}", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

fn project(pos: [f32; 3], rot: [f32; 2], rect: egui::Rect) -> (egui::Pos2, f32) {
    let (sx, cx) = rot[0].sin_cos();
    let (sy, cy) = rot[1].sin_cos();
    let x = pos[0] * cy + pos[2] * sy;
    let y = pos[0] * sx * sy + pos[1] * cx - pos[2] * sx * cy;
    let z = -pos[0] * cx * sy + pos[1] * sx + pos[2] * cx * cy;
    let size = rect.width().min(rect.height()) * 0.30;
    let c = rect.center();
    (egui::pos2(c.x + x * size, c.y - y * size), z)
}

fn depth_alpha(z: f32) -> u8 {
    let t = ((z + 2.0) / 4.0).clamp(0.0, 1.0);
    (25.0 + 170.0 * t) as u8
}

/// Per-axis normalization into [-1, 1] around the finite midpoint.
struct AxisScale {
    center: f32,
    half: f32,
}

impl AxisScale {
    fn from_series(series: &[f64]) -> Self {
        let (lo, hi) = Trajectory::finite_extent(series).unwrap_or((-1.0, 1.0));
        let mut half = ((hi - lo) * 0.5) as f32;
        if half < 1e-9 {
            half = 1.0;
        }
        Self {
            center: ((lo + hi) * 0.5) as f32,
            half,
        }
    }

    #[inline]
    fn map(&self, v: f64) -> f32 {
        (v as f32 - self.center) / self.half
    }
}

/// Rotating 3D polyline of the (O, E, M) trajectory, painter-drawn.
///
/// Drag rotates the view and stops auto-rotation; double-click resumes it.
/// Non-finite samples break the polyline, so a diverged tail shows up as a
/// missing segment.
pub fn trajectory_3d_pane(
    ui: &mut egui::Ui,
    frame: &ViewFrame,
    rot: &mut [f32; 2],
    auto_rotate: &mut bool,
) {
    let height = ui.available_height().clamp(260.0, 460.0);
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::click_and_drag(),
    );

    if response.dragged() {
        let delta = response.drag_delta();
        rot[0] += delta.y * 0.008;
        rot[1] += delta.x * 0.008;
        *auto_rotate = false;
    }
    if response.double_clicked() {
        *auto_rotate = true;
    }
    if response.hovered() {
        response.on_hover_text("Drag to rotate | Double-click to resume auto-rotation");
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(
        rect,
        egui::CornerRadius::same(4),
        egui::Color32::from_rgb(14, 16, 20),
    );

    // Axis triad with the three state-variable names.
    let (origin, _) = project([0.0, 0.0, 0.0], *rot, rect);
    let axes = [
        ([1.15f32, 0.0, 0.0], "Order (O)"),
        ([0.0, 1.15, 0.0], "Energy (E)"),
        ([0.0, 0.0, 1.15], "Messiness (M)"),
    ];
    for (dir, name) in axes {
        let (end, z) = project(dir, *rot, rect);
        let alpha = depth_alpha(z);
        painter.line_segment(
            [origin, end],
            egui::Stroke::new(
                1.0,
                egui::Color32::from_rgba_unmultiplied(190, 190, 180, alpha),
            ),
        );
        painter.text(
            end,
            egui::Align2::CENTER_CENTER,
            name,
            egui::FontId::proportional(12.0),
            egui::Color32::from_rgb(220, 218, 210),
        );
    }

    let n = frame.order.len();
    if n == 0 {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Empty trajectory",
            egui::FontId::proportional(14.0),
            egui::Color32::from_rgb(160, 160, 150),
        );
        return;
    }

    let sx = AxisScale::from_series(&frame.order);
    let sy = AxisScale::from_series(&frame.energy);
    let sz = AxisScale::from_series(&frame.messiness);
    let stride = (n / MAX_SEGMENTS).max(1);

    let mut prev: Option<(egui::Pos2, f32)> = None;
    let mut first: Option<egui::Pos2> = None;
    let mut last: Option<egui::Pos2> = None;
    for i in (0..n).step_by(stride) {
        let (o, e, m) = (frame.order[i], frame.energy[i], frame.messiness[i]);
        if !(o.is_finite() && e.is_finite() && m.is_finite()) {
            prev = None;
            continue;
        }
        let (screen, depth) = project([sx.map(o), sy.map(e), sz.map(m)], *rot, rect);
        if let Some((prev_screen, prev_depth)) = prev {
            let alpha = depth_alpha(0.5 * (depth + prev_depth));
            painter.line_segment(
                [prev_screen, screen],
                egui::Stroke::new(
                    1.2,
                    egui::Color32::from_rgba_unmultiplied(110, 200, 255, alpha),
                ),
            );
        }
        prev = Some((screen, depth));
        if first.is_none() {
            first = Some(screen);
        }
        last = Some(screen);
    }

    if let Some(p) = first {
        painter.circle_filled(p, 3.5, egui::Color32::WHITE);
    }
    if let Some(p) = last {
        painter.circle_filled(p, 3.5, egui::Color32::from_rgb(255, 200, 50));
    }
}
