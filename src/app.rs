use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use crate::ui::viewdata::ViewFrame;

pub struct App {
    frame: ViewFrame,
    rot: [f32; 2],
    auto_rotate: bool,
    exiting: Arc<AtomicBool>,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        frame: ViewFrame,
        stop_flag: Arc<AtomicBool>,
    ) -> Self {
        cc.egui_ctx.set_pixels_per_point(1.25);

        Self {
            frame,
            rot: [0.6, -0.8],
            auto_rotate: true,
            exiting: stop_flag,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.exiting.load(Ordering::SeqCst) {
            eprintln!("SIGINT received: closing window.");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if self.auto_rotate {
            let dt = ctx.input(|i| i.stable_dt).min(0.05);
            self.rot[0] += dt * 0.10;
            self.rot[1] += dt * 0.05;
        }

        crate::ui::windows::main_window(ctx, &self.frame, &mut self.rot, &mut self.auto_rotate);
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
