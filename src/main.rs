// Entry point: runs the integration, writes requested exports, launches the viewer.

use clap::Parser;
use std::path::Path;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tracing::info;

use ordyn::app::App;
use ordyn::cli::Args;
use ordyn::config::AppConfig;
use ordyn::render::csv::write_csv;
use ordyn::render::plot3d::render_png;
use ordyn::sim::integrate::integrate;
use ordyn::ui::viewdata::{SimulationMeta, ViewFrame};

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the export notices.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load_or_default(&args.config);

    let mut spec = config.simulation_spec();
    if let Some(scheme) = args.scheme {
        spec.scheme = scheme;
    }
    if let Some(dt) = args.dt {
        spec.grid.dt = dt;
    }
    if let Some(t_total) = args.t_total {
        spec.grid.t_total = t_total;
    }

    info!(
        "integrating: scheme={} dt={} t_total={} steps={}",
        spec.scheme.label(),
        spec.grid.dt,
        spec.grid.t_total,
        spec.grid.steps()
    );

    let traj = integrate(&spec);
    info!("trajectory ready: {} samples", traj.len());

    // Headless runs always render the 3D plot; windowed runs only when asked.
    let png_target = args
        .png
        .clone()
        .or_else(|| args.nogui.then(|| config.render.png_path.clone()));

    if let Some(path) = png_target {
        if let Err(e) = render_png(
            Path::new(&path),
            &traj,
            config.render.yaw,
            config.render.pitch,
            config.render.scale,
        ) {
            eprintln!("Failed to render {path}: {e}");
            std::process::exit(1);
        }
    }

    if let Some(path) = &args.csv {
        if let Err(e) = write_csv(Path::new(path), &traj) {
            eprintln!("Failed to write {path}: {e}");
            std::process::exit(1);
        }
    }

    if args.nogui {
        return Ok(());
    }

    let meta = SimulationMeta {
        scheme: spec.scheme.label().to_string(),
        dt: spec.grid.dt,
        t_total: spec.grid.t_total,
        steps: traj.len(),
        goal: spec.model.goal,
    };
    let frame = ViewFrame::from_trajectory(&traj, meta);

    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_flag_for_ctrlc = stop_flag.clone();

    ctrlc::set_handler(move || {
        stop_flag_for_ctrlc.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Ordyn",
        native_options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, frame, stop_flag.clone())))),
    )
}
