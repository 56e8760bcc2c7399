//! Offline 3D rendering of a finished trajectory to PNG.

use std::error::Error;
use std::fs::create_dir_all;
use std::path::Path;

use plotters::prelude::*;

use crate::sim::trajectory::Trajectory;

/// Padded plotting range for one series. Falls back to a fixed symmetric
/// range when the series has no finite values or no spread.
fn padded_range(series: &[f64]) -> (f64, f64) {
    let (mut lo, mut hi) = match Trajectory::finite_extent(series) {
        Some(extent) => extent,
        None => (-1.0, 1.0),
    };
    if (hi - lo).abs() < 1e-9 {
        lo -= 1.0;
        hi += 1.0;
    }
    let pad = 0.05 * (hi - lo);
    (lo - pad, hi + pad)
}

/// Consecutive runs of fully finite samples; non-finite samples split the
/// polyline so a diverged tail shows up as a missing segment.
fn finite_runs(traj: &Trajectory) -> Vec<Vec<(f64, f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (o, e, m) in traj.points() {
        if o.is_finite() && e.is_finite() && m.is_finite() {
            current.push((o, e, m));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Render the trajectory polyline into a 3D chart at `out_path`.
pub fn render_png(
    out_path: &Path,
    traj: &Trajectory,
    yaw: f64,
    pitch: f64,
    scale: f64,
) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = out_path.parent() {
        if !dir.as_os_str().is_empty() {
            create_dir_all(dir)?;
        }
    }

    let (o_lo, o_hi) = padded_range(&traj.order);
    let (e_lo, e_hi) = padded_range(&traj.energy);
    let (m_lo, m_hi) = padded_range(&traj.messiness);

    let root = BitMapBackend::new(out_path, (1200, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Order / Energy / Messiness Trajectory", ("sans-serif", 24))
        .margin(20)
        .build_cartesian_3d(o_lo..o_hi, e_lo..e_hi, m_lo..m_hi)?;

    chart.with_projection(|mut pb| {
        pb.yaw = yaw;
        pb.pitch = pitch;
        pb.scale = scale;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    for run in finite_runs(traj) {
        chart.draw_series(LineSeries::new(run, &RED))?;
    }

    // Axis names at the high end of each axis; the 3D mesh itself only
    // carries tick labels.
    let label_style = TextStyle::from(("sans-serif", 18)).color(&BLACK);
    let anchors = [
        ((o_hi, e_lo, m_lo), "Order (O)"),
        ((o_lo, e_hi, m_lo), "Energy (E)"),
        ((o_lo, e_lo, m_hi), "Messiness (M)"),
    ];
    for (coord, name) in anchors {
        let pos = chart.plotting_area().map_coordinate(&coord);
        root.draw(&Text::new(name, pos, label_style.clone()))?;
    }

    root.present()?;
    println!("Saved 3D trajectory to {}", out_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_range_spreads_degenerate_series() {
        let (lo, hi) = padded_range(&[0.5, 0.5, 0.5]);
        assert!(lo < 0.5 && hi > 0.5);
        assert!(hi - lo > 1.0);

        let (lo, hi) = padded_range(&[f64::NAN, f64::INFINITY]);
        assert!(lo < -1.0 && hi > 1.0);
    }

    #[test]
    fn finite_runs_split_on_non_finite_samples() {
        let mut traj = Trajectory::zeroed(5, 1.0);
        traj.order = vec![0.1, 0.2, f64::NAN, 0.4, 0.5];
        traj.energy = vec![1.0; 5];
        traj.messiness = vec![0.9, 0.8, f64::NAN, 0.6, 0.5];
        let runs = finite_runs(&traj);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1].len(), 2);
        assert_eq!(runs[1][0], (0.4, 1.0, 0.6));
    }
}
