use ordyn::sim::integrate::integrate;
use ordyn::sim::params::{Scheme, SimulationSpec, TimeGrid};

fn spec_with_grid(dt: f64, t_total: f64) -> SimulationSpec {
    SimulationSpec {
        grid: TimeGrid { dt, t_total },
        ..Default::default()
    }
}

#[test]
fn default_run_has_twenty_thousand_samples() {
    let traj = integrate(&SimulationSpec::default());
    assert_eq!(traj.len(), 20_000);
    assert_eq!(traj.order.len(), 20_000);
    assert_eq!(traj.energy.len(), 20_000);
    assert_eq!(traj.messiness.len(), 20_000);
}

#[test]
fn scheme_does_not_change_sample_count() {
    let spec = SimulationSpec {
        scheme: Scheme::RungeKutta4,
        grid: TimeGrid {
            dt: 0.01,
            t_total: 2.0,
        },
        ..Default::default()
    };
    assert_eq!(integrate(&spec).len(), 200);
}

#[test]
fn horizon_not_divisible_by_dt_truncates() {
    // 1.0 / 0.3 = 3.33.. -> 3 samples, covering t = 0.0, 0.3, 0.6
    let traj = integrate(&spec_with_grid(0.3, 1.0));
    assert_eq!(traj.len(), 3);
}

#[test]
fn zero_dt_yields_empty_trajectory() {
    let traj = integrate(&spec_with_grid(0.0, 200.0));
    assert!(traj.is_empty());
    assert!(traj.order.is_empty());
    assert!(traj.messiness.is_empty());
}

#[test]
fn single_sample_run_holds_initial_state() {
    // 1.5 / 1.0 -> one sample; no step is taken, only the derived gap
    let traj = integrate(&spec_with_grid(1.0, 1.5));
    assert_eq!(traj.len(), 1);
    assert_eq!(traj.order[0], 0.2);
    assert_eq!(traj.energy[0], 0.5);
    assert_eq!(traj.messiness[0], 0.8);
}
