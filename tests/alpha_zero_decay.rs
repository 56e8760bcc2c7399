use ordyn::sim::integrate::integrate;
use ordyn::sim::params::{InitialState, ModelParams, SimulationSpec, TimeGrid};

fn decoupled_spec(energy0: f64) -> SimulationSpec {
    SimulationSpec {
        model: ModelParams {
            alpha: 0.0,
            ..Default::default()
        },
        initial: InitialState {
            order: 0.2,
            energy: energy0,
        },
        grid: TimeGrid {
            dt: 0.01,
            t_total: 1.0,
        },
        ..Default::default()
    }
}

/// With alpha = 0 the order equation collapses to pure exponential decay:
/// each Euler step multiplies order by (1 - delta*dt).
#[test]
fn order_decays_geometrically() {
    let spec = decoupled_spec(0.5);
    let traj = integrate(&spec);
    assert_eq!(traj.len(), 100);

    let ratio = 1.0 - spec.model.delta * spec.grid.dt;
    for i in 0..traj.len() - 1 {
        let observed = traj.order[i + 1] / traj.order[i];
        assert!(
            (observed - ratio).abs() <= 1e-12,
            "step {i}: ratio {observed} vs {ratio}"
        );
    }
    assert!(traj.order[99] < traj.order[0]);
}

/// Energy no longer feeds order, so the order series must ignore the energy
/// initial condition entirely.
#[test]
fn order_is_independent_of_energy_start() {
    let low = integrate(&decoupled_spec(0.5));
    let high = integrate(&decoupled_spec(5.0));
    assert_eq!(low.order, high.order);
    assert_eq!(low.messiness, high.messiness);
    assert!(low.energy != high.energy, "energy series should differ");
}
