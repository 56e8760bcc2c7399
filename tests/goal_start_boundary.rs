use ordyn::sim::integrate::integrate;
use ordyn::sim::params::{InitialState, SimulationSpec, TimeGrid};

/// Starting exactly at the goal: the gap is 0, the coupling force is 0, so
/// the first derivatives reduce to dO = -delta*O and dE = r1. The depletion
/// term r2*E*|f| vanishes with the force, it does not linger.
#[test]
fn at_goal_start_only_decay_and_recovery_act() {
    let spec = SimulationSpec {
        initial: InitialState {
            order: 1.0,
            energy: 0.5,
        },
        grid: TimeGrid {
            dt: 0.01,
            t_total: 1.0,
        },
        ..Default::default()
    };
    let traj = integrate(&spec);

    assert_eq!(traj.messiness[0], 0.0);
    assert_eq!(traj.order[1], 1.0 + (-0.5) * 0.01);
    assert_eq!(traj.energy[1], 0.5 + 1.0 * 0.01);
    assert_eq!(traj.messiness[1], 1.0 - traj.order[1]);
}

/// Decay then pulls order below the goal, so the gap reopens.
#[test]
fn gap_reopens_after_first_step() {
    let spec = SimulationSpec {
        initial: InitialState {
            order: 1.0,
            energy: 0.5,
        },
        grid: TimeGrid {
            dt: 0.01,
            t_total: 1.0,
        },
        ..Default::default()
    };
    let traj = integrate(&spec);
    assert!(traj.messiness[1] > 0.0);
    assert!(traj.messiness[2] > traj.messiness[1], "gap keeps widening");
}
