//! Explicit time stepping of the coupled order/energy equations.
//!
//! Arithmetic is unguarded: if a step produces Inf or NaN it propagates
//! through the remaining samples and reaches the renderers untouched.

use super::coupling::{recovery_gain, restoring_force};
use super::params::{ModelParams, Scheme, SimulationSpec};
use super::trajectory::Trajectory;

/// Instantaneous derivatives (dO/dt, dE/dt) at state (o, e).
#[inline]
pub fn derivatives(p: &ModelParams, o: f64, e: f64) -> (f64, f64) {
    let m = p.goal - o;
    let force = restoring_force(m);
    let d_order = p.alpha * e * force - p.delta * o;
    let d_energy = p.r1 * recovery_gain(m) - p.r2 * e * force.abs();
    (d_order, d_energy)
}

#[inline]
fn euler_step(p: &ModelParams, o: f64, e: f64, dt: f64) -> (f64, f64) {
    let (d_order, d_energy) = derivatives(p, o, e);
    (o + d_order * dt, e + d_energy * dt)
}

#[inline]
fn rk4_step(p: &ModelParams, o: f64, e: f64, dt: f64) -> (f64, f64) {
    let (k1_o, k1_e) = derivatives(p, o, e);
    let (k2_o, k2_e) = derivatives(p, o + 0.5 * dt * k1_o, e + 0.5 * dt * k1_e);
    let (k3_o, k3_e) = derivatives(p, o + 0.5 * dt * k2_o, e + 0.5 * dt * k2_e);
    let (k4_o, k4_e) = derivatives(p, o + dt * k3_o, e + dt * k3_e);
    (
        o + dt / 6.0 * (k1_o + 2.0 * k2_o + 2.0 * k3_o + k4_o),
        e + dt / 6.0 * (k1_e + 2.0 * k2_e + 2.0 * k3_e + k4_e),
    )
}

/// Run the configured scheme over the whole grid.
///
/// The loop fills messiness only for the indices it visits (0..steps−1);
/// the final element is patched once after the loop so the gap identity
/// `messiness[i] == goal − order[i]` holds at the last sample too. That
/// post-loop write is intentional, not a fixup to fold into the loop.
pub fn integrate(spec: &SimulationSpec) -> Trajectory {
    let steps = spec.grid.steps();
    let dt = spec.grid.dt;
    let mut traj = Trajectory::zeroed(steps, dt);
    if steps == 0 {
        return traj;
    }

    traj.order[0] = spec.initial.order;
    traj.energy[0] = spec.initial.energy;

    for i in 0..steps - 1 {
        let o = traj.order[i];
        let e = traj.energy[i];
        traj.messiness[i] = spec.model.goal - o;
        let (next_o, next_e) = match spec.scheme {
            Scheme::ForwardEuler => euler_step(&spec.model, o, e, dt),
            Scheme::RungeKutta4 => rk4_step(&spec.model, o, e, dt),
        };
        traj.order[i + 1] = next_o;
        traj.energy[i + 1] = next_e;
    }

    traj.messiness[steps - 1] = spec.model.goal - traj.order[steps - 1];

    traj
}
