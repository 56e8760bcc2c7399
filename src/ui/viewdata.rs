use crate::sim::trajectory::Trajectory;

/// Run summary shown in the window header.
#[derive(Clone, Debug, Default)]
pub struct SimulationMeta {
    pub scheme: String,
    pub dt: f64,
    pub t_total: f64,
    pub steps: usize,
    pub goal: f64,
}

/// Snapshot of a finished trajectory handed to the window code.
#[derive(Clone, Debug, Default)]
pub struct ViewFrame {
    pub t: Vec<f64>,
    pub order: Vec<f64>,
    pub energy: Vec<f64>,
    pub messiness: Vec<f64>,
    pub meta: SimulationMeta,
}

impl ViewFrame {
    pub fn from_trajectory(traj: &Trajectory, meta: SimulationMeta) -> Self {
        let t = (0..traj.len()).map(|i| traj.time_at(i)).collect();
        Self {
            t,
            order: traj.order.clone(),
            energy: traj.energy.clone(),
            messiness: traj.messiness.clone(),
            meta,
        }
    }
}
