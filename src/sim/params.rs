//! Immutable parameter bundles consumed by the integrator.

use serde::{Deserialize, Serialize};

/// Coupling coefficients of the order/energy model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelParams {
    /// Energy-to-order effectiveness.
    pub alpha: f64,
    /// Order decay rate.
    pub delta: f64,
    /// Energy recovery rate.
    pub r1: f64,
    /// Energy depletion rate.
    pub r2: f64,
    /// Fixed organizational goal for order.
    pub goal: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            alpha: 2.0,
            delta: 0.5,
            r1: 1.0,
            r2: 1.2,
            goal: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialState {
    pub order: f64,
    pub energy: f64,
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            order: 0.2,
            energy: 0.5,
        }
    }
}

/// Uniform time grid: step size and total horizon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeGrid {
    pub dt: f64,
    pub t_total: f64,
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self {
            dt: 0.01,
            t_total: 200.0,
        }
    }
}

impl TimeGrid {
    /// Number of samples on the grid, t_total/dt truncated toward zero.
    /// A non-positive or non-finite dt (or a non-finite horizon) yields 0.
    pub fn steps(&self) -> usize {
        if !self.dt.is_finite() || self.dt <= 0.0 || !self.t_total.is_finite() {
            return 0;
        }
        (self.t_total / self.dt) as usize
    }
}

/// Time-stepping rule used to advance the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    ForwardEuler,
    RungeKutta4,
}

impl Default for Scheme {
    fn default() -> Self {
        Self::ForwardEuler
    }
}

impl Scheme {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ForwardEuler => "forward-euler",
            Self::RungeKutta4 => "runge-kutta4",
        }
    }
}

impl std::str::FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward-euler" => Ok(Self::ForwardEuler),
            "runge-kutta4" => Ok(Self::RungeKutta4),
            other => Err(format!(
                "unknown scheme '{other}' (expected forward-euler or runge-kutta4)"
            )),
        }
    }
}

/// Everything one integration run needs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationSpec {
    pub model: ModelParams,
    pub initial: InitialState,
    pub grid: TimeGrid,
    pub scheme: Scheme,
}
