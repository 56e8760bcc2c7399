use clap::Parser;

use crate::sim::params::Scheme;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "ordyn.toml")]
    pub config: String,

    /// Run without GUI (headless)
    #[arg(long, default_value_t = false)]
    pub nogui: bool,

    /// Write the 3D trajectory PNG to this path
    #[arg(long, value_name = "PATH")]
    pub png: Option<String>,

    /// Write the sampled series CSV to this path
    #[arg(long, value_name = "PATH")]
    pub csv: Option<String>,

    /// Integration scheme: forward-euler or runge-kutta4 (overrides config)
    #[arg(long, value_name = "SCHEME")]
    pub scheme: Option<Scheme>,

    /// Step size in time units (overrides config)
    #[arg(long, value_name = "DT")]
    pub dt: Option<f64>,

    /// Total simulated time (overrides config)
    #[arg(long, value_name = "T")]
    pub t_total: Option<f64>,
}
