use crate::sim::params::{InitialState, ModelParams, Scheme, SimulationSpec, TimeGrid};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "ModelConfig::default_alpha")]
    pub alpha: f64,
    #[serde(default = "ModelConfig::default_delta")]
    pub delta: f64,
    #[serde(default = "ModelConfig::default_r1")]
    pub r1: f64,
    #[serde(default = "ModelConfig::default_r2")]
    pub r2: f64,
    #[serde(default = "ModelConfig::default_goal")]
    pub goal: f64,
}

impl ModelConfig {
    fn default_alpha() -> f64 {
        2.0
    }
    fn default_delta() -> f64 {
        0.5
    }
    fn default_r1() -> f64 {
        1.0
    }
    fn default_r2() -> f64 {
        1.2
    }
    fn default_goal() -> f64 {
        1.0
    }

    pub fn params(&self) -> ModelParams {
        ModelParams {
            alpha: self.alpha,
            delta: self.delta,
            r1: self.r1,
            r2: self.r2,
            goal: self.goal,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            alpha: Self::default_alpha(),
            delta: Self::default_delta(),
            r1: Self::default_r1(),
            r2: Self::default_r2(),
            goal: Self::default_goal(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialConfig {
    #[serde(default = "InitialConfig::default_order")]
    pub order: f64,
    #[serde(default = "InitialConfig::default_energy")]
    pub energy: f64,
}

impl InitialConfig {
    fn default_order() -> f64 {
        0.2
    }
    fn default_energy() -> f64 {
        0.5
    }

    pub fn state(&self) -> InitialState {
        InitialState {
            order: self.order,
            energy: self.energy,
        }
    }
}

impl Default for InitialConfig {
    fn default() -> Self {
        Self {
            order: Self::default_order(),
            energy: Self::default_energy(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationConfig {
    #[serde(default = "IntegrationConfig::default_dt")]
    pub dt: f64,
    #[serde(default = "IntegrationConfig::default_t_total")]
    pub t_total: f64,
    #[serde(default)]
    pub scheme: Scheme,
}

impl IntegrationConfig {
    fn default_dt() -> f64 {
        0.01
    }
    fn default_t_total() -> f64 {
        200.0
    }

    pub fn grid(&self) -> TimeGrid {
        TimeGrid {
            dt: self.dt,
            t_total: self.t_total,
        }
    }
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            dt: Self::default_dt(),
            t_total: Self::default_t_total(),
            scheme: Scheme::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "RenderConfig::default_png_path")]
    pub png_path: String,
    #[serde(default = "RenderConfig::default_yaw")]
    pub yaw: f64,
    #[serde(default = "RenderConfig::default_pitch")]
    pub pitch: f64,
    #[serde(default = "RenderConfig::default_scale")]
    pub scale: f64,
}

impl RenderConfig {
    fn default_png_path() -> String {
        "target/plots/trajectory_oem.png".to_string()
    }
    fn default_yaw() -> f64 {
        0.7
    }
    fn default_pitch() -> f64 {
        0.3
    }
    fn default_scale() -> f64 {
        0.9
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            png_path: Self::default_png_path(),
            yaw: Self::default_yaw(),
            pitch: Self::default_pitch(),
            scale: Self::default_scale(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub initial: InitialConfig,
    #[serde(default)]
    pub integration: IntegrationConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl AppConfig {
    pub fn simulation_spec(&self) -> SimulationSpec {
        SimulationSpec {
            model: self.model.params(),
            initial: self.initial.state(),
            grid: self.integration.grid(),
            scheme: self.integration.scheme,
        }
    }

    fn round_f64(x: f64) -> f64 {
        (x * 1_000_000.0).round() / 1_000_000.0
    }

    fn format_f64_compact(x: f64) -> String {
        let mut s = format!("{:.6}", x);
        while s.contains('.') && s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        if s.is_empty() { "0".to_string() } else { s }
    }

    fn rounded(mut self) -> Self {
        self.model.alpha = Self::round_f64(self.model.alpha);
        self.model.delta = Self::round_f64(self.model.delta);
        self.model.r1 = Self::round_f64(self.model.r1);
        self.model.r2 = Self::round_f64(self.model.r2);
        self.model.goal = Self::round_f64(self.model.goal);
        self.initial.order = Self::round_f64(self.initial.order);
        self.initial.energy = Self::round_f64(self.initial.energy);
        self.integration.dt = Self::round_f64(self.integration.dt);
        self.integration.t_total = Self::round_f64(self.integration.t_total);
        self.render.yaw = Self::round_f64(self.render.yaw);
        self.render.pitch = Self::round_f64(self.render.pitch);
        self.render.scale = Self::round_f64(self.render.scale);
        self
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        let default_cfg = Self::default().rounded();
        if let Ok(text) = toml::to_string_pretty(&default_cfg) {
            let mut commented = String::new();
            for line in text.lines() {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    commented.push('\n');
                } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                    commented.push_str(line);
                    commented.push('\n');
                } else {
                    let mut out_line = line.to_string();
                    if let Some((lhs, rhs)) = line.split_once('=') {
                        let rhs_trim = rhs.trim();
                        let has_decimal = rhs_trim.contains('.');
                        if (has_decimal || rhs_trim.contains('e') || rhs_trim.contains('E'))
                            && !rhs_trim.contains('"')
                            && rhs_trim != "true"
                            && rhs_trim != "false"
                        {
                            if let Ok(val) = rhs_trim.parse::<f64>() {
                                let mut formatted = Self::format_f64_compact(val);
                                if has_decimal && !formatted.contains('.') {
                                    formatted.push_str(".0");
                                }
                                out_line = format!("{} = {}", lhs.trim(), formatted);
                            }
                        }
                    }
                    commented.push_str("# ");
                    commented.push_str(&out_line);
                    commented.push('\n');
                }
            }
            if let Err(err) = fs::write(path_obj, commented) {
                eprintln!("Failed to write default config to {path}: {err}");
            }
        } else {
            eprintln!("Failed to serialize default config; continuing with defaults");
        }
        default_cfg
    }
}
