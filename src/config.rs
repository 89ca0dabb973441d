//! Deployment settings for the viewer.

use serde::{Deserialize, Serialize};

use crate::engine::{CoordinateMapper, EngineConfig};
use crate::state::playback::{DEFAULT_SPEED_MS, clamp_speed};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const SIMULATION_PATH: &str = "/api/run-simulation/";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Base URL of the simulation backend, without the API path.
    pub api_base: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Pixels per grid unit.
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Radius for towers sent without one and without a frame-wide `T`.
    pub default_tower_radius: f64,
    pub initial_speed_ms: u32,
    pub engine: EngineConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            canvas_width: 1500,
            canvas_height: 1500,
            scale: 50.0,
            offset_x: 100.0,
            offset_y: 20.0,
            default_tower_radius: 3.0,
            initial_speed_ms: DEFAULT_SPEED_MS,
            engine: EngineConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Defaults, with the API base taken from `AIRDEFENSE_API_BASE` at build time.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(base) = option_env!("AIRDEFENSE_API_BASE") {
            cfg.api_base = base.to_string();
        }
        cfg.initial_speed_ms = clamp_speed(cfg.initial_speed_ms);
        cfg
    }

    pub fn simulation_url(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), SIMULATION_PATH)
    }

    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.offset_x, self.offset_y, self.scale)
    }
}
