//! Unified configuration loading.
//!
//! Loads all configuration from a single YAML file. Every section and
//! field is optional; missing values fall back to the defaults in
//! [`defaults`](self::defaults).

mod defaults;
mod error;
mod grid;
mod planner;

pub use error::ConfigLoadError;
pub use grid::GridSection;
pub use planner::{DStarSettings, PlannerSection};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::CostGrid;
use crate::pathfinding::DStarConfig;

/// Full configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSection,

    /// Planner settings
    #[serde(default)]
    pub planner: PlannerSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Build a uniform cost grid with the configured dimensions
    pub fn to_grid(&self) -> CostGrid {
        CostGrid::uniform(self.grid.width, self.grid.height, self.grid.cell_cost)
    }

    /// Convert to DStarConfig
    pub fn to_dstar_config(&self) -> DStarConfig {
        DStarConfig {
            max_steps: self.planner.dstar.max_steps,
        }
    }
}
