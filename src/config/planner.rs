//! Planner configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Planner settings section
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PlannerSection {
    /// D* Lite settings
    #[serde(default)]
    pub dstar: DStarSettings,
}

/// D* Lite algorithm settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DStarSettings {
    /// Maximum repair-loop expansions before a replan gives up
    #[serde(default = "defaults::max_steps")]
    pub max_steps: usize,
}

impl Default for DStarSettings {
    fn default() -> Self {
        Self {
            max_steps: 1_000_000,
        }
    }
}
