//! Grid configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Grid settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSection {
    /// Grid width in cells
    #[serde(default = "defaults::grid_width")]
    pub width: usize,

    /// Grid height in cells
    #[serde(default = "defaults::grid_height")]
    pub height: usize,

    /// Initial traversal cost of every cell
    #[serde(default = "defaults::cell_cost")]
    pub cell_cost: f64,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            cell_cost: 1.0,
        }
    }
}
