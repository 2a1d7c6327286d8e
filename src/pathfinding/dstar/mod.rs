//! D* Lite incremental replanning.
//!
//! Implements the final, optimised form of the D* Lite algorithm
//! (Koenig and Likhachev): a backwards search from the goal that keeps
//! per-cell `g`/`rhs` estimates and repairs only the region invalidated
//! by observed cost changes, instead of replanning from scratch. The
//! priority keys carry a running `km` offset so the queue survives the
//! agent moving between replans.

mod planner;
mod queue;
mod state;
mod types;

pub use planner::DStarPlanner;
pub use types::{DStarConfig, PathFailure};

use crate::core::GridCoord;
use crate::grid::CostGrid;

/// One-shot path query with default configuration
pub fn find_path(grid: &mut CostGrid, start: GridCoord, goal: GridCoord) -> Option<Vec<GridCoord>> {
    let mut planner = DStarPlanner::with_defaults(grid, start, goal);
    if planner.replan() {
        Some(planner.path().to_vec())
    } else {
        None
    }
}

/// Check if any path exists between two cells
pub fn path_exists(grid: &mut CostGrid, start: GridCoord, goal: GridCoord) -> bool {
    find_path(grid, start, goal).is_some()
}
