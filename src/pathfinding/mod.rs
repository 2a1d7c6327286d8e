//! Path planning on the cost grid.
//!
//! This module provides incremental path planning over the cost field:
//!
//! - **D\* Lite**: least-cost paths from a moving start to a fixed
//!   goal, repaired incrementally as traversal costs change
//!
//! ## Replanning loop
//!
//! ```rust,ignore
//! use marga_plan::pathfinding::DStarPlanner;
//!
//! let mut planner = DStarPlanner::with_defaults(&mut grid, start, goal);
//! while planner.replan() {
//!     let step = planner.path()[1];
//!     // ... move the agent, sense the surroundings ...
//!     planner.set_start(step);
//!     for (cell, cost) in observed_changes {
//!         planner.update(cell, cost);
//!     }
//! }
//! ```

pub mod dstar;

pub use dstar::{find_path, path_exists, DStarConfig, DStarPlanner, PathFailure};
