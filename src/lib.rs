//! # Marga-Plan: Incremental Grid Replanning
//!
//! An incremental shortest-path planner for navigation on a cellular
//! grid under a partially-known cost field, built on the D* Lite
//! algorithm (final, optimised version) of Koenig and Likhachev.
//!
//! The planner computes a least-cost path from a moving start cell to
//! a fixed goal cell. When the agent observes that a previously
//! assumed traversal cost was wrong, it reports the change and the
//! next replan repairs the solution in time proportional to the
//! affected region instead of searching from scratch.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_plan::{CostGrid, DStarPlanner, GridCoord};
//!
//! // 10x10 grid of unit-cost cells with a wall through the middle
//! let mut grid = CostGrid::uniform(10, 10, 1.0);
//! for y in 0..9 {
//!     grid.set_cost(GridCoord::new(5, y), CostGrid::UNWALKABLE);
//! }
//!
//! let mut planner =
//!     DStarPlanner::with_defaults(&mut grid, GridCoord::new(0, 0), GridCoord::new(9, 0));
//! assert!(planner.replan());
//!
//! // The wall turns out to have a gap: report it and repair
//! planner.update(GridCoord::new(5, 0), 1.0);
//! assert!(planner.replan());
//! assert!(planner.path().contains(&GridCoord::new(5, 0)));
//! ```
//!
//! ## Replanning Model
//!
//! The host drives the loop:
//!
//! 1. Construct the planner with a grid, start and goal.
//! 2. Call [`DStarPlanner::replan`] and follow the returned path.
//! 3. As the agent moves, advance the start with
//!    [`DStarPlanner::set_start`].
//! 4. When sensing reveals a wrong cost, report each affected cell
//!    through [`DStarPlanner::update`] before the next replan.
//!
//! Movement is 8-connected (king moves): straight steps cost the mean
//! of the two cell costs, diagonal steps scale that by sqrt(2). The
//! heuristic is the octile distance, which is admissible and
//! consistent for this metric.
//!
//! ## Architecture
//!
//! - [`core`]: grid coordinates and tolerant float predicates
//! - [`grid`]: the mutable cost field ([`CostGrid`])
//! - [`pathfinding`]: the D* Lite engine ([`DStarPlanner`])
//! - [`config`]: YAML-loadable settings ([`MargaConfig`])
//!
//! ## Threading
//!
//! The planner is single-threaded and synchronous; nothing suspends or
//! blocks. Share it across threads only behind external
//! synchronisation.

pub mod config;
pub mod core;
pub mod grid;
pub mod pathfinding;

pub use config::MargaConfig;
pub use core::GridCoord;
pub use grid::CostGrid;
pub use pathfinding::{find_path, path_exists, DStarConfig, DStarPlanner, PathFailure};
