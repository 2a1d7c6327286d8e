//! D* Lite planner implementation.

use log::{debug, trace};
use std::f64::consts::SQRT_2;

use crate::core::numeric::{approx_eq, approx_greater, approx_less};
use crate::core::GridCoord;
use crate::grid::CostGrid;

use super::queue::OpenList;
use super::state::EstimateStore;
use super::types::{DStarConfig, Key, PathFailure};

/// Incremental shortest-path planner over a mutable cost grid.
///
/// The planner keeps two cost-to-goal estimates per touched cell: the
/// committed value `g` and the one-step lookahead `rhs`. Cells where
/// the two disagree sit on an open list ordered by a two-component
/// key; [`replan`](DStarPlanner::replan) drains the inconsistent
/// region until the start cell is settled, then walks minimum-cost
/// successors to extract the path. When the host observes a changed
/// traversal cost it reports it through
/// [`update`](DStarPlanner::update), and the next replan repairs only
/// the affected region instead of searching from scratch.
///
/// The planner holds the exclusive borrow of the grid for its
/// lifetime, so every cost change of an episode flows through
/// `update` and the search state cannot silently go stale.
pub struct DStarPlanner<'a> {
    grid: &'a mut CostGrid,
    config: DStarConfig,
    start: GridCoord,
    goal: GridCoord,
    /// Start position at the time km was last folded
    last: GridCoord,
    /// Key offset absorbing heuristic drift as the start moves
    km: f64,
    open: OpenList,
    estimates: EstimateStore,
    path: Vec<GridCoord>,
    last_failure: Option<PathFailure>,
    compute_steps: usize,
}

impl<'a> DStarPlanner<'a> {
    /// Create a planner for a start/goal pair on the given grid.
    pub fn new(
        grid: &'a mut CostGrid,
        start: GridCoord,
        goal: GridCoord,
        config: DStarConfig,
    ) -> Self {
        let mut planner = Self {
            grid,
            config,
            start,
            goal,
            last: start,
            km: 0.0,
            open: OpenList::new(),
            estimates: EstimateStore::new(goal),
            path: Vec::new(),
            last_failure: None,
            compute_steps: 0,
        };

        planner.estimates.materialize(goal);
        let key = planner.calculate_key(goal);
        planner.open.insert(goal, key);

        planner
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a mut CostGrid, start: GridCoord, goal: GridCoord) -> Self {
        Self::new(grid, start, goal, DStarConfig::default())
    }

    /// The path produced by the last successful replan; empty after a
    /// failed one.
    pub fn path(&self) -> &[GridCoord] {
        &self.path
    }

    /// Current start cell
    pub fn start(&self) -> GridCoord {
        self.start
    }

    /// Move the start, typically to the next cell of the current path
    /// as the agent advances. The km offset is re-anchored on the next
    /// [`update`](DStarPlanner::update) call.
    pub fn set_start(&mut self, start: GridCoord) {
        self.start = start;
    }

    /// The goal cell this planner searches towards.
    ///
    /// The goal is fixed for the lifetime of the planner: the search
    /// state pins rhs(goal) to zero and anchors the km offset to the
    /// original goal, so retargeting means constructing a new planner.
    pub fn goal(&self) -> GridCoord {
        self.goal
    }

    /// Read-only view of the underlying grid
    pub fn grid(&self) -> &CostGrid {
        self.grid
    }

    /// Why the last replan returned false, if it did
    pub fn last_failure(&self) -> Option<PathFailure> {
        self.last_failure
    }

    /// Repair-loop expansions spent by the last replan
    pub fn last_compute_steps(&self) -> usize {
        self.compute_steps
    }

    /// Total edge cost along the current path (zero when empty)
    pub fn path_cost(&self) -> f64 {
        self.path
            .windows(2)
            .map(|pair| self.edge_cost(pair[0], pair[1]))
            .sum()
    }

    /// Report that a cell's traversal cost has changed.
    ///
    /// Folds the heuristic drift since the last report into the km
    /// offset, writes the new cost to the grid, refreshes the cell's
    /// lookahead from the current cost field and reconciles its open
    /// list membership. Cost changes on the goal are ignored.
    pub fn update(&mut self, cell: GridCoord, cost: f64) {
        if cell == self.goal {
            trace!("[DStar] update: ignoring cost change on goal");
            return;
        }
        if !self.grid.is_valid_coord(cell) {
            debug!(
                "[DStar] update: ({},{}) outside the grid, ignoring",
                cell.x, cell.y
            );
            return;
        }

        self.km += self.heuristic(self.last, self.start);
        self.last = self.start;

        self.estimates.materialize(cell);
        self.grid.set_cost(cell, cost);

        // Membership reconciliation alone cannot see a cost change on
        // a locally consistent cell, so re-derive its lookahead first.
        let rhs = self.lookahead(cell);
        self.estimates.set_rhs(cell, rhs);
        self.update_vertex(cell);
    }

    /// Recompute the path from the current start.
    ///
    /// Returns false when the goal is unreachable or the repair loop
    /// hit its expansion cap; the path is empty in that case and
    /// [`last_failure`](DStarPlanner::last_failure) names the reason.
    pub fn replan(&mut self) -> bool {
        trace!(
            "[DStar] replan: start=({},{}) goal=({},{}) open={}",
            self.start.x,
            self.start.y,
            self.goal.x,
            self.goal.y,
            self.open.len()
        );
        self.path.clear();
        self.last_failure = None;

        if let Err(failure) = self.compute() {
            debug!(
                "[DStar] FAILED: expansion cap ({}) hit before convergence",
                self.config.max_steps
            );
            self.last_failure = Some(failure);
            return false;
        }

        if self.estimates.g(self.start).is_infinite() {
            debug!(
                "[DStar] FAILED: goal unreachable from ({},{})",
                self.start.x, self.start.y
            );
            self.last_failure = Some(PathFailure::Unreachable);
            return false;
        }

        let mut current = self.start;
        self.path.push(current);
        let max_len = self.grid.cell_count();

        while current != self.goal {
            let Some(next) = self.min_successor(current) else {
                debug!(
                    "[DStar] FAILED: no finite successor at ({},{})",
                    current.x, current.y
                );
                self.path.clear();
                self.last_failure = Some(PathFailure::Unreachable);
                return false;
            };
            self.path.push(next);
            current = next;

            if self.path.len() > max_len {
                debug!("[DStar] FAILED: path walk exceeded {} cells", max_len);
                self.path.clear();
                self.last_failure = Some(PathFailure::StepLimitExceeded);
                return false;
            }
        }

        trace!(
            "[DStar] SUCCESS: path length={} cells, cost={:.3}, expansions={}",
            self.path.len(),
            self.path_cost(),
            self.compute_steps
        );
        true
    }

    /// Priority key of a cell under the current start and km offset
    fn calculate_key(&self, cell: GridCoord) -> Key {
        let best = self.estimates.g(cell).min(self.estimates.rhs(cell));
        Key::new(best + self.heuristic(self.start, cell) + self.km, best)
    }

    /// Octile distance, the exact king-move metric of this grid
    fn heuristic(&self, a: GridCoord, b: GridCoord) -> f64 {
        a.octile_distance(&b)
    }

    /// Cost of the step between two adjacent cells: the mean of the
    /// two cell costs, scaled by sqrt(2) on diagonals. Infinite when
    /// either endpoint is unwalkable.
    fn edge_cost(&self, a: GridCoord, b: GridCoord) -> f64 {
        let cost_a = self.grid.cost(a);
        let cost_b = self.grid.cost(b);
        if cost_a == CostGrid::UNWALKABLE || cost_b == CostGrid::UNWALKABLE {
            return CostGrid::UNWALKABLE;
        }

        let diagonal = a.manhattan_distance(&b) > 1;
        let scale = if diagonal { SQRT_2 } else { 1.0 };
        scale * (cost_a + cost_b) / 2.0
    }

    /// One-step lookahead: minimum over the non-null neighbours of
    /// cost(cell, v) + g(v), infinite when no finite candidate exists
    fn lookahead(&self, cell: GridCoord) -> f64 {
        let mut best = f64::INFINITY;
        for v in self.grid.neighbors(cell).into_iter().flatten() {
            let cost = self.edge_cost(cell, v);
            if cost.is_infinite() {
                continue;
            }
            let g = self.estimates.g(v);
            if g.is_infinite() {
                continue;
            }
            if approx_less(cost + g, best) {
                best = cost + g;
            }
        }
        best
    }

    /// Successor minimising cost(cell, v) + g(v), skipping infinite
    /// candidates. Ties resolve to the first neighbour in enumeration
    /// order.
    fn min_successor(&self, cell: GridCoord) -> Option<GridCoord> {
        let mut best = None;
        let mut best_cost = f64::INFINITY;
        for v in self.grid.neighbors(cell).into_iter().flatten() {
            let cost = self.edge_cost(cell, v);
            let g = self.estimates.g(v);
            if cost.is_infinite() || g.is_infinite() {
                continue;
            }
            if approx_less(cost + g, best_cost) {
                best_cost = cost + g;
                best = Some(v);
            }
        }
        best
    }

    /// Reconcile a cell's open list membership with its local
    /// consistency: inconsistent cells sit on the list under their
    /// current key, consistent cells do not.
    fn update_vertex(&mut self, cell: GridCoord) {
        let inconsistent = !approx_eq(self.estimates.g(cell), self.estimates.rhs(cell));
        let queued = self.open.contains(cell);

        if inconsistent {
            let key = self.calculate_key(cell);
            if queued {
                self.open.update(cell, key);
            } else {
                self.open.insert(cell, key);
            }
        } else if queued {
            self.open.remove(cell);
        }
    }

    /// Repair loop: process the open list until the start cell is
    /// consistent and no queued key precedes it, or the list drains.
    fn compute(&mut self) -> Result<(), PathFailure> {
        self.compute_steps = 0;

        loop {
            // An empty list means the inconsistent region is fully
            // repaired; reachability is judged on g(start) afterwards.
            let Some((key_old, u)) = self.open.peek() else {
                return Ok(());
            };

            let start_settled =
                approx_eq(self.estimates.rhs(self.start), self.estimates.g(self.start));
            if key_old >= self.calculate_key(self.start) && start_settled {
                return Ok(());
            }

            self.compute_steps += 1;
            if self.compute_steps > self.config.max_steps {
                return Err(PathFailure::StepLimitExceeded);
            }

            let key_new = self.calculate_key(u);
            if key_old < key_new {
                // Stale key from an earlier start position; refile.
                self.open.update(u, key_new);
            } else if approx_greater(self.estimates.g(u), self.estimates.rhs(u)) {
                // Overconsistent: commit the improvement and relax the
                // neighbours through u.
                let g = self.estimates.rhs(u);
                self.estimates.set_g(u, g);
                self.open.remove(u);

                for v in self.grid.neighbors(u).into_iter().flatten() {
                    if v != self.goal {
                        let through = self.edge_cost(v, u) + g;
                        let rhs = self.estimates.rhs(v);
                        self.estimates.set_rhs(v, rhs.min(through));
                    }
                    self.update_vertex(v);
                }
            } else {
                // Underconsistent: retract the estimate and re-derive
                // the lookahead from what remains.
                self.estimates.set_g(u, f64::INFINITY);
                if u != self.goal {
                    let rhs = self.lookahead(u);
                    self.estimates.set_rhs(u, rhs);
                }
                self.update_vertex(u);
                for v in self.grid.neighbors(u).into_iter().flatten() {
                    self.update_vertex(v);
                }
            }
        }
    }
}
