//! End-to-end replanning scenarios.

use std::f64::consts::SQRT_2;

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use marga_plan::{CostGrid, DStarPlanner, GridCoord, PathFailure};

/// Every consecutive pair must be a finite-cost king move, and the
/// endpoints must match.
fn assert_path_valid(planner: &DStarPlanner<'_>, start: GridCoord, goal: GridCoord) {
    let path = planner.path();
    assert!(!path.is_empty());
    assert_eq!(path[0], start);
    assert_eq!(*path.last().unwrap(), goal);
    for pair in path.windows(2) {
        assert_eq!(pair[0].chebyshev_distance(&pair[1]), 1);
        assert!(planner.grid().is_traversable(pair[0]));
        assert!(planner.grid().is_traversable(pair[1]));
    }
}

#[test]
fn straight_line_on_a_corridor() {
    let mut grid = CostGrid::uniform(5, 1, 1.0);
    let mut planner =
        DStarPlanner::with_defaults(&mut grid, GridCoord::new(0, 0), GridCoord::new(4, 0));

    assert!(planner.replan());
    let expected: Vec<_> = (0..5).map(|x| GridCoord::new(x, 0)).collect();
    assert_eq!(planner.path(), expected.as_slice());
}

#[test]
fn diagonal_across_an_open_grid() {
    let mut grid = CostGrid::uniform(3, 3, 1.0);
    let start = GridCoord::new(0, 0);
    let goal = GridCoord::new(2, 2);
    let mut planner = DStarPlanner::with_defaults(&mut grid, start, goal);

    assert!(planner.replan());
    assert_eq!(planner.path().len(), 3);
    assert_path_valid(&planner, start, goal);
    assert_relative_eq!(planner.path_cost(), 2.0 * SQRT_2, epsilon = 1e-6);
}

#[test]
fn obstacle_insertion_forces_a_detour() {
    let mut grid = CostGrid::uniform(5, 5, 1.0);
    let start = GridCoord::new(0, 0);
    let goal = GridCoord::new(4, 4);
    let mut planner = DStarPlanner::with_defaults(&mut grid, start, goal);

    assert!(planner.replan());
    assert_relative_eq!(planner.path_cost(), 4.0 * SQRT_2, epsilon = 1e-6);

    planner.update(GridCoord::new(2, 2), CostGrid::UNWALKABLE);
    assert!(planner.replan());
    assert_path_valid(&planner, start, goal);
    assert!(!planner.path().contains(&GridCoord::new(2, 2)));
    assert!(planner.path_cost() > 4.0 * SQRT_2 + 1e-6);
}

#[test]
fn sealed_wall_is_unreachable() {
    let mut grid = CostGrid::uniform(3, 3, 1.0);
    for x in 0..3 {
        grid.set_cost(GridCoord::new(x, 1), CostGrid::UNWALKABLE);
    }
    let mut planner =
        DStarPlanner::with_defaults(&mut grid, GridCoord::new(0, 0), GridCoord::new(0, 2));

    assert!(!planner.replan());
    assert!(planner.path().is_empty());
    assert_eq!(planner.last_failure(), Some(PathFailure::Unreachable));
}

#[test]
fn opening_the_wall_restores_a_route() {
    let mut grid = CostGrid::uniform(3, 3, 1.0);
    for x in 0..3 {
        grid.set_cost(GridCoord::new(x, 1), CostGrid::UNWALKABLE);
    }
    let start = GridCoord::new(0, 0);
    let goal = GridCoord::new(0, 2);
    let mut planner = DStarPlanner::with_defaults(&mut grid, start, goal);
    assert!(!planner.replan());

    planner.update(GridCoord::new(1, 1), 1.0);
    assert!(planner.replan());
    assert_path_valid(&planner, start, goal);
    assert!(planner.path().contains(&GridCoord::new(1, 1)));
}

#[test]
fn moving_start_repairs_cheaply() {
    let mut grid = CostGrid::uniform(5, 5, 1.0);
    let start = GridCoord::new(0, 0);
    let goal = GridCoord::new(4, 4);
    let mut planner = DStarPlanner::with_defaults(&mut grid, start, goal);

    assert!(planner.replan());
    planner.update(GridCoord::new(2, 2), CostGrid::UNWALKABLE);
    assert!(planner.replan());

    // Agent takes one step along the repaired path
    let step = planner.path()[1];
    planner.set_start(step);
    assert!(planner.replan());
    assert_path_valid(&planner, step, goal);
    // Repair after motion touches a handful of cells, not the grid
    assert!(planner.last_compute_steps() < 100);
}

#[test]
fn replan_is_idempotent() {
    let mut grid = CostGrid::uniform(6, 6, 1.0);
    let mut planner =
        DStarPlanner::with_defaults(&mut grid, GridCoord::new(0, 3), GridCoord::new(5, 3));

    assert!(planner.replan());
    let first: Vec<_> = planner.path().to_vec();
    assert!(planner.replan());
    assert_eq!(planner.path(), first.as_slice());
}

#[test]
fn noop_cost_update_preserves_the_path() {
    let mut grid = CostGrid::uniform(6, 6, 1.0);
    let mut planner =
        DStarPlanner::with_defaults(&mut grid, GridCoord::new(0, 0), GridCoord::new(5, 5));

    assert!(planner.replan());
    let before: Vec<_> = planner.path().to_vec();

    let on_path = before[2];
    let unchanged = planner.grid().cost(on_path);
    planner.update(on_path, unchanged);
    assert!(planner.replan());
    assert_eq!(planner.path(), before.as_slice());
}

#[test]
fn raise_and_restore_roundtrips() {
    let mut grid = CostGrid::uniform(5, 5, 1.0);
    let mut planner =
        DStarPlanner::with_defaults(&mut grid, GridCoord::new(0, 0), GridCoord::new(4, 4));

    assert!(planner.replan());
    let original: Vec<_> = planner.path().to_vec();

    planner.update(GridCoord::new(2, 2), CostGrid::UNWALKABLE);
    assert!(planner.replan());
    assert!(!planner.path().contains(&GridCoord::new(2, 2)));

    planner.update(GridCoord::new(2, 2), 1.0);
    assert!(planner.replan());
    assert_eq!(planner.path(), original.as_slice());
}

#[test]
fn random_cost_decreases_stay_optimal() {
    let mut rng = StdRng::seed_from_u64(7);
    let size = 15;

    let mut grid = CostGrid::uniform(size as usize, size as usize, 1.0);
    for x in 0..size {
        for y in 0..size {
            grid.set_cost(GridCoord::new(x, y), rng.gen_range(1.0..4.0));
        }
    }

    let start = GridCoord::new(0, 0);
    let goal = GridCoord::new(size - 1, size - 1);
    let mut planner = DStarPlanner::with_defaults(&mut grid, start, goal);
    assert!(planner.replan());

    for _ in 0..8 {
        for _ in 0..3 {
            let cell = GridCoord::new(rng.gen_range(0..size), rng.gen_range(0..size));
            if cell == goal {
                continue;
            }
            // Floor at 1.0 so unit king moves keep the octile
            // heuristic admissible
            let cheaper = (planner.grid().cost(cell) * 0.6).max(1.0);
            planner.update(cell, cheaper);
        }

        assert!(planner.replan());
        assert_path_valid(&planner, start, goal);

        // The incremental repair must land on the same optimum a
        // from-scratch search finds on the current costs.
        let mut fresh_grid = planner.grid().clone();
        let mut fresh = DStarPlanner::with_defaults(&mut fresh_grid, start, goal);
        assert!(fresh.replan());
        assert!(
            (planner.path_cost() - fresh.path_cost()).abs() < 1e-3,
            "incremental cost {} diverged from scratch cost {}",
            planner.path_cost(),
            fresh.path_cost()
        );
    }
}
