//! Cost field storage for the planning grid.

use crate::core::GridCoord;

/// Row-major grid of per-cell traversal costs.
///
/// The grid uses a coordinate system where:
/// - (0, 0) is the bottom-left cell
/// - Positive X is to the right (column index)
/// - Positive Y is up (row index)
///
/// Every cell carries a non-negative traversal cost; [`CostGrid::UNWALKABLE`]
/// marks impassable terrain and propagates as infinite edge cost through
/// the planner. Cells outside the grid read as unwalkable.
#[derive(Clone, Debug)]
pub struct CostGrid {
    /// Per-cell traversal costs, row-major
    costs: Vec<f64>,
    /// Grid width in cells
    width: usize,
    /// Grid height in cells
    height: usize,
}

impl CostGrid {
    /// Cost value for impassable terrain
    pub const UNWALKABLE: f64 = f64::INFINITY;

    /// Create a grid with every cell at the given cost
    pub fn uniform(width: usize, height: usize, cost: f64) -> Self {
        Self {
            costs: vec![cost; width * height],
            width,
            height,
        }
    }

    /// Build a grid from row-major cost rows (row 0 is y = 0).
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: &[&[f64]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut costs = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.len(), width, "all rows must have the same length");
            costs.extend_from_slice(row);
        }
        Self {
            costs,
            width,
            height,
        }
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Traversal cost of a cell; out-of-bounds cells read as unwalkable
    #[inline]
    pub fn cost(&self, coord: GridCoord) -> f64 {
        match self.coord_to_index(coord) {
            Some(idx) => self.costs[idx],
            None => Self::UNWALKABLE,
        }
    }

    /// Set the traversal cost of a cell; out-of-bounds coordinates are ignored
    #[inline]
    pub fn set_cost(&mut self, coord: GridCoord, cost: f64) {
        if let Some(idx) = self.coord_to_index(coord) {
            self.costs[idx] = cost;
        }
    }

    /// Is this cell inside the grid and not unwalkable?
    #[inline]
    pub fn is_traversable(&self, coord: GridCoord) -> bool {
        self.cost(coord) != Self::UNWALKABLE
    }

    /// The 8 king-move neighbours of a cell, `None`-padded at the boundary.
    ///
    /// The returned array always has length 8 and preserves the
    /// enumeration order of [`GridCoord::neighbors_8`].
    pub fn neighbors(&self, coord: GridCoord) -> [Option<GridCoord>; 8] {
        let mut out = [None; 8];
        for (slot, n) in out.iter_mut().zip(coord.neighbors_8()) {
            if self.is_valid_coord(n) {
                *slot = Some(n);
            }
        }
        out
    }
}
