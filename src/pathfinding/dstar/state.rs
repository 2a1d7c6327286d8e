//! Lazy storage for the per-cell search estimates.

use std::collections::HashMap;

use crate::core::GridCoord;

/// Search estimates for one cell.
///
/// `g` is the committed cost-to-goal; `rhs` is the one-step-lookahead
/// value derived from the neighbours. Cells start at (inf, inf).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Estimate {
    pub g: f64,
    pub rhs: f64,
}

impl Default for Estimate {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            rhs: f64::INFINITY,
        }
    }
}

/// Mapping from cell identity to its (g, rhs) pair.
///
/// Entries materialise on first write and are never dropped during a
/// planning episode. The goal's rhs is pinned to zero: reads return 0
/// whether or not the goal is materialised, and writes to it are
/// ignored.
#[derive(Debug)]
pub(crate) struct EstimateStore {
    goal: GridCoord,
    estimates: HashMap<GridCoord, Estimate>,
}

impl EstimateStore {
    pub(crate) fn new(goal: GridCoord) -> Self {
        Self {
            goal,
            estimates: HashMap::new(),
        }
    }

    /// Committed cost-to-goal of a cell; infinity when untouched.
    #[inline]
    pub(crate) fn g(&self, cell: GridCoord) -> f64 {
        self.estimates.get(&cell).map_or(f64::INFINITY, |e| e.g)
    }

    #[inline]
    pub(crate) fn set_g(&mut self, cell: GridCoord, value: f64) {
        self.estimates.entry(cell).or_default().g = value;
    }

    /// One-step-lookahead value of a cell; zero for the goal,
    /// infinity when untouched.
    #[inline]
    pub(crate) fn rhs(&self, cell: GridCoord) -> f64 {
        if cell == self.goal {
            return 0.0;
        }
        self.estimates.get(&cell).map_or(f64::INFINITY, |e| e.rhs)
    }

    #[inline]
    pub(crate) fn set_rhs(&mut self, cell: GridCoord, value: f64) {
        if cell == self.goal {
            return;
        }
        self.estimates.entry(cell).or_default().rhs = value;
    }

    /// Ensure a cell has a materialised entry.
    #[inline]
    pub(crate) fn materialize(&mut self, cell: GridCoord) {
        self.estimates.entry(cell).or_default();
    }

    /// Number of materialised cells.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.estimates.len()
    }

    /// Materialised entries, in no particular order.
    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (GridCoord, Estimate)> + '_ {
        self.estimates.iter().map(|(c, e)| (*c, *e))
    }
}
