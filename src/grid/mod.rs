//! Grid storage for the cost field the planner searches over.

mod storage;

pub use storage::CostGrid;
