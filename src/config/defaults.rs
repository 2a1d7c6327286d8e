//! Default value functions for serde deserialization.

pub fn grid_width() -> usize {
    64
}

pub fn grid_height() -> usize {
    64
}

pub fn cell_cost() -> f64 {
    1.0
}

pub fn max_steps() -> usize {
    1_000_000
}
