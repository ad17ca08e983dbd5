#![forbid(unsafe_code)]

mod error;
mod grid;
mod stats;
mod union_find;

pub use error::{Error, Result};
pub use grid::Grid;
pub use stats::{run_trial, ThresholdStats, CONFIDENCE_95};
pub use union_find::UnionFind;
