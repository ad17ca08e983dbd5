use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

/// Invalid argument passed to a grid or a threshold estimator.
/// Every variant is raised before any state is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("grid dimension must be > 0, got {0}")]
    InvalidDimension(usize),
    #[error("row index {index} out of bounds, expected value in [1, {dimension}]")]
    RowOutOfBounds { index: usize, dimension: usize },
    #[error("column index {index} out of bounds, expected value in [1, {dimension}]")]
    ColumnOutOfBounds { index: usize, dimension: usize },
    #[error("number of trials must be > 0, got {0}")]
    InvalidTrials(usize),
}

////////////////////////////////////////////////////////////////////////////////

pub type Result<T> = std::result::Result<T, Error>;
