// error.rs - Error type for grid construction and indexing

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the {n_rows}x{n_cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        n_rows: usize,
        n_cols: usize,
    },

    #[error("grid dimensions must be positive, got {n_rows}x{n_cols}")]
    InvalidDimensions { n_rows: usize, n_cols: usize },

    #[error("cell size must be a positive finite number, got {0}")]
    InvalidCellSize(f32),

    #[error("no preset pattern named {0:?}")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
