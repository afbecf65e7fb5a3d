// File: crates/scatter-core/src/error.rs
// Summary: Error type for data loading and SVG output.

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("missing column '{0}' in header")]
    MissingColumn(String),

    #[error("row {row}: field '{field}' is not numeric: '{value}'")]
    BadNumber {
        row: usize,
        field: String,
        value: String,
    },
}

impl ChartError {
    /// Whether the error concerns a single row rather than the whole resource.
    /// Row-level errors can be skipped under `RowPolicy::Skip`.
    pub fn is_row_level(&self) -> bool {
        matches!(self, ChartError::BadNumber { .. })
    }
}

/// The one message surfaced in place of the chart when loading fails.
pub const LOAD_FAILURE_MESSAGE: &str = "Could not load the data.";
