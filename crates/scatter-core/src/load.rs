// File: crates/scatter-core/src/load.rs
// Summary: Two-armed load outcome; the single settle point for the data fetch.

use std::path::Path;

use crate::data::{load_rows, DataRow, RawRecord, RowPolicy};
use crate::error::{ChartError, ChartResult};

/// Result of the one asynchronous suspension point: the dataset either
/// arrived or it did not. Consumers dispatch on this exactly once
/// (see `ChartView::from_outcome`) instead of nesting callbacks.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Vec<DataRow>),
    Failed(ChartError),
}

impl LoadOutcome {
    pub fn from_result(res: ChartResult<Vec<DataRow>>) -> Self {
        match res {
            Ok(rows) => LoadOutcome::Loaded(rows),
            Err(e) => LoadOutcome::Failed(e),
        }
    }

    /// Load and settle in one step.
    pub fn load<F>(path: impl AsRef<Path>, policy: RowPolicy, mapper: F) -> Self
    where
        F: Fn(&RawRecord<'_>) -> ChartResult<DataRow>,
    {
        Self::from_result(load_rows(path, policy, mapper))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}
