// File: crates/scatter-core/src/data.rs
// Summary: DataRow model, raw record access helpers, and the CSV row loader.

use std::path::Path;

use tracing::{info, warn};

use crate::error::{ChartError, ChartResult};

/// One plotted observation. Rows are built once at load time and stay
/// immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct DataRow {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub fill: String,
}

/// Borrowed view of one CSV record with header-name field access.
pub struct RawRecord<'a> {
    headers: &'a csv::StringRecord,
    record: &'a csv::StringRecord,
    /// 1-based data row number (header row excluded).
    pub row: usize,
}

impl<'a> RawRecord<'a> {
    /// Field by case-insensitive header name.
    pub fn field(&self, name: &str) -> ChartResult<&'a str> {
        let idx = self
            .headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| ChartError::MissingColumn(name.to_string()))?;
        Ok(self.record.get(idx).unwrap_or("").trim())
    }

    /// Field coerced to a finite f64.
    pub fn number(&self, name: &str) -> ChartResult<f64> {
        let raw = self.field(name)?;
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(ChartError::BadNumber {
                row: self.row,
                field: name.to_string(),
                value: raw.to_string(),
            }),
        }
    }
}

/// What to do with a row whose numeric fields fail coercion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Drop the row and log a warning.
    #[default]
    Skip,
    /// Treat the first bad row as a load failure.
    Strict,
}

/// Load rows from a headered CSV file, mapping each record through `mapper`.
///
/// Structural errors (unreadable file, bad CSV, missing column) always fail.
/// Row-level errors follow `policy`.
pub fn load_rows<F>(path: impl AsRef<Path>, policy: RowPolicy, mapper: F) -> ChartResult<Vec<DataRow>>
where
    F: Fn(&RawRecord<'_>) -> ChartResult<DataRow>,
{
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let raw = RawRecord { headers: &headers, record: &rec, row: i + 1 };
        match mapper(&raw) {
            Ok(row) => out.push(row),
            Err(e) if policy == RowPolicy::Skip && e.is_row_level() => {
                warn!(row = raw.row, error = %e, "skipping malformed row");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(path = %path.display(), rows = out.len(), skipped, "loaded rows");
    Ok(out)
}
