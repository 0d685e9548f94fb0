use super::{RowSource, SourceResult};
use std::fs::File;
use std::path::PathBuf;

/// Local delimited file standing in for the remote sheet (offline runs).
/// Records may have ragged lengths; header and width policy belong to the
/// loader, not the reader.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSource for CsvSource {
    fn fetch_rows(&self) -> SourceResult<Vec<Vec<String>>> {
        let file = File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }
}
