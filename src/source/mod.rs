use crate::project::{ProjectRecord, RowOutcome, SkipReason, validate_row};
use std::fmt;
use std::io;

pub mod file;
pub mod sheets;

pub use file::CsvSource;
pub use sheets::SheetsSource;

#[derive(Debug)]
pub enum SourceError {
    Io(io::Error),
    Http(reqwest::Error),
    Csv(csv::Error),
    Api { status: u16, message: String },
    Empty,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io(err) => write!(f, "io error: {err}"),
            SourceError::Http(err) => write!(f, "http error: {err}"),
            SourceError::Csv(err) => write!(f, "csv error: {err}"),
            SourceError::Api { status, message } => {
                write!(f, "sheets api returned status {status}: {message}")
            }
            SourceError::Empty => write!(f, "source contained no data rows"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<io::Error> for SourceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<csv::Error> for SourceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type SourceResult<T> = Result<T, SourceError>;

/// A provider of raw tabular rows, header row included.
pub trait RowSource {
    fn fetch_rows(&self) -> SourceResult<Vec<Vec<String>>>;
}

/// A data row that failed validation. `row_number` is 1-based and counts the
/// header, matching how the row appears in the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub row_number: usize,
    pub reason: SkipReason,
    pub cells: Vec<String>,
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Skipping row {} ({}): {:?}",
            self.row_number, self.reason, self.cells
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub projects: Vec<ProjectRecord>,
    pub skipped: Vec<SkippedRow>,
}

/// Fetch all rows from the source and turn them into project records.
///
/// Row 0 is the header and is skipped. Rows failing validation are dropped
/// and recorded in the report; a source with no data rows at all is an error
/// and nothing downstream runs.
pub fn load_projects(
    source: &dyn RowSource,
    name_column: usize,
    link_column: usize,
) -> SourceResult<LoadReport> {
    let rows = source.fetch_rows()?;
    if rows.len() < 2 {
        return Err(SourceError::Empty);
    }

    let mut projects = Vec::new();
    let mut skipped = Vec::new();
    for (index, row) in rows.iter().enumerate().skip(1) {
        match validate_row(row, name_column, link_column) {
            RowOutcome::Project(project) => projects.push(project),
            RowOutcome::Skip(reason) => skipped.push(SkippedRow {
                row_number: index + 1,
                reason,
                cells: row.clone(),
            }),
        }
    }

    Ok(LoadReport { projects, skipped })
}
