use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub link: String,
}

impl ProjectRecord {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }

    /// Cell text for one grid entry, e.g. "Sky Mapper (https://devpost.com/sky)".
    pub fn grid_cell(&self) -> String {
        format!("{} ({})", self.name, self.link)
    }
}

/// Result of validating one data row against the configured column layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Project(ProjectRecord),
    Skip(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooFewColumns { got: usize, need: usize },
    MissingName,
    MissingLink,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewColumns { got, need } => {
                write!(f, "row has {got} columns, needs at least {need}")
            }
            SkipReason::MissingName => write!(f, "missing project name"),
            SkipReason::MissingLink => write!(f, "missing project link"),
        }
    }
}

/// Validate one raw row. Fields are trimmed; whitespace-only counts as empty.
pub fn validate_row(row: &[String], name_column: usize, link_column: usize) -> RowOutcome {
    let need = name_column.max(link_column) + 1;
    if row.len() < need {
        return RowOutcome::Skip(SkipReason::TooFewColumns {
            got: row.len(),
            need,
        });
    }

    let name = row[name_column].trim();
    let link = row[link_column].trim();
    if name.is_empty() {
        return RowOutcome::Skip(SkipReason::MissingName);
    }
    if link.is_empty() {
        return RowOutcome::Skip(SkipReason::MissingLink);
    }

    RowOutcome::Project(ProjectRecord::new(name, link))
}
