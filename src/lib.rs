pub mod config;
pub mod distribute;
pub mod grid;
pub mod project;
pub mod source;
pub mod timeline;

pub use config::{Config, ConfigError, ConfigFile, SourceConfig, load_config};
pub use distribute::distribute;
pub use grid::{OutputError, WriteSummary, write_grid, write_grid_to_csv};
pub use project::{ProjectRecord, RowOutcome, SkipReason, validate_row};
pub use source::{CsvSource, LoadReport, RowSource, SheetsSource, SkippedRow, SourceError, load_projects};
pub use timeline::{SlotTimeline, TimeSlot};
