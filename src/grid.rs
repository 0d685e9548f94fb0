use crate::project::ProjectRecord;
use crate::timeline::SlotTimeline;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub enum OutputError {
    Io(io::Error),
    Csv(csv::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Io(err) => write!(f, "io error: {err}"),
            OutputError::Csv(err) => write!(f, "csv error: {err}"),
        }
    }
}

impl std::error::Error for OutputError {}

impl From<io::Error> for OutputError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for OutputError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type OutputResult<T> = Result<T, OutputError>;

/// What the writer managed to fit before the end-time boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub slots_written: usize,
    pub max_sessions: usize,
    pub unscheduled: usize,
}

impl WriteSummary {
    pub fn truncated(&self) -> bool {
        self.slots_written < self.max_sessions
    }

    pub fn to_cli_summary(&self) -> String {
        if self.truncated() {
            format!(
                "{} of {} time slots written, {} project(s) left unscheduled",
                self.slots_written, self.max_sessions, self.unscheduled
            )
        } else {
            format!("{} time slots written, all projects scheduled", self.slots_written)
        }
    }
}

/// Write the schedule grid: a header row, then one row per session slot with
/// one column per group. A group with no project at that session gets an
/// empty cell. Generation stops at the first slot that would end past the
/// timeline boundary; the remaining sessions are dropped, which the summary
/// reports rather than treating as an error.
pub fn write_grid<W: io::Write>(
    out: W,
    groups: &[Vec<ProjectRecord>],
    timeline: &SlotTimeline,
) -> OutputResult<WriteSummary> {
    let mut writer = csv::Writer::from_writer(out);

    let mut header = Vec::with_capacity(groups.len() + 1);
    header.push("Time".to_string());
    for index in 0..groups.len() {
        header.push(format!("Team {}", index + 1));
    }
    writer.write_record(&header)?;

    let max_sessions = groups.iter().map(Vec::len).max().unwrap_or(0);

    let mut slots_written = 0;
    for session in 0..max_sessions {
        let Some(slot) = timeline.slot(session) else {
            break;
        };

        let mut row = Vec::with_capacity(groups.len() + 1);
        row.push(slot.format_start());
        for group in groups {
            row.push(
                group
                    .get(session)
                    .map(ProjectRecord::grid_cell)
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&row)?;
        slots_written += 1;
    }
    writer.flush()?;

    let unscheduled = groups
        .iter()
        .map(|group| group.len().saturating_sub(slots_written))
        .sum();

    Ok(WriteSummary {
        slots_written,
        max_sessions,
        unscheduled,
    })
}

/// `write_grid` against a freshly created file. No cleanup of a partial file
/// on error; single-shot operator tool.
pub fn write_grid_to_csv<P: AsRef<Path>>(
    path: P,
    groups: &[Vec<ProjectRecord>],
    timeline: &SlotTimeline,
) -> OutputResult<WriteSummary> {
    let file = File::create(path)?;
    write_grid(file, groups, timeline)
}
