use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "io error: {err}"),
            ConfigError::Parse(err) => write!(f, "config parse error: {err}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where the project rows come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    Sheets {
        sheet_id: String,
        credentials_path: PathBuf,
    },
    Csv {
        path: PathBuf,
    },
}

/// On-disk shape of the configuration file. Times are "HH:MM" (24h) strings;
/// column indices are 0-based into the source rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub judging_groups: u32,
    pub session_minutes: i64,
    pub break_minutes: i64,
    pub start_time: String,
    pub end_time: String,
    pub name_column: usize,
    pub link_column: usize,
    pub output_path: PathBuf,
    pub source: SourceConfig,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            judging_groups: 4,
            session_minutes: 10,
            break_minutes: 5,
            start_time: "13:00".to_string(),
            end_time: "16:00".to_string(),
            name_column: 2,
            link_column: 1,
            output_path: PathBuf::from("judging_assignments.csv"),
            source: SourceConfig::Csv {
                path: PathBuf::from("projects.csv"),
            },
        }
    }
}

/// Validated configuration handed to the pipeline components.
#[derive(Debug, Clone)]
pub struct Config {
    pub judging_groups: usize,
    pub session: Duration,
    pub break_between: Duration,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub name_column: usize,
    pub link_column: usize,
    pub output_path: PathBuf,
    pub source: SourceConfig,
}

impl ConfigFile {
    /// Parse and validate once at startup.
    pub fn into_config(self) -> ConfigResult<Config> {
        if self.judging_groups == 0 {
            return Err(ConfigError::Invalid(
                "judging_groups must be at least 1".into(),
            ));
        }
        if self.session_minutes <= 0 {
            return Err(ConfigError::Invalid(format!(
                "session_minutes must be positive (got {})",
                self.session_minutes
            )));
        }
        if self.break_minutes < 0 {
            return Err(ConfigError::Invalid(format!(
                "break_minutes must not be negative (got {})",
                self.break_minutes
            )));
        }
        if self.name_column == self.link_column {
            return Err(ConfigError::Invalid(format!(
                "name_column and link_column must differ (both are {})",
                self.name_column
            )));
        }

        let start_time = parse_time(&self.start_time)?;
        let end_time = parse_time(&self.end_time)?;
        if start_time >= end_time {
            return Err(ConfigError::Invalid(format!(
                "start_time {} must be before end_time {}",
                self.start_time, self.end_time
            )));
        }

        Ok(Config {
            judging_groups: self.judging_groups as usize,
            session: Duration::minutes(self.session_minutes),
            break_between: Duration::minutes(self.break_minutes),
            start_time,
            end_time,
            name_column: self.name_column,
            link_column: self.link_column,
            output_path: self.output_path,
            source: self.source,
        })
    }
}

fn parse_time(input: &str) -> ConfigResult<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|e| ConfigError::Invalid(format!("invalid time '{input}': {e}")))
}

/// Load and validate a JSON configuration file. Missing fields fall back to
/// the built-in defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> ConfigResult<Config> {
    let file = File::open(path)?;
    let raw: ConfigFile = serde_json::from_reader(file)?;
    raw.into_config()
}
