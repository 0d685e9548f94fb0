use super::{RowSource, SourceError, SourceResult};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

const VALUES_ENDPOINT: &str = "https://sheets.googleapis.com/v4/spreadsheets";

// Unqualified range reads the whole first worksheet.
const SHEET_RANGE: &str = "A:ZZ";

/// Reads a Google Sheets document through the spreadsheet `values` API,
/// authenticated with a pre-issued bearer token stored in a local file.
pub struct SheetsSource {
    sheet_id: String,
    credentials_path: PathBuf,
}

/// Response body of the `values` endpoint. `values` is absent entirely when
/// the requested range is empty.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsSource {
    pub fn new(sheet_id: impl Into<String>, credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            credentials_path: credentials_path.into(),
        }
    }

    fn read_token(&self) -> SourceResult<String> {
        let token = fs::read_to_string(&self.credentials_path)?;
        Ok(token.trim().to_string())
    }
}

impl RowSource for SheetsSource {
    fn fetch_rows(&self) -> SourceResult<Vec<Vec<String>>> {
        let token = self.read_token()?;
        let url = format!("{VALUES_ENDPOINT}/{}/values/{SHEET_RANGE}", self.sheet_id);

        let response = reqwest::blocking::Client::new()
            .get(&url)
            .bearer_auth(token)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Api {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        let body: ValueRange = response.json()?;
        Ok(body.values)
    }
}
