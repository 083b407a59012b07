//! CSV contact list ingestion.
//!
//! Input is `;`-delimited with a header row. Fields are trimmed and empty
//! fields are absent. Unknown columns are ignored; missing columns are absent.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One contact row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactRow {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub title: Option<String>,
    pub birthday: Option<String>,
    pub nameday: Option<String>,
    pub tel_home: Option<String>,
    pub tel_cell: Option<String>,
    pub tel_work: Option<String>,
    pub email_home: Option<String>,
    pub email_work: Option<String>,
    pub relationship: Option<String>,
    pub comment: Option<String>,
}

/// ## Summary
/// Reads all rows from a `;`-delimited CSV source.
///
/// ## Errors
/// Returns an error naming the 1-based data row that could not be read.
pub fn read_rows<R: Read>(source: R) -> Result<Vec<ContactRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    reader
        .deserialize::<ContactRow>()
        .enumerate()
        .map(|(i, row)| row.with_context(|| format!("Failed to read CSV row {}", i + 1)))
        .collect()
}

/// ## Summary
/// Reads all rows from the CSV file at `path`.
///
/// ## Errors
/// Returns an error if the file cannot be opened or a row cannot be read.
pub fn read_rows_from_path(path: &Path) -> Result<Vec<ContactRow>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open contact list {}", path.display()))?;

    let rows = read_rows(file)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Contact list loaded");
    Ok(rows)
}
