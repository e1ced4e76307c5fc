//! Re-validation of a CSV export of the applications spreadsheet.
//!
//! The header row carries the form field names (`fullName`, `track`, `technicalCircle`, ...).
//! Every data row is rebuilt into an [`ApplicationSubmission`] and run through the validator,
//! which catches rows that were edited by hand or submitted before a rule changed.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::workflows::forms::FieldError;

use super::applications::{ApplicationSubmission, ApplicationValidator};

#[derive(Debug)]
pub enum SheetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for SheetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetImportError::Io(err) => write!(f, "failed to read sheet export: {}", err),
            SheetImportError::Csv(err) => write!(f, "invalid sheet CSV data: {}", err),
        }
    }
}

impl std::error::Error for SheetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SheetImportError::Io(err) => Some(err),
            SheetImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SheetImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for SheetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Outcome for one spreadsheet row. `row` is 1-based and excludes the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetRowReport {
    pub row: usize,
    pub full_name: Option<String>,
    pub errors: Vec<FieldError>,
}

impl SheetRowReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SheetAudit {
    pub rows: Vec<SheetRowReport>,
}

impl SheetAudit {
    pub fn valid_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.rows.len() - self.valid_count()
    }

    pub fn invalid_rows(&self) -> impl Iterator<Item = &SheetRowReport> {
        self.rows.iter().filter(|row| !row.is_valid())
    }
}

pub struct SheetAuditor<'a> {
    validator: &'a ApplicationValidator,
}

impl<'a> SheetAuditor<'a> {
    pub fn new(validator: &'a ApplicationValidator) -> Self {
        Self { validator }
    }

    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<SheetAudit, SheetImportError> {
        let file = std::fs::File::open(path)?;
        self.from_reader(file)
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> Result<SheetAudit, SheetImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            // Cells reach the validator untouched, so a rating of " 3" fails here as it does live.
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let mut rows = Vec::new();

        for (index, record) in csv_reader
            .deserialize::<BTreeMap<String, String>>()
            .enumerate()
        {
            let submission = submission_from_row(record?);
            let full_name = submission
                .value("fullName")
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string);
            let errors = match self.validator.validate(&submission) {
                Ok(_) => Vec::new(),
                Err(errors) => errors.into_vec(),
            };

            rows.push(SheetRowReport {
                row: index + 1,
                full_name,
                errors,
            });
        }

        Ok(SheetAudit { rows })
    }
}

fn submission_from_row(mut row: BTreeMap<String, String>) -> ApplicationSubmission {
    let mut take = |key: &str| row.remove(key).filter(|value| !value.trim().is_empty());
    let track = take("track");
    let technical_circle = take("technicalCircle");
    let non_technical_circle = take("nonTechnicalCircle");

    ApplicationSubmission {
        track,
        technical_circle,
        non_technical_circle,
        fields: row
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .collect(),
    }
}
