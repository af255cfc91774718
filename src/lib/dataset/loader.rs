use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

use crate::telemetry::LogKey;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("DatasetError: Could not read the dataset file ({0})")]
    Io(#[from] std::io::Error),

    #[error("DatasetError: Could not parse CSV ({0})")]
    Csv(#[from] csv::Error),

    #[error("DatasetError: Invalid year (row: {row}, value: {value})")]
    InvalidYear { row: usize, value: String },

    #[error("DatasetError: Invalid attendance (row: {row}, value: {value})")]
    InvalidAttendance { row: usize, value: String },
}

/// One World Cup final, cleaned and ready to query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub year: u16,
    pub winner: String,
    pub runner_up: String,
    pub score: String,
    pub venue: String,
    pub location: String,
    pub attendance: u32,
}

// Column names as they appear in the header row.
#[derive(Deserialize, Debug)]
struct RawRecord {
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Winners")]
    winners: String,
    #[serde(rename = "Score")]
    score: String,
    #[serde(rename = "Runners-up")]
    runners_up: String,
    #[serde(rename = "Venue")]
    venue: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Attendance")]
    attendance: String,
}

pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<MatchRecord>, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = read_dataset(BufReader::new(file))?;
    tracing::info!(
        r#type = LogKey::DatasetLoaded.to_string().as_str(),
        path = %path.display(),
        records = records.len(),
        "Loaded World Cup dataset"
    );
    Ok(records)
}

/// Reads a dataset whose first line is a title, followed by a header row and
/// one row per final.
pub fn read_dataset<R: BufRead>(mut reader: R) -> Result<Vec<MatchRecord>, DatasetError> {
    let mut title = String::new();
    reader.read_line(&mut title)?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();
    for (index, result) in rdr.deserialize::<RawRecord>().enumerate() {
        let raw = result?;
        let row = index + 1;
        match normalize(raw, row)? {
            Some(record) => records.push(record),
            None => tracing::debug!(
                r#type = LogKey::DatasetRowSkipped.to_string().as_str(),
                row,
                "Skipping row without a year"
            ),
        }
    }
    Ok(records)
}

fn normalize(raw: RawRecord, row: usize) -> Result<Option<MatchRecord>, DatasetError> {
    let year = match raw.year {
        Some(year) if !year.trim().is_empty() => parse_year(&year, row)?,
        _ => return Ok(None),
    };
    Ok(Some(MatchRecord {
        year,
        winner: current_country_name(&raw.winners),
        runner_up: current_country_name(&raw.runners_up),
        score: raw.score,
        venue: raw.venue,
        location: raw.location,
        attendance: parse_attendance(&raw.attendance, row)?,
    }))
}

/// West Germany's titles and final appearances count for Germany.
pub fn current_country_name(name: &str) -> String {
    name.replace("West Germany", "Germany").trim().to_string()
}

pub fn parse_year(value: &str, row: usize) -> Result<u16, DatasetError> {
    match value.trim().parse::<u16>() {
        Ok(year) if (1000..=9999).contains(&year) => Ok(year),
        _ => Err(DatasetError::InvalidYear {
            row,
            value: value.to_string(),
        }),
    }
}

pub fn parse_attendance(value: &str, row: usize) -> Result<u32, DatasetError> {
    value
        .replace(|c: char| c == '"' || c == ',', "")
        .trim()
        .parse::<u32>()
        .map_err(|_| DatasetError::InvalidAttendance {
            row,
            value: value.to_string(),
        })
}
