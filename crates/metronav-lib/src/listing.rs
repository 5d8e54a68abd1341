//! Reader for the comma-separated station listing.
//!
//! The listing is a sequence of newline-delimited records:
//!
//! - one field starts a new line-section (`Red`),
//! - two fields are a station and its cumulative distance (`Alpha,3.5`),
//! - three fields additionally name a line the station interchanges with
//!   (`Central,9,Blue`).
//!
//! A single trailing comma is tolerated and fields are trimmed. The format
//! has no quoting, so a `"` anywhere in a field is rejected. Parsing stops
//! at the first malformed record because skipping one would silently join the
//! stations either side of it.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{Error, Result};

/// A station entry within a line-section.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    pub name: String,
    /// Cumulative distance marker along the line.
    pub distance: f64,
    /// Line this station interchanges with, if any.
    pub interchange: Option<String>,
}

/// A maximal run of consecutive stations belonging to one named line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineSection {
    pub name: String,
    pub stations: Vec<StationRecord>,
}

impl LineSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stations: Vec::new(),
        }
    }

    /// Append a plain station record.
    pub fn station(mut self, name: impl Into<String>, distance: f64) -> Self {
        self.stations.push(StationRecord {
            name: name.into(),
            distance,
            interchange: None,
        });
        self
    }

    /// Append a station record that interchanges with `line`.
    pub fn interchange(
        mut self,
        name: impl Into<String>,
        distance: f64,
        line: impl Into<String>,
    ) -> Self {
        self.stations.push(StationRecord {
            name: name.into(),
            distance,
            interchange: Some(line.into()),
        });
        self
    }
}

/// Read and parse a station listing from disk.
pub fn load_listing(path: &Path) -> Result<Vec<LineSection>> {
    let file = File::open(path)?;
    let sections = parse_listing(file)?;
    debug!(
        path = %path.display(),
        sections = sections.len(),
        "loaded station listing"
    );
    Ok(sections)
}

/// Parse a station listing from any reader.
pub fn parse_listing<R: Read>(reader: R) -> Result<Vec<LineSection>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .quoting(false)
        .from_reader(reader);

    let mut sections: Vec<LineSection> = Vec::new();
    let mut record = StringRecord::new();

    while csv_reader.read_record(&mut record)? {
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);
        let fields = listing_fields(&record);
        if fields.iter().any(|field| field.contains('"')) {
            return Err(parse_error(line, "quote characters are not allowed"));
        }

        match fields.as_slice() {
            [] => {}
            [line_name] => {
                require_non_empty(line_name, "line name", line)?;
                sections.push(LineSection::new(*line_name));
            }
            [name, distance, rest @ ..] if rest.len() <= 1 => {
                let Some(section) = sections.last_mut() else {
                    return Err(parse_error(
                        line,
                        "station record appears before any line header",
                    ));
                };

                require_non_empty(name, "station name", line)?;
                let distance = parse_distance(distance, line)?;
                let interchange = match rest.first() {
                    Some(other) => {
                        require_non_empty(other, "interchange line name", line)?;
                        Some(other.to_string())
                    }
                    None => None,
                };

                section.stations.push(StationRecord {
                    name: name.to_string(),
                    distance,
                    interchange,
                });
            }
            _ => {
                return Err(parse_error(
                    line,
                    format!("expected 1 to 3 fields, found {}", fields.len()),
                ));
            }
        }
    }

    Ok(sections)
}

fn listing_fields(record: &StringRecord) -> Vec<&str> {
    let mut fields: Vec<&str> = record.iter().collect();
    if fields.iter().all(|field| field.is_empty()) {
        return Vec::new();
    }
    // Trailing comma.
    if fields.len() > 1 && fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

fn parse_distance(raw: &str, line: u64) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(parse_error(
            line,
            format!("distance '{raw}' is not a finite number"),
        )),
    }
}

fn require_non_empty(value: &str, what: &str, line: u64) -> Result<()> {
    if value.is_empty() {
        return Err(parse_error(line, format!("{what} is empty")));
    }
    Ok(())
}

fn parse_error(line: u64, message: impl Into<String>) -> Error {
    Error::ListingParse {
        line,
        message: message.into(),
    }
}
