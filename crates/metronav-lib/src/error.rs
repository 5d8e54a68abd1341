use thiserror::Error;

use crate::station::StationId;

/// Convenient result alias for the metronav library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a line of the station listing cannot be interpreted.
    #[error("invalid station listing at line {line}: {message}")]
    ListingParse { line: u64, message: String },

    /// Raised when network construction options are out of range.
    #[error("invalid network configuration: {message}")]
    InvalidConfig { message: String },

    /// Raised when a station name could not be found in the network.
    #[error("unknown station name: {name}{}", format_suggestions(.suggestions))]
    UnknownStation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a station exists but is not served by the requested line.
    #[error("station {name} is not on line {line}")]
    UnknownStationOnLine { name: String, line: String },

    /// Raised when a search is given an identifier the network never issued.
    #[error("station id {id} is not part of this network")]
    UnknownStationId { id: StationId },

    /// Raised when a supplied path contains two consecutive stations with no edge between them.
    #[error("stations {from} and {to} are not adjacent")]
    StationsNotAdjacent { from: StationId, to: StationId },

    /// Raised when no route could be found between two stations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any stations.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV tokenizer errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for JSON serialisation errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
