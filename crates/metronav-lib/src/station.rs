//! Station identities and the registry that issues them.
//!
//! A [`StationId`] names a station *on a particular line*: the same physical
//! station served by two lines is two entities joined by an interchange edge.
//! Identifiers are interned in first-encounter order, so building a registry
//! from the same listing always yields the same identifiers.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Identifier for a station on a specific line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(u32);

impl StationId {
    /// Id for arena slot `index`. Registry construction is the only caller.
    fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).expect("station count exceeds u32::MAX"))
    }

    /// Position of this station in the registry arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display name and line membership of a station entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationInfo {
    pub name: String,
    pub line: String,
}

/// Arena of stations plus the indexes needed to look them up by name.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    stations: Vec<StationInfo>,
    /// Ids sharing a display name, in first-encounter order.
    by_name: HashMap<String, Vec<StationId>>,
    lines: Vec<String>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `(name, line)`, allocating one if this pair is new.
    ///
    /// Existing entries are never modified.
    pub fn intern(&mut self, name: &str, line: &str) -> StationId {
        if let Some(id) = self.station_id(name, line) {
            return id;
        }

        let id = StationId::from_index(self.stations.len());
        self.stations.push(StationInfo {
            name: name.to_string(),
            line: line.to_string(),
        });
        self.by_name.entry(name.to_string()).or_default().push(id);
        if !self.lines.iter().any(|known| known == line) {
            self.lines.push(line.to_string());
        }
        id
    }

    /// Lookup the id of `name` on `line`.
    pub fn station_id(&self, name: &str, line: &str) -> Option<StationId> {
        self.by_name
            .get(name)?
            .iter()
            .copied()
            .find(|id| self.stations[id.index()].line == line)
    }

    /// First-encountered id carrying the display name `name`.
    pub fn first_by_name(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).and_then(|ids| ids.first().copied())
    }

    /// All ids carrying the display name `name`, in first-encounter order.
    pub fn ids_by_name(&self, name: &str) -> &[StationId] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn contains(&self, id: StationId) -> bool {
        id.index() < self.stations.len()
    }

    pub fn get(&self, id: StationId) -> Option<&StationInfo> {
        self.stations.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Line names in first-encounter order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = (StationId, &StationInfo)> + '_ {
        self.stations
            .iter()
            .enumerate()
            .map(|(index, info)| (StationId::from_index(index), info))
    }

    /// Suggest up to `limit` known display names similar to `name`.
    ///
    /// Matching is case-insensitive; results are ordered by descending
    /// similarity and then alphabetically.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .by_name
            .keys()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
                (score, candidate.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}
