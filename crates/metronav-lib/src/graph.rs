use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::listing::LineSection;
use crate::station::{StationId, StationInfo, StationRegistry};

/// Default weight of an interchange edge, in listing distance units.
///
/// This approximates the walk between platforms rather than a measured
/// distance, which is why fares are computed from running distance only.
pub const DEFAULT_INTERCHANGE_PENALTY: f64 = 0.1;

/// Options controlling network construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkConfig {
    /// Weight assigned to every interchange edge.
    pub interchange_penalty: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            interchange_penalty: DEFAULT_INTERCHANGE_PENALTY,
        }
    }
}

impl NetworkConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.interchange_penalty.is_finite() || self.interchange_penalty < 0.0 {
            return Err(Error::InvalidConfig {
                message: format!(
                    "interchange penalty must be a non-negative finite number, got {}",
                    self.interchange_penalty
                ),
            });
        }
        Ok(())
    }
}

/// Classification for the edge used in the network graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EdgeKind {
    /// Consecutive stations on the same line.
    Running,
    /// The same physical station on two different lines.
    Interchange,
}

/// Edge within the network graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: StationId,
    pub kind: EdgeKind,
    pub weight: f64,
}

/// Undirected, immutable station graph built from a station listing.
#[derive(Debug, Clone, Default)]
pub struct Network {
    registry: StationRegistry,
    adjacency: Vec<Vec<Edge>>,
    config: NetworkConfig,
}

impl Network {
    /// Configuration the network was built with.
    pub fn config(&self) -> NetworkConfig {
        self.config
    }

    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    /// Number of station entities (one per station and line).
    pub fn station_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn contains(&self, id: StationId) -> bool {
        self.registry.contains(id)
    }

    pub fn station(&self, id: StationId) -> Option<&StationInfo> {
        self.registry.get(id)
    }

    /// Station details for an id issued by this network.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this network.
    pub fn info(&self, id: StationId) -> &StationInfo {
        self.registry
            .get(id)
            .unwrap_or_else(|| panic!("station {id} is not part of this network"))
    }

    /// Return the edges leaving `station`.
    pub fn neighbours(&self, station: StationId) -> &[Edge] {
        self.adjacency
            .get(station.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Lightest edge between two stations, if they are adjacent.
    pub fn edge_between(&self, from: StationId, to: StationId) -> Option<&Edge> {
        self.neighbours(from)
            .iter()
            .filter(|edge| edge.target == to)
            .min_by(|a, b| a.weight.total_cmp(&b.weight))
    }

    /// True if any station carries the display name `name`.
    pub fn exists(&self, name: &str) -> bool {
        self.registry.contains_name(name)
    }

    /// Resolve a display name to its first-encountered station entity.
    ///
    /// Names served by several lines resolve deterministically to the entity
    /// seen first in the listing; use [`Network::resolve_on_line`] to pick a
    /// specific line.
    pub fn resolve(&self, name: &str) -> Result<StationId> {
        self.registry
            .first_by_name(name)
            .ok_or_else(|| Error::UnknownStation {
                name: name.to_string(),
                suggestions: self.registry.fuzzy_matches(name, 3),
            })
    }

    /// Resolve a station name on a specific line.
    pub fn resolve_on_line(&self, name: &str, line: &str) -> Result<StationId> {
        if !self.exists(name) {
            return self.resolve(name);
        }
        self.registry
            .station_id(name, line)
            .ok_or_else(|| Error::UnknownStationOnLine {
                name: name.to_string(),
                line: line.to_string(),
            })
    }

    /// Lookup the id of `name` on `line`.
    pub fn station_id(&self, name: &str, line: &str) -> Option<StationId> {
        self.registry.station_id(name, line)
    }

    /// Suggest up to `limit` station names similar to `name`.
    pub fn fuzzy_station_matches(&self, name: &str, limit: usize) -> Vec<String> {
        self.registry.fuzzy_matches(name, limit)
    }

    /// Line names in first-encounter order.
    pub fn lines(&self) -> &[String] {
        self.registry.lines()
    }

    pub fn stations(&self) -> impl Iterator<Item = (StationId, &StationInfo)> + '_ {
        self.registry.iter()
    }

    fn intern(&mut self, name: &str, line: &str) -> StationId {
        let id = self.registry.intern(name, line);
        if self.adjacency.len() < self.registry.len() {
            self.adjacency.resize_with(self.registry.len(), Vec::new);
        }
        id
    }

    fn connect(&mut self, a: StationId, b: StationId, kind: EdgeKind, weight: f64) {
        self.adjacency[a.index()].push(Edge {
            target: b,
            kind,
            weight,
        });
        self.adjacency[b.index()].push(Edge {
            target: a,
            kind,
            weight,
        });
    }
}

/// Previous station seen while walking one line-section.
#[derive(Debug, Clone, Copy)]
struct ChainState {
    station: StationId,
    distance: f64,
}

/// Build the network graph from parsed line-sections.
///
/// Each section is folded independently: consecutive stations are joined by
/// running edges weighted by the difference of their distance markers, and
/// every interchange record joins the station to its counterpart on the other
/// line with an edge weighted by the configured penalty.
pub fn build_network(sections: &[LineSection], config: &NetworkConfig) -> Result<Network> {
    config.validate()?;

    let mut network = Network {
        config: *config,
        ..Network::default()
    };
    let mut skipped_self_interchanges = 0usize;

    for section in sections {
        let mut previous: Option<ChainState> = None;

        for record in &section.stations {
            let current = network.intern(&record.name, &section.name);

            if let Some(prev) = previous {
                let weight = (record.distance - prev.distance).abs();
                network.connect(prev.station, current, EdgeKind::Running, weight);
            }

            if let Some(other_line) = record.interchange.as_deref() {
                if other_line == section.name {
                    warn!(
                        station = %record.name,
                        line = %section.name,
                        "ignoring interchange to the station's own line"
                    );
                    skipped_self_interchanges += 1;
                } else {
                    let counterpart = network.intern(&record.name, other_line);
                    network.connect(
                        current,
                        counterpart,
                        EdgeKind::Interchange,
                        config.interchange_penalty,
                    );
                }
            }

            previous = Some(ChainState {
                station: current,
                distance: record.distance,
            });
        }
    }

    debug!(
        stations = network.station_count(),
        edges = network.edge_count(),
        lines = network.lines().len(),
        skipped_self_interchanges,
        "built network graph"
    );

    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sections() -> Vec<LineSection> {
        vec![
            LineSection::new("Red")
                .station("A", 0.0)
                .station("B", 5.0)
                .interchange("C", 9.0, "Blue"),
            LineSection::new("Blue").station("C", 0.0).station("D", 4.0),
        ]
    }

    #[test]
    fn running_edges_use_marker_difference() {
        let network = build_network(&sample_sections(), &NetworkConfig::default()).unwrap();
        let a = network.station_id("A", "Red").unwrap();
        let b = network.station_id("B", "Red").unwrap();

        let edge = network.edge_between(a, b).expect("A and B adjacent");
        assert_eq!(edge.kind, EdgeKind::Running);
        assert_eq!(edge.weight, 5.0);
        assert_eq!(network.edge_between(b, a).map(|e| e.weight), Some(5.0));
    }

    #[test]
    fn interchange_edges_use_penalty_in_both_directions() {
        let config = NetworkConfig {
            interchange_penalty: 0.25,
        };
        let network = build_network(&sample_sections(), &config).unwrap();
        let red = network.station_id("C", "Red").unwrap();
        let blue = network.station_id("C", "Blue").unwrap();

        for (from, to) in [(red, blue), (blue, red)] {
            let edge = network.edge_between(from, to).expect("interchange edge");
            assert_eq!(edge.kind, EdgeKind::Interchange);
            assert_eq!(edge.weight, 0.25);
        }
    }

    #[test]
    fn non_monotonic_markers_still_yield_positive_weights() {
        let sections = vec![LineSection::new("Loop").station("X", 10.0).station("Y", 3.0)];
        let network = build_network(&sections, &NetworkConfig::default()).unwrap();
        let x = network.station_id("X", "Loop").unwrap();
        let y = network.station_id("Y", "Loop").unwrap();
        assert_eq!(network.edge_between(x, y).map(|e| e.weight), Some(7.0));
    }

    #[test]
    fn sections_do_not_chain_into_each_other() {
        let network = build_network(&sample_sections(), &NetworkConfig::default()).unwrap();
        let c_red = network.station_id("C", "Red").unwrap();
        let c_blue = network.station_id("C", "Blue").unwrap();
        let d = network.station_id("D", "Blue").unwrap();

        assert!(network.edge_between(c_red, d).is_none());
        assert_eq!(network.neighbours(c_blue).len(), 2);
        assert_eq!(network.edge_count(), 4);
        assert_eq!(network.station_count(), 5);
    }

    #[test]
    fn interchange_counterpart_is_registered_before_its_line() {
        let sections = vec![LineSection::new("Red").interchange("Hub", 0.0, "Green")];
        let network = build_network(&sections, &NetworkConfig::default()).unwrap();

        let green = network.station_id("Hub", "Green").expect("counterpart registered");
        assert_eq!(network.info(green).line, "Green");
        assert_eq!(network.lines(), ["Red".to_string(), "Green".to_string()]);
    }

    #[test]
    fn self_interchange_is_ignored() {
        let sections = vec![LineSection::new("Red").interchange("Hub", 0.0, "Red")];
        let network = build_network(&sections, &NetworkConfig::default()).unwrap();
        let hub = network.station_id("Hub", "Red").unwrap();
        assert!(network.neighbours(hub).is_empty());
    }

    #[test]
    fn negative_penalty_is_rejected() {
        let config = NetworkConfig {
            interchange_penalty: -1.0,
        };
        let err = build_network(&sample_sections(), &config).expect_err("invalid penalty");
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn resolve_reports_suggestions() {
        let network = build_network(&sample_sections(), &NetworkConfig::default()).unwrap();
        assert!(network.exists("C"));
        assert!(!network.exists("Z"));

        let c = network.resolve("C").unwrap();
        assert_eq!(network.info(c).line, "Red");

        let err = network.resolve_on_line("D", "Red").expect_err("D is Blue only");
        assert!(matches!(err, Error::UnknownStationOnLine { .. }));
    }

    #[test]
    fn unknown_ids_have_no_neighbours() {
        let network = build_network(&[], &NetworkConfig::default()).unwrap();
        let mut other = StationRegistry::new();
        let foreign = other.intern("Elsewhere", "Nowhere");

        assert!(!network.contains(foreign));
        assert!(network.neighbours(foreign).is_empty());
        assert!(network.station(foreign).is_none());
    }
}
