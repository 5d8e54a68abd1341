//! Metrics derived from a resolved path.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{EdgeKind, Network};
use crate::station::StationId;

/// Maximal run of consecutive path entries on the same line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineLeg {
    pub line: String,
    pub stations: Vec<StationId>,
}

/// Sum of edge weights along `path`, interchange penalties included.
///
/// Where two stations are joined by several edges the lightest one is used.
/// Returns [`Error::StationsNotAdjacent`] if consecutive entries share no edge.
pub fn path_distance(network: &Network, path: &[StationId]) -> Result<f64> {
    sum_edges(network, path, |_| true)
}

/// Distance travelled on trains along `path`, ignoring interchange edges.
pub fn running_distance(network: &Network, path: &[StationId]) -> Result<f64> {
    sum_edges(network, path, |kind| kind == EdgeKind::Running)
}

fn sum_edges(
    network: &Network,
    path: &[StationId],
    include: impl Fn(EdgeKind) -> bool,
) -> Result<f64> {
    let mut total = 0.0;
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let edge = network
            .edge_between(from, to)
            .ok_or(Error::StationsNotAdjacent { from, to })?;
        if include(edge.kind) {
            total += edge.weight;
        }
    }
    Ok(total)
}

/// Number of consecutive pairs in `path` whose lines differ.
///
/// Returns [`Error::UnknownStationId`] if `path` contains an id the network
/// never issued.
pub fn count_interchanges(network: &Network, path: &[StationId]) -> Result<usize> {
    let lines = path_lines(network, path)?;
    Ok(lines.windows(2).filter(|pair| pair[0] != pair[1]).count())
}

/// Split `path` into legs, one per uninterrupted stretch of a single line.
///
/// Returns [`Error::UnknownStationId`] if `path` contains an id the network
/// never issued.
pub fn line_legs(network: &Network, path: &[StationId]) -> Result<Vec<LineLeg>> {
    let lines = path_lines(network, path)?;
    let mut legs: Vec<LineLeg> = Vec::new();
    for (&station, line) in path.iter().zip(lines) {
        match legs.last_mut() {
            Some(leg) if leg.line == line => leg.stations.push(station),
            _ => legs.push(LineLeg {
                line: line.to_string(),
                stations: vec![station],
            }),
        }
    }
    Ok(legs)
}

fn path_lines<'a>(network: &'a Network, path: &[StationId]) -> Result<Vec<&'a str>> {
    path.iter()
        .map(|&id| {
            network
                .station(id)
                .map(|info| info.line.as_str())
                .ok_or(Error::UnknownStationId { id })
        })
        .collect()
}
