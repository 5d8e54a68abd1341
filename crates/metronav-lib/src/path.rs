//! Point-to-point searches over a [`Network`].
//!
//! All three searches share one best-first traversal parameterised by a
//! [`CostModel`]. Frontier entries are ordered by `(cost, insertion order)`,
//! so entries with equal cost leave the frontier first-in first-out. With a
//! unit hop cost that is exactly breadth-first discovery order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use crate::error::{Error, Result};
use crate::graph::{Edge, Network};
use crate::station::StationId;

/// Accumulated cost along a partial path, ordered so the frontier can rank it.
pub trait CostModel {
    type Cost: Copy + Ord + fmt::Debug;

    /// Cost of the empty path at the start station.
    fn zero(&self) -> Self::Cost;

    /// Cost after extending a path ending at `from` along `edge`.
    fn extend(
        &self,
        network: &Network,
        cost: Self::Cost,
        from: StationId,
        edge: &Edge,
    ) -> Self::Cost;
}

/// Sum of edge weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceCost;

impl CostModel for DistanceCost {
    type Cost = FloatOrd;

    fn zero(&self) -> FloatOrd {
        FloatOrd(0.0)
    }

    fn extend(
        &self,
        _network: &Network,
        cost: FloatOrd,
        _from: StationId,
        edge: &Edge,
    ) -> FloatOrd {
        FloatOrd(cost.0 + edge.weight)
    }
}

/// Number of edges, whatever their kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopCost;

impl CostModel for StopCost {
    type Cost = u32;

    fn zero(&self) -> u32 {
        0
    }

    fn extend(&self, _network: &Network, cost: u32, _from: StationId, _edge: &Edge) -> u32 {
        cost + 1
    }
}

/// Line changes first, distance second.
///
/// Any edge whose endpoints sit on different lines counts as a change.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterchangeCost;

impl CostModel for InterchangeCost {
    type Cost = (u32, FloatOrd);

    fn zero(&self) -> (u32, FloatOrd) {
        (0, FloatOrd(0.0))
    }

    fn extend(
        &self,
        network: &Network,
        (changes, distance): (u32, FloatOrd),
        from: StationId,
        edge: &Edge,
    ) -> (u32, FloatOrd) {
        let changes_line = network.info(from).line != network.info(edge.target).line;
        (
            changes + u32::from(changes_line),
            FloatOrd(distance.0 + edge.weight),
        )
    }
}

/// Find the path with the smallest total edge weight.
///
/// Returns `[start]` when `start == goal` and an empty path when `goal` is
/// unreachable.
pub fn find_route_by_distance(
    network: &Network,
    start: StationId,
    goal: StationId,
) -> Result<Vec<StationId>> {
    find_route_with(network, &DistanceCost, start, goal)
}

/// Find the path with the fewest edges; interchanges count as one stop each.
pub fn find_route_by_stops(
    network: &Network,
    start: StationId,
    goal: StationId,
) -> Result<Vec<StationId>> {
    find_route_with(network, &StopCost, start, goal)
}

/// Find the path with the fewest line changes, breaking ties by distance.
pub fn find_route_by_interchanges(
    network: &Network,
    start: StationId,
    goal: StationId,
) -> Result<Vec<StationId>> {
    find_route_with(network, &InterchangeCost, start, goal)
}

/// Run the shared best-first search under `model`.
///
/// The search stops as soon as `goal` leaves the frontier, which is sound
/// because no cost model decreases along an edge. Entries whose cost is worse
/// than the best known cost for their station are stale and skipped.
pub fn find_route_with<M: CostModel>(
    network: &Network,
    model: &M,
    start: StationId,
    goal: StationId,
) -> Result<Vec<StationId>> {
    ensure_known(network, start)?;
    ensure_known(network, goal)?;

    if start == goal {
        return Ok(vec![start]);
    }

    let station_count = network.station_count();
    let mut best: Vec<Option<M::Cost>> = vec![None; station_count];
    let mut parents: Vec<Option<StationId>> = vec![None; station_count];
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0u64;

    best[start.index()] = Some(model.zero());
    frontier.push(FrontierEntry {
        cost: model.zero(),
        sequence,
        node: start,
    });

    while let Some(entry) = frontier.pop() {
        if matches!(best[entry.node.index()], Some(known) if entry.cost > known) {
            continue;
        }

        if entry.node == goal {
            return Ok(reconstruct_path(&parents, start, goal));
        }

        for edge in network.neighbours(entry.node) {
            let next = edge.target;
            let next_cost = model.extend(network, entry.cost, entry.node, edge);
            let improves = best[next.index()].map_or(true, |known| next_cost < known);
            if improves {
                best[next.index()] = Some(next_cost);
                parents[next.index()] = Some(entry.node);
                sequence += 1;
                frontier.push(FrontierEntry {
                    cost: next_cost,
                    sequence,
                    node: next,
                });
            }
        }
    }

    Ok(Vec::new())
}

fn ensure_known(network: &Network, id: StationId) -> Result<()> {
    if network.contains(id) {
        Ok(())
    } else {
        Err(Error::UnknownStationId { id })
    }
}

fn reconstruct_path(
    parents: &[Option<StationId>],
    start: StationId,
    goal: StationId,
) -> Vec<StationId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node.index()];
    }
    path.reverse();
    path
}

/// Total ordering wrapper for non-negative distances.
#[derive(Copy, Clone, Debug, Default)]
pub struct FloatOrd(pub f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug)]
struct FrontierEntry<C> {
    cost: C,
    sequence: u64,
    node: StationId,
}

impl<C: Ord> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Ord> Eq for FrontierEntry<C> {}

impl<C: Ord> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then age.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<C: Ord> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{count_interchanges, path_distance};
    use crate::graph::{build_network, NetworkConfig};
    use crate::listing::LineSection;
    use crate::station::StationRegistry;

    fn network(sections: Vec<LineSection>) -> Network {
        build_network(&sections, &NetworkConfig::default()).expect("network builds")
    }

    fn id(network: &Network, name: &str, line: &str) -> StationId {
        network
            .station_id(name, line)
            .unwrap_or_else(|| panic!("{name} on {line} exists"))
    }

    fn red_blue() -> Network {
        network(vec![
            LineSection::new("Red")
                .station("A", 0.0)
                .station("B", 5.0)
                .interchange("C", 9.0, "Blue"),
            LineSection::new("Blue").station("C", 0.0).station("D", 4.0),
        ])
    }

    #[test]
    fn distance_search_crosses_interchange() {
        let net = red_blue();
        let a = id(&net, "A", "Red");
        let d = id(&net, "D", "Blue");

        let path = find_route_by_distance(&net, a, d).unwrap();
        let expected = vec![
            a,
            id(&net, "B", "Red"),
            id(&net, "C", "Red"),
            id(&net, "C", "Blue"),
            d,
        ];
        assert_eq!(path, expected);
        assert!((path_distance(&net, &path).unwrap() - 13.1).abs() < 1e-9);

        let changes = find_route_by_interchanges(&net, a, d).unwrap();
        assert_eq!(count_interchanges(&net, &changes).unwrap(), 1);
    }

    #[test]
    fn same_start_and_goal_is_singleton() {
        let net = red_blue();
        let b = id(&net, "B", "Red");
        assert_eq!(find_route_by_distance(&net, b, b).unwrap(), vec![b]);
        assert_eq!(find_route_by_stops(&net, b, b).unwrap(), vec![b]);
        assert_eq!(find_route_by_interchanges(&net, b, b).unwrap(), vec![b]);
    }

    #[test]
    fn unreachable_goal_yields_empty_path() {
        let net = network(vec![
            LineSection::new("Red").station("A", 0.0).station("B", 1.0),
            LineSection::new("Island").station("X", 0.0).station("Y", 1.0),
        ]);
        let a = id(&net, "A", "Red");
        let y = id(&net, "Y", "Island");

        assert!(find_route_by_distance(&net, a, y).unwrap().is_empty());
        assert!(find_route_by_stops(&net, a, y).unwrap().is_empty());
        assert!(find_route_by_interchanges(&net, a, y).unwrap().is_empty());
    }

    #[test]
    fn foreign_ids_are_rejected() {
        let net = red_blue();
        let mut registry = StationRegistry::new();
        for index in 0..10 {
            registry.intern(&format!("S{index}"), "Other");
        }
        let foreign = registry.station_id("S9", "Other").unwrap();
        let a = id(&net, "A", "Red");

        let err = find_route_by_distance(&net, a, foreign).expect_err("foreign goal");
        assert!(matches!(err, Error::UnknownStationId { .. }));
        let err = find_route_by_stops(&net, foreign, a).expect_err("foreign start");
        assert!(matches!(err, Error::UnknownStationId { .. }));
    }

    #[test]
    fn stop_search_counts_interchange_as_a_hop() {
        // Red runs A - M - B; Green offers a shorter ride between the same
        // stations but needs an interchange at each end.
        let net = network(vec![
            LineSection::new("Red")
                .interchange("A", 0.0, "Green")
                .station("M", 5.0)
                .station("B", 10.0),
            LineSection::new("Green")
                .station("A", 0.0)
                .interchange("B", 1.0, "Red"),
        ]);
        let a = id(&net, "A", "Red");
        let b = id(&net, "B", "Red");

        let by_distance = find_route_by_distance(&net, a, b).unwrap();
        assert_eq!(
            by_distance,
            vec![a, id(&net, "A", "Green"), id(&net, "B", "Green"), b]
        );
        assert!((path_distance(&net, &by_distance).unwrap() - 1.2).abs() < 1e-9);

        let by_stops = find_route_by_stops(&net, a, b).unwrap();
        assert_eq!(by_stops, vec![a, id(&net, "M", "Red"), b]);
    }

    #[test]
    fn stop_search_prefers_fewer_hops_over_distance() {
        let net = network(vec![
            LineSection::new("Red")
                .station("A", 0.0)
                .station("B", 1.0)
                .station("C", 2.0)
                .station("D", 3.0),
            LineSection::new("Red").station("A", 0.0).station("D", 100.0),
        ]);
        let a = id(&net, "A", "Red");
        let d = id(&net, "D", "Red");

        assert_eq!(find_route_by_stops(&net, a, d).unwrap(), vec![a, d]);
        assert_eq!(find_route_by_distance(&net, a, d).unwrap().len(), 4);
    }

    #[test]
    fn interchange_search_trades_distance_for_fewer_changes() {
        let net = network(vec![
            LineSection::new("Red")
                .station("A", 0.0)
                .station("M", 10.0)
                .station("B", 20.0),
            LineSection::new("Green")
                .interchange("A", 0.0, "Red")
                .station("S", 1.0)
                .interchange("B", 2.0, "Red"),
        ]);
        let a = id(&net, "A", "Red");
        let b = id(&net, "B", "Red");

        let shortest = find_route_by_distance(&net, a, b).unwrap();
        assert_eq!(count_interchanges(&net, &shortest).unwrap(), 2);
        assert!((path_distance(&net, &shortest).unwrap() - 2.2).abs() < 1e-9);

        let fewest_changes = find_route_by_interchanges(&net, a, b).unwrap();
        assert_eq!(fewest_changes, vec![a, id(&net, "M", "Red"), b]);
        assert_eq!(count_interchanges(&net, &fewest_changes).unwrap(), 0);
    }

    #[test]
    fn interchange_search_breaks_ties_by_distance() {
        let net = network(vec![
            LineSection::new("Red")
                .station("A", 0.0)
                .station("M", 10.0)
                .station("B", 20.0),
            LineSection::new("Red")
                .station("A", 0.0)
                .station("N", 3.0)
                .station("B", 6.0),
        ]);
        let a = id(&net, "A", "Red");
        let b = id(&net, "B", "Red");

        let path = find_route_by_interchanges(&net, a, b).unwrap();
        assert_eq!(path, vec![a, id(&net, "N", "Red"), b]);
    }

    #[test]
    fn frontier_pops_lowest_cost_then_oldest() {
        let mut heap = BinaryHeap::new();
        let mut registry = StationRegistry::new();
        let x = registry.intern("X", "L");
        let y = registry.intern("Y", "L");
        heap.push(FrontierEntry { cost: 2u32, sequence: 0, node: x });
        heap.push(FrontierEntry { cost: 1u32, sequence: 2, node: y });
        heap.push(FrontierEntry { cost: 1u32, sequence: 1, node: x });

        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|entry| (entry.cost, entry.sequence))
            .collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (2, 0)]);
    }
}
