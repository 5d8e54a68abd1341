//! Route planning strategies.
//!
//! Each [`RouteMode`] maps to a planner implementing [`RoutePlanner`], so the
//! orchestration in [`super::plan_route`] does not need to know which search
//! runs underneath.

use crate::error::Result;
use crate::graph::Network;
use crate::path::{find_route_by_distance, find_route_by_interchanges, find_route_by_stops};
use crate::station::StationId;

use super::RouteMode;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The mode this planner optimises for.
    fn mode(&self) -> RouteMode;

    /// Execute the search; an empty path means the goal is unreachable.
    fn find_path(
        &self,
        network: &Network,
        start: StationId,
        goal: StationId,
    ) -> Result<Vec<StationId>>;
}

/// Planner minimising total distance.
#[derive(Debug, Clone, Default)]
pub struct DistancePlanner;

impl RoutePlanner for DistancePlanner {
    fn mode(&self) -> RouteMode {
        RouteMode::Distance
    }

    fn find_path(
        &self,
        network: &Network,
        start: StationId,
        goal: StationId,
    ) -> Result<Vec<StationId>> {
        find_route_by_distance(network, start, goal)
    }
}

/// Planner minimising the number of stops.
#[derive(Debug, Clone, Default)]
pub struct StopsPlanner;

impl RoutePlanner for StopsPlanner {
    fn mode(&self) -> RouteMode {
        RouteMode::Stops
    }

    fn find_path(
        &self,
        network: &Network,
        start: StationId,
        goal: StationId,
    ) -> Result<Vec<StationId>> {
        find_route_by_stops(network, start, goal)
    }
}

/// Planner minimising line changes, then distance.
#[derive(Debug, Clone, Default)]
pub struct InterchangePlanner;

impl RoutePlanner for InterchangePlanner {
    fn mode(&self) -> RouteMode {
        RouteMode::Interchanges
    }

    fn find_path(
        &self,
        network: &Network,
        start: StationId,
        goal: StationId,
    ) -> Result<Vec<StationId>> {
        find_route_by_interchanges(network, start, goal)
    }
}

/// Select the planner for a mode.
pub fn select_planner(mode: RouteMode) -> Box<dyn RoutePlanner> {
    match mode {
        RouteMode::Distance => Box::new(DistancePlanner),
        RouteMode::Stops => Box::new(StopsPlanner),
        RouteMode::Interchanges => Box::new(InterchangePlanner),
    }
}
