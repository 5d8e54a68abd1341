//! Route planning over a loaded [`Network`].
//!
//! This module provides:
//! - [`RouteMode`] - What a route optimises (distance, stops, interchanges)
//! - [`RouteRequest`] - Station names plus optional line qualifiers
//! - [`RoutePlan`] - The resolved path
//! - [`plan_route`] - Main entry point
//!
//! # Example
//!
//! ```ignore
//! use metronav_lib::{build_network, load_listing, plan_route, NetworkConfig, RouteMode, RouteRequest};
//!
//! let sections = load_listing(Path::new("stations.csv"))?;
//! let network = build_network(&sections, &NetworkConfig::default())?;
//! let request = RouteRequest::new("Rajiv Chowk", "Kashmere Gate", RouteMode::Interchanges);
//! let plan = plan_route(&network, &request)?;
//! println!("Route: {} hops", plan.hop_count());
//! ```

mod planner;

pub use planner::{
    select_planner, DistancePlanner, InterchangePlanner, RoutePlanner, StopsPlanner,
};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Network;
use crate::station::StationId;

/// What a route is optimised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteMode {
    /// Shortest total distance (Dijkstra).
    #[default]
    Distance,
    /// Fewest stops (breadth-first).
    Stops,
    /// Fewest line changes, then shortest distance.
    Interchanges,
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteMode::Distance => "distance",
            RouteMode::Stops => "stops",
            RouteMode::Interchanges => "interchanges",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteMode {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "distance" => Ok(RouteMode::Distance),
            "stops" => Ok(RouteMode::Stops),
            "interchanges" => Ok(RouteMode::Interchanges),
            other => Err(format!(
                "unknown route mode '{other}'; expected distance, stops or interchanges"
            )),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    /// Line to board at `start`; defaults to the first line listing it.
    pub start_line: Option<String>,
    pub goal: String,
    /// Line to arrive on at `goal`; defaults to the first line listing it.
    pub goal_line: Option<String>,
    pub mode: RouteMode,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>, mode: RouteMode) -> Self {
        Self {
            start: start.into(),
            start_line: None,
            goal: goal.into(),
            goal_line: None,
            mode,
        }
    }

    /// Board at `start` on a specific line.
    pub fn with_start_line(mut self, line: impl Into<String>) -> Self {
        self.start_line = Some(line.into());
        self
    }

    /// Arrive at `goal` on a specific line.
    pub fn with_goal_line(mut self, line: impl Into<String>) -> Self {
        self.goal_line = Some(line.into());
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub mode: RouteMode,
    pub start: StationId,
    pub goal: StationId,
    pub steps: Vec<StationId>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

fn resolve_station(network: &Network, name: &str, line: Option<&str>) -> Result<StationId> {
    match line {
        Some(line) => network.resolve_on_line(name, line),
        None => network.resolve(name),
    }
}

/// Compute a route for `request`.
///
/// Unknown names surface as [`Error::UnknownStation`] (with suggestions) and
/// an unreachable goal as [`Error::RouteNotFound`].
pub fn plan_route(network: &Network, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_station(network, &request.start, request.start_line.as_deref())?;
    let goal = resolve_station(network, &request.goal, request.goal_line.as_deref())?;

    let planner = select_planner(request.mode);
    let steps = planner.find_path(network, start, goal)?;
    if steps.is_empty() {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    }

    debug!(
        mode = %request.mode,
        %start,
        %goal,
        hops = steps.len() - 1,
        "planned route"
    );

    Ok(RoutePlan {
        mode: request.mode,
        start,
        goal,
        steps,
    })
}
