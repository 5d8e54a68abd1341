//! Metronav library entry points.
//!
//! This crate reads a metro station listing, builds the network graph in
//! memory, and answers point-to-point routing queries by distance, by number
//! of stops, or by fewest line changes. Higher-level consumers (the CLI)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod analytics;
pub mod error;
pub mod fare;
pub mod graph;
pub mod listing;
pub mod output;
pub mod path;
pub mod routing;
pub mod station;

pub use analytics::{count_interchanges, line_legs, path_distance, running_distance, LineLeg};
pub use error::{Error, Result};
pub use fare::{fare_for_distance, TravelTimeModel};
pub use graph::{
    build_network, Edge, EdgeKind, Network, NetworkConfig, DEFAULT_INTERCHANGE_PENALTY,
};
pub use listing::{load_listing, parse_listing, LineSection, StationRecord};
pub use output::{RouteEndpoint, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_route_by_distance, find_route_by_interchanges, find_route_by_stops};
pub use routing::{plan_route, RouteMode, RoutePlan, RouteRequest};
pub use station::{StationId, StationInfo, StationRegistry};
