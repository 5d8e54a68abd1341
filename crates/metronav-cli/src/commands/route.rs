//! Route command handler for computing paths between stations.

use anyhow::Result;

use metronav_lib::{
    plan_route, Network, RouteMode, RouteRequest, RouteSummary, TravelTimeModel,
};

use crate::output::{print_route, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting station name.
    pub from: String,
    /// Destination station name.
    pub to: String,
    /// Line to board on at the start.
    pub from_line: Option<String>,
    /// Line to arrive on at the destination.
    pub to_line: Option<String>,
    /// What the route should minimise.
    pub mode: RouteMode,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library [`RouteRequest`].
    pub fn to_request(&self) -> RouteRequest {
        let mut request = RouteRequest::new(self.from.as_str(), self.to.as_str(), self.mode);
        if let Some(line) = &self.from_line {
            request = request.with_start_line(line.as_str());
        }
        if let Some(line) = &self.to_line {
            request = request.with_goal_line(line.as_str());
        }
        request
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    network: &Network,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let plan = plan_route(network, &args.to_request())?;
    let summary = RouteSummary::from_plan(network, &plan, &TravelTimeModel::default())?;
    print_route(&summary, format)
}
