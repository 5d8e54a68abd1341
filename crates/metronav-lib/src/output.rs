use std::fmt::Write;

use serde::Serialize;

use crate::analytics::{count_interchanges, path_distance, running_distance};
use crate::error::{Error, Result};
use crate::fare::{fare_for_distance, TravelTimeModel};
use crate::graph::Network;
use crate::routing::{RouteMode, RoutePlan};
use crate::station::StationId;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: StationId,
    pub name: String,
    pub line: String,
}

/// Station visited along a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: StationId,
    pub name: String,
    pub line: String,
    /// True when this step is on a different line from the previous one.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub changes_line: bool,
    /// Weight of the edge used to reach this step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub mode: RouteMode,
    pub hops: usize,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
    /// Distance including interchange penalties.
    pub total_distance: f64,
    /// Distance travelled on trains only.
    pub running_distance: f64,
    pub interchanges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fare: Option<u32>,
    pub estimated_minutes: f64,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved names and metrics.
    pub fn from_plan(
        network: &Network,
        plan: &RoutePlan,
        travel_time: &TravelTimeModel,
    ) -> Result<Self> {
        let (Some(&first), Some(&last)) = (plan.steps.first(), plan.steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let mut steps = Vec::with_capacity(plan.steps.len());
        for (index, &id) in plan.steps.iter().enumerate() {
            let info = network
                .station(id)
                .ok_or(Error::UnknownStationId { id })?;
            let (changes_line, distance) = match index.checked_sub(1).map(|i| plan.steps[i]) {
                Some(previous) => {
                    let edge = network
                        .edge_between(previous, id)
                        .ok_or(Error::StationsNotAdjacent { from: previous, to: id })?;
                    (network.info(previous).line != info.line, Some(edge.weight))
                }
                None => (false, None),
            };
            steps.push(RouteStep {
                index,
                id,
                name: info.name.clone(),
                line: info.line.clone(),
                changes_line,
                distance,
            });
        }

        let total_distance = path_distance(network, &plan.steps)?;
        let running = running_distance(network, &plan.steps)?;
        let interchanges = count_interchanges(network, &plan.steps)?;
        let hops = plan.hop_count();

        Ok(Self {
            mode: plan.mode,
            hops,
            start: endpoint(network, first),
            goal: endpoint(network, last),
            steps,
            total_distance,
            running_distance: running,
            interchanges,
            fare: fare_for_distance(running),
            estimated_minutes: travel_time.estimate_minutes(running, hops, interchanges),
        })
    }

    /// Serialise the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, mode: {})",
            self.start.name, self.goal.name, self.hops, self.mode
        );
        for step in &self.steps {
            if step.changes_line {
                let _ = writeln!(buffer, "  --- Change to {} ---", step.line);
            }
            let _ = writeln!(buffer, "    -> {} ({})", step.name, step.line);
        }
        self.write_totals(&mut buffer);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route**: _{} → {}_ ({} hops, mode: `{}`)",
            self.start.name, self.goal.name, self.hops, self.mode
        );
        for step in &self.steps {
            if step.changes_line {
                let _ = writeln!(buffer, "* _change to **{}**_", step.line);
            }
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{}`)",
                step.index, step.name, step.line
            );
        }
        self.write_totals(&mut buffer);
        buffer
    }

    fn write_totals(&self, buffer: &mut String) {
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "Total distance: {:.2}", self.total_distance);
        let _ = writeln!(buffer, "Interchanges: {}", self.interchanges);
        match self.fare {
            Some(fare) => {
                let _ = writeln!(buffer, "Fare: {fare}");
            }
            None => {
                let _ = writeln!(buffer, "Fare: n/a");
            }
        }
        let _ = writeln!(
            buffer,
            "Estimated travel time: {:.1} minutes",
            self.estimated_minutes
        );
    }
}

fn endpoint(network: &Network, id: StationId) -> RouteEndpoint {
    let info = network.info(id);
    RouteEndpoint {
        id,
        name: info.name.clone(),
        line: info.line.clone(),
    }
}
