//! Handlers for the CLI subcommands.
//!
//! Each module handles one subcommand; `main.rs` only parses arguments,
//! loads the network and dispatches here.

pub mod lines;
pub mod route;
pub mod stations;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use metronav_lib::{build_network, load_listing, Network, NetworkConfig};

/// Load the station listing at `path` and build the network graph.
pub fn load_network(path: &Path, config: &NetworkConfig) -> Result<Network> {
    let sections = load_listing(path)
        .with_context(|| format!("failed to load station listing from {}", path.display()))?;
    let network =
        build_network(&sections, config).context("failed to build the metro network")?;
    info!(
        path = %path.display(),
        stations = network.station_count(),
        lines = network.lines().len(),
        "loaded metro network"
    );
    Ok(network)
}
