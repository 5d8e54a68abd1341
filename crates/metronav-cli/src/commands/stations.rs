//! Stations command handler.

use anyhow::{bail, Result};

use metronav_lib::{Network, StationInfo};

use crate::output::{print_stations, OutputFormat};

/// Station entities in registry order, optionally restricted to one line.
pub fn collect_stations<'a>(
    network: &'a Network,
    line: Option<&str>,
) -> Result<Vec<&'a StationInfo>> {
    if let Some(line) = line {
        if !network.lines().iter().any(|known| known == line) {
            bail!("unknown line: {line}");
        }
    }
    Ok(network
        .stations()
        .map(|(_, info)| info)
        .filter(|info| line.map_or(true, |line| info.line == line))
        .collect())
}

/// Handle the stations subcommand.
pub fn handle_stations_command(
    network: &Network,
    line: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let stations = collect_stations(network, line)?;
    print_stations(&stations, format)
}
