//! Lines command handler.

use anyhow::Result;

use metronav_lib::Network;

use crate::output::{print_lines, LineListing, OutputFormat};

/// Lines in first-encounter order with the number of stations on each.
pub fn collect_lines(network: &Network) -> Vec<LineListing> {
    network
        .lines()
        .iter()
        .map(|line| LineListing {
            name: line.clone(),
            stations: network
                .stations()
                .filter(|(_, info)| &info.line == line)
                .count(),
        })
        .collect()
}

/// Handle the lines subcommand.
pub fn handle_lines_command(network: &Network, format: OutputFormat) -> Result<()> {
    print_lines(&collect_lines(network), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metronav_lib::{build_network, LineSection, NetworkConfig};

    #[test]
    fn counts_interchange_counterparts() {
        let sections = vec![
            LineSection::new("Red")
                .station("A", 0.0)
                .interchange("C", 9.0, "Blue"),
            LineSection::new("Blue").station("D", 4.0),
        ];
        let network = build_network(&sections, &NetworkConfig::default()).unwrap();

        assert_eq!(
            collect_lines(&network),
            vec![
                LineListing {
                    name: "Red".to_string(),
                    stations: 2,
                },
                LineListing {
                    name: "Blue".to_string(),
                    stations: 2,
                },
            ]
        );
    }
}
