use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use metronav_cli::commands::lines::handle_lines_command;
use metronav_cli::commands::load_network;
use metronav_cli::commands::route::{handle_route_command, RouteCommandArgs};
use metronav_cli::commands::stations::handle_stations_command;
use metronav_cli::output::OutputFormat;
use metronav_lib::{NetworkConfig, RouteMode, DEFAULT_INTERCHANGE_PENALTY};

#[derive(Parser, Debug)]
#[command(author, version, about = "Metro network route planner")]
struct Cli {
    /// Station listing to load.
    #[arg(long, default_value = "stations.csv")]
    network: PathBuf,

    /// Weight of an interchange edge, in listing distance units.
    #[arg(long, default_value_t = DEFAULT_INTERCHANGE_PENALTY)]
    interchange_penalty: f64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two station names.
    Route {
        /// Starting station name.
        #[arg(long = "from")]
        from: String,
        /// Destination station name.
        #[arg(long = "to")]
        to: String,
        /// Line to board on at the start.
        #[arg(long)]
        from_line: Option<String>,
        /// Line to arrive on at the destination.
        #[arg(long)]
        to_line: Option<String>,
        /// What the route minimises: distance, stops or interchanges.
        #[arg(long, default_value = "distance")]
        mode: RouteMode,
    },
    /// List stations, optionally restricted to one line.
    Stations {
        #[arg(long)]
        line: Option<String>,
    },
    /// List lines with their station counts.
    Lines,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = NetworkConfig {
        interchange_penalty: cli.interchange_penalty,
    };
    let network = load_network(&cli.network, &config)?;

    match cli.command {
        Command::Route {
            from,
            to,
            from_line,
            to_line,
            mode,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                from_line,
                to_line,
                mode,
            };
            handle_route_command(&network, &args, cli.format)
        }
        Command::Stations { line } => {
            handle_stations_command(&network, line.as_deref(), cli.format)
        }
        Command::Lines => handle_lines_command(&network, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
