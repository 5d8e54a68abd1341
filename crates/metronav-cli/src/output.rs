//! Output formatting for route and network listings.
//!
//! `plain`, `rich` and `json` delegate to the library's renderers; `text` is
//! the CLI's own terminal view and adapts to the colour and Unicode support
//! detected in [`crate::terminal`].

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use metronav_lib::{RouteRenderMode, RouteSummary, StationInfo};

use crate::terminal::{arrow, supports_unicode, ColorPalette};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Terminal view with colours when supported.
    #[default]
    Text,
    /// Uncoloured text from the library renderer.
    Plain,
    /// Markdown.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

/// Station count for one line, as printed by the `lines` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineListing {
    pub name: String,
    pub stations: usize,
}

/// Print a route summary in the requested format.
pub fn print_route(summary: &RouteSummary, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            print!(
                "{}",
                render_text(summary, &ColorPalette::detect(), supports_unicode())
            );
        }
        OutputFormat::Plain => print!("{}", summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Rich => print!("{}", summary.render(RouteRenderMode::RichText)),
        OutputFormat::Json => println!("{}", summary.to_json()?),
    }
    Ok(())
}

/// Render a route summary for a terminal.
pub fn render_text(summary: &RouteSummary, palette: &ColorPalette, unicode: bool) -> String {
    let p = palette;
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{}Route{} {} {} {} ({} hops; mode: {}):",
        p.orange,
        p.reset,
        summary.start.name,
        arrow(unicode),
        summary.goal.name,
        summary.hops,
        summary.mode
    );
    for step in &summary.steps {
        if step.changes_line {
            let _ = writeln!(
                buffer,
                "   {} CHANGE {} {}",
                p.tag_change, p.reset, step.line
            );
        }
        let _ = write!(
            buffer,
            " - {}{}{} {}[{}]{}",
            p.white_bold, step.name, p.reset, p.gray, step.line, p.reset
        );
        if let Some(distance) = step.distance {
            let _ = write!(buffer, " {}(+{:.1}){}", p.cyan, distance, p.reset);
        }
        buffer.push('\n');
    }

    let _ = writeln!(buffer);
    let _ = writeln!(
        buffer,
        "Total distance: {}{:.2}{}",
        p.cyan, summary.total_distance, p.reset
    );
    let _ = writeln!(buffer, "Running distance: {:.2}", summary.running_distance);
    let _ = writeln!(buffer, "Interchanges: {}", summary.interchanges);
    match summary.fare {
        Some(fare) => {
            let _ = writeln!(buffer, "Fare: {}{}{}", p.green, fare, p.reset);
        }
        None => {
            let _ = writeln!(buffer, "Fare: n/a");
        }
    }
    let _ = writeln!(
        buffer,
        "Estimated travel time: {:.1} minutes",
        summary.estimated_minutes
    );
    buffer
}

/// Print station entities, one per line, or as a JSON array.
pub fn print_stations(stations: &[&StationInfo], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&stations)?,
        OutputFormat::Text => print!("{}", render_stations(stations, &ColorPalette::detect())),
        OutputFormat::Plain | OutputFormat::Rich => {
            print!("{}", render_stations(stations, &ColorPalette::plain()))
        }
    }
    Ok(())
}

/// Render station entities as `name [line]` rows.
pub fn render_stations(stations: &[&StationInfo], palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    for station in stations {
        let _ = writeln!(
            buffer,
            "{}{}{} {}[{}]{}",
            palette.white_bold,
            station.name,
            palette.reset,
            palette.gray,
            station.line,
            palette.reset
        );
    }
    buffer
}

/// Print line listings, one per line, or as a JSON array.
pub fn print_lines(lines: &[LineListing], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&lines)?,
        OutputFormat::Text => print!("{}", render_lines(lines, &ColorPalette::detect())),
        OutputFormat::Plain | OutputFormat::Rich => {
            print!("{}", render_lines(lines, &ColorPalette::plain()))
        }
    }
    Ok(())
}

/// Render line listings as `name (n stations)` rows.
pub fn render_lines(lines: &[LineListing], palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    for line in lines {
        let _ = writeln!(
            buffer,
            "{}{}{} ({} stations)",
            palette.white_bold, line.name, palette.reset, line.stations
        );
    }
    buffer
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
