use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use floor_route::{FloorDataError, FloorPlan, RouteError, Router, RouterConfig};


/// Shortest walkable routes on an indoor floor plan
#[derive(Parser)]
#[command(name = "floor-route", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Route between two destinations
    Route {
        /// Floor dataset (JSON)
        floor: PathBuf,
        origin: String,
        destination: String,
        /// Router settings (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the route as JSON
        #[arg(long)]
        json: bool,
    },
    /// List destinations sorted by name
    List {
        floor: PathBuf,
    },
    /// Validate a dataset and report unreachable destinations
    Check {
        floor: PathBuf,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Data(#[from] FloorDataError),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("failed to encode route: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Result of a command that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    /// No walkable route, or destinations stranded from the first one
    Unreachable,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Unreachable => ExitCode::from(2),
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command, &mut io::stdout().lock()) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, out: &mut impl Write) -> Result<Outcome, CliError> {
    match command {
        Command::Route { floor, origin, destination, config, json } => {
            let config = match config {
                Some(path) => RouterConfig::from_path(path)?,
                None => RouterConfig::default(),
            };
            let router = Router::with_config(Arc::new(FloorPlan::from_path(floor)?), config);
            let route = router.compute_route(&origin, &destination)?;

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&route)?)?;
            } else if route.is_no_route() {
                writeln!(out, "No walkable route from {origin} to {destination}")?;
            } else {
                writeln!(out, "Total distance: {:.2} meters", route.total_distance)?;
                writeln!(out, "Nodes: {}", route.nodes.join(" -> "))?;
                writeln!(out, "Points: {}", route.svg_points())?;
            }

            if route.is_no_route() {
                return Ok(Outcome::Unreachable);
            }
        }
        Command::List { floor } => {
            let floor = FloorPlan::from_path(floor)?;
            for destination in floor.destinations_by_name() {
                writeln!(out, "{:<20} {}", destination.id, destination.name)?;
            }
        }
        Command::Check { floor } => {
            let router = Router::new(Arc::new(FloorPlan::from_path(floor)?));
            let floor = router.floor();
            writeln!(
                out,
                "{} nodes, {} edges, {} destinations",
                floor.node_count(),
                floor.edges().len(),
                floor.destinations().count()
            )?;

            let Some(first) = floor.destinations().next() else {
                return Ok(Outcome::Success);
            };
            let stranded = router.unreachable_destinations(&first.id)?;
            if stranded.is_empty() {
                writeln!(out, "All destinations are reachable from {}", first.id)?;
            } else {
                for destination in &stranded {
                    writeln!(
                        out,
                        "Unreachable from {}: {} ({})",
                        first.id, destination.id, destination.name
                    )?;
                }
                return Ok(Outcome::Unreachable);
            }
        }
    }
    Ok(Outcome::Success)
}


#[cfg(test)]
mod tests {
    use super::*;

    const FLOOR_1: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/floor_1.json");
    const ROUTER_TOML: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/router.toml");

    fn run_captured(command: Command) -> (Result<Outcome, CliError>, String) {
        let mut out = Vec::new();
        let result = run(command, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn route(origin: &str, destination: &str, json: bool) -> Command {
        Command::Route {
            floor: FLOOR_1.into(),
            origin: origin.into(),
            destination: destination.into(),
            config: None,
            json,
        }
    }

    #[test]
    fn test_check_reports_stranded_archive() {
        let (result, output) = run_captured(Command::Check { floor: FLOOR_1.into() });

        assert_eq!(result.unwrap(), Outcome::Unreachable);
        assert!(output.starts_with("33 nodes, 32 edges, 13 destinations"));
        assert!(output.contains("Unreachable from mac_lab: archive (Archive)"));
    }

    #[test]
    fn test_route_text_output() {
        let (result, output) = run_captured(route("stairs", "lift", false));

        assert_eq!(result.unwrap(), Outcome::Success);
        assert!(output.contains("Total distance: 260.00 meters"));
        assert!(output.contains("Nodes: n50 -> n21 -> n22 -> n25 -> n28"));
        assert!(output.contains("Points: 700,290 700,340"));
    }

    #[test]
    fn test_no_route_exit_status_matches_in_both_modes() {
        let (text, output) = run_captured(route("mac_lab", "archive", false));
        assert_eq!(text.unwrap(), Outcome::Unreachable);
        assert!(output.contains("No walkable route from mac_lab to archive"));

        let (json, output) = run_captured(route("mac_lab", "archive", true));
        assert_eq!(json.unwrap(), Outcome::Unreachable);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["totalDistance"], 0.0);
        assert_eq!(value["coordinates"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_route_with_config_file() {
        let command = Command::Route {
            floor: FLOOR_1.into(),
            origin: "stairs".into(),
            destination: "lift".into(),
            config: Some(ROUTER_TOML.into()),
            json: true,
        };
        let (result, output) = run_captured(command);

        assert_eq!(result.unwrap(), Outcome::Success);
        // stairs sits 50 above n50, lift sits (30, 65) off n28
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let distance = value["totalDistance"].as_f64().unwrap();
        assert!((distance - (260.0 + 50.0 + 5125f64.sqrt())).abs() < 1e-9);
    }

    #[test]
    fn test_list_is_sorted_by_name() {
        let (result, output) = run_captured(Command::List { floor: FLOOR_1.into() });

        assert_eq!(result.unwrap(), Outcome::Success);
        let ids: Vec<_> = output.lines().filter_map(|line| line.split_whitespace().next()).collect();
        assert_eq!(ids.first(), Some(&"archive"));
        assert_eq!(ids.last(), Some(&"waiting"));
        assert_eq!(ids.len(), 13);
    }

    #[test]
    fn test_errors_are_typed() {
        let (result, _) = run_captured(route("mac_lab", "cafeteria", false));
        assert!(matches!(result, Err(CliError::Route(RouteError::InvalidDestinationId(_)))));

        let (result, _) = run_captured(Command::Check { floor: "/nonexistent/floor.json".into() });
        assert!(matches!(result, Err(CliError::Data(FloorDataError::Io(_)))));
    }
}
