//! dtcctl - cockpit data-transfer CLI
//!
//! Turns aircraft configuration files into cockpit command streams, uploads
//! them to the in-cockpit receiver, and converts coordinates to and from the
//! text the avionics keypads expect.

mod commands;
mod completion;
mod error;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::*;

#[derive(Parser)]
#[command(name = "dtcctl")]
#[command(about = "Cockpit data-transfer CLI - generate and upload avionics command streams")]
#[command(version)]
#[command(long_about = "
dtcctl is the command-line front end of the data-transfer cartridge generator.
It reads an aircraft configuration (waypoints, radio presets, countermeasure
programs, datalink team) and produces the keypress stream the cockpit replays.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Receiver endpoint as host:port
    #[arg(long, global = true, env = "DTCCTL_ENDPOINT")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the command stream without sending it
    Generate(GenerateArgs),

    /// Generate and send the command stream to the cockpit receiver
    Upload(UploadArgs),

    /// Coordinate text conversion
    #[command(subcommand)]
    Coords(CoordsCommands),

    /// Supported aircraft
    #[command(subcommand)]
    Aircraft(AircraftCommands),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the stream
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("dtcctl={log_level},dtc_upload={log_level},dtc_aircraft={log_level}")
                    .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            ExitCode::from(error::exit_code(&e))
        }
    }
}

async fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Generate(args) => {
            commands::generate::execute(args, cli.json, cli.endpoint.as_deref()).await
        }
        Commands::Upload(args) => {
            commands::upload::execute(args, cli.json, cli.endpoint.as_deref()).await
        }
        Commands::Coords(cmd) => commands::coords::execute(cmd, cli.json),
        Commands::Aircraft(cmd) => commands::aircraft::execute(cmd, cli.json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_generate_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["dtcctl", "generate", "mission.json"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        let Commands::Generate(args) = cli.command else {
            return Err("expected generate".into());
        };
        assert_eq!(args.config, Path::new("mission.json"));
        assert!(args.output.is_none());
        assert!(!args.explain);
        Ok(())
    }

    #[test]
    fn parse_global_flags_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from([
            "dtcctl",
            "upload",
            "mission.json",
            "--timeout-ms",
            "250",
            "--json",
            "-vv",
            "--endpoint",
            "127.0.0.1:9000",
        ])?;
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.endpoint.as_deref(), Some("127.0.0.1:9000"));
        let Commands::Upload(args) = cli.command else {
            return Err("expected upload".into());
        };
        assert_eq!(args.timeout_ms, Some(250));
        Ok(())
    }

    #[test]
    fn parse_negative_degrees() -> TestResult {
        let cli = Cli::try_parse_from([
            "dtcctl", "coords", "format", "-41.5", "--axis", "lon", "--strip",
        ])?;
        let Commands::Coords(CoordsCommands::Format {
            degrees,
            axis,
            format,
            strip,
        }) = cli.command
        else {
            return Err("expected coords format".into());
        };
        assert!((degrees + 41.5).abs() < f64::EPSILON);
        assert_eq!(axis, AxisArg::Lon);
        assert_eq!(format, "ddm3");
        assert!(strip);
        Ok(())
    }

    #[test]
    fn explain_conflicts_with_output() -> TestResult {
        let Err(err) = Cli::try_parse_from([
            "dtcctl",
            "generate",
            "mission.json",
            "--explain",
            "--output",
            "out.txt",
        ]) else {
            return Err("expected a conflict".into());
        };
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        Ok(())
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
