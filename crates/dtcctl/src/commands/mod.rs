//! Command implementations for dtcctl

pub mod aircraft;
pub mod coords;
pub mod generate;
pub mod upload;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand, ValueEnum};
use dtc_config::AircraftConfiguration;
use dtc_coords::Axis;
use dtc_upload::{TcpTransport, UploadOrchestrator, UploadSettings};
use tracing::debug;

use crate::error::CliError;

#[derive(Args)]
pub struct GenerateArgs {
    /// Aircraft configuration file (JSON)
    pub config: PathBuf,
    /// Write the stream to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Print one line per keypress instead of the raw stream
    #[arg(long, conflicts_with = "output")]
    pub explain: bool,
}

#[derive(Args)]
pub struct UploadArgs {
    /// Aircraft configuration file (JSON)
    pub config: PathBuf,
    /// Give up on the send after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

#[derive(Subcommand)]
pub enum CoordsCommands {
    /// Render decimal degrees as keypad text
    Format {
        /// Signed decimal degrees; negative is south or west
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
        #[arg(long, value_enum)]
        axis: AxisArg,
        /// dms, ddm0..ddm3, optionally suffixed -nofill
        #[arg(long, default_value = "ddm3")]
        format: String,
        /// Remove leading zeros from integer fields
        #[arg(long)]
        strip: bool,
    },

    /// Read keypad text back into decimal degrees
    Parse {
        /// Coordinate text, e.g. "N 41° 36.500’"
        text: String,
        #[arg(long, value_enum)]
        axis: AxisArg,
        /// dms, ddm0..ddm3, optionally suffixed -nofill
        #[arg(long, default_value = "ddm3")]
        format: String,
    },
}

#[derive(Subcommand)]
pub enum AircraftCommands {
    /// List supported aircraft and their subsystem upload order
    List,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    Lat,
    Lon,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Lat => Axis::Latitude,
            AxisArg::Lon => Axis::Longitude,
        }
    }
}

/// Read and parse an aircraft configuration file.
pub fn load_configuration(path: &Path) -> Result<AircraftConfiguration, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;
    let config =
        AircraftConfiguration::from_json_str(&text).map_err(|source| CliError::ConfigParse {
            path: path.display().to_string(),
            source,
        })?;
    debug!(path = %path.display(), aircraft = %config.aircraft(), "Loaded configuration");
    Ok(config)
}

/// Upload settings from the global endpoint flag and an optional timeout.
pub fn upload_settings(
    endpoint: Option<&str>,
    timeout_ms: Option<u64>,
) -> Result<UploadSettings, CliError> {
    let mut settings = UploadSettings::default();
    if let Some(endpoint) = endpoint {
        let addr: SocketAddr = endpoint
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| CliError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;
        settings = settings.with_endpoint(addr);
    }
    if let Some(timeout_ms) = timeout_ms {
        settings = settings.with_send_timeout_ms(timeout_ms);
    }
    Ok(settings)
}

/// Orchestrator talking TCP to the configured endpoint.
pub fn orchestrator(settings: UploadSettings) -> anyhow::Result<UploadOrchestrator<TcpTransport>> {
    Ok(UploadOrchestrator::new(
        TcpTransport::new(settings.endpoint),
        settings,
    )?)
}
