//! Stream upload to the in-cockpit receiver

use anyhow::{Context, Result};
use colored::*;
use dtc_upload::UploadOutcome;
use serde_json::json;

use crate::commands::{UploadArgs, load_configuration, orchestrator, upload_settings};
use crate::error::CliError;
use crate::output;

/// Execute upload command
pub async fn execute(args: &UploadArgs, json: bool, endpoint: Option<&str>) -> Result<()> {
    let config = load_configuration(&args.config)?;
    let settings = upload_settings(endpoint, args.timeout_ms)?;
    let upload = orchestrator(settings)?;

    let outcome = upload.load(&config).await?;
    match outcome {
        UploadOutcome::NothingToSend => {
            if json {
                output::print_json(&json!({ "success": true, "sent": false }));
            } else {
                println!(
                    "{}",
                    "Nothing to send: every subsystem is at its defaults".yellow()
                );
            }
            Ok(())
        }
        UploadOutcome::Sent { records, bytes } => {
            if json {
                output::print_json(&json!({
                    "success": true,
                    "sent": true,
                    "aircraft": config.aircraft().module_id(),
                    "endpoint": settings.endpoint.to_string(),
                    "records": records,
                    "bytes": bytes,
                }));
            } else {
                println!(
                    "{} {} records ({} bytes) to {}",
                    "Sent".green().bold(),
                    records,
                    bytes,
                    settings.endpoint
                );
            }
            Ok(())
        }
        UploadOutcome::SendFailed { reason } => Err(CliError::SendFailed(reason))
            .with_context(|| format!("uploading {}", args.config.display())),
    }
}
