//! Dry-run stream generation

use anyhow::Result;
use colored::*;
use dtc_stream::explain;
use serde_json::{Value, json};
use tracing::info;

use crate::commands::{GenerateArgs, load_configuration, orchestrator, upload_settings};
use crate::output;

/// Execute generate command
pub async fn execute(args: &GenerateArgs, json: bool, endpoint: Option<&str>) -> Result<()> {
    let config = load_configuration(&args.config)?;
    let upload = orchestrator(upload_settings(endpoint, None)?)?;
    let stream = upload.generate(&config)?;
    let aircraft = config.aircraft();

    if let Some(path) = &args.output {
        tokio::fs::write(path, stream.text()).await?;
        info!(path = %path.display(), bytes = stream.len(), "Wrote command stream");
        if json {
            let mut summary = output::stream_summary(aircraft, &stream);
            summary.insert("output".into(), json!(path.display().to_string()));
            output::print_json(&Value::Object(summary));
        } else {
            println!(
                "{} {} records ({} bytes) to {}",
                "Wrote".green(),
                stream.records().len(),
                stream.len(),
                path.display()
            );
        }
        return Ok(());
    }

    if args.explain {
        let registry = upload.registry(aircraft)?;
        let lines = explain(stream.records(), registry);
        if json {
            output::print_json(&json!({ "success": true, "lines": lines }));
        } else {
            for line in lines {
                println!("{line}");
            }
        }
        return Ok(());
    }

    if json {
        let mut summary = output::stream_summary(aircraft, &stream);
        summary.insert("stream".into(), json!(stream.text()));
        output::print_json(&Value::Object(summary));
    } else if stream.is_empty() {
        eprintln!(
            "{}",
            "Nothing to generate: every subsystem is at its defaults".yellow()
        );
    } else {
        println!("{}", stream.text());
    }
    Ok(())
}
