//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use dtc_aircraft::AircraftProfile;
use dtc_config::Aircraft;
use dtc_stream::FinalizedStream;
use serde_json::{Map, Value, json};

use crate::error::CliError;

/// Print a JSON value, pretty-printed.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format output as JSON: {e}"),
    }
}

/// JSON body for a failed command.
pub fn error_json(error: &Error) -> Value {
    let kind = error
        .downcast_ref::<CliError>()
        .map_or("error", CliError::kind);
    let mut body = Map::new();
    body.insert("message".into(), json!(error.to_string()));
    body.insert("type".into(), json!(kind));
    if let Some((category, severity)) = crate::error::classification(error) {
        body.insert("category".into(), json!(category.as_str()));
        body.insert("severity".into(), json!(severity.as_str()));
    }
    json!({ "success": false, "error": body })
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    print_json(&error_json(error));
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "Caused by:".yellow(), cause);
    }
}

/// Summary of a generated stream, as a JSON object callers may extend.
pub fn stream_summary(aircraft: Aircraft, stream: &FinalizedStream) -> Map<String, Value> {
    let mut summary = Map::new();
    summary.insert("success".into(), json!(true));
    summary.insert("aircraft".into(), json!(aircraft.module_id()));
    summary.insert("records".into(), json!(stream.records().len()));
    summary.insert("actions".into(), json!(stream.action_count()));
    summary.insert("bytes".into(), json!(stream.len()));
    summary
}

/// Print the supported aircraft and their upload order.
pub fn print_aircraft_list(profiles: &[AircraftProfile], json: bool) {
    if json {
        let aircraft: Vec<Value> = profiles
            .iter()
            .map(|p| {
                json!({
                    "name": p.aircraft.name(),
                    "module": p.aircraft.module_id(),
                    "systems": p.systems,
                })
            })
            .collect();
        print_json(&json!({ "success": true, "aircraft": aircraft }));
        return;
    }

    println!("{}", "Supported Aircraft:".bold());
    for profile in profiles {
        println!(
            "  {} {} ({})",
            "●".green(),
            profile.aircraft.name().bold(),
            profile.aircraft.module_id().dimmed()
        );
        println!("    Upload order: {}", profile.systems.join(" → "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtc_errors::{DtcError, RegistryError};

    #[test]
    fn test_error_json_carries_classification() {
        let error = Error::new(DtcError::from(RegistryError::unknown_device("CDU")))
            .context("generating mission.json");
        let body = error_json(&error);
        assert_eq!(body.get("success"), Some(&json!(false)));
        assert_eq!(body.pointer("/error/type"), Some(&json!("error")));
        assert_eq!(body.pointer("/error/category"), Some(&json!("registry")));
        assert_eq!(body.pointer("/error/severity"), Some(&json!("fatal")));
    }

    #[test]
    fn test_unclassified_error_json() {
        let body = error_json(&anyhow::anyhow!("disk full"));
        assert_eq!(body.pointer("/error/message"), Some(&json!("disk full")));
        assert!(body.pointer("/error/category").is_none());
    }
}
