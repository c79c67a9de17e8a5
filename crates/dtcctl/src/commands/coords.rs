//! Coordinate text conversion

use anyhow::Result;
use dtc_coords::{Axis, CoordinateFormat, from_text, strip_zero_fill, to_text};
use serde_json::json;

use crate::commands::CoordsCommands;
use crate::error::CliError;
use crate::output;

/// Execute coords command
pub fn execute(cmd: &CoordsCommands, json: bool) -> Result<()> {
    match cmd {
        CoordsCommands::Format {
            degrees,
            axis,
            format,
            strip,
        } => {
            let axis = Axis::from(*axis);
            let format = parse_format(format)?;
            let text = to_text(*degrees, format, axis).map_err(CliError::from)?;
            let text = if *strip { strip_zero_fill(&text) } else { text };
            if json {
                output::print_json(&json!({
                    "success": true,
                    "axis": axis,
                    "format": format.to_string(),
                    "text": text,
                }));
            } else {
                println!("{text}");
            }
        }
        CoordsCommands::Parse { text, axis, format } => {
            let axis = Axis::from(*axis);
            let format = parse_format(format)?;
            let degrees = from_text(text, format, axis).map_err(CliError::from)?;
            if json {
                output::print_json(&json!({
                    "success": true,
                    "axis": axis,
                    "format": format.to_string(),
                    "degrees": degrees,
                }));
            } else {
                println!("{degrees}");
            }
        }
    }
    Ok(())
}

fn parse_format(name: &str) -> Result<CoordinateFormat, CliError> {
    Ok(name.parse::<CoordinateFormat>()?)
}
