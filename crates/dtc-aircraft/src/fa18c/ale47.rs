//! ALE-47 manual programs on the EW format.

use dtc_config::{Ale47Program, Ale47System, SystemState};
use dtc_errors::Result;
use dtc_registry::ActionRegistry;
use dtc_stream::CommandAssembler;
use tracing::{debug, trace, warn};

use super::devices::{AMPCD, UFC};
use crate::SystemBuilder;

pub const PROGRAM_COUNT: u8 = 6;

/// Bezel buttons selecting chaff, flare, repeat and interval, in
/// [`Ale47Program::fields`] order.
const FIELD_BUTTONS: [&str; 4] = ["PB07", "PB08", "PB09", "PB10"];

#[derive(Debug, Clone, Copy, Default)]
pub struct Ale47Builder;

impl SystemBuilder for Ale47Builder {
    type Config = Ale47System;

    fn name(&self) -> &'static str {
        "ale47"
    }

    fn build(
        &self,
        config: &Ale47System,
        devices: &ActionRegistry,
        out: &mut CommandAssembler,
    ) -> Result<()> {
        let ufc = devices.resolve_device(UFC)?;
        let ampcd = devices.resolve_device(AMPCD)?;
        if config.is_default() {
            trace!("ALE-47 programs at defaults");
            return Ok(());
        }

        let mut programs: Vec<&Ale47Program> = config
            .programs
            .iter()
            .filter(|program| !program.is_default())
            .filter(|program| {
                let in_range = (1..=PROGRAM_COUNT).contains(&program.number);
                if !in_range {
                    warn!(program = program.number, "ALE-47 program out of range, skipped");
                }
                in_range
            })
            .collect();
        if programs.is_empty() {
            return Ok(());
        }
        programs.sort_by_key(|program| program.number);
        debug!(programs = programs.len(), "uploading ALE-47 programs");

        out.emit_marker(self.name(), &[])?;
        // MENU, EW, ALE-47, PROG
        out.emit_actions(ampcd, &["PB18", "PB17", "PB08", "PB05"])?;

        let mut current = 1u8;
        for program in programs {
            // the program button only counts upwards and wraps after 6
            let presses = (program.number + PROGRAM_COUNT - current) % PROGRAM_COUNT;
            out.emit_repeated(ampcd, "PB06", usize::from(presses))?;
            current = program.number;

            for (button, value) in FIELD_BUTTONS.into_iter().zip(program.fields()) {
                if let Some(value) = value {
                    out.emit_action(ampcd, button)?;
                    out.emit_digits(ufc, &value)?;
                    out.emit_action(ufc, "ENT")?;
                }
            }
        }

        // SAVE, MENU
        out.emit_actions(ampcd, &["PB05", "PB18"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fa18c::registry;
    use crate::test_support::{explained, presses};

    #[test]
    fn test_program_selection_and_fields() -> Result<()> {
        let config = Ale47System {
            programs: vec![
                Ale47Program {
                    number: 3,
                    chaff_quantity: Some(2),
                    interval: Some("0.50".to_string()),
                    ..Ale47Program::default()
                },
                Ale47Program {
                    number: 2,
                    ..Ale47Program::default()
                },
                Ale47Program {
                    number: 1,
                    repeat: Some(4),
                    ..Ale47Program::default()
                },
            ],
        };
        let lines = explained(&Ale47Builder, &config, &registry()?)?;

        let expected: Vec<String> = [
            vec!["# ale47".to_string()],
            presses("AMPCD", &["PB18", "PB17", "PB08", "PB05", "PB09"]),
            presses("UFC", &["4", "ENT"]),
            presses("AMPCD", &["PB06", "PB06", "PB07"]),
            presses("UFC", &["2", "ENT"]),
            presses("AMPCD", &["PB10"]),
            presses("UFC", &["0", "5", "0", "ENT"]),
            presses("AMPCD", &["PB05", "PB18"]),
        ]
        .concat();
        assert_eq!(lines, expected);
        Ok(())
    }

    #[test]
    fn test_default_programs_emit_nothing() -> Result<()> {
        let config = Ale47System {
            programs: vec![Ale47Program {
                number: 1,
                ..Ale47Program::default()
            }],
        };
        assert!(explained(&Ale47Builder, &config, &registry()?)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_only_out_of_range_programs_emit_nothing() -> Result<()> {
        let config = Ale47System {
            programs: vec![Ale47Program {
                number: 7,
                flare_quantity: Some(4),
                ..Ale47Program::default()
            }],
        };
        assert!(explained(&Ale47Builder, &config, &registry()?)?.is_empty());
        Ok(())
    }
}
