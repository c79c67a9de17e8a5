//! CMDS program pages (LIST 7).

use dtc_config::{CmdsProgram, CmdsSystem, DispenseProgram, SystemState};
use dtc_errors::Result;
use dtc_registry::{ActionRegistry, Device};
use dtc_stream::CommandAssembler;
use tracing::{debug, trace, warn};

use super::devices::UFC;
use crate::SystemBuilder;
use crate::entry::FieldCursor;

pub const PROGRAM_COUNT: u8 = 6;

/// Writes chaff then flare dispense programs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CmdsBuilder;

impl SystemBuilder for CmdsBuilder {
    type Config = CmdsSystem;

    fn name(&self) -> &'static str {
        "cmds"
    }

    fn build(
        &self,
        config: &CmdsSystem,
        devices: &ActionRegistry,
        out: &mut CommandAssembler,
    ) -> Result<()> {
        let ufc = devices.resolve_device(UFC)?;
        if config.is_default() {
            trace!("CMDS programs at defaults");
            return Ok(());
        }

        let mut programs: Vec<&CmdsProgram> = config
            .programs
            .iter()
            .filter(|program| !program.is_default())
            .filter(|program| {
                let in_range = (1..=PROGRAM_COUNT).contains(&program.number);
                if !in_range {
                    warn!(program = program.number, "CMDS program out of range, skipped");
                }
                in_range
            })
            .collect();
        if programs.is_empty() {
            return Ok(());
        }
        programs.sort_by_key(|program| program.number);
        debug!(programs = programs.len(), "uploading CMDS programs");

        out.emit_marker(self.name(), &[])?;
        out.emit_actions(ufc, &["LIST", "7"])?;

        let mut page = ProgramPage::new(ufc);
        for program in programs.iter().filter(|p| !p.chaff.is_default()) {
            page.enter(program.number, &program.chaff, out)?;
        }

        let flares: Vec<&&CmdsProgram> = programs.iter().filter(|p| !p.flare.is_default()).collect();
        if !flares.is_empty() {
            out.emit_action(ufc, "SEQ")?;
            page.next_category();
            for program in flares {
                page.enter(program.number, &program.flare, out)?;
            }
        }

        out.emit_action(ufc, "RTN")
    }
}

/// Program number and highlighted field of the CMDS page.
///
/// The page opens on program 1 with BQ highlighted. SEQ keeps the program
/// and moves the highlight back to BQ.
struct ProgramPage<'d> {
    ufc: &'d Device,
    program: u8,
    cursor: FieldCursor,
}

impl<'d> ProgramPage<'d> {
    fn new(ufc: &'d Device) -> Self {
        Self {
            ufc,
            program: 1,
            cursor: FieldCursor::new("DOWN", "UP"),
        }
    }

    fn next_category(&mut self) {
        self.cursor = FieldCursor::new("DOWN", "UP");
    }

    fn select(&mut self, target: u8, out: &mut CommandAssembler) -> Result<()> {
        if target > self.program {
            out.emit_repeated(self.ufc, "INC", usize::from(target - self.program))?;
        } else if target < self.program {
            out.emit_repeated(self.ufc, "DEC", usize::from(self.program - target))?;
        }
        self.program = target;
        Ok(())
    }

    fn enter(&mut self, number: u8, program: &DispenseProgram, out: &mut CommandAssembler) -> Result<()> {
        self.select(number, out)?;
        for (row, value) in program.fields().into_iter().enumerate() {
            if let Some(value) = value {
                self.cursor.move_to(row, self.ufc, out)?;
                out.emit_digits(self.ufc, value)?;
                out.emit_action(self.ufc, "ENTR")?;
            }
        }
        Ok(())
    }
}
