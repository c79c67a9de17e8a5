//! Datalink team page (LIST ENTR).

use dtc_config::{DatalinkSystem, SystemState, TeamMember};
use dtc_errors::Result;
use dtc_registry::ActionRegistry;
use dtc_stream::CommandAssembler;
use tracing::{debug, trace, warn};

use super::devices::UFC;
use crate::SystemBuilder;
use crate::entry::FieldCursor;

pub const TEAM_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy, Default)]
pub struct DatalinkBuilder;

impl SystemBuilder for DatalinkBuilder {
    type Config = DatalinkSystem;

    fn name(&self) -> &'static str {
        "datalink"
    }

    fn build(
        &self,
        config: &DatalinkSystem,
        devices: &ActionRegistry,
        out: &mut CommandAssembler,
    ) -> Result<()> {
        let ufc = devices.resolve_device(UFC)?;
        if config.is_default() {
            trace!("datalink at defaults");
            return Ok(());
        }

        let in_team = |slot: u8| (1..=TEAM_SIZE).contains(&slot);
        let mut members: Vec<&TeamMember> = config
            .members
            .iter()
            .filter(|member| member.stn().is_some())
            .filter(|member| {
                if !in_team(member.slot) {
                    warn!(slot = member.slot, "team slot out of range, skipped");
                }
                in_team(member.slot)
            })
            .collect();
        members.sort_by_key(|member| member.slot);
        debug!(members = members.len(), ownship = ?config.ownship_slot, "uploading datalink team");

        out.emit_marker(self.name(), &[])?;
        out.emit_actions(ufc, &["LIST", "ENTR"])?;

        // row 0 is team slot 1
        let mut cursor = FieldCursor::new("DOWN", "UP");
        for member in members {
            let Some(stn) = member.stn() else {
                continue;
            };
            cursor.move_to(usize::from(member.slot - 1), ufc, out)?;
            out.emit_digits(ufc, stn)?;
            out.emit_action(ufc, "ENTR")?;
        }

        match config.ownship_slot {
            Some(slot) if in_team(slot) => {
                out.emit_action(ufc, "SEQ")?;
                out.emit_digits(ufc, &slot.to_string())?;
                out.emit_action(ufc, "ENTR")?;
            }
            Some(slot) => warn!(slot, "ownship slot out of range, skipped"),
            None => {}
        }

        out.emit_action(ufc, "RTN")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::f16c::registry;
    use crate::test_support::{explained, presses};

    fn member(slot: u8, stn: &str) -> TeamMember {
        TeamMember {
            slot,
            stn: Some(stn.to_string()),
        }
    }

    #[test]
    fn test_members_in_slot_order_then_ownship() -> Result<()> {
        let config = DatalinkSystem {
            ownship_slot: Some(2),
            members: vec![member(3, "00203"), member(1, "00201"), member(2, " ")],
        };
        let lines = explained(&DatalinkBuilder, &config, &registry()?)?;

        let mut expected = vec!["# datalink".to_string()];
        expected.extend(presses(
            "UFC",
            &[
                "LIST", "ENTR", "0", "0", "2", "0", "1", "ENTR", "DOWN", "DOWN", "0", "0", "2", "0",
                "3", "ENTR", "SEQ", "2", "ENTR", "RTN",
            ],
        ));
        assert_eq!(lines, expected);
        Ok(())
    }

    #[test]
    fn test_blank_team_emits_nothing() -> Result<()> {
        let config = DatalinkSystem {
            ownship_slot: None,
            members: vec![member(1, "")],
        };
        assert!(explained(&DatalinkBuilder, &config, &registry()?)?.is_empty());
        Ok(())
    }
}
