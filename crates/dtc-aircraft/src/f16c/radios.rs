//! COM1/COM2 preset pages.

use dtc_config::{Radio, RadioSystem, SystemState};
use dtc_errors::Result;
use dtc_registry::{ActionRegistry, Device};
use dtc_stream::CommandAssembler;
use tracing::{debug, trace, warn};

use super::devices::UFC;
use crate::SystemBuilder;

pub const MAX_PRESET: u8 = 20;

/// Writes preset frequencies on the COM1 (UHF) and COM2 (VHF) pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadioBuilder;

impl SystemBuilder for RadioBuilder {
    type Config = RadioSystem;

    fn name(&self) -> &'static str {
        "radios"
    }

    fn build(
        &self,
        config: &RadioSystem,
        devices: &ActionRegistry,
        out: &mut CommandAssembler,
    ) -> Result<()> {
        let ufc = devices.resolve_device(UFC)?;
        if config.is_default() {
            trace!("radio presets at defaults");
            return Ok(());
        }

        out.emit_marker(self.name(), &[])?;
        for (page, radio) in [("COM1", &config.com1), ("COM2", &config.com2)] {
            if !radio.is_default() {
                build_radio(ufc, page, radio, out)?;
            }
        }
        Ok(())
    }
}

fn build_radio(ufc: &Device, page: &'static str, radio: &Radio, out: &mut CommandAssembler) -> Result<()> {
    debug!(radio = page, presets = radio.populated().count(), "uploading presets");
    out.emit_action(ufc, page)?;
    for preset in radio.populated() {
        if !(1..=MAX_PRESET).contains(&preset.number) {
            warn!(radio = page, preset = preset.number, "preset out of range, skipped");
            continue;
        }
        let Some(frequency) = preset.frequency() else {
            continue;
        };
        out.emit_digits(ufc, &preset.number.to_string())?;
        out.emit_actions(ufc, &["ENTR", "DOWN"])?;
        out.emit_digits(ufc, frequency)?;
        out.emit_actions(ufc, &["ENTR", "UP"])?;
    }
    out.emit_action(ufc, "RTN")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::f16c::registry;
    use crate::test_support::{explained, presses};
    use dtc_config::RadioPreset;

    #[test]
    fn test_only_populated_radio_is_visited() -> Result<()> {
        let mut radios = RadioSystem::default();
        radios.com2.presets.push(RadioPreset::new(3, "127.5"));
        radios.com2.presets.push(RadioPreset {
            number: 4,
            frequency: None,
        });
        let lines = explained(&RadioBuilder, &radios, &registry()?)?;

        let mut expected = vec!["# radios".to_string()];
        expected.extend(presses(
            "UFC",
            &["COM2", "3", "ENTR", "DOWN", "1", "2", "7", "5", "ENTR", "UP", "RTN"],
        ));
        assert_eq!(lines, expected);
        Ok(())
    }

    #[test]
    fn test_default_radios_emit_nothing() -> Result<()> {
        let lines = explained(&RadioBuilder, &RadioSystem::default(), &registry()?)?;
        assert!(lines.is_empty());
        Ok(())
    }

    #[test]
    fn test_preset_beyond_page_skipped() -> Result<()> {
        let mut radios = RadioSystem::default();
        radios.com1.presets.push(RadioPreset::new(21, "225.000"));
        let lines = explained(&RadioBuilder, &radios, &registry()?)?;
        assert_eq!(lines, vec!["# radios", "UFC COM1", "UFC RTN"]);
        Ok(())
    }
}
