//! COMM1/COMM2 presets through the UFC channel selector.

use dtc_config::{RadioSystem, SystemState};
use dtc_errors::Result;
use dtc_registry::ActionRegistry;
use dtc_stream::CommandAssembler;
use tracing::{debug, trace, warn};

use super::devices::UFC;
use crate::SystemBuilder;

pub const MAX_PRESET: u8 = 20;

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
        for (pull, radio) in [("COMM1_PULL", &config.com1), ("COMM2_PULL", &config.com2)] {
            debug!(radio = pull, presets = radio.populated().count(), "uploading presets");
            for preset in radio.populated() {
                if !(1..=MAX_PRESET).contains(&preset.number) {
                    warn!(radio = pull, preset = preset.number, "preset out of range, skipped");
                    continue;
                }
                let Some(frequency) = preset.frequency() else {
                    continue;
                };
                out.emit_action(ufc, pull)?;
                out.emit_digits(ufc, &preset.number.to_string())?;
                out.emit_action(ufc, "ENT")?;
                out.emit_digits(ufc, frequency)?;
                out.emit_action(ufc, "ENT")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fa18c::registry;
    use crate::test_support::{explained, presses};
    use dtc_config::RadioPreset;

    #[test]
    fn test_each_preset_reopens_channel_entry() -> Result<()> {
        let mut radios = RadioSystem::default();
        radios.com1.presets.push(RadioPreset::new(1, "305.000"));
        radios.com1.presets.push(RadioPreset::new(12, "251.5"));
        let lines = explained(&RadioBuilder, &radios, &registry()?)?;

        let mut expected = vec!["# radios".to_string()];
        expected.extend(presses(
            "UFC",
            &[
                "COMM1_PULL", "1", "ENT", "3", "0", "5", "0", "0", "0", "ENT", "COMM1_PULL", "1", "2",
                "ENT", "2", "5", "1", "5", "ENT",
            ],
        ));
        assert_eq!(lines, expected);
        Ok(())
    }
}
