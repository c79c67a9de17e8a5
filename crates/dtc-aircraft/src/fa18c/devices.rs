//! F/A-18C up-front controller and the right AMPCD bezel.

use dtc_config::Aircraft;
use dtc_registry::{ActionRegistry, ActionSpec, RegistryResult, digit_keys};

pub const UFC: &str = "UFC";
pub const UFC_ID: u32 = 25;
pub const AMPCD: &str = "AMPCD";
pub const AMPCD_ID: u32 = 37;

/// Bezel presses change format pages; the display needs time to redraw.
const PAGE_DELAY_MS: u32 = 200;

const UFC_DIGITS: [ActionSpec; 10] = digit_keys(3019, 0);

const UFC_KEYS: &[ActionSpec] = &[
    ActionSpec::press(3010, "OS1").with_delay(50),
    ActionSpec::press(3011, "OS2").with_delay(50),
    ActionSpec::press(3012, "OS3").with_delay(50),
    ActionSpec::press(3013, "OS4").with_delay(50),
    ActionSpec::press(3014, "OS5").with_delay(50),
    ActionSpec::press(3029, "ENT"),
    ActionSpec::press(3030, "CLR"),
    ActionSpec::press(3008, "COMM1_PULL").with_delay(PAGE_DELAY_MS),
    ActionSpec::press(3009, "COMM2_PULL").with_delay(PAGE_DELAY_MS),
];

const BEZEL_LABELS: [&str; 20] = [
    "PB01", "PB02", "PB03", "PB04", "PB05", "PB06", "PB07", "PB08", "PB09", "PB10", "PB11", "PB12",
    "PB13", "PB14", "PB15", "PB16", "PB17", "PB18", "PB19", "PB20",
];

/// The twenty bezel push buttons, clockwise from the top left.
#[expect(
    clippy::indexing_slicing,
    clippy::cast_possible_truncation,
    reason = "index is bounded by the twenty-element arrays"
)]
const fn bezel_buttons(first_id: u32) -> [ActionSpec; 20] {
    let mut buttons = [ActionSpec::press(first_id, "PB01"); 20];
    let mut index = 0;
    while index < BEZEL_LABELS.len() {
        buttons[index] = ActionSpec::press(first_id + index as u32, BEZEL_LABELS[index])
            .with_delay(PAGE_DELAY_MS);
        index += 1;
    }
    buttons
}

const AMPCD_BUTTONS: [ActionSpec; 20] = bezel_buttons(3011);

/// F/A-18C device table.
///
/// # Errors
///
/// Registration errors if the constant tables collide.
pub fn registry() -> RegistryResult<ActionRegistry> {
    let mut builder = ActionRegistry::builder(Aircraft::FA18C.module_id());
    builder
        .register_device(UFC_ID, UFC)?
        .add_actions(UFC_ID, &UFC_DIGITS)?
        .add_actions(UFC_ID, UFC_KEYS)?
        .register_device(AMPCD_ID, AMPCD)?
        .add_actions(AMPCD_ID, &AMPCD_BUTTONS)?;
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bezel_ids_follow_labels() -> RegistryResult<()> {
        let registry = registry()?;
        let ampcd = registry.resolve_device(AMPCD)?;
        assert_eq!(ampcd.action_count(), 20);
        assert_eq!(ampcd.action("PB01")?.id(), 3011);
        assert_eq!(ampcd.action("PB18")?.id(), 3028);
        Ok(())
    }
}
