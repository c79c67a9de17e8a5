//! F-16C upfront controls (ICP) and their clickable action ids.

use dtc_config::Aircraft;
use dtc_registry::{ActionRegistry, ActionSpec, RegistryResult, digit_keys};

pub const UFC: &str = "UFC";
pub const UFC_ID: u32 = 17;

/// Page keys need time for the DED to redraw before the next press.
const PAGE_DELAY_MS: u32 = 100;

const UFC_DIGITS: [ActionSpec; 10] = digit_keys(3002, 0);

const UFC_KEYS: &[ActionSpec] = &[
    ActionSpec::press(3012, "COM1").with_delay(PAGE_DELAY_MS),
    ActionSpec::press(3013, "COM2").with_delay(PAGE_DELAY_MS),
    ActionSpec::press(3015, "LIST").with_delay(PAGE_DELAY_MS),
    ActionSpec::press(3016, "ENTR"),
    ActionSpec::press(3017, "RCL"),
    ActionSpec::press(3030, "UP"),
    ActionSpec::press(3031, "DOWN").with_activation(-1.0),
    ActionSpec::press(3032, "RTN")
        .with_activation(-1.0)
        .with_delay(PAGE_DELAY_MS),
    ActionSpec::press(3033, "SEQ").with_delay(PAGE_DELAY_MS),
    ActionSpec::press(3034, "INC"),
    ActionSpec::press(3035, "DEC").with_activation(-1.0),
];

/// F-16C device table.
///
/// # Errors
///
/// Registration errors if the constant tables collide.
pub fn registry() -> RegistryResult<ActionRegistry> {
    let mut builder = ActionRegistry::builder(Aircraft::F16C.module_id());
    builder
        .register_device(UFC_ID, UFC)?
        .add_actions(UFC_ID, &UFC_DIGITS)?
        .add_actions(UFC_ID, UFC_KEYS)?;
    Ok(builder.build())
}
