//! M-2000C PCN navigation keypad.

use dtc_config::Aircraft;
use dtc_registry::{ActionRegistry, ActionSpec, RegistryResult, digit_keys};

pub const PCN: &str = "PCN";
pub const PCN_ID: u32 = 23;

const PCN_DIGITS: [ActionSpec; 10] = digit_keys(3584, 0);

const PCN_KEYS: &[ActionSpec] = &[
    ActionSpec::press(3570, "PREP").with_delay(100),
    ActionSpec::press(3574, "INS"),
    ActionSpec::press(3596, "EFF"),
    ActionSpec::press(3600, "NE"),
    ActionSpec::press(3601, "SW"),
];

/// M-2000C device table.
///
/// # Errors
///
/// Registration errors if the constant tables collide.
pub fn registry() -> RegistryResult<ActionRegistry> {
    let mut builder = ActionRegistry::builder(Aircraft::M2000C.module_id());
    builder
        .register_device(PCN_ID, PCN)?
        .add_actions(PCN_ID, &PCN_DIGITS)?
        .add_actions(PCN_ID, PCN_KEYS)?;
    Ok(builder.build())
}
