//! A-10C CDU keyboard.

use dtc_config::Aircraft;
use dtc_registry::{ActionRegistry, ActionSpec, RegistryResult, digit_keys};

pub const CDU: &str = "CDU";
pub const CDU_ID: u32 = 9;

const CDU_DIGITS: [ActionSpec; 10] = digit_keys(3015, 0);

pub const LETTER_LABELS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

/// Letter keys `A`..`Z` with consecutive ids starting at `a_id`.
#[expect(
    clippy::indexing_slicing,
    clippy::cast_possible_truncation,
    reason = "letter index is bounded by the 26-element arrays"
)]
const fn letter_keys(a_id: u32) -> [ActionSpec; 26] {
    let mut keys = [ActionSpec::press(a_id, "A"); 26];
    let mut index = 0;
    while index < LETTER_LABELS.len() {
        keys[index] = ActionSpec::press(a_id + index as u32, LETTER_LABELS[index]);
        index += 1;
    }
    keys
}

const CDU_LETTERS: [ActionSpec; 26] = letter_keys(3027);

const CDU_KEYS: &[ActionSpec] = &[
    ActionSpec::press(3001, "LSK_3L"),
    ActionSpec::press(3002, "LSK_5L"),
    ActionSpec::press(3003, "LSK_7L"),
    ActionSpec::press(3004, "LSK_9L"),
    ActionSpec::press(3005, "LSK_3R"),
    ActionSpec::press(3007, "LSK_7R"),
    ActionSpec::press(3011, "WP").with_delay(100),
    ActionSpec::press(3014, "FPM").with_delay(100),
    ActionSpec::press(3057, "CLR"),
];

/// A-10C device table.
///
/// # Errors
///
/// Registration errors if the constant tables collide.
pub fn registry() -> RegistryResult<ActionRegistry> {
    let mut builder = ActionRegistry::builder(Aircraft::A10C.module_id());
    builder
        .register_device(CDU_ID, CDU)?
        .add_actions(CDU_ID, &CDU_DIGITS)?
        .add_actions(CDU_ID, &CDU_LETTERS)?
        .add_actions(CDU_ID, CDU_KEYS)?;
    Ok(builder.build())
}
