//! Constant action declarations used by the per-aircraft tables.

/// One action as declared in an aircraft table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionSpec {
    pub id: u32,
    pub label: &'static str,
    pub delay_ms: u32,
    pub activation: f64,
}

impl ActionSpec {
    /// Momentary press with no delay and activation 1.
    pub const fn press(id: u32, label: &'static str) -> Self {
        Self {
            id,
            label,
            delay_ms: 0,
            activation: 1.0,
        }
    }

    pub const fn with_delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub const fn with_activation(self, activation: f64) -> Self {
        Self { activation, ..self }
    }
}

/// Labels of the ten digit keys, indexed by digit value.
pub const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Ten digit keys labelled `"0"`..`"9"` with consecutive ids starting at
/// `zero_id`.
#[expect(
    clippy::indexing_slicing,
    clippy::cast_possible_truncation,
    reason = "digit is bounded by the ten-element arrays"
)]
pub const fn digit_keys(zero_id: u32, delay_ms: u32) -> [ActionSpec; 10] {
    let mut keys = [ActionSpec::press(zero_id, "0"); 10];
    let mut digit = 0;
    while digit < DIGIT_LABELS.len() {
        keys[digit] = ActionSpec::press(zero_id + digit as u32, DIGIT_LABELS[digit])
            .with_delay(delay_ms);
        digit += 1;
    }
    keys
}
