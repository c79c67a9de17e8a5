//! Device/action table errors.
//!
//! Every variant here means a builder and its aircraft table disagree. None
//! of them can be caused by user data.

use crate::common::ErrorSeverity;

/// Device and action registry errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No device registered under this name
    #[error("Unknown device: {0}")]
    UnknownDevice(String),

    /// The device exists but declares no action with this label
    #[error("Unknown action '{action}' on device {device}")]
    UnknownAction {
        /// Device name
        device: String,
        /// Action label
        action: String,
    },

    /// A device id or name was registered twice
    #[error("Device {name} (id {id}) registered twice")]
    DuplicateDevice {
        /// Device id
        id: u32,
        /// Device name
        name: String,
    },

    /// An action label was registered twice on the same device
    #[error("Action '{label}' registered twice on device {device}")]
    DuplicateAction {
        /// Device name
        device: String,
        /// Action label
        label: String,
    },

    /// An action was added to a device id that was never registered
    #[error("Cannot add action to unregistered device id {0}")]
    DeviceNotRegistered(u32),
}

impl RegistryError {
    /// Get the error severity. Registry errors always abort generation.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    /// Whether the failure happened during lookup rather than registration.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            RegistryError::UnknownDevice(_) | RegistryError::UnknownAction { .. }
        )
    }

    /// Create an unknown device error.
    pub fn unknown_device(name: impl Into<String>) -> Self {
        RegistryError::UnknownDevice(name.into())
    }

    /// Create an unknown action error.
    pub fn unknown_action(device: impl Into<String>, action: impl Into<String>) -> Self {
        RegistryError::UnknownAction {
            device: device.into(),
            action: action.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_action_message_names_both_parts() {
        let err = RegistryError::unknown_action("UFC", "ENTR");
        assert_eq!(err.to_string(), "Unknown action 'ENTR' on device UFC");
    }

    #[test]
    fn test_lookup_classification() {
        assert!(RegistryError::unknown_device("CDU").is_lookup_failure());
        assert!(!RegistryError::DeviceNotRegistered(9).is_lookup_failure());
        assert_eq!(
            RegistryError::DeviceNotRegistered(9).severity(),
            ErrorSeverity::Fatal
        );
    }
}
