//! Device/action registry and its builder.

use std::collections::BTreeMap;

use dtc_errors::{RegistryError, RegistryResult};
use serde::Serialize;

use crate::table::ActionSpec;

/// A single device-level input event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    id: u32,
    label: String,
    delay_ms: u32,
    activation: f64,
}

impl Action {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Delay the simulator waits after this action, in milliseconds.
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Default activation value; emissions may override it.
    pub fn activation(&self) -> f64 {
        self.activation
    }
}

/// A named cockpit control cluster and the actions it accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    id: u32,
    name: String,
    actions: BTreeMap<String, Action>,
}

impl Device {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an action by label.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownAction`] when the device declares no such label.
    pub fn action(&self, label: &str) -> RegistryResult<&Action> {
        self.actions
            .get(label)
            .ok_or_else(|| RegistryError::unknown_action(&self.name, label))
    }

    /// Reverse lookup by numeric action id.
    pub fn action_by_id(&self, action_id: u32) -> Option<&Action> {
        self.actions.values().find(|action| action.id == action_id)
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.values()
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }
}

/// Frozen device/action table for one aircraft.
#[derive(Debug, Clone, Serialize)]
pub struct ActionRegistry {
    aircraft: String,
    devices: BTreeMap<String, Device>,
}

impl ActionRegistry {
    /// Start a new table for `aircraft`.
    pub fn builder(aircraft: impl Into<String>) -> RegistryBuilder {
        RegistryBuilder {
            aircraft: aircraft.into(),
            devices: BTreeMap::new(),
        }
    }

    /// Aircraft this table describes.
    pub fn aircraft(&self) -> &str {
        &self.aircraft
    }

    /// Look up a device by name.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownDevice`] when no device has this name.
    pub fn resolve_device(&self, name: &str) -> RegistryResult<&Device> {
        self.devices
            .get(name)
            .ok_or_else(|| RegistryError::unknown_device(name))
    }

    /// Look up an action on a device previously resolved from this table.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownAction`] when the device has no such label.
    pub fn resolve_action<'d>(
        &self,
        device: &'d Device,
        label: &str,
    ) -> RegistryResult<&'d Action> {
        device.action(label)
    }

    /// Reverse lookup by numeric device id.
    pub fn device_by_id(&self, device_id: u32) -> Option<&Device> {
        self.devices.values().find(|device| device.id == device_id)
    }

    /// Devices ordered by name.
    pub fn devices(&self) -> impl Iterator<Item = &Device> {
        self.devices.values()
    }
}

/// Mutable registration phase of an [`ActionRegistry`].
#[derive(Debug)]
pub struct RegistryBuilder {
    aircraft: String,
    devices: BTreeMap<u32, Device>,
}

impl RegistryBuilder {
    /// Declare a device.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateDevice`] when the id or the name is taken.
    pub fn register_device(&mut self, id: u32, name: &str) -> RegistryResult<&mut Self> {
        if self.devices.contains_key(&id) || self.devices.values().any(|d| d.name == name) {
            return Err(RegistryError::DuplicateDevice {
                id,
                name: name.to_string(),
            });
        }
        self.devices.insert(
            id,
            Device {
                id,
                name: name.to_string(),
                actions: BTreeMap::new(),
            },
        );
        Ok(self)
    }

    /// Declare an action on a registered device.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DeviceNotRegistered`] for an unknown device id and
    /// [`RegistryError::DuplicateAction`] for a label already in use.
    pub fn add_action(
        &mut self,
        device_id: u32,
        action_id: u32,
        label: &str,
        delay_ms: u32,
        activation: f64,
    ) -> RegistryResult<&mut Self> {
        let device = self
            .devices
            .get_mut(&device_id)
            .ok_or(RegistryError::DeviceNotRegistered(device_id))?;
        if device.actions.contains_key(label) {
            return Err(RegistryError::DuplicateAction {
                device: device.name.clone(),
                label: label.to_string(),
            });
        }
        device.actions.insert(
            label.to_string(),
            Action {
                id: action_id,
                label: label.to_string(),
                delay_ms,
                activation,
            },
        );
        Ok(self)
    }

    /// Declare every action of a constant table on a registered device.
    ///
    /// # Errors
    ///
    /// Same as [`RegistryBuilder::add_action`].
    pub fn add_actions(
        &mut self,
        device_id: u32,
        specs: &[ActionSpec],
    ) -> RegistryResult<&mut Self> {
        for spec in specs {
            self.add_action(device_id, spec.id, spec.label, spec.delay_ms, spec.activation)?;
        }
        Ok(self)
    }

    /// Freeze the table.
    pub fn build(self) -> ActionRegistry {
        ActionRegistry {
            aircraft: self.aircraft,
            devices: self
                .devices
                .into_values()
                .map(|device| (device.name.clone(), device))
                .collect(),
        }
    }
}
