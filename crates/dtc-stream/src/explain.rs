//! Human-readable rendering of command records.

use dtc_registry::ActionRegistry;

use crate::record::CommandRecord;

/// One line per record: `DEVICE LABEL` for actions, `# label` for markers.
///
/// An activation that differs from the action's default is appended in
/// brackets; ids the registry does not know are shown numerically.
pub fn explain(records: &[CommandRecord], registry: &ActionRegistry) -> Vec<String> {
    records
        .iter()
        .map(|record| {
            if let Some(marker) = &record.marker {
                return format!("# {marker}");
            }
            let device = registry.device_by_id(record.device);
            let action = device.and_then(|d| d.action_by_id(record.action));
            match (device, action) {
                (Some(device), Some(action)) => {
                    if (action.activation() - record.activation).abs() > f64::EPSILON {
                        format!("{} {} [{}]", device.name(), action.label(), record.activation)
                    } else {
                        format!("{} {}", device.name(), action.label())
                    }
                }
                _ => format!("{}:{}", record.device, record.action),
            }
        })
        .collect()
}
