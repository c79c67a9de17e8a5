//! Sample aircraft configurations.
//!
//! Values are plausible mission data around the Caucasus map so the
//! generated keystrokes look like a real upload.

use dtc_config::{
    A10Configuration, Aircraft, AircraftConfiguration, Ale47Program, Ale47System, CmdsProgram,
    CmdsSystem, DatalinkSystem, DispenseProgram, F16Configuration, FA18Configuration,
    M2000Configuration, NavpointList, RadioPreset, RadioSystem, TeamMember, WaypointSystem,
};

/// Three entries where the middle one has no longitude.
pub fn gapped_route() -> NavpointList {
    let mut list = NavpointList::new();
    list.append("BATUMI", Some(41.609_277), Some(41.600_555), Some(32));
    list.append("HOLD", Some(41.75), None, Some(12_000));
    list.append("KOBULETI", Some(41.929_444), Some(41.871_944), Some(59));
    list
}

/// `n` valid entries stepping north-east from Senaki.
pub fn route(n: u32) -> NavpointList {
    let mut list = NavpointList::new();
    for i in 0..n {
        let step = f64::from(i) * 0.05;
        list.append("", Some(42.24 + step), Some(42.03 + step), Some(2000));
    }
    list
}

pub fn dispense(bq: &str, bi: &str, sq: &str, si: &str) -> DispenseProgram {
    let field = |v: &str| (!v.is_empty()).then(|| v.to_string());
    DispenseProgram {
        burst_quantity: field(bq),
        burst_interval: field(bi),
        salvo_quantity: field(sq),
        salvo_interval: field(si),
    }
}

pub fn viper_mission() -> F16Configuration {
    let mut radios = RadioSystem::default();
    radios.com1.presets.push(RadioPreset::new(1, "305.000"));
    radios.com2.presets.push(RadioPreset::new(2, "127.500"));

    F16Configuration {
        steerpoints: WaypointSystem::new(gapped_route()),
        radios,
        cmds: CmdsSystem {
            programs: vec![
                CmdsProgram {
                    number: 1,
                    ..CmdsProgram::default()
                },
                CmdsProgram {
                    number: 2,
                    chaff: dispense("2", "0.050", "", ""),
                    flare: dispense("1", "", "", ""),
                },
                CmdsProgram {
                    number: 3,
                    ..CmdsProgram::default()
                },
            ],
        },
        datalink: DatalinkSystem {
            ownship_slot: Some(1),
            members: vec![TeamMember {
                slot: 2,
                stn: Some("00202".to_string()),
            }],
        },
    }
}

pub fn hornet_mission() -> FA18Configuration {
    let mut radios = RadioSystem::default();
    radios.com1.presets.push(RadioPreset::new(5, "251.000"));
    FA18Configuration {
        waypoints: WaypointSystem::new(gapped_route()).with_append_mode(true),
        radios,
        ale47: Ale47System {
            programs: vec![Ale47Program {
                number: 2,
                chaff_quantity: Some(4),
                flare_quantity: Some(2),
                repeat: None,
                interval: Some("1.00".to_string()),
            }],
        },
    }
}

pub fn warthog_route() -> A10Configuration {
    A10Configuration {
        waypoints: WaypointSystem::new(gapped_route()),
    }
}

pub fn mirage_route() -> M2000Configuration {
    M2000Configuration {
        waypoints: WaypointSystem::new(gapped_route()).with_append_mode(true),
    }
}

/// A populated configuration for `aircraft`.
pub fn mission(aircraft: Aircraft) -> AircraftConfiguration {
    match aircraft {
        Aircraft::F16C => AircraftConfiguration::F16C(viper_mission()),
        Aircraft::FA18C => AircraftConfiguration::FA18C(hornet_mission()),
        Aircraft::A10C => AircraftConfiguration::A10C(warthog_route()),
        Aircraft::M2000C => AircraftConfiguration::M2000C(mirage_route()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtc_config::SystemState;

    #[test]
    fn test_missions_are_not_default() {
        for aircraft in Aircraft::ALL {
            let config = mission(aircraft);
            assert_eq!(config.aircraft(), aircraft);
            assert!(!config.is_default());
        }
    }

    #[test]
    fn test_gapped_route_has_one_invalid_entry() {
        let route = gapped_route();
        assert_eq!(route.len(), 3);
        let valid: Vec<u32> = route.valid().map(|n| n.number).collect();
        assert_eq!(valid, vec![1, 3]);
    }
}
