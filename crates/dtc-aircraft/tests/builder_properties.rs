//! Laws every waypoint builder keeps for arbitrary lists.

use dtc_aircraft::SystemBuilder;
use dtc_aircraft::{a10c, f16c, m2000c};
use dtc_config::{NavpointList, WaypointSystem};
use dtc_registry::ActionRegistry;
use dtc_stream::{CommandAssembler, explain};
use proptest::prelude::*;

type Entry = (Option<f64>, Option<f64>, Option<i32>);

fn any_entry() -> impl Strategy<Value = Entry> {
    (
        prop::option::weighted(0.8, -95.0f64..95.0),
        prop::option::weighted(0.8, -185.0f64..185.0),
        prop::option::of(-100i32..40_000),
    )
}

fn system(entries: &[Entry], append_mode: bool) -> WaypointSystem {
    let mut list = NavpointList::new();
    for (lat, lon, alt) in entries {
        list.append("", *lat, *lon, *alt);
    }
    WaypointSystem::new(list).with_append_mode(append_mode)
}

fn lines<B: SystemBuilder<Config = WaypointSystem>>(
    builder: &B,
    config: &WaypointSystem,
    registry: &ActionRegistry,
) -> Result<Vec<String>, TestCaseError> {
    let mut out = CommandAssembler::new();
    builder
        .build(config, registry, &mut out)
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    Ok(explain(out.records(), registry))
}

fn count(lines: &[String], wanted: &str) -> usize {
    lines.iter().filter(|line| *line == wanted).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_a10_creates_one_waypoint_per_valid_entry(
        entries in prop::collection::vec(any_entry(), 0..30),
        append_mode in any::<bool>(),
    ) {
        let config = system(&entries, append_mode);
        let registry = a10c::registry().map_err(|e| TestCaseError::fail(e.to_string()))?;
        let lines = lines(&a10c::WaypointBuilder, &config, &registry)?;

        let valid = config.waypoints.valid().count();
        prop_assert_eq!(count(&lines, "CDU LSK_7R"), valid);
        prop_assert_eq!(lines.is_empty(), valid == 0);
    }

    #[test]
    fn test_mirage_never_writes_past_slot_twenty(
        entries in prop::collection::vec(any_entry(), 0..40),
        append_mode in any::<bool>(),
    ) {
        let config = system(&entries, append_mode);
        let registry = m2000c::registry().map_err(|e| TestCaseError::fail(e.to_string()))?;
        let lines = lines(&m2000c::WaypointBuilder, &config, &registry)?;

        let expected = config
            .waypoints
            .valid()
            .zip(1u32..)
            .filter(|(navpoint, packed)| {
                let slot = if append_mode { navpoint.number } else { *packed };
                slot <= m2000c::waypoints::MAX_WAYPOINT
            })
            .count();
        prop_assert_eq!(count(&lines, "PCN PREP"), expected);
    }

    #[test]
    fn test_f16_cursor_always_returns_to_stpt_row(
        entries in prop::collection::vec(any_entry(), 1..20),
        append_mode in any::<bool>(),
    ) {
        let config = system(&entries, append_mode);
        let registry = f16c::registry().map_err(|e| TestCaseError::fail(e.to_string()))?;
        let lines = lines(&f16c::SteerpointBuilder, &config, &registry)?;

        prop_assert_eq!(count(&lines, "UFC DOWN"), count(&lines, "UFC UP"));
        if config.has_valid_entries() {
            prop_assert_eq!(lines.last().map(String::as_str), Some("UFC RTN"));
        } else {
            prop_assert!(lines.is_empty());
        }
    }
}
