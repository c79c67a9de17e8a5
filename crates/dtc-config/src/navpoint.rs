//! Numbered waypoints and the list that owns their numbering.

use dtc_coords::{Axis, CoordResult, CoordinateFormat, to_text};
use serde::{Deserialize, Deserializer, Serialize};

/// A numbered waypoint or steerpoint.
///
/// Latitude and longitude are canonical signed decimal degrees; text forms are
/// derived through the coordinate codec and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Navpoint {
    pub number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Feet; range is aircraft dependent.
    #[serde(default)]
    pub altitude: Option<i32>,
}

impl Navpoint {
    /// Both coordinates present, finite and inside their axis range.
    pub fn is_valid(&self) -> bool {
        self.position().is_some()
    }

    /// `(latitude, longitude)` when valid.
    pub fn position(&self) -> Option<(f64, f64)> {
        let in_range =
            |value: f64, axis: Axis| value.is_finite() && value.abs() <= axis.limit() as f64;
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon))
                if in_range(lat, Axis::Latitude) && in_range(lon, Axis::Longitude) =>
            {
                Some((lat, lon))
            }
            _ => None,
        }
    }

    /// Latitude rendered in `format`, `None` when unset.
    ///
    /// # Errors
    ///
    /// Propagates codec range errors for out-of-range values.
    pub fn latitude_text(&self, format: CoordinateFormat) -> CoordResult<Option<String>> {
        self.latitude
            .map(|lat| to_text(lat, format, Axis::Latitude))
            .transpose()
    }

    /// Longitude rendered in `format`, `None` when unset.
    ///
    /// # Errors
    ///
    /// Propagates codec range errors for out-of-range values.
    pub fn longitude_text(&self, format: CoordinateFormat) -> CoordResult<Option<String>> {
        self.longitude
            .map(|lon| to_text(lon, format, Axis::Longitude))
            .transpose()
    }
}

/// Ordered navpoints numbered contiguously from 1.
///
/// A deserialized list is renumbered in stored order; the numbers in the
/// document are not trusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NavpointList {
    items: Vec<Navpoint>,
}

impl NavpointList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the next appended entry will get.
    pub fn next_number(&self) -> u32 {
        self.items.last().map_or(1, |last| last.number.saturating_add(1))
    }

    /// Append an entry and return its number. A blank name becomes
    /// `WP{number}`.
    pub fn append(
        &mut self,
        name: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
        altitude: Option<i32>,
    ) -> u32 {
        let number = self.next_number();
        let name = match name.trim() {
            "" => format!("WP{number}"),
            trimmed => trimmed.to_string(),
        };
        self.items.push(Navpoint {
            number,
            name,
            latitude,
            longitude,
            altitude,
        });
        number
    }

    /// Remove the entry with `number` and renumber the rest from 1.
    pub fn remove(&mut self, number: u32) -> Option<Navpoint> {
        let index = self.items.iter().position(|n| n.number == number)?;
        let removed = self.items.remove(index);
        self.renumber();
        Some(removed)
    }

    /// Restore contiguous numbering in stored order.
    pub fn renumber(&mut self) {
        for (number, navpoint) in (1u32..).zip(self.items.iter_mut()) {
            navpoint.number = number;
        }
    }

    pub fn get(&self, number: u32) -> Option<&Navpoint> {
        self.items.iter().find(|n| n.number == number)
    }

    pub fn get_mut(&mut self, number: u32) -> Option<&mut Navpoint> {
        self.items.iter_mut().find(|n| n.number == number)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Navpoint> {
        self.items.iter()
    }

    /// Entries that pass [`Navpoint::is_valid`], in stored order.
    pub fn valid(&self) -> impl Iterator<Item = &Navpoint> {
        self.items.iter().filter(|n| n.is_valid())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a NavpointList {
    type Item = &'a Navpoint;
    type IntoIter = std::slice::Iter<'a, Navpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Navpoint> for NavpointList {
    fn from_iter<I: IntoIterator<Item = Navpoint>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for NavpointList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut list = Self {
            items: Vec::deserialize(deserializer)?,
        };
        list.renumber();
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_numbers_and_default_names() {
        let mut list = NavpointList::new();
        assert_eq!(list.append("", Some(1.0), Some(2.0), None), 1);
        assert_eq!(list.append("  HOME ", None, None, None), 2);
        assert_eq!(list.get(1).map(|n| n.name.as_str()), Some("WP1"));
        assert_eq!(list.get(2).map(|n| n.name.as_str()), Some("HOME"));
    }

    #[test]
    fn test_append_continues_from_last_number() {
        let mut list: NavpointList = [Navpoint {
            number: 7,
            name: "IP".to_string(),
            latitude: None,
            longitude: None,
            altitude: None,
        }]
        .into_iter()
        .collect();
        assert_eq!(list.append("", None, None, None), 8);
    }

    #[test]
    fn test_remove_renumbers() {
        let mut list = NavpointList::new();
        for _ in 0..4 {
            list.append("", Some(0.0), Some(0.0), None);
        }
        let removed = list.remove(2);
        assert_eq!(removed.map(|n| n.name), Some("WP2".to_string()));
        let numbers: Vec<u32> = list.iter().map(|n| n.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        let names: Vec<&str> = list.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["WP1", "WP3", "WP4"]);
        assert!(list.remove(9).is_none());
    }

    #[test]
    fn test_validity() {
        let mut list = NavpointList::new();
        list.append("", Some(10.0), Some(20.0), None);
        list.append("", Some(10.0), None, None);
        list.append("", Some(91.0), Some(20.0), None);
        list.append("", Some(f64::NAN), Some(20.0), None);
        list.append("", Some(-90.0), Some(-180.0), None);
        let valid: Vec<u32> = list.valid().map(|n| n.number).collect();
        assert_eq!(valid, vec![1, 5]);
    }

    #[test]
    fn test_text_views() -> CoordResult<()> {
        let mut list = NavpointList::new();
        list.append("", Some(8.0 + 5.05 / 60.0), None, None);
        let navpoint = list.get(1);
        let lat = navpoint
            .map(|n| n.latitude_text(CoordinateFormat::DDM_2))
            .transpose()?
            .flatten();
        assert_eq!(lat.as_deref(), Some("N 08° 05.05’"));
        let lon = navpoint
            .map(|n| n.longitude_text(CoordinateFormat::DDM_2))
            .transpose()?
            .flatten();
        assert_eq!(lon, None);
        Ok(())
    }
}
