//! Hemisphere key assignment for keypad coordinate entry.

/// Action labels pressed for each hemisphere letter.
///
/// Some keypads have one key per hemisphere (often the 2/8/6/4 digit keys);
/// others have a single "positive" key for N and E and a single "negative"
/// key for S and W.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HemisphereKeys {
    pub north: &'static str,
    pub south: &'static str,
    pub east: &'static str,
    pub west: &'static str,
}

impl HemisphereKeys {
    /// N and E share `positive`; S and W share `negative`.
    pub const fn shared(positive: &'static str, negative: &'static str) -> Self {
        Self {
            north: positive,
            south: negative,
            east: positive,
            west: negative,
        }
    }

    /// One key per hemisphere letter.
    pub const fn distinct(
        north: &'static str,
        south: &'static str,
        east: &'static str,
        west: &'static str,
    ) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Label for a hemisphere letter, `None` for anything else.
    pub fn key_for(&self, letter: char) -> Option<&'static str> {
        match letter {
            'N' => Some(self.north),
            'S' => Some(self.south),
            'E' => Some(self.east),
            'W' => Some(self.west),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_keys() {
        let keys = HemisphereKeys::shared("NE", "SW");
        assert_eq!(keys.key_for('N'), keys.key_for('E'));
        assert_eq!(keys.key_for('S'), Some("SW"));
        assert_eq!(keys.key_for('W'), Some("SW"));
        assert_eq!(keys.key_for('°'), None);
    }

    #[test]
    fn test_distinct_keys() {
        let keys = HemisphereKeys::distinct("2", "8", "6", "4");
        assert_eq!(keys.key_for('E'), Some("6"));
        assert_eq!(keys.key_for('n'), None);
    }
}
