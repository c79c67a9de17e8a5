//! Command records and their text encoding.

use dtc_errors::StreamError;
use serde::{Deserialize, Serialize};

/// Separator written after every record in a finalized stream.
pub const RECORD_SEPARATOR: char = ',';

/// One entry of a command stream.
///
/// Markers annotate the stream (section boundaries, aircraft setup) and use
/// device 0, code 0 so the receiver treats them as no-ops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub device: u32,
    #[serde(rename = "code")]
    pub action: u32,
    pub delay: u32,
    #[serde(rename = "activate")]
    pub activation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl CommandRecord {
    pub fn action(device: u32, action: u32, delay: u32, activation: f64) -> Self {
        Self {
            device,
            action,
            delay,
            activation,
            marker: None,
            comments: Vec::new(),
        }
    }

    pub fn marker(label: impl Into<String>, comments: Vec<String>) -> Self {
        Self {
            device: 0,
            action: 0,
            delay: 0,
            activation: 0.0,
            marker: Some(label.into()),
            comments,
        }
    }

    pub fn is_marker(&self) -> bool {
        self.marker.is_some()
    }

    pub(crate) fn encode(&self) -> Result<String, StreamError> {
        serde_json::to_string(self).map_err(|e| StreamError::Serialize(e.to_string()))
    }
}

/// Parse finalized stream text back into records.
///
/// # Errors
///
/// [`StreamError::Serialize`] when the text is not a separator-joined list of
/// records.
pub fn decode(text: &str) -> Result<Vec<CommandRecord>, StreamError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&format!("[{text}]")).map_err(|e| StreamError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_encoding_has_no_marker_fields() -> Result<(), StreamError> {
        let text = CommandRecord::action(17, 3016, 0, 1.0).encode()?;
        assert_eq!(text, r#"{"device":17,"code":3016,"delay":0,"activate":1.0}"#);
        Ok(())
    }

    #[test]
    fn test_marker_encoding() -> Result<(), StreamError> {
        let record = CommandRecord::marker("steerpoints", vec!["3 entries".to_string()]);
        assert!(record.is_marker());
        let text = record.encode()?;
        assert_eq!(
            text,
            r#"{"device":0,"code":0,"delay":0,"activate":0.0,"marker":"steerpoints","comments":["3 entries"]}"#
        );
        Ok(())
    }

    #[test]
    fn test_decode_empty_and_garbage() {
        assert_eq!(decode(""), Ok(Vec::new()));
        assert!(decode("{not json}").is_err());
    }
}
