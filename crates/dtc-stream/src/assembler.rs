//! Append-only command record assembler.

use dtc_errors::{Result, StreamError};
use dtc_registry::{Action, Device};
use tracing::{debug, trace};

use crate::keys::HemisphereKeys;
use crate::record::{CommandRecord, RECORD_SEPARATOR};

/// Accumulates command records for one upload.
///
/// Every emission resolves its labels before appending anything, so a failed
/// call leaves the sequence unchanged. After [`finalize`](Self::finalize) the
/// assembler is closed and every further call fails with
/// [`StreamError::Closed`].
#[derive(Debug, Default)]
pub struct CommandAssembler {
    records: Vec<CommandRecord>,
    finalized: bool,
}

impl CommandAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> std::result::Result<(), StreamError> {
        if self.finalized {
            return Err(StreamError::Closed);
        }
        Ok(())
    }

    fn push(&mut self, device: &Device, action: &Action, activation: f64) {
        self.records.push(CommandRecord::action(
            device.id(),
            action.id(),
            action.delay_ms(),
            activation,
        ));
    }

    /// Emit one action with its default activation value.
    ///
    /// # Errors
    ///
    /// [`StreamError::Closed`] after finalize, or an unknown-action registry
    /// error.
    pub fn emit_action(&mut self, device: &Device, label: &str) -> Result<()> {
        self.ensure_open()?;
        let action = device.action(label)?;
        self.push(device, action, action.activation());
        Ok(())
    }

    /// Emit one action with an overridden activation value.
    ///
    /// # Errors
    ///
    /// Same as [`emit_action`](Self::emit_action).
    pub fn emit_action_with(
        &mut self,
        device: &Device,
        label: &str,
        activation: f64,
    ) -> Result<()> {
        self.ensure_open()?;
        let action = device.action(label)?;
        self.push(device, action, activation);
        Ok(())
    }

    /// Emit a sequence of actions on one device, in order.
    ///
    /// # Errors
    ///
    /// Same as [`emit_action`](Self::emit_action); nothing is appended when
    /// any label is unknown.
    pub fn emit_actions(&mut self, device: &Device, labels: &[&str]) -> Result<()> {
        self.ensure_open()?;
        let actions = labels
            .iter()
            .map(|label| device.action(label))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        for action in actions {
            self.push(device, action, action.activation());
        }
        Ok(())
    }

    /// Emit the same action `count` times.
    ///
    /// # Errors
    ///
    /// Same as [`emit_action`](Self::emit_action).
    pub fn emit_repeated(&mut self, device: &Device, label: &str, count: usize) -> Result<()> {
        self.ensure_open()?;
        let action = device.action(label)?;
        for _ in 0..count {
            self.push(device, action, action.activation());
        }
        Ok(())
    }

    /// Emit a no-op annotation record.
    ///
    /// # Errors
    ///
    /// [`StreamError::Closed`] after finalize.
    pub fn emit_marker(&mut self, label: &str, comments: &[&str]) -> Result<()> {
        self.ensure_open()?;
        trace!(marker = label, "stream marker");
        self.records.push(CommandRecord::marker(
            label,
            comments.iter().map(|line| (*line).to_string()).collect(),
        ));
        Ok(())
    }

    /// Press the digit key for every decimal digit in `text`, skipping any
    /// other character.
    ///
    /// # Errors
    ///
    /// Same as [`emit_action`](Self::emit_action).
    pub fn emit_digits(&mut self, device: &Device, text: &str) -> Result<()> {
        self.ensure_open()?;
        let mut buf = [0u8; 4];
        let actions = text
            .chars()
            .filter(char::is_ascii_digit)
            .map(|digit| device.action(digit.encode_utf8(&mut buf)))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        for action in actions {
            self.push(device, action, action.activation());
        }
        Ok(())
    }

    /// Key in a stripped coordinate: hemisphere letters through `keys`,
    /// digits through their digit keys, everything else dropped.
    ///
    /// # Errors
    ///
    /// Same as [`emit_action`](Self::emit_action).
    pub fn emit_coordinate(
        &mut self,
        device: &Device,
        text: &str,
        keys: &HemisphereKeys,
    ) -> Result<()> {
        self.ensure_open()?;
        let mut buf = [0u8; 4];
        let mut actions = Vec::with_capacity(text.len());
        for ch in text.chars() {
            if let Some(label) = keys.key_for(ch) {
                actions.push(device.action(label)?);
            } else if ch.is_ascii_digit() {
                actions.push(device.action(ch.encode_utf8(&mut buf))?);
            }
        }
        for action in actions {
            self.push(device, action, action.activation());
        }
        Ok(())
    }

    pub fn records(&self) -> &[CommandRecord] {
        &self.records
    }

    /// Number of non-marker records.
    pub fn action_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_marker()).count()
    }

    /// True when nothing but markers has been emitted.
    pub fn is_empty(&self) -> bool {
        self.action_count() == 0
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Close the assembler and serialize the stream.
    ///
    /// A stream with no action records finalizes to empty text; markers alone
    /// are not worth uploading.
    ///
    /// # Errors
    ///
    /// [`StreamError::Closed`] when called twice, [`StreamError::Serialize`]
    /// if a record cannot be encoded.
    pub fn finalize(&mut self) -> Result<FinalizedStream> {
        self.ensure_open()?;
        self.finalized = true;
        let records = std::mem::take(&mut self.records);
        let action_count = records.iter().filter(|r| !r.is_marker()).count();

        if action_count == 0 {
            debug!(markers = records.len(), "finalized empty command stream");
            return Ok(FinalizedStream {
                text: String::new(),
                records: Vec::new(),
                action_count: 0,
            });
        }

        let mut text = String::new();
        for record in &records {
            text.push_str(&record.encode()?);
            text.push(RECORD_SEPARATOR);
        }
        if text.ends_with(RECORD_SEPARATOR) {
            text.pop();
        }

        debug!(
            records = records.len(),
            actions = action_count,
            bytes = text.len(),
            "finalized command stream"
        );
        Ok(FinalizedStream {
            text,
            records,
            action_count,
        })
    }
}

/// Immutable result of [`CommandAssembler::finalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedStream {
    text: String,
    records: Vec<CommandRecord>,
    action_count: usize,
}

impl FinalizedStream {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Records in emission order, markers included.
    pub fn records(&self) -> &[CommandRecord] {
        &self.records
    }

    pub fn action_count(&self) -> usize {
        self.action_count
    }

    /// Length of the stream text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtc_registry::{ActionRegistry, digit_keys};

    fn registry() -> dtc_errors::Result<ActionRegistry> {
        let mut builder = ActionRegistry::builder("test");
        builder
            .register_device(17, "UFC")?
            .add_actions(17, &digit_keys(3002, 0))?
            .add_action(17, 3016, "ENTR", 0, 1.0)?
            .add_action(17, 3030, "DOWN", 40, -1.0)?;
        Ok(builder.build())
    }

    #[test]
    fn test_emit_action_uses_registry_defaults() -> dtc_errors::Result<()> {
        let registry = registry()?;
        let ufc = registry.resolve_device("UFC")?;
        let mut out = CommandAssembler::new();
        out.emit_action(ufc, "DOWN")?;
        out.emit_action_with(ufc, "DOWN", 1.0)?;

        let records = out.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records.first().map(|r| r.delay), Some(40));
        assert_eq!(records.first().map(|r| r.activation < 0.0), Some(true));
        assert_eq!(records.get(1).map(|r| r.activation > 0.0), Some(true));
        Ok(())
    }

    #[test]
    fn test_unknown_label_appends_nothing() -> dtc_errors::Result<()> {
        let registry = registry()?;
        let ufc = registry.resolve_device("UFC")?;
        let mut out = CommandAssembler::new();
        assert!(out.emit_actions(ufc, &["1", "RCL"]).is_err());
        assert!(out.emit_digits(ufc, "12").is_ok());
        assert_eq!(out.action_count(), 2);
        Ok(())
    }

    #[test]
    fn test_finalize_trims_single_trailing_separator() -> dtc_errors::Result<()> {
        let registry = registry()?;
        let ufc = registry.resolve_device("UFC")?;
        let mut out = CommandAssembler::new();
        out.emit_actions(ufc, &["1", "ENTR"])?;
        let stream = out.finalize()?;
        assert_eq!(
            stream.text(),
            r#"{"device":17,"code":3003,"delay":0,"activate":1.0},{"device":17,"code":3016,"delay":0,"activate":1.0}"#
        );
        assert_eq!(stream.action_count(), 2);
        Ok(())
    }

    #[test]
    fn test_markers_only_finalize_to_empty() -> dtc_errors::Result<()> {
        let mut out = CommandAssembler::new();
        out.emit_marker("setup", &[])?;
        out.emit_marker("teardown", &["done"])?;
        assert!(out.is_empty());
        let stream = out.finalize()?;
        assert!(stream.is_empty());
        assert_eq!(stream.len(), 0);
        Ok(())
    }

    #[test]
    fn test_closed_after_finalize() -> dtc_errors::Result<()> {
        let registry = registry()?;
        let ufc = registry.resolve_device("UFC")?;
        let mut out = CommandAssembler::new();
        out.emit_action(ufc, "ENTR")?;
        out.finalize()?;
        assert!(out.is_finalized());

        let closed = |result: dtc_errors::Result<()>| {
            matches!(result, Err(dtc_errors::DtcError::Stream(StreamError::Closed)))
        };
        assert!(closed(out.emit_action(ufc, "ENTR")));
        assert!(closed(out.emit_marker("late", &[])));
        assert!(closed(out.emit_coordinate(ufc, "N 1", &HemisphereKeys::distinct("2", "8", "6", "4"))));
        assert!(matches!(
            out.finalize(),
            Err(dtc_errors::DtcError::Stream(StreamError::Closed))
        ));
        Ok(())
    }
}
