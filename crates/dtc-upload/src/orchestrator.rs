//! Per-aircraft upload sequencing.

use std::collections::BTreeMap;

use dtc_aircraft::{aircraft_profiles, profile_for};
use dtc_config::{Aircraft, AircraftConfiguration};
use dtc_errors::{DtcError, ErrorContext, RegistryError, Result, ResultExt, TransportError};
use dtc_registry::ActionRegistry;
use dtc_stream::{CommandAssembler, FinalizedStream};
use tracing::{debug, info, warn};

use crate::settings::UploadSettings;
use crate::transport::Transport;

/// Result of one [`UploadOrchestrator::load`].
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// Every subsystem was at its defaults; the transport was not contacted.
    NothingToSend,
    /// The stream was handed to the transport.
    Sent { records: usize, bytes: usize },
    /// The transport failed or timed out. Never retried.
    SendFailed { reason: TransportError },
}

impl UploadOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, UploadOutcome::Sent { .. })
    }
}

/// Generates command streams and sends them through a [`Transport`].
///
/// Device tables are built once in [`new`](Self::new) and shared by every
/// upload; the orchestrator keeps no per-upload state, so callers may reuse
/// it freely but must not run two uploads into the same cockpit at once.
pub struct UploadOrchestrator<T> {
    transport: T,
    settings: UploadSettings,
    registries: BTreeMap<Aircraft, ActionRegistry>,
}

impl<T: Transport> UploadOrchestrator<T> {
    /// Build every aircraft's device table.
    ///
    /// # Errors
    ///
    /// Registration errors from a malformed aircraft table.
    pub fn new(transport: T, settings: UploadSettings) -> Result<Self> {
        let registries = aircraft_profiles()
            .iter()
            .map(|profile| Ok((profile.aircraft, profile.registry()?)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        debug!(aircraft = registries.len(), endpoint = %settings.endpoint, "upload orchestrator ready");
        Ok(Self {
            transport,
            settings,
            registries,
        })
    }

    pub fn settings(&self) -> &UploadSettings {
        &self.settings
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Device table of `aircraft`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownDevice`] if no table was built for it.
    pub fn registry(&self, aircraft: Aircraft) -> Result<&ActionRegistry> {
        self.registries
            .get(&aircraft)
            .ok_or_else(|| DtcError::from(RegistryError::unknown_device(aircraft.module_id())))
    }

    /// Generate the finalized stream without sending it.
    ///
    /// # Errors
    ///
    /// Programming errors only: a builder/table mismatch or a configuration
    /// handed to the wrong profile. Invalid user data is skipped, not reported.
    pub fn generate(&self, config: &AircraftConfiguration) -> Result<FinalizedStream> {
        let profile = profile_for(config.aircraft());
        let devices = self.registry(profile.aircraft)?;
        let mut out = CommandAssembler::new();
        profile.assemble(config, devices, &mut out)?;
        out.finalize().context(
            ErrorContext::new("finalize").with("aircraft", profile.aircraft.module_id()),
        )
    }

    /// Generate and send one upload.
    ///
    /// # Errors
    ///
    /// Same as [`generate`](Self::generate). Transport failures are not
    /// errors; they come back as [`UploadOutcome::SendFailed`].
    pub async fn load(&self, config: &AircraftConfiguration) -> Result<UploadOutcome> {
        let aircraft = config.aircraft();
        let stream = self.generate(config)?;
        if stream.is_empty() {
            info!(%aircraft, "nothing to upload");
            return Ok(UploadOutcome::NothingToSend);
        }

        let records = stream.records().len();
        let bytes = stream.len();
        let timeout = self.settings.send_timeout();
        let sent = match tokio::time::timeout(timeout, self.transport.send(stream.text())).await {
            Ok(result) => result,
            Err(_elapsed) => Err(TransportError::Timeout {
                timeout_ms: self.settings.send_timeout_ms,
            }),
        };

        match sent {
            Ok(()) => {
                info!(%aircraft, records, bytes, "upload sent");
                Ok(UploadOutcome::Sent { records, bytes })
            }
            Err(reason) => {
                warn!(%aircraft, error = %reason, "upload failed");
                Ok(UploadOutcome::SendFailed { reason })
            }
        }
    }
}
