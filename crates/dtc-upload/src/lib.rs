//! Upload orchestration for cockpit command streams.
//!
//! [`UploadOrchestrator`] owns one device table per aircraft, turns an
//! [`AircraftConfiguration`](dtc_config::AircraftConfiguration) into a
//! finalized command stream through that aircraft's profile, and hands the
//! stream to a [`Transport`]. Generation is synchronous; the send is the only
//! await point and is bounded by [`UploadSettings::send_timeout`].

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(rust_2018_idioms)]

pub mod orchestrator;
pub mod settings;
pub mod transport;

pub use orchestrator::{UploadOrchestrator, UploadOutcome};
pub use settings::{DEFAULT_ENDPOINT, DEFAULT_SEND_TIMEOUT_MS, UploadSettings};
pub use transport::{TcpTransport, Transport, frame};
