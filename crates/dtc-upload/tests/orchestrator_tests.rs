//! Upload flows through a recording transport.

use dtc_config::{Aircraft, AircraftConfiguration};
use dtc_errors::{DtcError, TransportError};
use dtc_stream::decode;
use dtc_test_helpers::prelude::*;
use dtc_upload::{UploadOrchestrator, UploadOutcome, UploadSettings};

fn orchestrator(transport: RecordingTransport) -> UploadOrchestrator<RecordingTransport> {
    must(UploadOrchestrator::new(transport, UploadSettings::default()))
}

#[tokio::test]
async fn test_sent_stream_matches_dry_run() -> TestResult {
    let upload = orchestrator(RecordingTransport::new());
    let config = mission(Aircraft::F16C);

    let dry_run = upload.generate(&config)?;
    let outcome = upload.load(&config).await?;

    assert_eq!(
        outcome,
        UploadOutcome::Sent {
            records: dry_run.records().len(),
            bytes: dry_run.len(),
        }
    );
    assert!(outcome.succeeded());
    assert_eq!(upload.transport().sent(), vec![dry_run.text().to_string()]);
    Ok(())
}

#[tokio::test]
async fn test_sent_text_decodes_back_to_records() -> TestResult {
    let upload = orchestrator(RecordingTransport::new());
    for aircraft in Aircraft::ALL {
        let config = mission(aircraft);
        upload.load(&config).await?;
        let sent = must_some(upload.transport().last_sent(), "payload sent");
        let records = decode(&sent)?;
        assert_eq!(records, upload.generate(&config)?.records().to_vec());
    }
    assert_eq!(upload.transport().send_count(), Aircraft::ALL.len());
    Ok(())
}

#[tokio::test]
async fn test_empty_configuration_is_not_sent() -> TestResult {
    let upload = orchestrator(RecordingTransport::new());
    let outcome = upload.load(&AircraftConfiguration::empty(Aircraft::A10C)).await?;
    assert_eq!(outcome, UploadOutcome::NothingToSend);
    assert_eq!(upload.transport().send_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_transport_failure_is_an_outcome_not_an_error() -> TestResult {
    let error = TransportError::connect("127.0.0.1:43001", "connection refused");
    let upload = orchestrator(RecordingTransport::failing(error.clone()));

    let outcome = upload.load(&mission(Aircraft::M2000C)).await?;
    assert_eq!(outcome, UploadOutcome::SendFailed { reason: error });
    assert_eq!(upload.transport().send_count(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_slow_transport_times_out() -> TestResult {
    let settings = UploadSettings::default().with_send_timeout_ms(100);
    let upload = must(UploadOrchestrator::new(RecordingTransport::with_delay(10_000), settings));

    let outcome = upload.load(&mission(Aircraft::FA18C)).await?;
    assert_eq!(
        outcome,
        UploadOutcome::SendFailed {
            reason: TransportError::Timeout { timeout_ms: 100 },
        }
    );
    Ok(())
}

#[test]
fn test_transport_error_messages() {
    insta::assert_snapshot!(
        TransportError::Timeout { timeout_ms: 5000 }.to_string(),
        @"Send timed out after 5000ms"
    );
    insta::assert_snapshot!(
        TransportError::connect("127.0.0.1:43001", "connection refused").to_string(),
        @"Failed to connect to 127.0.0.1:43001: connection refused"
    );
}

#[test]
fn test_generate_is_deterministic() -> TestResult {
    let upload = orchestrator(RecordingTransport::new());
    let config = mission(Aircraft::FA18C);
    assert_eq!(upload.generate(&config)?.text(), upload.generate(&config)?.text());
    Ok(())
}

#[test]
fn test_generation_errors_are_programming_errors() {
    let upload = orchestrator(RecordingTransport::new());
    let registry = must(upload.registry(Aircraft::F16C));
    assert!(must_some(registry.devices().next(), "UFC registered").action_count() > 0);

    let err = must_err(dtc_aircraft::profile_for(Aircraft::A10C).assemble(
        &mission(Aircraft::F16C),
        registry,
        &mut dtc_stream::CommandAssembler::new(),
    ));
    assert!(matches!(err, DtcError::Config(_)));
    assert!(err.is_programming_error());
}
