//! Unit tests for error variants, conversions and classification.

use dtc_errors::{
    DtcError, ErrorCategory, ErrorSeverity, Result,
    coordinate::CoordinateError,
    registry::RegistryError,
    stream::StreamError,
    transport::TransportError,
};

mod registry_error_tests {
    use super::*;

    #[test]
    fn test_all_variants_display() -> Result<()> {
        let variants = vec![
            RegistryError::unknown_device("UFC"),
            RegistryError::unknown_action("UFC", "ENTR"),
            RegistryError::DuplicateDevice {
                id: 17,
                name: "UFC".to_string(),
            },
            RegistryError::DuplicateAction {
                device: "UFC".to_string(),
                label: "0".to_string(),
            },
            RegistryError::DeviceNotRegistered(42),
        ];

        for variant in variants {
            assert!(!variant.to_string().is_empty());
            assert_eq!(variant.severity(), ErrorSeverity::Fatal);
        }
        Ok(())
    }

    #[test]
    fn test_converts_into_dtc_error() -> Result<()> {
        let err: DtcError = RegistryError::unknown_device("PCN").into();
        assert_eq!(err.category(), ErrorCategory::Registry);
        assert!(err.is_programming_error());
        assert!(err.to_string().contains("PCN"));
        Ok(())
    }
}

mod coordinate_error_tests {
    use super::*;

    #[test]
    fn test_format_error_is_recoverable() -> Result<()> {
        let err: DtcError = CoordinateError::format("N 8°", "DDM-2").into();
        assert_eq!(err.category(), ErrorCategory::Coordinate);
        assert!(err.is_recoverable());
        assert!(!err.is_programming_error());
        Ok(())
    }

    #[test]
    fn test_out_of_range_message() -> Result<()> {
        let err = CoordinateError::out_of_range(91.5, -90.0, 90.0);
        assert!(err.to_string().contains("91.5"));
        assert_eq!(err.severity(), ErrorSeverity::Error);
        Ok(())
    }
}

mod stream_error_tests {
    use super::*;

    #[test]
    fn test_closed_is_critical() -> Result<()> {
        let err: DtcError = StreamError::Closed.into();
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.category(), ErrorCategory::Stream);
        Ok(())
    }
}

mod transport_error_tests {
    use super::*;

    #[test]
    fn test_timeout_is_a_warning() -> Result<()> {
        assert_eq!(
            TransportError::Timeout { timeout_ms: 5000 }.severity(),
            ErrorSeverity::Warning
        );
        assert_eq!(
            TransportError::connect("127.0.0.1:43001", "refused").severity(),
            ErrorSeverity::Error
        );
        Ok(())
    }

    #[test]
    fn test_transport_error_is_not_a_programming_error() -> Result<()> {
        let err: DtcError = TransportError::Send("reset".to_string()).into();
        assert!(!err.is_programming_error());
        assert_eq!(err.category(), ErrorCategory::Transport);
        Ok(())
    }
}

mod context_tests {
    use super::*;
    use dtc_errors::{ErrorContext, ResultExt};

    #[test]
    fn test_closed_stream_stays_a_programming_error() -> Result<()> {
        let closed: std::result::Result<(), StreamError> = Err(StreamError::Closed);
        let ctx = ErrorContext::new("finalize").with("aircraft", "M-2000C");
        let err = match closed.context(ctx) {
            Ok(()) => return Err(DtcError::config("expected a finalize error")),
            Err(err) => err,
        };
        assert!(err.is_programming_error());
        assert_eq!(err.category(), ErrorCategory::Stream);
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert!(err.to_string().contains("aircraft: M-2000C"));
        Ok(())
    }
}
