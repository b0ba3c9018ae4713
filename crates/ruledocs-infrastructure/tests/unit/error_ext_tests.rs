//! Error Extension Tests

use ruledocs_infrastructure::error::{Error, Result};
use ruledocs_infrastructure::error_ext::ErrorContext;
use std::io;

#[test]
fn test_io_context() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_configuration_context() {
    let io_error = io::Error::new(io::ErrorKind::InvalidData, "bad value");

    let result: Result<()> = Err(io_error).context("Failed to extract configuration");

    match result {
        Err(Error::Configuration { message, source }) => {
            assert_eq!(message, "Failed to extract configuration: bad value");
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_configuration_helper_has_no_source() {
    match Error::configuration("rules.dir cannot be empty") {
        Error::Configuration { message, source } => {
            assert_eq!(message, "rules.dir cannot be empty");
            assert!(source.is_none());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}
