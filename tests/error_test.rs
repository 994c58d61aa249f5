use std::io;

use stencil::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid settings".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid settings.");

    let err = Error::ProfileNotFound("engine".to_string());
    assert_eq!(err.to_string(), "Profile 'engine' does not exist in settings.");

    let err = Error::TemplateError("rendering failed".to_string());
    assert_eq!(err.to_string(), "Template error: rendering failed.");

    let err = Error::ValidationError("class name is empty".to_string());
    assert_eq!(err.to_string(), "Validation error: class name is empty.");

    let err = Error::PromptError("not a terminal".to_string());
    assert_eq!(err.to_string(), "Prompt error: not a terminal.");
}
