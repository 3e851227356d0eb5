use std::io;

use stencil::error::Error;

#[test]
fn test_io_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_usage_error_display_carries_a_hint() {
    let err = Error::NoCreatePath;
    assert!(err.to_string().contains("No create path was given"));
    assert!(err.to_string().contains("Script usage"));

    let err = Error::CreatePathNotEmpty { create_path: "./out".to_string() };
    assert!(err.to_string().contains("is not empty"));
}

#[test]
fn test_process_error_names_the_file() {
    let inner = Error::IoError(io::Error::new(io::ErrorKind::NotFound, "gone"));
    let err = Error::process_error("src/main.rs.liquid", inner);

    assert!(err.to_string().contains("src/main.rs.liquid"));
}

#[test]
fn test_prompt_failure_is_not_a_config_error() {
    // Terminal-I/O failures during prompting carry their own variant,
    // separate from configuration-time validation.
    let err = Error::PromptError("IO error: broken pipe".to_string());
    assert!(err.to_string().starts_with("Prompt error:"));
    assert!(matches!(err, Error::PromptError(_)));
}

#[test]
fn test_command_errors_are_distinguishable() {
    let failed = Error::CommandFailed {
        command: "npm".to_string(),
        code: 1,
        stdout: String::new(),
        stderr: "boom".to_string(),
    };
    let spawn = Error::CommandSpawnError {
        command: "npm".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };

    // Callers match on the variant to tell "ran and failed" apart from
    // "never started".
    assert!(matches!(failed, Error::CommandFailed { code: 1, .. }));
    assert!(matches!(spawn, Error::CommandSpawnError { .. }));
}
