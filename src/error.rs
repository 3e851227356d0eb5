//! Error handling for the Stencil application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Stencil operations.
///
/// This enum represents all possible errors that can occur within the Stencil
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the template engine
    #[error("Template error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// No creation path was given on the command line
    #[error("No create path was given.\n└─ Script usage: stencil <create_path>")]
    NoCreatePath,

    /// The creation path exists and already contains files
    #[error("Create path '{create_path}' is not empty.\n└─ Choose an empty or non-existing directory to prevent accidental overrides")]
    CreatePathNotEmpty { create_path: String },

    /// The resolved template directory does not exist on disk
    #[error("Template path '{template_dir}' does not exist.\n└─ Try to select another template")]
    TemplateDoesNotExist { template_dir: String },

    /// A per-file pipeline failure, carrying the offending relative path
    #[error("Unexpected error occurred during the processing of '{relative_path}': {source}")]
    ProcessError {
        relative_path: String,
        #[source]
        source: Box<Error>,
    },

    /// Represents errors that occur during question registration or
    /// other configuration-time validation
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Represents failures while interacting with the user's terminal
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// Represents errors that occur during hook execution
    #[error("Hook execution error: {0}")]
    HookError(String),

    /// An external command ran but exited with a non-zero status
    #[error("Command '{command}' exited with status {code}")]
    CommandFailed {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },

    /// An external command could not be spawned at all
    #[error("Command '{command}' could not be spawned: {source}")]
    CommandSpawnError {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wraps any error with the relative path of the file being processed.
    pub fn process_error<E: Into<Error>>(relative_path: &str, err: E) -> Self {
        Error::ProcessError {
            relative_path: relative_path.to_string(),
            source: Box::new(err.into()),
        }
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
