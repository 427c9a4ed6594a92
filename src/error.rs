//! Error types for dispatch, driver invocations and payload parsing.

use thiserror::Error;

/// Dispatch-time errors. These abort the run before any driver logic executes.
///
/// The `Display` text is the exact diagnostic printed to the error stream.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No registered command matches the token
    #[error("Invalid command: '{0}'")]
    UnknownCommand(String),

    /// The command exists but has no variant with this name
    #[error("Invalid method value: '{0}'")]
    UnknownVariant(String),

    /// A command's variants disagree with its reference variant
    #[error("Verification failed for '{command}': {reason}")]
    Verification {
        command: &'static str,
        reason: String,
    },
}

/// Unexpected failure raised out of a driver invocation.
///
/// Fatal to the current benchmark run, never to the process.
#[derive(Debug, Error)]
pub enum Fault {
    /// Writing to one of the console sinks failed
    #[error("std::io::Error: {0}")]
    Io(#[from] std::io::Error),

    /// The driver panicked
    #[error("panic: {0}")]
    Panic(String),
}

impl Fault {
    /// Build a `Fault` from the payload of a caught panic and where it was raised.
    pub fn from_panic(payload: Box<dyn std::any::Any + Send>, location: Option<String>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        match location {
            Some(location) => Fault::Panic(format!("{} at {}", message, location)),
            None => Fault::Panic(message),
        }
    }
}

/// Anything that ends a CLI invocation with a non-zero status
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Fault(#[from] Fault),

    #[error("std::io::Error: {0}")]
    Io(#[from] std::io::Error),
}

/// A payload token the active driver could not use.
///
/// Reported on the error stream; processing continues with the next token.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid input: '{0}'")]
pub struct InvalidInput(pub String);
