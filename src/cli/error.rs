// error.rs - Usage error returned to the host

use thiserror::Error;

use super::usage::usage;

/// A diagnostic message paired with the usage text of the invoked command.
///
/// Displays as `Error: <message>` followed by the usage document on the next
/// line, which is what the host prints before exiting non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: {message}\n{usage}")]
pub struct UsageError {
    message: String,
    usage: String,
}

impl UsageError {
    pub fn new(message: impl Into<String>, cmd: &str) -> Self {
        Self {
            message: message.into(),
            usage: usage(cmd),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }
}
