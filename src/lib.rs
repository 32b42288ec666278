pub mod integration;
pub mod messages;
pub mod oracle;
pub mod panel;
pub mod session;
pub mod setup;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum MagicBoxError {
    #[error("Device init error: {0}")]
    DeviceInit(String),

    #[error("Address discovery error: {0}")]
    AddressDiscovery(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Answering service returned an empty answer")]
    EmptyAnswer,

    #[error("Session error: {0}")]
    Session(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for MagicBoxError {
    fn from(e: std::io::Error) -> Self {
        MagicBoxError::Session(e.to_string())
    }
}

impl MagicBoxError {
    /// Check if this error is recoverable
    ///
    /// Recoverable errors terminate a single question or connection;
    /// everything else aborts startup.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // No recognized feedback hardware, nothing to run on
            MagicBoxError::DeviceInit(_) => false,
            // Startup retries are exhausted before this surfaces
            MagicBoxError::AddressDiscovery(_) => false,
            // Per-question failures from the answering service
            MagicBoxError::Transport(_) => true,
            MagicBoxError::Parse(_) => true,
            MagicBoxError::EmptyAnswer => true,
            // Tears down one connection, not the server
            MagicBoxError::Session(_) => true,
            MagicBoxError::Config(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, MagicBoxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        assert!(!MagicBoxError::DeviceInit("no panel".into()).is_recoverable());
        assert!(!MagicBoxError::Config("missing key".into()).is_recoverable());
        assert!(!MagicBoxError::AddressDiscovery("gave up".into()).is_recoverable());
        assert!(MagicBoxError::Transport("timeout".into()).is_recoverable());
        assert!(MagicBoxError::Parse("bad body".into()).is_recoverable());
        assert!(MagicBoxError::EmptyAnswer.is_recoverable());
    }
}
