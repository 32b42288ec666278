//! Configuration for the whole box.
//!
//! Everything is fixed at startup; nothing is runtime-mutable.

use crate::oracle::OracleConfig;
use crate::session::DEFAULT_PORT;
use crate::{MagicBoxError, Result};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct BoxConfig {
    /// Answering service configuration.
    pub oracle: OracleConfig,

    /// Port the session channel listens on.
    pub listen_port: u16,

    /// How many times host address discovery is attempted at startup.
    pub discovery_attempts: u32,

    /// Pause between discovery attempts, in seconds.
    pub discovery_backoff_secs: u64,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            oracle: OracleConfig::default(),
            listen_port: DEFAULT_PORT,
            discovery_attempts: 5,
            discovery_backoff_secs: 3,
        }
    }
}

impl BoxConfig {
    /// Read the config from the environment. `MAGICBOX_PORT` overrides the
    /// listen port; the oracle section reads its own variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self {
            oracle: OracleConfig::from_env()?,
            ..Default::default()
        };
        if let Ok(port) = std::env::var("MAGICBOX_PORT") {
            config.listen_port = port
                .parse()
                .map_err(|_| MagicBoxError::Config(format!("invalid MAGICBOX_PORT: {port}")))?;
        }
        Ok(config)
    }

    pub fn discovery_backoff(&self) -> Duration {
        Duration::from_secs(self.discovery_backoff_secs)
    }
}
