//! Property sources for configuration overlay
//!
//! A [`ConfigEnvironment`] bundles the layered property sources (file,
//! environment variables, programmatic overrides) with the application-wide
//! settings that configuration objects are allowed to publish into.

use std::path::Path;

use config::{Config, ConfigError, Environment};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;
use crate::shutdown::ShutdownSettings;

/// Prefix of environment variables read by [`ConfigEnvironment::load`]
pub const ENV_PREFIX: &str = "taro";

/// Layered property sources plus shared application settings
#[derive(Clone, Debug, Default)]
pub struct ConfigEnvironment {
    config: Config,
    shutdown: ShutdownSettings,
}

impl ConfigEnvironment {
    /// Wrap an already built property source
    pub fn new(config: Config) -> Self {
        Self {
            config,
            shutdown: ShutdownSettings::default(),
        }
    }

    /// Build the environment from an optional config file and `TARO.*`
    /// environment variables. Environment variables win over the file.
    ///
    /// Variables keep their prefix, so `TARO.REGISTRY.ADDRESS` is read as
    /// `taro.registry.address`. Values stay strings until a typed field
    /// deserializes them.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            debug!(path = %path.display(), "Loading configuration file");
            builder = builder.add_source(config::File::from(path));
        }
        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(".")
                    .keep_prefix(true),
            )
            .build()?;
        Ok(Self::new(config))
    }

    /// Share `shutdown` with the application's shutdown sequencer
    pub fn with_shutdown(mut self, shutdown: ShutdownSettings) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn shutdown(&self) -> &ShutdownSettings {
        &self.shutdown
    }

    /// Deserialize the property subtree under `prefix`.
    ///
    /// Returns `Ok(None)` when nothing is configured under the prefix.
    pub fn lookup<T: DeserializeOwned>(&self, prefix: &str) -> Result<Option<T>> {
        match self.config.get::<T>(prefix) {
            Ok(value) => Ok(Some(value)),
            Err(ConfigError::NotFound(_)) => {
                debug!(prefix, "No properties under prefix");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
