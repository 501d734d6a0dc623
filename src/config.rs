use crate::{KvsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENGINE_MEMORY: &str = "memory";
pub const ENGINE_SHARED: &str = "shared";
pub const MAX_VERBOSITY: usize = 4;

/// Settings read from an optional JSON file. Missing fields take their
/// defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base log level: 0 error, 1 warn, 2 info, 3 debug, 4 trace.
    pub verbosity: usize,
    /// Entries to pre-allocate room for.
    pub initial_capacity: usize,
    /// `"memory"` or `"shared"`.
    pub engine: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            verbosity: 1,
            initial_capacity: 0,
            engine: ENGINE_MEMORY.to_owned(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let value = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.verbosity > MAX_VERBOSITY {
            return Err(KvsError::Config(format!(
                "verbosity {} out of range 0..={MAX_VERBOSITY}",
                self.verbosity
            )));
        }
        match self.engine.as_str() {
            ENGINE_MEMORY | ENGINE_SHARED => Ok(()),
            other => Err(KvsError::Config(format!(
                "unknown engine '{other}', must be '{ENGINE_MEMORY}' or '{ENGINE_SHARED}'"
            ))),
        }
    }
}
