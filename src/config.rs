use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Chatter tracking configuration
    #[serde(default)]
    pub chatters: ChattersConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChattersConfig {
    /// How long join and part events are held back and coalesced before a
    /// summary message is posted to the channel
    #[serde(default = "default_flush_delay", with = "humantime_serde")]
    pub flush_delay: Duration,
}

impl Default for ChattersConfig {
    fn default() -> Self {
        ChattersConfig {
            flush_delay: default_flush_delay(),
        }
    }
}

impl Config {
    /// Loads the configuration from the given TOML file, with
    /// `GLIMT_`-prefixed environment variables taking precedence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file or environment cannot be read
    /// or does not deserialize into a [`Config`].
    pub fn load(path: impl AsRef<Path>) -> Result<Config, Error> {
        Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("GLIMT_").split("__"))
            .extract()
            .map_err(Error::Config)
    }
}

#[must_use]
pub const fn default_flush_delay() -> Duration {
    crate::consts::DEFAULT_FLUSH_DELAY
}
