use std::{
    env::{self, VarError},
    fmt::Display,
    str::FromStr,
    time::Duration,
};

use catalog::DEFAULT_CATALOG_URL;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_COMMUNITY_URL: &str = "https://discord.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub catalog_url: String,
    pub community_url: String,
    /// Zero disables periodic reloads.
    pub refresh_interval: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load("RUST_PORT", "1111")?,
            catalog_url: try_load("CATALOG_URL", DEFAULT_CATALOG_URL)?,
            community_url: try_load("COMMUNITY_URL", DEFAULT_COMMUNITY_URL)?,
            refresh_interval: Duration::from_secs(try_load("CATALOG_REFRESH_SECS", "0")?),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 1111,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            community_url: DEFAULT_COMMUNITY_URL.to_string(),
            refresh_interval: Duration::ZERO,
        }
    }
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    resolve(key, env::var(key), default)
}

fn resolve<T: FromStr>(
    key: &'static str,
    value: Result<String, VarError>,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = match value {
        Ok(raw) => raw,
        Err(VarError::NotPresent) => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
        Err(e @ VarError::NotUnicode(_)) => {
            warn!("Invalid {key} value: {e}");
            return Err(ConfigError::Invalid {
                key,
                reason: e.to_string(),
            });
        }
    };

    raw.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }
    })
}
