//! Process configuration, read once from the environment at startup.

use crate::allow_list::AllowList;
use crate::constants::DEFAULT_ALLOWED_ORIGINS;
use crate::options::GatekeeperOptions;
use crate::origin::FallbackPolicy;
use crate::telemetry::LogFormat;
use std::env;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

pub mod vars {
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    pub const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
    pub const CORS_STRICT_ORIGINS: &str = "CORS_STRICT_ORIGINS";
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub allowed_origins: AllowList,
    pub strict_origins: bool,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origins: AllowList::new(DEFAULT_ALLOWED_ORIGINS),
            strict_origins: false,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unset keys keep
    /// their defaults; set but malformed keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup(vars::HOST) {
            Some(raw) => parse_value(vars::HOST, &raw)?,
            None => defaults.host,
        };
        let port = match lookup(vars::PORT) {
            Some(raw) => parse_value(vars::PORT, &raw)?,
            None => defaults.port,
        };
        let allowed_origins = match lookup(vars::ALLOWED_ORIGINS) {
            Some(raw) => AllowList::parse(&raw),
            None => defaults.allowed_origins,
        };
        let strict_origins = match lookup(vars::CORS_STRICT_ORIGINS) {
            Some(raw) => parse_bool(vars::CORS_STRICT_ORIGINS, &raw)?,
            None => defaults.strict_origins,
        };
        let log_format = match lookup(vars::LOG_FORMAT) {
            Some(raw) => parse_value(vars::LOG_FORMAT, &raw)?,
            None => defaults.log_format,
        };

        Ok(Self {
            host,
            port,
            allowed_origins,
            strict_origins,
            log_format,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn gatekeeper_options(&self) -> GatekeeperOptions {
        GatekeeperOptions {
            allow_list: self.allowed_origins.clone(),
            fallback: FallbackPolicy::from_strict(self.strict_origins),
            ..GatekeeperOptions::default()
        }
    }
}

fn parse_value<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|err: T::Err| ConfigError::InvalidValue {
            var,
            message: err.to_string(),
        })
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            var,
            message: format!("`{other}` is not a boolean"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
