// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    net::{AddrParseError, SocketAddr},
    num::ParseIntError,
    path::PathBuf,
};

use thiserror::Error;

pub const BIND_ADDR_ENV: &str = "LOOKUP_BIND_ADDR";
pub const RULES_PATH_ENV: &str = "LOOKUP_RULES_PATH";
pub const API_KEY_ENV: &str = "LOOKUP_API_KEY";
pub const RATE_LIMIT_ENV: &str = "LOOKUP_RATE_LIMIT_PER_MINUTE";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_API_KEY: &str = "local-dev-key";
pub const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("LOOKUP_BIND_ADDR={value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("LOOKUP_RATE_LIMIT_PER_MINUTE={value:?} is not a number: {source}")]
    InvalidRateLimit {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("LOOKUP_RATE_LIMIT_PER_MINUTE must be greater than zero")]
    ZeroRateLimit,
}

/// Runtime settings of the lookup service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    /// Explicit rules file, otherwise the usual locations are searched.
    pub rules_path: Option<PathBuf>,
    pub api_key: String,
    pub rate_limit_per_minute: u32,
}

impl ServiceConfig {
    /// Reads `LOOKUP_BIND_ADDR`, `LOOKUP_RULES_PATH`, `LOOKUP_API_KEY` and
    /// `LOOKUP_RATE_LIMIT_PER_MINUTE`. Unset or empty variables fall back to
    /// the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServiceConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let bind_addr: SocketAddr = match get(BIND_ADDR_ENV) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr { value, source })?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .expect("Invalid constant address!"),
        };

        let rate_limit_per_minute: u32 = match get(RATE_LIMIT_ENV) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidRateLimit { value, source })?,
            None => DEFAULT_RATE_LIMIT_PER_MINUTE,
        };
        if rate_limit_per_minute == 0 {
            return Err(ConfigError::ZeroRateLimit);
        }

        Ok(Self {
            bind_addr,
            rules_path: get(RULES_PATH_ENV).map(PathBuf::from),
            api_key: get(API_KEY_ENV).unwrap_or_else(|| DEFAULT_API_KEY.to_owned()),
            rate_limit_per_minute,
        })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None).expect("Defaults must be valid")
    }
}
