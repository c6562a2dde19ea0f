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

use std::time::{Duration, Instant};

use axum::http::HeaderMap;
use dashmap::DashMap;
use log::warn;

use super::errors::ApiError;

/// `X-API-Key`, lowercase as header names are stored normalized.
pub const API_KEY_HEADER: &str = "x-api-key";
pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);

#[derive(Debug)]
struct RateWindow {
    started_at: Instant,
    count: u32,
}

/// API key check followed by a fixed-window request counter per key.
#[derive(Debug)]
pub struct AccessGate {
    api_key: String,
    limit_per_window: u32,
    window: Duration,
    windows: DashMap<String, RateWindow>,
}

impl AccessGate {
    pub fn new(api_key: impl Into<String>, limit_per_minute: u32) -> Self {
        Self {
            api_key: api_key.into(),
            limit_per_window: limit_per_minute,
            window: RATE_LIMIT_WINDOW,
            windows: DashMap::new(),
        }
    }

    /// Validates the `X-API-Key` header and consumes one request of its budget.
    pub fn check(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        let provided = headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if provided.is_empty() || provided != self.api_key {
            warn!("Rejected request with missing or invalid API key");
            return Err(ApiError::InvalidApiKey);
        }

        if !self.allow(provided, Instant::now()) {
            warn!("Rate limit of {} per window exceeded", self.limit_per_window);
            return Err(ApiError::RateLimited);
        }
        Ok(())
    }

    /// The entry guard holds the shard lock, so the reset and increment of a
    /// key are serialized.
    fn allow(&self, key: &str, now: Instant) -> bool {
        let mut window = self
            .windows
            .entry(key.to_owned())
            .or_insert_with(|| RateWindow { started_at: now, count: 0 });

        if now.duration_since(window.started_at) >= self.window {
            window.started_at = now;
            window.count = 0;
        }
        if window.count >= self.limit_per_window {
            return false;
        }
        window.count += 1;
        true
    }
}
