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

//! HTTP surface of the lookup service.
//!
//! | Route              | Gate | Response                              |
//! |--------------------|------|---------------------------------------|
//! | `GET /`            | no   | index page with the htmx lookup form  |
//! | `GET /lookup`      | yes  | JSON [`LookupResponse`]               |
//! | `GET /lookup-view` | no   | HTML card for the form                |
//! | `POST /batch`      | yes  | JSON results plus an HTML result grid |
//!
//! [`LookupResponse`]: crate::msisdnlookup::LookupResponse

pub mod access;
pub mod errors;
pub mod handlers;
pub mod html;

use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get},
};
use log::info;

use crate::{
    config::ServiceConfig,
    msisdnlookup::MsisdnLookup,
    rules::{RuleTable, resolve_rules_path},
};

pub use access::AccessGate;
pub use errors::{ApiError, ServerError};

/// Batch payloads above this size are refused.
pub const BATCH_BODY_LIMIT: usize = 1 << 20;

/// Shared by every request handler.
#[derive(Debug)]
pub struct AppState {
    pub lookup: MsisdnLookup,
    pub gate: AccessGate,
}

impl AppState {
    pub fn new(lookup: MsisdnLookup, gate: AccessGate) -> Self {
        Self { lookup, gate }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/lookup", get(handlers::lookup))
        .route("/lookup-view", get(handlers::lookup_view))
        .route("/batch", any(handlers::batch))
        .with_state(state)
}

/// Loads the rules, binds the configured address and serves until the
/// process is stopped.
pub async fn run(config: ServiceConfig) -> Result<(), ServerError> {
    let rules_path = resolve_rules_path(config.rules_path.as_deref());
    let rules = Arc::new(RuleTable::from_path(&rules_path)?);

    let state = Arc::new(AppState::new(
        MsisdnLookup::new(rules),
        AccessGate::new(config.api_key, config.rate_limit_per_minute),
    ));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr,
            source,
        })?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, router(state))
        .await
        .map_err(ServerError::Serve)
}
