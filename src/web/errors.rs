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

use std::net::SocketAddr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::{config::ConfigError, rules::RulesError};

/// Request level failures of the HTTP surface.
///
/// Access gate rejections are answered with a JSON `{"error": ...}` body,
/// request validation failures with plain text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("invalid API key")]
    InvalidApiKey,
    #[error("rate limit exceeded")]
    RateLimited,
    #[error("missing msisdn parameter")]
    MissingMsisdn,
    #[error("batch endpoint expects POST")]
    MethodNotAllowed,
    #[error("empty batch payload")]
    EmptyBatch,
    #[error("invalid JSON array payload")]
    InvalidBatchJson,
    #[error("batch payload too large")]
    PayloadTooLarge,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MissingMsisdn | ApiError::EmptyBatch | ApiError::InvalidBatchJson => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::InvalidApiKey | ApiError::RateLimited => {
                (status, Json(json!({ "error": self.to_string() }))).into_response()
            }
            _ => (status, self.to_string()).into_response(),
        }
    }
}

/// Startup failures. Any of them aborts the service.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Rules(#[from] RulesError),
    #[error("unable to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
