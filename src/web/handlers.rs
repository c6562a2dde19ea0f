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

use std::sync::Arc;

use axum::{
    Json,
    body::to_bytes,
    extract::{RawQuery, Request, State},
    http::{HeaderMap, Method, header::CONTENT_TYPE},
    response::Html,
};
use log::info;
use serde::{Deserialize, Serialize};

use crate::msisdnlookup::LookupResponse;

use super::{
    AppState, BATCH_BODY_LIMIT,
    errors::ApiError,
    html::{INDEX_PAGE, LookupSummary, MISSING_MSISDN_CARD, render_batch_table, render_lookup_view},
};

const MSISDN_PARAM: &str = "msisdn";

/// First non-empty value of the `msisdn` query parameter. Repeated parameters
/// are not an error, later values are ignored.
fn msisdn_param(query: Option<&str>) -> Option<String> {
    let query = query?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == MSISDN_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|msisdn| !msisdn.is_empty())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<LookupResponse>,
    pub table: String,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn lookup(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Result<Json<LookupResponse>, ApiError> {
    state.gate.check(&headers)?;
    let msisdn = msisdn_param(query.as_deref()).ok_or(ApiError::MissingMsisdn)?;
    Ok(Json(state.lookup.analyze(&msisdn)))
}

pub async fn lookup_view(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Html<String> {
    let Some(msisdn) = msisdn_param(query.as_deref()) else {
        return Html(MISSING_MSISDN_CARD.to_owned());
    };

    let lookup = &state.lookup;
    let summary = LookupSummary {
        msisdn: &msisdn,
        country: lookup.country(&msisdn),
        number_type: lookup.number_type(&msisdn),
        valid_length: lookup.is_valid_length(&msisdn),
        operator: lookup.operator(&msisdn),
    };
    Html(render_lookup_view(&summary))
}

/// Analyzes newline separated numbers, or a JSON array of strings when the
/// request is sent as `application/json`.
///
/// The body is only read once the caller passed the access gate.
pub async fn batch(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<BatchResponse>, ApiError> {
    state.gate.check(request.headers())?;
    if request.method() != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let (parts, body) = request.into_parts();
    let body = to_bytes(body, BATCH_BODY_LIMIT)
        .await
        .map_err(|_| ApiError::PayloadTooLarge)?;
    let msisdns = parse_batch_body(&parts.headers, &body)?;
    let results: Vec<LookupResponse> = msisdns
        .iter()
        .map(|msisdn| state.lookup.analyze(msisdn))
        .collect();
    info!("Analyzed batch of {} numbers", results.len());

    let table = render_batch_table(&results);
    Ok(Json(BatchResponse { results, table }))
}

fn parse_batch_body(headers: &HeaderMap, body: &[u8]) -> Result<Vec<String>, ApiError> {
    let payload = String::from_utf8_lossy(body);
    let payload = payload.trim();
    if payload.is_empty() {
        return Err(ApiError::EmptyBatch);
    }

    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.contains("application/json"));

    let entries = if is_json {
        serde_json::from_slice::<Vec<String>>(body).map_err(|_| ApiError::InvalidBatchJson)?
    } else {
        payload.split('\n').map(str::to_owned).collect()
    };

    Ok(entries
        .into_iter()
        .map(|entry| entry.trim().to_owned())
        .filter(|entry| !entry.is_empty())
        .collect())
}
