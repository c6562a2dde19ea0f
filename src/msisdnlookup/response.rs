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

use serde::{Deserialize, Serialize};

use super::enums::Confidence;

/// Full analysis of a single MSISDN, as returned by the lookup endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub input: String,
    pub normalized: String,
    /// `+` followed by the normalized digits, empty when there are none.
    pub e164: String,
    pub country: String,
    pub number_type: String,
    pub operator: String,
    pub valid: Validity,
    pub country_confidence: Confidence,
    pub type_confidence: Confidence,
    pub operator_confidence: Confidence,
    pub explain: Explain,
}

impl LookupResponse {
    /// True only when every validity check passed.
    pub fn is_fully_valid(&self) -> bool {
        self.valid.digits_only && self.valid.known_country_code && self.valid.length_ok
    }
}

/// Lightweight validations, mirrored by the browser form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validity {
    pub digits_only: bool,
    pub known_country_code: bool,
    pub length_ok: bool,
}

/// Human readable description of the rules that were applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explain {
    pub country: String,
    #[serde(rename = "type")]
    pub number_type: String,
    pub operator: String,
}
