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

use log::debug;

use crate::rules::RuleTable;

use super::{
    enums::Confidence,
    helper_constants::{
        EXPLAIN_COUNTRY_NOT_FOUND, EXPLAIN_COUNTRY_NO_DIGITS, EXPLAIN_OPERATOR_NOT_FOUND,
        EXPLAIN_OPERATOR_NO_DIGITS, EXPLAIN_TYPE_COUNTRY_UNKNOWN, EXPLAIN_TYPE_NO_DIGITS, PLUS_SIGN,
        UNKNOWN_COUNTRY, UNKNOWN_NUMBER_TYPE, UNKNOWN_OPERATOR,
    },
    normalizer::{normalize, normalize_digits},
    resolver::{find_country_rule, is_within_length, resolve_operator, resolve_type},
    response::{Explain, LookupResponse, Validity},
};

/// Prefix based MSISDN analyzer.
///
/// Every query is a pure function of its input and the shared rule table, so
/// a single instance can serve any number of concurrent callers. Queries never
/// fail: missing data is reported through the `Unknown`/`unknown` sentinels
/// and explanation texts.
#[derive(Debug, Clone)]
pub struct MsisdnLookup {
    rules: Arc<RuleTable>,
}

impl MsisdnLookup {
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self { rules }
    }

    /// Full lookup with validity flags, confidences and explanations.
    pub fn analyze(&self, msisdn: &str) -> LookupResponse {
        let normalized_input = normalize(msisdn);
        let normalized = normalized_input.digits;
        let e164 = if normalized.is_empty() {
            String::new()
        } else {
            fast_cat::concat_str!(PLUS_SIGN, &normalized)
        };

        let mut response = LookupResponse {
            input: msisdn.to_owned(),
            normalized: String::new(),
            e164,
            country: UNKNOWN_COUNTRY.to_owned(),
            number_type: UNKNOWN_NUMBER_TYPE.to_owned(),
            operator: UNKNOWN_OPERATOR.to_owned(),
            valid: Validity {
                digits_only: normalized_input.digits_only,
                ..Default::default()
            },
            country_confidence: Confidence::COUNTRY,
            type_confidence: Confidence::NUMBER_TYPE,
            operator_confidence: Confidence::OPERATOR,
            explain: Explain::default(),
        };

        if normalized.is_empty() {
            response.explain = Explain {
                country: EXPLAIN_COUNTRY_NO_DIGITS.to_owned(),
                number_type: EXPLAIN_TYPE_NO_DIGITS.to_owned(),
                operator: EXPLAIN_OPERATOR_NO_DIGITS.to_owned(),
            };
            return response;
        }

        if let Some((country, prefix)) = find_country_rule(&self.rules, &normalized) {
            response.country = country.name.clone();
            response.valid.known_country_code = true;
            response.valid.length_ok = is_within_length(&normalized, country);
            response.explain.country = fast_cat::concat_str!(
                "Country: +", prefix, " -> ", &country.name, " (country code ", prefix, ")"
            );

            let local = &normalized[prefix.len()..];
            let (number_type, explanation) = resolve_type(local, country);
            response.number_type = number_type.to_owned();
            response.explain.number_type = explanation;
        } else {
            response.explain.country = EXPLAIN_COUNTRY_NOT_FOUND.to_owned();
            response.explain.number_type = EXPLAIN_TYPE_COUNTRY_UNKNOWN.to_owned();
        }

        if let Some((operator, explanation)) = resolve_operator(&self.rules, &normalized) {
            response.operator = operator.to_owned();
            response.explain.operator = explanation;
        } else {
            response.explain.operator = EXPLAIN_OPERATOR_NOT_FOUND.to_owned();
        }

        debug!(
            "Analyzed {:?}: country={} ({}) type={} ({}) operator={} ({})",
            msisdn,
            response.country,
            response.country_confidence,
            response.number_type,
            response.type_confidence,
            response.operator,
            response.operator_confidence
        );
        response.normalized = normalized;
        response
    }

    /// False when no country matches or the digit count is out of its bounds.
    pub fn is_valid_length(&self, msisdn: &str) -> bool {
        let normalized = normalize_digits(msisdn);
        find_country_rule(&self.rules, &normalized)
            .is_some_and(|(country, _)| is_within_length(&normalized, country))
    }

    pub fn country(&self, msisdn: &str) -> &str {
        let normalized = normalize_digits(msisdn);
        find_country_rule(&self.rules, &normalized)
            .map_or(UNKNOWN_COUNTRY, |(country, _)| country.name.as_str())
    }

    pub fn operator(&self, msisdn: &str) -> &str {
        let normalized = normalize_digits(msisdn);
        resolve_operator(&self.rules, &normalized)
            .map_or(UNKNOWN_OPERATOR, |(operator, _)| operator)
    }

    pub fn number_type(&self, msisdn: &str) -> &str {
        let normalized = normalize_digits(msisdn);
        match find_country_rule(&self.rules, &normalized) {
            Some((country, prefix)) => resolve_type(&normalized[prefix.len()..], country).0,
            None => UNKNOWN_NUMBER_TYPE,
        }
    }
}
