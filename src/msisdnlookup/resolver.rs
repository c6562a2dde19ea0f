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

use log::trace;

use crate::rules::{CountryRule, RuleTable};

use super::helper_constants::{
    EXPLAIN_TYPE_FALLBACK_APPLIED, EXPLAIN_TYPE_NO_RULES, UNKNOWN_NUMBER_TYPE,
};

/// Tries prefixes of `digits` from `max_len` characters down to one and
/// returns the first one `lookup` knows about, so the most specific prefix
/// always wins.
fn longest_prefix_match<'d, T>(
    digits: &'d str,
    max_len: usize,
    lookup: impl Fn(&str) -> Option<T>,
) -> Option<(T, &'d str)> {
    (1..=max_len.min(digits.len())).rev().find_map(|len| {
        let prefix = digits.get(..len)?;
        lookup(prefix).map(|found| (found, prefix))
    })
}

/// Finds the country owning the longest registered dial-code prefix of
/// `digits`. Returns the rule and the matched prefix.
pub fn find_country_rule<'t, 'd>(
    rules: &'t RuleTable,
    digits: &'d str,
) -> Option<(&'t CountryRule, &'d str)> {
    let found = longest_prefix_match(digits, rules.max_country_prefix_len(), |prefix| {
        rules.country_for_prefix(prefix)
    });
    if let Some((country, prefix)) = found {
        trace!("Country prefix {} of {} -> {}", prefix, digits, country.name);
    }
    found
}

/// Checks the total digit count against the country bounds; a bound of zero
/// or below is not enforced.
pub fn is_within_length(digits: &str, country: &CountryRule) -> bool {
    let length = digits.len() as i64;
    let min = i64::from(country.min_length);
    let max = i64::from(country.max_length);
    (min <= 0 || length >= min) && (max <= 0 || length <= max)
}

/// Resolves the number type from the local part (country code removed).
///
/// Runs two passes over the rules in declared order: prefixed rules first,
/// then the first empty-prefix fallback. A fallback therefore never shadows a
/// prefixed rule, wherever it is declared.
pub fn resolve_type<'a>(local: &str, country: &'a CountryRule) -> (&'a str, String) {
    let prefixed = country
        .type_rules
        .iter()
        .filter(|rule| !rule.prefix.is_empty())
        .find(|rule| local.starts_with(rule.prefix.as_str()));
    if let Some(rule) = prefixed {
        let explanation = fast_cat::concat_str!("Type: ", &rule.prefix, " -> ", &rule.explanation);
        return (rule.number_type.as_str(), explanation);
    }

    let fallback = country.type_rules.iter().find(|rule| rule.prefix.is_empty());
    if let Some(rule) = fallback {
        let explanation = if rule.explanation.is_empty() {
            EXPLAIN_TYPE_FALLBACK_APPLIED.to_owned()
        } else {
            fast_cat::concat_str!("Type fallback: ", &rule.explanation)
        };
        return (rule.number_type.as_str(), explanation);
    }

    (UNKNOWN_NUMBER_TYPE, EXPLAIN_TYPE_NO_RULES.to_owned())
}

/// Guesses the operator from the full normalized number, independently of
/// the country match. Returns the operator name and its explanation.
pub fn resolve_operator<'t>(rules: &'t RuleTable, digits: &str) -> Option<(&'t str, String)> {
    let (operator, prefix) =
        longest_prefix_match(digits, rules.max_operator_prefix_len(), |prefix| {
            rules.operator_for_prefix(prefix)
        })?;
    trace!("Operator prefix {} of {} -> {}", prefix, digits, operator.name);

    let explanation = if operator.explanation.is_empty() {
        fast_cat::concat_str!("Operator guess: Prefix ", prefix, " matches ", &operator.name)
    } else {
        fast_cat::concat_str!("Operator guess: ", &operator.explanation)
    };
    Some((operator.name.as_str(), explanation))
}
