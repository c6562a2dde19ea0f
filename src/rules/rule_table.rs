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

use std::{collections::HashMap, sync::LazyLock};

use log::{debug, warn};
use regex::Regex;
use serde::Deserialize;

use super::errors::RulesError;

/// Country and operator prefixes are plain ASCII digit strings.
static PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid constant pattern!"));

/// Raw shape of the rules document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub countries: Vec<CountryRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountryRule {
    pub name: String,
    /// Dial-code prefixes owned by this country.
    pub codes: Vec<String>,
    /// Minimum total digit count, `0` (or below) means unconstrained.
    pub min_length: i32,
    /// Maximum total digit count, `0` (or below) means unconstrained.
    pub max_length: i32,
    /// Ordered by priority, the first matching prefix wins.
    pub type_rules: Vec<TypeRule>,
    pub operator_rules: Vec<OperatorRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypeRule {
    /// Empty prefix marks a fallback rule.
    pub prefix: String,
    #[serde(rename = "type")]
    pub number_type: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OperatorRule {
    /// Matched against the full normalized number, country code included.
    pub prefix: String,
    pub operator: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorMetadata {
    pub name: String,
    pub explanation: String,
}

/// Compiled, read-only view of a [`RuleSet`].
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards, so concurrent lookups need no synchronization.
#[derive(Debug, Default)]
pub struct RuleTable {
    countries: Vec<CountryRule>,
    /// Exact prefix to index in `countries`. Last write wins on collision.
    country_by_prefix: HashMap<String, usize>,
    max_country_prefix_len: usize,
    operator_by_prefix: HashMap<String, OperatorMetadata>,
    max_operator_prefix_len: usize,
}

impl RuleTable {
    /// A table that resolves nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rule_set(rule_set: RuleSet) -> Result<Self, RulesError> {
        let mut table = Self::empty();

        for (index, country) in rule_set.countries.iter().enumerate() {
            for code in &country.codes {
                if code.is_empty() {
                    continue;
                }
                if !PREFIX_PATTERN.is_match(code) {
                    warn!("Skipping non-digit country code {:?} of {}", code, country.name);
                    continue;
                }
                if let Some(previous) = table.country_by_prefix.insert(code.clone(), index) {
                    if previous != index {
                        warn!(
                            "Country code {} reassigned from {} to {}",
                            code, rule_set.countries[previous].name, country.name
                        );
                    }
                }
                table.max_country_prefix_len = table.max_country_prefix_len.max(code.len());
            }

            for operator_rule in &country.operator_rules {
                if operator_rule.prefix.is_empty() {
                    continue;
                }
                if !PREFIX_PATTERN.is_match(&operator_rule.prefix) {
                    warn!(
                        "Skipping non-digit operator prefix {:?} of {}",
                        operator_rule.prefix, country.name
                    );
                    continue;
                }
                let metadata = OperatorMetadata {
                    name: operator_rule.operator.clone(),
                    explanation: operator_rule.explanation.clone(),
                };
                if let Some(previous) = table
                    .operator_by_prefix
                    .insert(operator_rule.prefix.clone(), metadata)
                {
                    warn!(
                        "Operator prefix {} reassigned from {} to {}",
                        operator_rule.prefix, previous.name, operator_rule.operator
                    );
                }
                table.max_operator_prefix_len =
                    table.max_operator_prefix_len.max(operator_rule.prefix.len());
            }
        }

        if table.country_by_prefix.is_empty() {
            return Err(RulesError::NoCountryPrefixes);
        }

        table.countries = rule_set.countries;
        debug!(
            "Compiled {} country prefixes (max len {}) and {} operator prefixes (max len {})",
            table.country_by_prefix.len(),
            table.max_country_prefix_len,
            table.operator_by_prefix.len(),
            table.max_operator_prefix_len
        );
        Ok(table)
    }

    pub fn country_for_prefix(&self, prefix: &str) -> Option<&CountryRule> {
        self.country_by_prefix
            .get(prefix)
            .map(|&index| &self.countries[index])
    }

    pub fn operator_for_prefix(&self, prefix: &str) -> Option<&OperatorMetadata> {
        self.operator_by_prefix.get(prefix)
    }

    pub fn max_country_prefix_len(&self) -> usize {
        self.max_country_prefix_len
    }

    pub fn max_operator_prefix_len(&self) -> usize {
        self.max_operator_prefix_len
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    pub fn country_prefix_count(&self) -> usize {
        self.country_by_prefix.len()
    }

    pub fn operator_prefix_count(&self) -> usize {
        self.operator_by_prefix.len()
    }
}
