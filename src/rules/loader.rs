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

use std::path::{Path, PathBuf};

use log::{info, warn};

use super::{
    errors::RulesError,
    rule_table::{RuleSet, RuleTable},
};

/// Rules compiled into the binary, same content as `resources/rules.json`.
pub const BUNDLED_RULES: &str = include_str!("../../resources/rules.json");

const RULES_FILE_NAME: &str = "rules.json";
const RESOURCES_DIR: &str = "resources";

impl RuleTable {
    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        let rule_set: RuleSet = serde_json::from_str(json)?;
        Self::from_rule_set(rule_set)
    }

    pub fn from_path(path: &Path) -> Result<Self, RulesError> {
        let json = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        info!(
            "Loaded {} countries from {}",
            table.country_count(),
            path.display()
        );
        Ok(table)
    }

    /// Compiles [`BUNDLED_RULES`].
    pub fn bundled() -> Result<Self, RulesError> {
        Self::from_json_str(BUNDLED_RULES)
    }
}

/// Picks the rules file to load.
///
/// An explicitly configured path wins when it exists. Otherwise the working
/// directory is searched (`rules.json`, then `resources/rules.json`), then the
/// directory of the running executable. When nothing is found the
/// `resources/rules.json` path is returned anyway so that loading fails with a
/// meaningful file name.
pub fn resolve_rules_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        if path.exists() {
            return path.to_path_buf();
        }
        warn!("Configured rules path {} does not exist", path.display());
    }

    let candidates = [
        PathBuf::from(RULES_FILE_NAME),
        Path::new(RESOURCES_DIR).join(RULES_FILE_NAME),
    ];
    if let Some(found) = candidates.into_iter().find(|path| path.exists()) {
        return found;
    }

    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        let candidate = dir.join(RULES_FILE_NAME);
        if candidate.exists() {
            return candidate;
        }
    }

    Path::new(RESOURCES_DIR).join(RULES_FILE_NAME)
}
