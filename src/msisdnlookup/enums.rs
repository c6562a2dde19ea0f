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
use strum::{Display, IntoStaticStr};

/// Qualitative confidence attached to each guess of a lookup.
///
/// The labels are fixed per field (country is `High`, type is `Medium`,
/// operator is `Low`) and are not derived from match quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Dial codes are assigned by the ITU and rarely ambiguous.
    High,
    /// Mobile/fixed ranges are national plans that drift over time.
    Medium,
    /// Numbers get ported between operators, prefixes only tell the original holder.
    Low,
}

impl Confidence {
    pub const COUNTRY: Confidence = Confidence::High;
    pub const NUMBER_TYPE: Confidence = Confidence::Medium;
    pub const OPERATOR: Confidence = Confidence::Low;
}
