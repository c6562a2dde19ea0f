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

pub const PLUS_SIGN: &str = "+";
/// Dialled instead of `+` in most of the world.
pub const INTERNATIONAL_DIALING_PREFIX: &str = "00";
/// Dropped silently anywhere in the input, together with whitespace.
pub const FORMATTING_CHARS: [char; 4] = ['-', '(', ')', '.'];

pub const UNKNOWN_COUNTRY: &str = "Unknown";
pub const UNKNOWN_OPERATOR: &str = "Unknown";
pub const UNKNOWN_NUMBER_TYPE: &str = "unknown";

pub const EXPLAIN_COUNTRY_NO_DIGITS: &str = "Country: missing digits after normalization";
pub const EXPLAIN_TYPE_NO_DIGITS: &str = "Type: unable to evaluate without digits";
pub const EXPLAIN_OPERATOR_NO_DIGITS: &str = "Operator: unable to evaluate without digits";
pub const EXPLAIN_COUNTRY_NOT_FOUND: &str = "Country: prefix not in rules";
pub const EXPLAIN_TYPE_COUNTRY_UNKNOWN: &str = "Type: country unknown so range can't be interpreted";
pub const EXPLAIN_TYPE_NO_RULES: &str = "Type: no matching rules";
pub const EXPLAIN_TYPE_FALLBACK_APPLIED: &str = "Type fallback rule applied";
pub const EXPLAIN_OPERATOR_NOT_FOUND: &str = "Operator guess: no matching prefix rule";
