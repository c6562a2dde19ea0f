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

use super::helper_constants::{FORMATTING_CHARS, INTERNATIONAL_DIALING_PREFIX};

/// Digits extracted from a raw input plus a flag telling whether anything
/// other than digits and formatting noise was met on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedInput {
    /// ASCII decimal digits only.
    pub digits: String,
    /// Diagnostic only, resolution still runs on whatever digits were found.
    pub digits_only: bool,
}

/// Reduces user input to a plain digit string.
///
/// Digits are kept (any Unicode decimal digit is folded to its ASCII value),
/// a `+` before the first digit, whitespace and `- ( ) .` are dropped
/// silently. Every other character is dropped too but clears
/// [`NormalizedInput::digits_only`]. A leading `00` international prefix is
/// removed at the end.
pub fn normalize(msisdn: &str) -> NormalizedInput {
    let folded = dec_from_char::normalize_decimals(msisdn.trim());
    let mut digits = String::with_capacity(folded.len());
    let mut digits_only = true;

    for c in folded.chars() {
        match c {
            '0'..='9' => digits.push(c),
            '+' if digits.is_empty() => {}
            c if c.is_whitespace() => {}
            c if FORMATTING_CHARS.contains(&c) => {}
            _ => digits_only = false,
        }
    }

    strip_international_prefix(&mut digits);
    NormalizedInput { digits, digits_only }
}

/// Shortcut for callers that don't care about the diagnostic flag.
pub fn normalize_digits(msisdn: &str) -> String {
    normalize(msisdn).digits
}

fn strip_international_prefix(digits: &mut String) {
    if digits.starts_with(INTERNATIONAL_DIALING_PREFIX) {
        digits.drain(..INTERNATIONAL_DIALING_PREFIX.len());
    }
}
