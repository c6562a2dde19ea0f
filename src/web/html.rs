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

use std::{borrow::Cow, fmt::Write};

use serde::Serialize;

use crate::msisdnlookup::LookupResponse;

pub const INDEX_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>MSISDN Lookup</title>
    <script src="https://unpkg.com/htmx.org@2.0.0"></script>
    <style>
        body { font-family: sans-serif; max-width: 600px; margin: 40px auto; padding: 0 16px; }
        h1 { margin-bottom: 0.5rem; }
        .card { border: 1px solid #ddd; border-radius: 8px; padding: 16px; margin-top: 16px; box-shadow: 0 2px 4px rgba(0,0,0,0.05); }
        label { display: block; margin-bottom: 8px; font-weight: 600; }
        input[type="text"] { width: 100%; padding: 8px; border-radius: 4px; border: 1px solid #ccc; margin-bottom: 8px; }
        button { padding: 8px 16px; border-radius: 4px; border: none; cursor: pointer; background: #007bff; color: white; font-weight: 600; }
        button:hover { background: #0056b3; }
        .muted { color: #777; font-size: 0.9rem; }
        .valid { color: #0a7f2e; }
        .invalid { color: #b30000; }
        table.result-grid { width: 100%; border-collapse: collapse; margin-top: 16px; }
        table.result-grid th, table.result-grid td { border: 1px solid #e2e2e2; padding: 8px; text-align: left; font-size: 0.95rem; }
        table.result-grid th { background: #f8f8f8; }
    </style>
</head>
<body>
    <h1>MSISDN Lookup</h1>
    <p class="muted">Enter a number in E.164 format (e.g. +393383260866) and press "Lookup".</p>

    <form hx-get="/lookup-view" hx-target="#result" hx-trigger="submit">
        <label for="msisdn">MSISDN</label>
        <input type="text" id="msisdn" name="msisdn" placeholder="+393383260866">
        <button type="submit">Lookup</button>
    </form>

    <div id="result"></div>
</body>
</html>
"##;

pub const MISSING_MSISDN_CARD: &str =
    r#"<div class="card"><strong>Error:</strong> missing <code>msisdn</code> parameter.</div>"#;

const NO_BATCH_INPUTS: &str = r#"<div class="muted">No inputs processed.</div>"#;

/// Compact view of a lookup shown by the browser form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupSummary<'a> {
    pub msisdn: &'a str,
    pub country: &'a str,
    pub number_type: &'a str,
    pub valid_length: bool,
    pub operator: &'a str,
}

/// Escapes text for HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'', '\0']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            '\0' => escaped.push('\u{FFFD}'),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// HTML fragment swapped into the index page by htmx.
pub fn render_lookup_view(summary: &LookupSummary<'_>) -> String {
    let (valid_class, valid_text) = if summary.valid_length {
        ("valid", "Yes")
    } else {
        ("invalid", "No")
    };
    let raw_json = serde_json::to_string_pretty(summary)
        .unwrap_or_else(|_| r#"{"error":"unable to format JSON"}"#.to_owned());

    let msisdn = escape_html(summary.msisdn);
    let country = escape_html(summary.country);
    let number_type = escape_html(summary.number_type);
    let operator = escape_html(summary.operator);
    let raw_json = escape_html(&raw_json);

    format!(
        r#"
<div class="card">
    <h2>Lookup result for {msisdn}</h2>
    <p class="muted">HLR-lite style analysis based purely on prefixes and number length.</p>
    <ul>
        <li><strong>MSISDN:</strong> {msisdn}</li>
        <li><strong>Country:</strong> {country}</li>
        <li><strong>Number type:</strong> {number_type}</li>
        <li><strong>Valid length:</strong> <span class="{valid_class}">{valid_text}</span></li>
        <li><strong>Operator:</strong> {operator}</li>
    </ul>
    <p class="muted">Raw JSON response returned by the API:</p>
    <pre>{raw_json}</pre>
    <table class="result-grid">
        <thead>
            <tr>
                <th>MSISDN</th>
                <th>Country</th>
                <th>Number type</th>
                <th>Valid length</th>
                <th>Operator</th>
            </tr>
        </thead>
        <tbody>
            <tr>
                <td>{msisdn}</td>
                <td>{country}</td>
                <td>{number_type}</td>
                <td>{valid_text}</td>
                <td>{operator}</td>
            </tr>
        </tbody>
    </table>
</div>
"#
    )
}

/// Result grid returned next to the batch results.
pub fn render_batch_table(results: &[LookupResponse]) -> String {
    if results.is_empty() {
        return NO_BATCH_INPUTS.to_owned();
    }

    let mut table = String::with_capacity(256 + results.len() * 192);
    table.push_str(r#"<table class="result-grid"><thead><tr>"#);
    table.push_str(
        "<th>#</th><th>Input</th><th>E.164</th><th>Country</th><th>Type</th><th>Operator</th><th>Valid</th>",
    );
    table.push_str("</tr></thead><tbody>");

    let mut buf = itoa::Buffer::new();
    for (index, result) in results.iter().enumerate() {
        // Writing into a String can't fail.
        let _ = write!(
            table,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            buf.format(index + 1),
            escape_html(&result.input),
            escape_html(&result.e164),
            escape_html(&result.country),
            escape_html(&result.number_type),
            escape_html(&result.operator),
            yes_no(result.is_fully_valid()),
        );
    }

    table.push_str("</tbody></table>");
    table
}
