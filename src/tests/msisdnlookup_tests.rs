use std::sync::Arc;

use crate::{msisdnlookup::Confidence, rules::RuleTable, MsisdnLookup};

use super::{get_lookup, lookup_for_json};

#[test]
fn country() {
    let lookup = get_lookup();
    let cases = [
        ("+393383260866", "Italy"),
        ("+38164123456", "Serbia"),
        ("+38598123456", "Croatia"),
        ("+306941234567", "Greece"),
        ("+41712345678", "Switzerland"),
        ("0041 79 123 45 67", "Switzerland"),
        ("+12125550123", "North America (NANP)"),
        ("+999123456", "Unknown"),
        ("", "Unknown"),
    ];
    for (msisdn, expected) in cases {
        assert_eq!(lookup.country(msisdn), expected, "country({})", msisdn);
    }
}

#[test]
fn number_type() {
    let lookup = get_lookup();
    let cases = [
        ("+393383260866", "mobile"),
        ("+390636918899", "fixed"),
        ("+38164123456", "mobile"),
        ("+38111345678", "fixed"),
        ("+381301234567", "fixed"),
        ("+306941234567", "mobile"),
        ("+302112345678", "fixed"),
        ("+41221234567", "fixed"),
        ("+12125550123", "fixed or mobile"),
        // No prefix and no fallback rule for Greece.
        ("+305551234567", "unknown"),
        ("+999123456", "unknown"),
    ];
    for (msisdn, expected) in cases {
        assert_eq!(lookup.number_type(msisdn), expected, "number_type({})", msisdn);
    }
}

#[test]
fn is_valid_length() {
    let lookup = get_lookup();
    let cases = [
        ("+393383260866", true),
        ("+390636918899", true),
        ("+38164123456", true),
        ("+38111345678", true),
        ("+306941234567", true),
        ("+390636", false),
        ("+393", false),
        ("+3816", false),
        ("+3069", false),
        ("+4179123456789", false),
        ("+999123456789", false),
        ("", false),
    ];
    for (msisdn, expected) in cases {
        assert_eq!(lookup.is_valid_length(msisdn), expected, "is_valid_length({})", msisdn);
    }
}

#[test]
fn operator() {
    let lookup = get_lookup();
    let cases = [
        ("+381601234567", "A1 Serbia (original range)"),
        ("+381621234567", "Yettel Serbia (original range)"),
        ("+381641234567", "Telekom Srbija (mts original range)"),
        ("+381671234567", "Globaltel Serbia (MVNO range)"),
        ("+393383260866", "TIM Italy (338 prefix)"),
        ("+393491234567", "Vodafone Italy (349 prefix)"),
        ("+390612345678", "Italy fixed (Rome 06)"),
        ("+41791234567", "Swisscom Mobile (079 prefix)"),
        ("+41761234567", "Sunrise UPC Switzerland (076 prefix)"),
        ("+41221234567", "Switzerland fixed (Geneva 22)"),
        ("+306971234567", "Cosmote Greece (697 prefix)"),
        ("+302310669985", "Greek fixed (OTE - Thessaloniki)"),
        ("+302109876543", "Greek fixed (OTE - Athens)"),
        ("+12125550123", "Unknown"),
        ("+", "Unknown"),
    ];
    for (msisdn, expected) in cases {
        assert_eq!(lookup.operator(msisdn), expected, "operator({})", msisdn);
    }
}

#[test]
fn analyze_italian_mobile() {
    let response = get_lookup().analyze("+393383260866");
    assert_eq!(response.input, "+393383260866");
    assert_eq!(response.normalized, "393383260866");
    assert_eq!(response.e164, "+393383260866");
    assert_eq!(response.country, "Italy");
    assert_eq!(response.number_type, "mobile");
    assert_eq!(response.operator, "TIM Italy (338 prefix)");
    assert!(response.valid.digits_only);
    assert!(response.valid.known_country_code);
    assert!(response.valid.length_ok);
    assert!(response.is_fully_valid());
    assert_eq!(response.explain.country, "Country: +39 -> Italy (country code 39)");
    assert_eq!(response.explain.number_type, "Type: 3 -> Italian mobile ranges start with 3");
    assert_eq!(
        response.explain.operator,
        "Operator guess: 338 is an original TIM mobile range"
    );
}

#[test]
fn analyze_provides_normalized_view() {
    let response = get_lookup().analyze("+30 697 038 91 62");
    assert_eq!(response.normalized, "306970389162");
    assert_eq!(response.e164, "+306970389162");
    assert!(response.valid.digits_only);
    assert!(response.valid.known_country_code);
    assert!(response.valid.length_ok);
    assert_eq!(response.country_confidence, Confidence::High);
    assert_eq!(response.type_confidence, Confidence::Medium);
    assert_eq!(response.operator_confidence, Confidence::Low);
}

#[test]
fn analyze_detects_invalid_characters() {
    let response = get_lookup().analyze("+30/ 69A");
    assert!(!response.valid.digits_only);
    assert_eq!(response.normalized, "3069");
    // "30" is a registered code, only the length gives it away. A table
    // without Greece reports "Unknown" instead, see below.
    assert_eq!(response.country, "Greece");
    assert!(!response.valid.length_ok);

    let italy_only = lookup_for_json(
        r#"{"countries": [{"name": "Italy", "codes": ["39"], "minLength": 10, "maxLength": 13}]}"#,
    );
    let response = italy_only.analyze("+30/ 69A");
    assert!(!response.valid.digits_only);
    assert_eq!(response.country, "Unknown");
    assert!(!response.valid.known_country_code);
    assert!(!response.valid.length_ok);
}

#[test]
fn analyze_without_digits() {
    let lookup = get_lookup();
    for input in ["", "+", "   ", "abc"] {
        let response = lookup.analyze(input);
        assert_eq!(response.normalized, "", "input {:?}", input);
        assert_eq!(response.e164, "", "input {:?}", input);
        assert_eq!(response.country, "Unknown");
        assert_eq!(response.number_type, "unknown");
        assert_eq!(response.operator, "Unknown");
        assert!(!response.valid.known_country_code);
        assert!(!response.valid.length_ok);
        assert_eq!(response.explain.country, "Country: missing digits after normalization");
        assert_eq!(response.explain.number_type, "Type: unable to evaluate without digits");
        assert_eq!(response.explain.operator, "Operator: unable to evaluate without digits");
    }
    assert!(lookup.analyze("+").valid.digits_only);
    assert!(!lookup.analyze("abc").valid.digits_only);
}

#[test]
fn analyze_unknown_country() {
    let response = get_lookup().analyze("+999 123 456");
    assert_eq!(response.e164, "+999123456");
    assert_eq!(response.country, "Unknown");
    assert_eq!(response.explain.country, "Country: prefix not in rules");
    assert_eq!(
        response.explain.number_type,
        "Type: country unknown so range can't be interpreted"
    );
    assert_eq!(response.explain.operator, "Operator guess: no matching prefix rule");
}

#[test]
fn analyze_explanation_variants() {
    let lookup = get_lookup();

    let response = lookup.analyze("+381601234567");
    assert_eq!(
        response.explain.operator,
        "Operator guess: Prefix 38160 matches A1 Serbia (original range)"
    );

    let response = lookup.analyze("+41221234567");
    assert_eq!(response.number_type, "fixed");
    assert_eq!(response.explain.number_type, "Type fallback rule applied");

    let response = lookup.analyze("+381301234567");
    assert_eq!(
        response.explain.number_type,
        "Type fallback: other Serbian ranges are geographic"
    );

    let response = lookup.analyze("+305551234567");
    assert_eq!(response.number_type, "unknown");
    assert_eq!(response.explain.number_type, "Type: no matching rules");
}

#[test]
fn e164_is_plus_and_normalized() {
    let lookup = get_lookup();
    for input in ["+39 338", "00 41 79", "", "+", "(385) 98-123", "x"] {
        let response = lookup.analyze(input);
        if response.normalized.is_empty() {
            assert_eq!(response.e164, "");
        } else {
            assert_eq!(response.e164, format!("+{}", response.normalized));
        }
    }
}

#[test]
fn longest_country_prefix_wins() {
    for json in [
        r#"{"countries": [
            {"name": "Short", "codes": ["1"]},
            {"name": "Long", "codes": ["123"]}
        ]}"#,
        r#"{"countries": [
            {"name": "Long", "codes": ["123"]},
            {"name": "Short", "codes": ["1"]}
        ]}"#,
    ] {
        let lookup = lookup_for_json(json);
        let response = lookup.analyze("+1234567");
        assert_eq!(response.country, "Long");
        assert_eq!(response.explain.country, "Country: +123 -> Long (country code 123)");
        assert_eq!(lookup.country("+1299999"), "Short");
        assert_eq!(lookup.country("+12"), "Short");
    }
}

#[test]
fn operator_does_not_depend_on_country() {
    let lookup = lookup_for_json(
        r#"{"countries": [{
            "name": "Somewhere",
            "codes": ["7"],
            "operatorRules": [
                {"prefix": "88", "operator": "Satellite", "explanation": ""},
                {"prefix": "881", "operator": "Satellite Premium", "explanation": "premium range"}
            ]
        }]}"#,
    );
    let response = lookup.analyze("+8812345");
    assert_eq!(response.country, "Unknown");
    assert_eq!(response.operator, "Satellite Premium");
    assert_eq!(response.explain.operator, "Operator guess: premium range");
    assert_eq!(lookup.operator("+8891"), "Satellite");
}

#[test]
fn type_uses_local_digits() {
    // "39" would match a "3" type rule if the full number was used.
    let lookup = lookup_for_json(
        r#"{"countries": [{
            "name": "Italy",
            "codes": ["39"],
            "typeRules": [
                {"prefix": "3", "type": "mobile", "explanation": "3x"},
                {"prefix": "0", "type": "fixed", "explanation": "0x"}
            ]
        }]}"#,
    );
    assert_eq!(lookup.number_type("+390636918899"), "fixed");
    assert_eq!(lookup.number_type("+39"), "unknown");
}

#[test]
fn empty_rule_table_resolves_nothing() {
    let lookup = MsisdnLookup::new(Arc::new(RuleTable::empty()));
    let response = lookup.analyze("+393383260866");
    assert_eq!(response.normalized, "393383260866");
    assert_eq!(response.country, "Unknown");
    assert_eq!(response.operator, "Unknown");
    assert!(!lookup.is_valid_length("+393383260866"));
}

#[test]
fn concurrent_lookups_share_rules() {
    let lookup = get_lookup();
    let expected = lookup.analyze("+41791234567");
    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(lookup.analyze("+41791234567"), expected);
                }
            });
        }
    });
}

#[test]
fn response_serializes_in_camel_case() {
    let response = get_lookup().analyze("+393383260866");
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["numberType"], "mobile");
    assert_eq!(json["valid"]["knownCountryCode"], true);
    assert_eq!(json["valid"]["lengthOk"], true);
    assert_eq!(json["countryConfidence"], "high");
    assert_eq!(json["typeConfidence"], "medium");
    assert_eq!(json["operatorConfidence"], "low");
    assert_eq!(json["explain"]["type"], "Type: 3 -> Italian mobile ranges start with 3");
}

#[test]
fn analyze_folds_other_decimal_digits() {
    let lookup = get_lookup();
    // "+٣٩٣٣٨٣٢٦٠٨٦٦" and its full-width form
    for input in [
        "+\u{0663}\u{0669}\u{0663}\u{0663}\u{0668}\u{0663}\u{0662}\u{0666}\u{0660}\u{0668}\u{0666}\u{0666}",
        "+\u{ff13}\u{ff19}\u{ff13}\u{ff13}\u{ff18}\u{ff13}\u{ff12}\u{ff16}\u{ff10}\u{ff18}\u{ff16}\u{ff16}",
    ] {
        let response = lookup.analyze(input);
        assert_eq!(response.input, input);
        assert_eq!(response.normalized, "393383260866", "input {:?}", input);
        assert!(response.valid.digits_only, "input {:?}", input);
        assert!(response.valid.length_ok, "input {:?}", input);
        assert_eq!(response.country, "Italy");
        assert_eq!(response.operator, "TIM Italy (338 prefix)");
        assert_eq!(lookup.country(input), "Italy");
    }
}

#[test]
fn confidence_labels() {
    assert_eq!(Confidence::COUNTRY.to_string(), "high");
    assert_eq!(Confidence::NUMBER_TYPE.to_string(), "medium");
    assert_eq!(<&'static str>::from(Confidence::OPERATOR), "low");
}
