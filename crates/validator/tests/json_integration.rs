//! JSON boundary: override documents in, validation results out.

use passgate_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn component_overrides_apply_to_every_rule() {
    let overrides = MessageOverrides::from_json(
        r#"{
            "passwordMismatch": "Passwords don't match",
            "minLength": "Password must be at least 6 characters long",
            "uppercase": "Password must contain at least one uppercase letter",
            "lowercase": "Password must contain at least one lowercase letter",
            "number": "Password must contain at least one number",
            "special": "Password must contain at least one special character"
        }"#,
    )
    .unwrap();
    assert_eq!(overrides.len(), RuleId::COUNT);

    let result = evaluate("", "x", Some(&overrides));
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(
        value,
        json!({
            "failures": [
                { "rule": "mismatch", "message": "Passwords don't match" },
                { "rule": "min_length", "message": "Password must be at least 6 characters long" },
                { "rule": "uppercase", "message": "Password must contain at least one uppercase letter" },
                { "rule": "lowercase", "message": "Password must contain at least one lowercase letter" },
                { "rule": "digit", "message": "Password must contain at least one number" },
                { "rule": "special", "message": "Password must contain at least one special character" }
            ],
            "is_valid": false
        })
    );
}

#[test]
fn valid_result_payload() {
    let value = serde_json::to_value(evaluate("Test123!", "Test123!", None)).unwrap();
    assert_eq!(value, json!({ "failures": [], "is_valid": true }));
}

#[test]
fn unknown_keys_are_ignored() {
    let overrides =
        MessageOverrides::from_json(r#"{ "maxLength": "too long", "entropy": "weak" }"#).unwrap();
    assert!(overrides.is_empty());
    assert_eq!(RuleSet::standard().merge(&overrides), default_messages());
}

#[test]
fn component_props_carry_unrelated_fields() {
    let overrides = MessageOverrides::from_json(
        r#"{ "minLength": "x", "className": 3, "style": { "width": "100%" } }"#,
    )
    .unwrap();

    let result = evaluate("Tes1!", "Tes1!", Some(&overrides));
    assert_eq!(result.messages().collect::<Vec<_>>(), vec!["x"]);
}

#[test]
fn malformed_document_is_an_error() {
    let err = MessageOverrides::from_json(r#"{ "minLength": null }"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid message override document:"));
}

#[test]
fn default_messages_payload_is_keyed_by_code() {
    let value = serde_json::to_value(default_messages()).unwrap();
    let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();

    let mut expected: Vec<String> = RuleId::ALL.iter().map(ToString::to_string).collect();
    expected.sort();
    assert_eq!(keys, expected);
}

#[test]
fn failure_display_snapshots() {
    let result = evaluate("Test1", "Test1", None);
    insta::assert_snapshot!(result.failures()[0].to_string(), @"min_length: Password must be at least 6 characters long");

    let result = evaluate("abc", "abd", None);
    insta::assert_snapshot!(result.failures()[0].to_string(), @"mismatch: Passwords do not match");
}
