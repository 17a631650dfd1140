//! Behaviour of the stateful field validator.

use std::cell::RefCell;
use std::rc::Rc;

use formkit_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn bound(value: &str, rules: RuleSet) -> FieldValidator {
    FieldValidator::for_input("field", value, rules, Settings::default())
}

#[test]
fn test_validate_is_idempotent() {
    let rules = RuleSet::new().has_length(2, 5, 0).is_alpha().is_email();
    let mut v = bound("a1", rules);

    let first = v.validate().unwrap().to_vec();
    let second = v.validate().unwrap().to_vec();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_below_min_fires_only_too_short() {
    let mut v = bound("ab", RuleSet::new().has_length(5, 3, 4));
    let errors = v.validate().unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].check_name, "hasLength");
    assert_eq!(errors[0].message, "Minimum length is 5 characters");
}

#[test]
fn test_too_long_and_wrong_exact() {
    let mut v = bound("abcdef", RuleSet::new().has_length(0, 4, 0));
    assert_eq!(v.has_length(), Ok(false));
    assert_eq!(
        v.error_for("hasLength").unwrap().message,
        "Maximum length is 4 characters"
    );

    v.set_rules(RuleSet::new().has_length(0, 0, 3));
    assert_eq!(v.has_length(), Ok(false));
    assert_eq!(
        v.error_for("hasLength").unwrap().message,
        "Length must be exactly 3 characters"
    );
    assert_eq!(v.errors().len(), 1);
}

#[test]
fn test_is_alpha_rejects_digits() {
    let mut v = bound("abc123", RuleSet::new());
    assert_eq!(v.is_alpha(), Ok(false));
    assert_eq!(v.errors().len(), 1);
    assert_eq!(v.errors()[0].check_name, "isAlpha");
}

#[test]
fn test_is_alpha_accepts_empty() {
    let mut v = bound("", RuleSet::new());
    assert_eq!(v.is_alpha(), Ok(true));
    assert!(v.is_valid());
}

#[test]
fn test_is_email_shapes() {
    let mut v = bound("a@b.com", RuleSet::new());
    assert_eq!(v.is_email(), Ok(true));
    assert!(v.errors().is_empty());

    v.field_mut().set_value("a@@b");
    assert_eq!(v.is_email(), Ok(false));
    assert_eq!(v.errors().len(), 1);
    assert_eq!(v.errors()[0].check_name, "isEmail");
}

#[test]
fn test_custom_check_adds_then_removes_only_its_entry() {
    let mut v = bound("12", RuleSet::new());
    v.is_alpha().unwrap();

    assert_eq!(v.custom_check(|_| false, "unique", Some("taken")), Ok(false));
    assert_eq!(
        v.errors(),
        &[
            ErrorEntry::new("isAlpha", "Only Latin letters are allowed"),
            ErrorEntry::new("unique", "taken"),
        ]
    );

    assert_eq!(v.custom_check(|_| true, "unique", Some("taken")), Ok(true));
    assert_eq!(
        v.errors(),
        &[ErrorEntry::new("isAlpha", "Only Latin letters are allowed")]
    );
}

#[test]
fn test_custom_check_default_message() {
    let mut v = bound("x", RuleSet::new());
    v.custom_check(|value| value.len() > 3, "long", None).unwrap();
    assert_eq!(v.errors(), &[ErrorEntry::new("long", "long check failed")]);
}

#[test]
fn test_custom_check_requires_name() {
    let mut v = bound("x", RuleSet::new());
    assert_eq!(
        v.custom_check(|_| false, "", Some("msg")),
        Err(UsageError::EmptyCheckName)
    );
    assert!(v.errors().is_empty());
}

#[test]
fn test_reserved_name_keeps_length_rule_in_force() {
    let rules = RuleSet::new().has_length(5, 0, 0);
    assert!(matches!(
        rules.clone().custom("hasLength", None, |_| true),
        Err(UsageError::ReservedCheckName { .. })
    ));

    let mut v = bound("ab", rules);
    let errors = v.validate().unwrap();
    assert_eq!(
        errors,
        &[ErrorEntry::new("hasLength", "Minimum length is 5 characters")]
    );
}

#[test]
fn test_non_string_field_is_usage_error() {
    let mut v = FieldValidator::new(
        InputField::new("agree", json!(true)),
        RuleSet::new().is_alpha(),
        Handlers::new(),
        Settings::default(),
    );

    let expected = UsageError::NonStringValue {
        field: "agree".into(),
        found: "boolean",
    };
    assert_eq!(v.has_length(), Err(expected.clone()));
    assert_eq!(v.is_alpha(), Err(expected.clone()));
    assert_eq!(v.is_email(), Err(expected.clone()));
    assert_eq!(v.custom_check(|_| false, "c", None), Err(expected.clone()));
    assert_eq!(v.validate().map(<[ErrorEntry]>::len), Err(expected));
    assert!(v.errors().is_empty());
}

#[test]
fn test_detached_field_is_usage_error() {
    let mut v = FieldValidator::new(
        InputField::detached("login"),
        RuleSet::new().is_alpha(),
        Handlers::new(),
        Settings::default(),
    );
    assert_eq!(
        v.validate().map(<[ErrorEntry]>::len),
        Err(UsageError::FieldMissing {
            field: "login".into()
        })
    );
}

#[test]
fn test_callback_receives_full_list_once_per_pass() {
    let seen: Rc<RefCell<Vec<Vec<ErrorEntry>>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let mut v = FieldValidator::new(
        InputField::new("login", "1"),
        RuleSet::new().has_length(2, 0, 0).is_alpha(),
        Handlers::new().on_validation_finish(move |errors| sink.borrow_mut().push(errors.to_vec())),
        Settings::default(),
    );

    v.validate().unwrap();
    v.field_mut().set_value("12");
    v.validate().unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].len(), 2);
    // The second pass still reports the unchanged isAlpha failure.
    assert_eq!(
        seen[1],
        vec![ErrorEntry::new("isAlpha", "Only Latin letters are allowed")]
    );
}

#[test]
fn test_individual_checks_do_not_fire_callback() {
    let calls = Rc::new(RefCell::new(0_u32));
    let counter = Rc::clone(&calls);
    let mut v = FieldValidator::new(
        InputField::new("login", "1"),
        RuleSet::new(),
        Handlers::new().on_validation_finish(move |_| *counter.borrow_mut() += 1),
        Settings::default(),
    );

    v.is_alpha().unwrap();
    v.is_email().unwrap();
    assert_eq!(*calls.borrow(), 0);
    v.validate().unwrap();
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_validity_marker_follows_outcome() {
    let mut v = bound("1", RuleSet::new().is_alpha());
    assert_eq!(v.field().validity(), None);

    v.validate().unwrap();
    assert_eq!(v.field().validity(), Some(Validity::Invalid));

    v.field_mut().set_value("abc");
    v.validate().unwrap();
    assert_eq!(v.field().validity(), Some(Validity::Valid));
    assert!(v.is_valid());
}

#[test]
fn test_russian_alpha_falls_back_to_english() {
    let mut v = FieldValidator::for_input(
        "name",
        "1",
        RuleSet::new().is_alpha().has_length(2, 0, 0),
        Settings::new(Locale::Ru),
    );
    let errors = v.validate().unwrap();
    assert_eq!(
        errors,
        &[
            ErrorEntry::new("isAlpha", "Only Latin letters are allowed").with_fallback(true),
            ErrorEntry::new("hasLength", "Минимальная длина 2 символов"),
        ]
    );
}

#[test]
fn test_rules_run_in_declared_order() {
    let rules = RuleSet::from_json(r#"{ "isEmail": true, "hasLength": { "min": 10 } }"#).unwrap();
    let mut v = bound("short", rules);
    let names: Vec<_> = v
        .validate()
        .unwrap()
        .iter()
        .map(|e| e.check_name.clone())
        .collect();
    assert_eq!(names, vec!["isEmail", "hasLength"]);
}

#[test]
fn test_error_entry_serializes_camel_case() {
    let entry = ErrorEntry::new("unique", "taken");
    assert_eq!(
        serde_json::to_value(&entry).unwrap(),
        json!({ "checkName": "unique", "message": "taken" })
    );

    let fallback = ErrorEntry::new("isAlpha", "Only Latin letters are allowed").with_fallback(true);
    assert_eq!(
        serde_json::to_value(&fallback).unwrap(),
        json!({
            "checkName": "isAlpha",
            "message": "Only Latin letters are allowed",
            "fallback": true
        })
    );
}
