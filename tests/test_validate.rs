//! Tests for the input validators

use filedeck::menu::validate::{
    all_of, collect_failures, directory_exists, each_token, in_range, not_empty, numeric,
    token_count,
};
use filedeck::menu::{BoxedValidator, Validator};
use tempfile::TempDir;

#[test]
fn test_not_empty_rejects_empty_and_whitespace() {
    let validator = not_empty();
    let err = validator.validate("").unwrap_err();
    assert_eq!(err.message(), "Value must not be empty.");

    for blank in [" ", "\t", "  \n"] {
        assert!(
            validator.validate(blank).is_err(),
            "{:?} should be rejected",
            blank
        );
    }
    assert!(validator.validate(" x ").is_ok());
    assert!(validator.validate("x").is_ok());
}

#[test]
fn test_numeric_accepts_integers_and_decimals() {
    let validator = numeric();
    for value in ["0", "42", "-3", "7.25", " 12 "] {
        assert!(
            validator.validate(value).is_ok(),
            "{} should be numeric",
            value
        );
    }

    let err = validator.validate("abc").unwrap_err();
    assert_eq!(err.message(), "Value 'abc' is not a number.");
}

#[test]
fn test_in_range_is_inclusive_and_skips_non_numbers() {
    let validator = in_range(0.0, 100.0);
    assert!(validator.validate("0").is_ok());
    assert!(validator.validate("100").is_ok());
    assert!(validator.validate("101").is_err());
    assert!(validator.validate("-1").is_err());
    assert!(
        validator.validate("abc").is_ok(),
        "left to the numeric check"
    );
}

#[test]
fn test_directory_exists_resolves_against_base() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("inner")).unwrap();
    std::fs::write(temp.path().join("plain.txt"), b"x").unwrap();

    let validator = directory_exists(temp.path());
    assert!(validator.validate("inner").is_ok());
    assert!(validator.validate(temp.path().to_str().unwrap()).is_ok());

    let err = validator.validate("plain.txt").unwrap_err();
    assert_eq!(err.message(), "Path plain.txt is not a valid directory.");
    assert!(validator.validate("missing").is_err());
    assert!(validator.validate("").is_err());
}

#[test]
fn test_token_count_keeps_empty_tokens() {
    let validator = token_count(3, ',');
    assert!(validator.validate("a,b,c").is_ok());
    assert!(validator.validate("a,,c").is_ok());

    let err = validator.validate("a,b").unwrap_err();
    assert_eq!(err.message(), "Expected 3 element(s), got 2.");

    // The empty string is a single empty token
    assert_eq!(
        token_count(2, ',').validate("").unwrap_err().message(),
        "Expected 2 element(s), got 1."
    );
}

#[test]
fn test_token_count_on_space_separated_input() {
    let err = token_count(3, ' ').validate("a b").unwrap_err();
    assert_eq!(err.message(), "Expected 3 element(s), got 2.");
}

#[test]
fn test_each_token_names_the_single_bad_token() {
    let validator = each_token(' ', vec![Box::new(numeric()) as BoxedValidator]);

    let err = validator.validate("1 2 x").unwrap_err();
    let reasons: Vec<&str> = err.reasons().collect();

    assert_eq!(reasons.len(), 1);
    assert!(
        reasons[0].starts_with("Element 'x' at index 2:"),
        "got: {}",
        reasons[0]
    );
}

#[test]
fn test_each_token_reports_every_failure_with_index() {
    let validator = each_token(
        ' ',
        vec![Box::new(numeric()) as BoxedValidator, Box::new(not_empty())],
    );
    assert!(validator.validate("1 2 3").is_ok());

    let err = validator.validate("1 x y").unwrap_err();
    assert_eq!(
        err.reasons().collect::<Vec<_>>(),
        vec![
            "Element 'x' at index 1: Value 'x' is not a number.",
            "Element 'y' at index 2: Value 'y' is not a number.",
        ]
    );
}

#[test]
fn test_each_token_collects_multiple_reasons_for_one_token() {
    let validator = each_token(
        ',',
        vec![Box::new(not_empty()) as BoxedValidator, Box::new(numeric())],
    );
    let err = validator.validate("5,").unwrap_err();
    let reasons: Vec<&str> = err.reasons().collect();
    assert_eq!(reasons.len(), 2, "empty token fails both checks");
    assert!(reasons.iter().all(|r| r.starts_with("Element '' at index 1:")));
}

#[test]
fn test_collect_failures_runs_all_validators() {
    let validators: Vec<BoxedValidator> = vec![
        Box::new(not_empty()),
        Box::new(numeric()),
        Box::new(in_range(0.0, 10.0)),
    ];
    assert!(collect_failures("5", &validators).is_empty());
    assert_eq!(collect_failures("", &validators).len(), 2);
    assert_eq!(collect_failures("50", &validators).len(), 1);
}

#[test]
fn test_all_of_merges_reasons() {
    let validator = all_of(vec![
        Box::new(not_empty()) as BoxedValidator,
        Box::new(numeric()),
    ]);
    let err = validator.validate("").unwrap_err();
    assert_eq!(
        err.reasons().collect::<Vec<_>>(),
        vec!["Value must not be empty.", "Value '' is not a number."]
    );
}

#[test]
fn test_closures_are_validators() {
    let no_spaces = |value: &str| {
        if value.contains(' ') {
            Err(filedeck::menu::ValidationError::new("No spaces allowed."))
        } else {
            Ok(())
        }
    };
    assert!(no_spaces.validate("ok").is_ok());
    assert_eq!(
        no_spaces.validate("not ok").unwrap_err().message(),
        "No spaces allowed."
    );
}
