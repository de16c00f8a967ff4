//! Composable validators for free-text input
//!
//! A validator inspects a candidate string and either accepts it or returns a
//! [`ValidationError`] with a human-readable reason. Validators never modify
//! the candidate. Any `Fn(&str) -> Result<(), ValidationError>` is a validator,
//! so ad-hoc checks can be written inline next to the constructors below.

use std::path::PathBuf;

use super::error::ValidationError;

/// A check applied to a candidate input string
pub trait Validator {
    fn validate(&self, value: &str) -> Result<(), ValidationError>;
}

impl<F> Validator for F
where
    F: Fn(&str) -> Result<(), ValidationError>,
{
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        self(value)
    }
}

/// Owned, type-erased validator
pub type BoxedValidator<'a> = Box<dyn Validator + 'a>;

/// Run every validator against `value` and collect all failures.
///
/// Later validators run even when earlier ones fail.
pub fn collect_failures(value: &str, validators: &[BoxedValidator<'_>]) -> Vec<ValidationError> {
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect()
}

/// Reject empty and whitespace-only values
pub fn not_empty() -> impl Validator {
    |value: &str| {
        if value.trim().is_empty() {
            Err(ValidationError::new("Value must not be empty."))
        } else {
            Ok(())
        }
    }
}

/// Reject values that do not parse as a floating-point number.
///
/// Surrounding whitespace is ignored.
pub fn numeric() -> impl Validator {
    |value: &str| match value.trim().parse::<f64>() {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new(format!(
            "Value '{}' is not a number.",
            value
        ))),
    }
}

/// Reject numbers outside `min..=max`.
///
/// Values that are not numbers pass; pair this with [`numeric`] so the user
/// sees one reason per problem.
pub fn in_range(min: f64, max: f64) -> impl Validator {
    move |value: &str| match value.trim().parse::<f64>() {
        Ok(number) if !(min..=max).contains(&number) => Err(ValidationError::new(format!(
            "Value must be between {} and {}, got {}.",
            min, max, number
        ))),
        _ => Ok(()),
    }
}

/// Reject values that are not an existing directory.
///
/// Relative paths are resolved against `base`, never against the process
/// working directory.
pub fn directory_exists(base: impl Into<PathBuf>) -> impl Validator {
    let base = base.into();
    move |value: &str| {
        let trimmed = value.trim();
        if trimmed.is_empty() || !base.join(trimmed).is_dir() {
            Err(ValidationError::new(format!(
                "Path {} is not a valid directory.",
                value
            )))
        } else {
            Ok(())
        }
    }
}

/// Require exactly `count` tokens when splitting on `separator`.
///
/// Splitting keeps empty tokens, so `"a  b"` split on `' '` has three tokens
/// and the empty string has one.
pub fn token_count(count: usize, separator: char) -> impl Validator {
    move |value: &str| {
        let actual = value.split(separator).count();
        if actual == count {
            Ok(())
        } else {
            Err(ValidationError::new(format!(
                "Expected {} element(s), got {}.",
                count, actual
            )))
        }
    }
}

/// Apply every validator to every token and report all failures at once.
///
/// Each failure becomes one line tagged with the token and its zero-based
/// index.
pub fn each_token<'a>(separator: char, validators: Vec<BoxedValidator<'a>>) -> impl Validator + 'a {
    move |value: &str| {
        let mut reasons = Vec::new();
        for (index, token) in value.split(separator).enumerate() {
            for failure in collect_failures(token, &validators) {
                reasons.push(format!(
                    "Element '{}' at index {}: {}",
                    token, index, failure
                ));
            }
        }
        if reasons.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(reasons.join("\n")))
        }
    }
}

/// Combine validators into one that reports every failure
pub fn all_of<'a>(validators: Vec<BoxedValidator<'a>>) -> impl Validator + 'a {
    move |value: &str| {
        let failures = collect_failures(value, &validators);
        if failures.is_empty() {
            Ok(())
        } else {
            let reasons: Vec<String> = failures.iter().map(ToString::to_string).collect();
            Err(ValidationError::new(reasons.join("\n")))
        }
    }
}
