use crate::errors::{ValidationFailure, Violation};
use serde::Serialize;

/// Core validation trait that all validators must implement.
///
/// This trait provides a consistent interface for validating data across
/// the crate. Every [`FieldValidator`] gets an implementation for `str`
/// that fails with a [`ValidationFailure`].
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
///
/// # Examples
///
/// ```no_run
/// use validators::{SharedImageNameValidator, Validator};
///
/// let validator = SharedImageNameValidator::new("image_name");
/// assert!(validator.validate("ubuntu-22.04").is_ok());
/// assert!(validator.validate("ubuntu 22.04").is_err());
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

/// A validator bound to a single labelled field.
///
/// Implementors only list the rules a value breaks; [`FieldValidator::check`]
/// wraps that list into a [`ValidationOutcome`] and logs the decision.
pub trait FieldValidator {
    /// Label used in every violation message
    fn field_name(&self) -> &str;

    /// Every rule broken by `value`, in a fixed order. Empty means valid.
    fn violations(&self, value: &str) -> Vec<Violation>;

    fn check(&self, value: &str) -> ValidationOutcome {
        let violations = self.violations(value);

        if violations.is_empty() {
            log::trace!("Accepted {} value {:?}", self.field_name(), value);
        } else {
            log::debug!(
                "Rejected {} value {:?} with {} violation(s)",
                self.field_name(),
                value,
                violations.len()
            );
        }

        ValidationOutcome::new(self.field_name(), value, violations)
    }
}

impl<V: FieldValidator + ?Sized> Validator<str> for V {
    type Error = ValidationFailure;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        self.check(input).into_result().map(|_| ())
    }
}

/// Result of validating one value: the value as given plus the rules it broke.
///
/// The value is never normalized; `value` always echoes the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub field_name: String,
    pub value: String,
    pub violations: Vec<Violation>,
}

impl ValidationOutcome {
    pub fn new(
        field_name: impl Into<String>,
        value: impl Into<String>,
        violations: Vec<Violation>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            value: value.into(),
            violations,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Human-readable message for each violation, in order
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(Violation::user_message).collect()
    }

    /// Split into the echoed value and the violation messages.
    pub fn into_parts(self) -> (String, Vec<String>) {
        let messages = self.messages();
        (self.value, messages)
    }

    /// `Ok` with the value when no rule was broken, otherwise every violation.
    pub fn into_result(self) -> Result<String, ValidationFailure> {
        if self.violations.is_empty() {
            Ok(self.value)
        } else {
            Err(ValidationFailure {
                field_name: self.field_name,
                violations: self.violations,
            })
        }
    }
}
