use serde::Serialize;
use thiserror::Error;

/// Classification of a single broken naming rule.
///
/// Mirrors the variants of [`Violation`] without their context, so callers
/// can branch on the kind of failure without matching on every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    EmptyValue,
    TooLong,
    InvalidCharacter,
    MalformedVersionFormat,
}

/// A naming rule broken by a candidate value.
///
/// Every variant carries the label of the field being validated so the
/// rendered message can be shown to the user as-is. Violations are ordinary
/// data: the validators return them in a list and never panic on bad input.
///
/// # Examples
///
/// ```no_run
/// use validators::errors::Violation;
///
/// let violation = Violation::too_long("gallery_name", 79, 80);
/// assert_eq!(
///     violation.to_string(),
///     "gallery_name is too long (80 characters, maximum 79)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The value is the empty string
    #[error("{field_name} cannot be empty")]
    EmptyValue { field_name: String },

    /// The value has more characters than the resource allows
    #[error("{field_name} is too long ({actual_length} characters, maximum {max_length})")]
    TooLong {
        field_name: String,
        max_length: usize,
        actual_length: usize,
    },

    /// The value contains a character outside the allowed set.
    /// `position` is the zero-based character index of the first offender.
    #[error(
        "{field_name} contains invalid character {character:?} at position {position}, only {allowed} are allowed"
    )]
    InvalidCharacter {
        field_name: String,
        character: char,
        position: usize,
        allowed: &'static str,
    },

    /// The value is not a `major.minor.patch` version made of digits
    #[error(
        "{field_name} must be in major.minor.patch format with numeric components, got {value:?}"
    )]
    MalformedVersionFormat { field_name: String, value: String },
}

impl Violation {
    pub fn empty(field_name: impl Into<String>) -> Self {
        Self::EmptyValue {
            field_name: field_name.into(),
        }
    }

    pub fn too_long(field_name: impl Into<String>, max_length: usize, actual_length: usize) -> Self {
        Self::TooLong {
            field_name: field_name.into(),
            max_length,
            actual_length,
        }
    }

    pub fn invalid_character(
        field_name: impl Into<String>,
        character: char,
        position: usize,
        allowed: &'static str,
    ) -> Self {
        Self::InvalidCharacter {
            field_name: field_name.into(),
            character,
            position,
            allowed,
        }
    }

    pub fn malformed_version(field_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedVersionFormat {
            field_name: field_name.into(),
            value: value.into(),
        }
    }

    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::EmptyValue { .. } => ViolationKind::EmptyValue,
            Self::TooLong { .. } => ViolationKind::TooLong,
            Self::InvalidCharacter { .. } => ViolationKind::InvalidCharacter,
            Self::MalformedVersionFormat { .. } => ViolationKind::MalformedVersionFormat,
        }
    }

    pub fn field_name(&self) -> &str {
        match self {
            Self::EmptyValue { field_name }
            | Self::TooLong { field_name, .. }
            | Self::InvalidCharacter { field_name, .. }
            | Self::MalformedVersionFormat { field_name, .. } => field_name,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// A rejected value together with every rule it broke.
///
/// Produced by [`ValidationOutcome::into_result`](crate::ValidationOutcome::into_result)
/// for callers that want to propagate a rejection with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field_name}: {}", join_messages(.violations))]
pub struct ValidationFailure {
    pub field_name: String,
    pub violations: Vec<Violation>,
}

impl ValidationFailure {
    pub fn kinds(&self) -> Vec<ViolationKind> {
        self.violations.iter().map(Violation::kind).collect()
    }
}

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::user_message)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages_name_the_field() {
        assert_eq!(
            Violation::empty("name").to_string(),
            "name cannot be empty"
        );
        assert_eq!(
            Violation::invalid_character("name", '-', 5, "letters and digits").to_string(),
            "name contains invalid character '-' at position 5, only letters and digits are allowed"
        );
        assert_eq!(
            Violation::malformed_version("name", "1.2").to_string(),
            "name must be in major.minor.patch format with numeric components, got \"1.2\""
        );
    }

    #[test]
    fn test_violation_kind_and_field_name() {
        let violation = Violation::too_long("gallery_name", 79, 120);
        assert_eq!(violation.kind(), ViolationKind::TooLong);
        assert_eq!(violation.field_name(), "gallery_name");
        assert_eq!(violation.user_message(), violation.to_string());
    }

    #[test]
    fn test_validation_failure_joins_all_messages() {
        let failure = ValidationFailure {
            field_name: "name".to_string(),
            violations: vec![
                Violation::too_long("name", 79, 80),
                Violation::invalid_character("name", ',', 3, "letters"),
            ],
        };

        assert_eq!(
            failure.to_string(),
            "invalid name: name is too long (80 characters, maximum 79); \
             name contains invalid character ',' at position 3, only letters are allowed"
        );
        assert_eq!(
            failure.kinds(),
            vec![ViolationKind::TooLong, ViolationKind::InvalidCharacter]
        );
    }

    #[test]
    fn test_violation_serializes_with_kind_tag() {
        let json = serde_json::to_value(Violation::empty("name")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "empty_value", "field_name": "name" })
        );
    }
}
