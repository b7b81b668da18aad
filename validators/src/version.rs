//! Image version name validator.
//!
//! A version name is exactly three dot-separated runs of ASCII digits, for
//! example `1.0.0` or `2024.01.15`. Leading zeros are allowed and the
//! components are not range checked.

use crate::errors::Violation;
use crate::limits::VERSION_COMPONENT_COUNT;
use crate::validation::{FieldValidator, ValidationOutcome};
use once_cell::sync::Lazy;
use regex::Regex;

static VERSION_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"^[0-9]+(?:\.[0-9]+){{{}}}$", VERSION_COMPONENT_COUNT - 1);
    Regex::new(&pattern).expect("version name pattern must compile")
});

/// Validator for Shared Image Version names
#[derive(Debug, Clone)]
pub struct SharedImageVersionNameValidator {
    field_name: String,
}

impl SharedImageVersionNameValidator {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

impl FieldValidator for SharedImageVersionNameValidator {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn violations(&self, value: &str) -> Vec<Violation> {
        if value.is_empty() {
            vec![Violation::empty(&self.field_name)]
        } else if !VERSION_NAME_PATTERN.is_match(value) {
            vec![Violation::malformed_version(&self.field_name, value)]
        } else {
            Vec::new()
        }
    }
}

pub fn validate_shared_image_version_name(value: &str, field_name: &str) -> ValidationOutcome {
    SharedImageVersionNameValidator::new(field_name).check(value)
}
