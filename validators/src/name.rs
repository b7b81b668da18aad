//! Gallery and image name validators.
//!
//! Both names are 1 to 79 characters long. A gallery name may contain ASCII
//! letters, digits, `.` and `_`. An image name additionally allows `-`.

use crate::errors::Violation;
use crate::limits::{NAME_MAX_LENGTH, NAME_MIN_LENGTH};
use crate::validation::{FieldValidator, ValidationOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameCharset {
    Gallery,
    Image,
}

impl NameCharset {
    fn allows(self, character: char) -> bool {
        match character {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '_' => true,
            '-' => self == Self::Image,
            _ => false,
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Gallery => "letters, digits, '.' and '_'",
            Self::Image => "letters, digits, '.', '_' and '-'",
        }
    }
}

fn name_violations(value: &str, field_name: &str, charset: NameCharset) -> Vec<Violation> {
    let length = value.chars().count();
    if length < NAME_MIN_LENGTH {
        return vec![Violation::empty(field_name)];
    }

    let mut violations = Vec::new();

    if length > NAME_MAX_LENGTH {
        violations.push(Violation::too_long(field_name, NAME_MAX_LENGTH, length));
    }

    if let Some((position, character)) = value
        .chars()
        .enumerate()
        .find(|&(_, character)| !charset.allows(character))
    {
        violations.push(Violation::invalid_character(
            field_name,
            character,
            position,
            charset.description(),
        ));
    }

    violations
}

/// Validator for Shared Image Gallery names
#[derive(Debug, Clone)]
pub struct SharedImageGalleryNameValidator {
    field_name: String,
}

impl SharedImageGalleryNameValidator {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

impl FieldValidator for SharedImageGalleryNameValidator {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn violations(&self, value: &str) -> Vec<Violation> {
        name_violations(value, &self.field_name, NameCharset::Gallery)
    }
}

/// Validator for Shared Image (image definition) names
#[derive(Debug, Clone)]
pub struct SharedImageNameValidator {
    field_name: String,
}

impl SharedImageNameValidator {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

impl FieldValidator for SharedImageNameValidator {
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn violations(&self, value: &str) -> Vec<Violation> {
        name_violations(value, &self.field_name, NameCharset::Image)
    }
}

pub fn validate_shared_image_gallery_name(value: &str, field_name: &str) -> ValidationOutcome {
    SharedImageGalleryNameValidator::new(field_name).check(value)
}

pub fn validate_shared_image_name(value: &str, field_name: &str) -> ValidationOutcome {
    SharedImageNameValidator::new(field_name).check(value)
}
