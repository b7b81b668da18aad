use crate::name::{validate_shared_image_gallery_name, validate_shared_image_name};
use crate::validation::ValidationOutcome;
use crate::version::validate_shared_image_version_name;
use serde::Serialize;
use std::fmt;

/// The Shared Image Gallery resources whose names are validated here.
///
/// Lets schema code pick the naming rules from the resource being
/// configured instead of naming a validator function directly.
///
/// # Examples
///
/// ```no_run
/// use validators::GalleryResource;
///
/// let outcome = GalleryResource::ImageVersion.validate("1.0.0", "name");
/// assert!(outcome.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryResource {
    /// A Shared Image Gallery
    Gallery,
    /// An image definition inside a gallery
    Image,
    /// A version of an image definition
    ImageVersion,
}

impl GalleryResource {
    pub const ALL: [GalleryResource; 3] = [Self::Gallery, Self::Image, Self::ImageVersion];

    pub fn validate(self, value: &str, field_name: &str) -> ValidationOutcome {
        match self {
            Self::Gallery => validate_shared_image_gallery_name(value, field_name),
            Self::Image => validate_shared_image_name(value, field_name),
            Self::ImageVersion => validate_shared_image_version_name(value, field_name),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Gallery => "Shared Image Gallery",
            Self::Image => "Shared Image",
            Self::ImageVersion => "Shared Image Version",
        }
    }
}

impl fmt::Display for GalleryResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
