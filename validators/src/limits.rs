/// Hard limits Azure applies to Shared Image Gallery resource names
/// Minimum length of a gallery or image name
pub const NAME_MIN_LENGTH: usize = 1;

/// Maximum length of a gallery or image name
pub const NAME_MAX_LENGTH: usize = 79;

/// Number of dot-separated numeric components in an image version name
pub const VERSION_COMPONENT_COUNT: usize = 3;
