//! # Gallery Name Validators
//!
//! Naming rules for Azure Shared Image Gallery resources. Resource schema
//! code calls these validators to reject user-supplied names before any
//! request reaches the Azure management API.
//!
//! ## Modules
//!
//! - [`name`] - Gallery and image name validators
//! - [`version`] - Image version name validator (`major.minor.patch`)
//! - [`resource`] - Dispatch by gallery resource kind
//! - [`validation`] - The [`Validator`] trait and [`ValidationOutcome`]
//! - [`errors`] - Violation taxonomy and the aggregated failure error
//! - [`limits`] - Fixed Azure naming limits
//!
//! ## Example
//!
//! ```no_run
//! use validators::{validate_shared_image_gallery_name, validate_shared_image_version_name};
//!
//! let outcome = validate_shared_image_gallery_name("my-gallery", "gallery_name");
//! assert!(!outcome.is_valid());
//! for message in outcome.messages() {
//!     eprintln!("{message}");
//! }
//!
//! assert!(validate_shared_image_version_name("1.0.0", "name").is_valid());
//! ```

pub mod errors;
pub mod limits;
pub mod name;
pub mod resource;
pub mod validation;
pub mod version;

pub use errors::{ValidationFailure, Violation, ViolationKind};
pub use name::{
    SharedImageGalleryNameValidator, SharedImageNameValidator, validate_shared_image_gallery_name,
    validate_shared_image_name,
};
pub use resource::GalleryResource;
pub use validation::{FieldValidator, ValidationOutcome, Validator};
pub use version::{SharedImageVersionNameValidator, validate_shared_image_version_name};
