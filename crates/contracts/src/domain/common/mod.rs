//! Common types and traits for all library entities

pub mod image_value;
pub mod library_fields;
pub mod library_form;
pub mod list;
pub mod reference;
pub mod validation;

// Re-exports
pub use image_value::ImageValue;
pub use library_fields::{LibraryFields, LibraryRecord};
pub use library_form::LibraryForm;
pub use list::{ListQuery, ListResponse};
pub use reference::{
    LanguageRef, LibraryRef, PriorityRef, ENGLISH_ISO2, ENGLISH_TRANSLATION_ID, PRIMARY_PRIORITY,
    PRIMARY_PRIORITY_ID, SECONDARY_PRIORITY, SECONDARY_PRIORITY_ID,
};
pub use validation::{ApiErrorBody, ValidationErrors};
