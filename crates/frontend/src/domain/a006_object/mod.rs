use contracts::enums::Bookmark;

use crate::shared::library::LibraryDescriptor;

pub mod ui;

/// Справочник объектов
pub static OBJECT_LIBRARY: LibraryDescriptor = LibraryDescriptor {
    slug: "object",
    resource: "objects",
    translation_excluded_fields: &[],
    group_only_fields: &[],
    image_fields: &["image_icon"],
    error_bookmarks: &[
        ("translation_id", Bookmark::Translation),
        ("library_id", Bookmark::Similar),
    ],
};
