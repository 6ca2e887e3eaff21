use contracts::enums::Bookmark;

use crate::shared::library::LibraryDescriptor;

pub mod ui;

/// Справочник языков
pub static LANGUAGE_LIBRARY: LibraryDescriptor = LibraryDescriptor {
    slug: "language",
    resource: "languages",
    translation_excluded_fields: &[],
    group_only_fields: &[],
    image_fields: &[],
    error_bookmarks: &[
        ("translation_id", Bookmark::Translation),
        ("library_id", Bookmark::Similar),
    ],
};
