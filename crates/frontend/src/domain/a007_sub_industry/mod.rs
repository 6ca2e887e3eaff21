use contracts::enums::Bookmark;

use crate::shared::library::LibraryDescriptor;

pub mod ui;

/// Справочник подотраслей
pub static SUB_INDUSTRY_LIBRARY: LibraryDescriptor = LibraryDescriptor {
    slug: "sub-industry",
    resource: "sub-industries",
    translation_excluded_fields: &[],
    group_only_fields: &[],
    image_fields: &["image_icon"],
    error_bookmarks: &[
        ("translation_id", Bookmark::Translation),
        ("library_id", Bookmark::Similar),
    ],
};
