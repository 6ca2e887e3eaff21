use contracts::enums::Bookmark;

use crate::shared::library::LibraryDescriptor;

pub mod ui;

/// Справочник отделов
///
/// Цвет бейджа задаётся только у оригинала, перевод его не отправляет.
pub static DEPARTMENT_LIBRARY: LibraryDescriptor = LibraryDescriptor {
    slug: "department",
    resource: "departments",
    translation_excluded_fields: &["color"],
    group_only_fields: &[],
    image_fields: &["image_icon"],
    error_bookmarks: &[
        ("translation_id", Bookmark::Translation),
        ("library_id", Bookmark::Similar),
    ],
};
