use contracts::enums::Bookmark;

use crate::shared::library::LibraryDescriptor;

pub mod ui;

/// Справочник отраслей
///
/// Список подотраслей имеет смысл только у канонической записи, поэтому
/// он исключается из payload на любой закладке кроме группы — в отличие
/// от стран и отделов, где исключения действуют только на переводе.
pub static INDUSTRY_LIBRARY: LibraryDescriptor = LibraryDescriptor {
    slug: "industry",
    resource: "industries",
    translation_excluded_fields: &[],
    group_only_fields: &["sub_industries"],
    image_fields: &["image_icon"],
    error_bookmarks: &[
        ("translation_id", Bookmark::Translation),
        ("library_id", Bookmark::Similar),
    ],
};
