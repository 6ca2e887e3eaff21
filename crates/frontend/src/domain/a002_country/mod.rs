use contracts::enums::Bookmark;

use crate::shared::library::LibraryDescriptor;

pub mod ui;

/// Справочник стран
///
/// ISO-коды принадлежат оригиналу: на закладке перевода они не
/// отправляются, переведённая запись наследует их от группы.
pub static COUNTRY_LIBRARY: LibraryDescriptor = LibraryDescriptor {
    slug: "country",
    resource: "countries",
    translation_excluded_fields: &["iso2", "iso3"],
    group_only_fields: &[],
    image_fields: &["image_icon"],
    error_bookmarks: &[
        ("translation_id", Bookmark::Translation),
        ("library_id", Bookmark::Similar),
    ],
};
