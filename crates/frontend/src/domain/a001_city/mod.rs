use contracts::enums::Bookmark;

use crate::shared::library::LibraryDescriptor;

pub mod ui;

/// Справочник городов
///
/// Дополнительных исключений на закладке перевода нет: координаты и страна
/// уходят на сервер для всех вариантов записи.
pub static CITY_LIBRARY: LibraryDescriptor = LibraryDescriptor {
    slug: "city",
    resource: "cities",
    translation_excluded_fields: &[],
    group_only_fields: &[],
    image_fields: &[],
    error_bookmarks: &[
        ("translation_id", Bookmark::Translation),
        ("library_id", Bookmark::Similar),
    ],
};
