use contracts::enums::Bookmark;

/// Декларативное описание одного библиотечного справочника
///
/// Все отличия между справочниками (какие поля выпадают из payload на
/// какой закладке, к какой закладке относится ошибка валидации поля)
/// описаны здесь, а не в коде моделей.
#[derive(Debug, Clone)]
pub struct LibraryDescriptor {
    /// Короткое имя справочника, основа для ключей кэша
    pub slug: &'static str,
    /// Имя ресурса REST API, например "cities"
    pub resource: &'static str,
    /// Поля, исключаемые из payload на закладке перевода
    pub translation_excluded_fields: &'static [&'static str],
    /// Поля, живущие только на канонической записи: исключаются на любой
    /// закладке кроме группы
    pub group_only_fields: &'static [&'static str],
    /// Поля картинок: строковое значение означает неизменённый URL
    pub image_fields: &'static [&'static str],
    /// К какой закладке относится ошибка валидации поля
    pub error_bookmarks: &'static [(&'static str, Bookmark)],
}

impl LibraryDescriptor {
    /// Ключ кэша запроса переведённой/похожей библиотеки
    pub fn translation_cache_key(&self) -> String {
        format!("{}-translation", self.slug)
    }

    /// Ключ кэша списочных запросов справочника
    pub fn actions_cache_key(&self) -> String {
        format!("{}-actions", self.slug)
    }

    /// Закладка, содержащая поле; неизвестные поля относятся к группе
    pub fn bookmark_for_field(&self, field: &str) -> Bookmark {
        self.error_bookmarks
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, bookmark)| *bookmark)
            .unwrap_or(Bookmark::Group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: LibraryDescriptor = LibraryDescriptor {
        slug: "city",
        resource: "cities",
        translation_excluded_fields: &[],
        group_only_fields: &[],
        image_fields: &[],
        error_bookmarks: &[
            ("translation_id", Bookmark::Translation),
            ("library_id", Bookmark::Translation),
        ],
    };

    #[test]
    fn test_cache_keys_derive_from_slug() {
        assert_eq!(DESCRIPTOR.translation_cache_key(), "city-translation");
        assert_eq!(DESCRIPTOR.actions_cache_key(), "city-actions");
    }

    #[test]
    fn test_bookmark_for_field_defaults_to_group() {
        assert_eq!(
            DESCRIPTOR.bookmark_for_field("translation_id"),
            Bookmark::Translation
        );
        assert_eq!(DESCRIPTOR.bookmark_for_field("name"), Bookmark::Group);
    }
}
