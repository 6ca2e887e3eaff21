use contracts::domain::common::{ENGLISH_ISO2, PRIMARY_PRIORITY, SECONDARY_PRIORITY};
use contracts::enums::Bookmark;

/// Выбрать активную закладку по приоритету и языку записи
///
/// primary + en — канонная группа, secondary + en — похожий вариант,
/// всё остальное (включая нераспознанный приоритет) — перевод.
/// Сравнение без учёта регистра, функция тотальна.
pub fn resolve_active_bookmark(priority_name: &str, translation_iso2: &str) -> Bookmark {
    let priority = priority_name.trim().to_lowercase();
    let iso2 = translation_iso2.trim().to_lowercase();

    if iso2 != ENGLISH_ISO2 {
        return Bookmark::Translation;
    }
    match priority.as_str() {
        p if p == PRIMARY_PRIORITY => Bookmark::Group,
        p if p == SECONDARY_PRIORITY => Bookmark::Similar,
        _ => Bookmark::Translation,
    }
}

/// Неактивные закладки — всегда точное дополнение активной
pub fn resolve_disabled_bookmarks(active: Bookmark) -> [Bookmark; 2] {
    match active {
        Bookmark::Group => [Bookmark::Similar, Bookmark::Translation],
        Bookmark::Translation => [Bookmark::Group, Bookmark::Similar],
        Bookmark::Similar => [Bookmark::Group, Bookmark::Translation],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_english_is_group() {
        assert_eq!(resolve_active_bookmark("Primary", "EN"), Bookmark::Group);
        assert_eq!(resolve_active_bookmark("primary", "en"), Bookmark::Group);
        assert_eq!(resolve_active_bookmark("PRIMARY", "en"), Bookmark::Group);
    }

    #[test]
    fn test_secondary_english_is_similar() {
        assert_eq!(resolve_active_bookmark("secondary", "en"), Bookmark::Similar);
        assert_eq!(resolve_active_bookmark("Secondary", "En"), Bookmark::Similar);
    }

    #[test]
    fn test_non_english_is_translation_for_any_priority() {
        assert_eq!(
            resolve_active_bookmark("primary", "fr"),
            Bookmark::Translation
        );
        assert_eq!(
            resolve_active_bookmark("secondary", "de"),
            Bookmark::Translation
        );
        assert_eq!(
            resolve_active_bookmark("tertiary", "de"),
            Bookmark::Translation
        );
    }

    #[test]
    fn test_unrecognized_inputs_fall_back_to_translation() {
        assert_eq!(resolve_active_bookmark("tertiary", "en"), Bookmark::Translation);
        assert_eq!(resolve_active_bookmark("", ""), Bookmark::Translation);
        assert_eq!(resolve_active_bookmark("", "en"), Bookmark::Translation);
    }

    #[test]
    fn test_disabled_set_is_exact_complement() {
        for active in Bookmark::all() {
            let disabled = resolve_disabled_bookmarks(active);
            assert!(!disabled.contains(&active));

            let mut all: Vec<Bookmark> = disabled.to_vec();
            all.push(active);
            all.sort_by_key(|b| b.code());
            let mut expected = Bookmark::all();
            expected.sort_by_key(|b| b.code());
            assert_eq!(all, expected);
        }
    }
}
