/// Входы предиката перечитывания похожей библиотеки
///
/// Предикат пересчитывается синхронно при каждом изменении любого входа;
/// результат не кэшируется между изменениями.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefetchInputs {
    pub is_edit: bool,
    pub is_visible: bool,
    pub is_similar_tab_active: bool,
    pub is_library_selected: bool,
}

/// Нужно ли (пере)читать данные переведённой/похожей библиотеки
///
/// Истина ровно в двух случаях, оба — только при открытом ящике:
/// 1. редактирование существующей записи, пока группа ещё не выбрана
///    (первичная загрузка собственной библиотеки записи);
/// 2. создание новой записи на закладке похожих после выбора группы
///    (предпросмотр клонируемого варианта).
/// Закрытый ящик сетевых запросов не порождает.
pub fn should_refetch_similar_library(inputs: &RefetchInputs) -> bool {
    if !inputs.is_visible {
        return false;
    }
    if inputs.is_edit {
        !inputs.is_library_selected
    } else {
        inputs.is_similar_tab_active && inputs.is_library_selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(is_edit: bool, is_visible: bool, similar: bool, selected: bool) -> bool {
        should_refetch_similar_library(&RefetchInputs {
            is_edit,
            is_visible,
            is_similar_tab_active: similar,
            is_library_selected: selected,
        })
    }

    #[test]
    fn test_truth_table_is_exhaustive() {
        // Полный перебор 2^4: истина только в двух строках
        for is_edit in [false, true] {
            for is_visible in [false, true] {
                for similar in [false, true] {
                    for selected in [false, true] {
                        let expected = is_visible
                            && ((is_edit && !selected) || (!is_edit && similar && selected));
                        assert_eq!(
                            gate(is_edit, is_visible, similar, selected),
                            expected,
                            "edit={} visible={} similar={} selected={}",
                            is_edit,
                            is_visible,
                            similar,
                            selected
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_edit_initial_load() {
        assert!(gate(true, true, false, false));
        assert!(gate(true, true, true, false));
        assert!(!gate(true, true, false, true));
    }

    #[test]
    fn test_create_similar_preview() {
        assert!(gate(false, true, true, true));
        assert!(!gate(false, true, true, false));
        assert!(!gate(false, true, false, true));
    }

    #[test]
    fn test_hidden_drawer_never_fetches() {
        for is_edit in [false, true] {
            for similar in [false, true] {
                for selected in [false, true] {
                    assert!(!gate(is_edit, false, similar, selected));
                }
            }
        }
    }
}
