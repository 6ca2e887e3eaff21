use contracts::domain::common::{
    LibraryForm, ValidationErrors, ENGLISH_TRANSLATION_ID, SECONDARY_PRIORITY_ID,
};
use contracts::enums::Bookmark;
use leptos::prelude::*;
use serde_json::{Map, Value};

use super::descriptor::LibraryDescriptor;
use super::refetch::RefetchInputs;
use super::{bookmarks, errors, refetch, submission};
use crate::shared::state::QueryCacheService;

/// Ошибка валидации, привязанная к полю и закладке формы
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub bookmark: Bookmark,
    pub messages: Vec<String>,
}

/// Общая модель ящика библиотечного справочника
///
/// Одна на справочник; конкретные view model оборачивают её, добавляя
/// загрузку/сохранение через своё API. Все решения (закладки, обрезка
/// payload, предикат перечитывания) выводятся из текущего снимка формы
/// при каждом обращении.
#[derive(Clone)]
pub struct LibraryDetailsVm<F>
where
    F: LibraryForm + Send + Sync + 'static,
{
    pub form: RwSignal<F>,
    pub visible: RwSignal<bool>,
    pub active_bookmark: RwSignal<Bookmark>,
    pub disabled_bookmarks: RwSignal<[Bookmark; 2]>,
    pub errored_bookmark: RwSignal<Option<Bookmark>>,
    pub field_errors: RwSignal<Vec<FieldError>>,
    pub error: RwSignal<Option<String>>,
    pub descriptor: &'static LibraryDescriptor,
}

impl<F> LibraryDetailsVm<F>
where
    F: LibraryForm + Send + Sync + 'static,
{
    pub fn new(descriptor: &'static LibraryDescriptor) -> Self {
        Self {
            form: RwSignal::new(F::default()),
            visible: RwSignal::new(false),
            active_bookmark: RwSignal::new(Bookmark::Group),
            disabled_bookmarks: RwSignal::new(bookmarks::resolve_disabled_bookmarks(
                Bookmark::Group,
            )),
            errored_bookmark: RwSignal::new(None),
            field_errors: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            descriptor,
        }
    }

    pub fn open(&self) {
        self.visible.set(true);
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id().is_some())
    }

    /// Активная и неактивные закладки меняются одним логическим шагом
    fn activate(&self, bookmark: Bookmark) {
        self.active_bookmark.set(bookmark);
        self.disabled_bookmarks
            .set(bookmarks::resolve_disabled_bookmarks(bookmark));
    }

    /// Запись пришла с сервера: выбрать закладку по её приоритету и языку
    pub fn on_record_loaded(&self, priority_name: &str, translation_iso2: &str) -> Bookmark {
        let active = bookmarks::resolve_active_bookmark(priority_name, translation_iso2);
        self.activate(active);
        self.errored_bookmark.set(None);
        self.field_errors.set(Vec::new());
        active
    }

    /// Переключение закладки пользователем
    ///
    /// В режиме создания каждая закладка — отдельное намерение (новая
    /// группа, новый перевод, новый похожий вариант), поэтому вход на
    /// закладку сбрасывает чужие значения. В режиме редактирования поля
    /// не трогаются.
    pub fn switch_bookmark(&self, next: Bookmark, cache: &QueryCacheService) {
        self.activate(next);
        if self.is_edit_mode() {
            return;
        }
        match next {
            Bookmark::Group => self.form.set(F::default()),
            Bookmark::Translation => self.form.update(|f| f.set_translation_id(None)),
            Bookmark::Similar => {
                cache.remove(&self.descriptor.translation_cache_key());
                self.form.update(|f| {
                    f.set_priority_id(Some(SECONDARY_PRIORITY_ID));
                    f.set_translation_id(Some(ENGLISH_TRANSLATION_ID));
                });
            }
        }
    }

    /// Снять текущие входы предиката перечитывания
    pub fn refetch_inputs(&self) -> RefetchInputs {
        RefetchInputs {
            is_edit: self.is_edit_mode(),
            is_visible: self.visible.get(),
            is_similar_tab_active: self.active_bookmark.get() == Bookmark::Similar,
            is_library_selected: self.form.with(|f| f.library_id().is_some()),
        }
    }

    pub fn should_refetch_similar_library(&self) -> bool {
        refetch::should_refetch_similar_library(&self.refetch_inputs())
    }

    pub fn build_submission(&self) -> Map<String, Value> {
        let active = self.active_bookmark.get();
        self.form
            .with(|f| submission::build_submission(f, active, self.descriptor))
    }

    /// Разложить ошибки 422 по полям и активировать закладку с ошибкой
    ///
    /// Возвращает список для рассылки уведомлений: по одному на поле.
    pub fn apply_validation_errors(&self, raw: &ValidationErrors) -> Vec<FieldError> {
        let grouped = errors::group_validation_errors(raw);
        let field_errors: Vec<FieldError> = grouped
            .into_iter()
            .map(|(field, messages)| FieldError {
                bookmark: self.descriptor.bookmark_for_field(&field),
                field,
                messages,
            })
            .collect();

        if let Some(first) = field_errors.first() {
            // без сбросов режима создания: введённые значения сохраняются
            self.activate(first.bookmark);
            self.errored_bookmark.set(Some(first.bookmark));
        }
        self.field_errors.set(field_errors.clone());
        field_errors
    }

    /// Вернуть форму к состоянию входа: пустая группа
    pub fn reset(&self) {
        self.form.set(F::default());
        self.activate(Bookmark::Group);
        self.errored_bookmark.set(None);
        self.field_errors.set(Vec::new());
        self.error.set(None);
    }

    /// Закрытие ящика: состояние сбрасывается, кэш запросов чистится,
    /// списочные запросы справочника помечаются устаревшими
    pub fn hide(&self, cache: &QueryCacheService) {
        self.visible.set(false);
        self.reset();
        cache.remove(&self.descriptor.translation_cache_key());
        cache.invalidate(&self.descriptor.actions_cache_key());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_city::CITY_LIBRARY;
    use contracts::domain::a001_city::aggregate::CityDto;

    fn vm() -> LibraryDetailsVm<CityDto> {
        LibraryDetailsVm::new(&CITY_LIBRARY)
    }

    #[test]
    fn test_record_loaded_is_deterministic() {
        let vm = vm();
        let first = vm.on_record_loaded("Secondary", "EN");
        let first_disabled = vm.disabled_bookmarks.get();
        let second = vm.on_record_loaded("Secondary", "EN");
        assert_eq!(first, second);
        assert_eq!(first, Bookmark::Similar);
        assert_eq!(vm.disabled_bookmarks.get(), first_disabled);
        assert_eq!(
            vm.disabled_bookmarks.get(),
            [Bookmark::Group, Bookmark::Translation]
        );
    }

    #[test]
    fn test_switch_to_similar_in_create_mode_forces_defaults() {
        let vm = vm();
        let cache = QueryCacheService::new();
        vm.open();
        vm.form.update(|f| {
            f.priority_id = Some(7);
            f.translation_id = Some(9);
        });

        vm.switch_bookmark(Bookmark::Similar, &cache);

        let form = vm.form.get();
        assert_eq!(form.priority_id, Some(SECONDARY_PRIORITY_ID));
        assert_eq!(form.translation_id, Some(ENGLISH_TRANSLATION_ID));
    }

    #[test]
    fn test_switch_to_similar_drops_cached_translation_query() {
        let vm = vm();
        let cache = QueryCacheService::new();
        cache.set(&CITY_LIBRARY.translation_cache_key(), serde_json::json!(1));

        vm.switch_bookmark(Bookmark::Similar, &cache);
        assert_eq!(cache.get(&CITY_LIBRARY.translation_cache_key()), None);
    }

    #[test]
    fn test_switch_to_group_clears_whole_form_in_create_mode() {
        let vm = vm();
        let cache = QueryCacheService::new();
        vm.form.update(|f| {
            f.name = "Paris".to_string();
            f.library_id = Some(4);
        });

        vm.switch_bookmark(Bookmark::Group, &cache);
        let form = vm.form.get();
        assert_eq!(form.name, "");
        assert_eq!(form.library_id, None);
    }

    #[test]
    fn test_switch_in_edit_mode_keeps_fields() {
        let vm = vm();
        let cache = QueryCacheService::new();
        vm.form.update(|f| {
            f.id = Some(12);
            f.name = "Paris".to_string();
            f.translation_id = Some(3);
        });

        vm.switch_bookmark(Bookmark::Translation, &cache);
        let form = vm.form.get();
        assert_eq!(form.name, "Paris");
        assert_eq!(form.translation_id, Some(3));
        assert_eq!(vm.active_bookmark.get(), Bookmark::Translation);
    }

    #[test]
    fn test_refetch_inputs_follow_form_state() {
        let vm = vm();
        assert!(!vm.should_refetch_similar_library());

        vm.open();
        vm.form.update(|f| f.id = Some(3));
        // редактирование, группа ещё не выбрана
        assert!(vm.should_refetch_similar_library());

        vm.form.update(|f| f.library_id = Some(8));
        assert!(!vm.should_refetch_similar_library());
    }

    #[test]
    fn test_validation_errors_activate_offending_bookmark() {
        let vm = vm();
        let mut raw = ValidationErrors::new();
        raw.insert("translation_id".to_string(), vec!["required".to_string()]);

        let errors = vm.apply_validation_errors(&raw);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].bookmark, Bookmark::Translation);
        assert_eq!(vm.active_bookmark.get(), Bookmark::Translation);
        assert_eq!(vm.errored_bookmark.get(), Some(Bookmark::Translation));
    }

    #[test]
    fn test_hide_resets_to_group_entry_state() {
        let vm = vm();
        let cache = QueryCacheService::new();
        vm.open();
        vm.form.update(|f| f.name = "Lyon".to_string());
        vm.on_record_loaded("primary", "fr");

        vm.hide(&cache);
        assert!(!vm.visible.get());
        assert_eq!(vm.active_bookmark.get(), Bookmark::Group);
        assert_eq!(vm.form.get().name, "");
        assert!(cache.is_stale(&CITY_LIBRARY.actions_cache_key()));
    }
}
