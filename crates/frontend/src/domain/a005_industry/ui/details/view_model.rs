use std::rc::Rc;

use contracts::domain::a005_industry::aggregate::{Industry, IndustryDto};
use contracts::domain::common::{LibraryRecord, LibraryRef};
use contracts::enums::Bookmark;
use leptos::prelude::*;

use super::model;
use crate::domain::a005_industry::INDUSTRY_LIBRARY;
use crate::shared::library::{LibraryDetailsVm, SaveError};
use crate::shared::notifications::NotificationService;
use crate::shared::state::QueryCacheService;

/// ViewModel for Industry details form
#[derive(Clone)]
pub struct IndustryDetailsViewModel {
    pub vm: LibraryDetailsVm<IndustryDto>,
    pub cache: QueryCacheService,
    pub notifications: NotificationService,
    pub library_options: RwSignal<Vec<LibraryRef>>,
    /// Канонические подотрасли для мультивыбора на закладке группы
    pub sub_industry_options: RwSignal<Vec<LibraryRef>>,
    pub similar_library: RwSignal<Option<Industry>>,
}

impl IndustryDetailsViewModel {
    pub fn new(cache: QueryCacheService, notifications: NotificationService) -> Self {
        Self {
            vm: LibraryDetailsVm::new(&INDUSTRY_LIBRARY),
            cache,
            notifications,
            library_options: RwSignal::new(Vec::new()),
            sub_industry_options: RwSignal::new(Vec::new()),
            similar_library: RwSignal::new(None),
        }
    }

    pub fn open(&self) {
        self.vm.open();
    }

    pub fn is_edit_mode(&self) -> bool {
        self.vm.is_edit_mode()
    }

    fn validate_form(dto: &IndustryDto) -> Result<(), &'static str> {
        if dto.name.trim().is_empty() {
            return Err("Название обязательно для заполнения");
        }
        Ok(())
    }

    pub fn load_if_needed(&self, id: Option<i64>, duplicate: bool) {
        let Some(existing_id) = id else {
            return;
        };
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(existing_id).await {
                Ok(record) => {
                    let mut dto = IndustryDto::from(&record);
                    if duplicate {
                        dto.id = None;
                    }
                    this.vm.form.set(dto);
                    this.vm
                        .on_record_loaded(record.priority_name(), record.translation_iso2());
                    this.reload_similar_library();
                }
                Err(e) => this.vm.error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    pub fn load_library_options(&self) {
        let options = self.library_options;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_library_options().await {
                Ok(items) => options.set(items),
                Err(e) => log::error!("failed to load industry library options: {}", e),
            }
        });
    }

    pub fn load_sub_industry_options(&self) {
        let options = self.sub_industry_options;
        wasm_bindgen_futures::spawn_local(async move {
            match crate::domain::a007_sub_industry::ui::details::model::fetch_library_options()
                .await
            {
                Ok(items) => options.set(items),
                Err(e) => log::error!("failed to load sub-industry options: {}", e),
            }
        });
    }

    pub fn switch_bookmark(&self, next: Bookmark) {
        self.vm.switch_bookmark(next, &self.cache);
        if next == Bookmark::Similar {
            self.similar_library.set(None);
        }
        self.reload_similar_library();
    }

    pub fn set_library(&self, library_id: Option<i64>) {
        self.vm.form.update(|f| f.library_id = library_id);
        self.reload_similar_library();
    }

    pub fn set_translation(&self, translation_id: Option<i64>) {
        self.vm.form.update(|f| f.translation_id = translation_id);
        self.reload_similar_library();
    }

    pub fn reload_similar_library(&self) {
        if !self.vm.should_refetch_similar_library() {
            return;
        }
        let this = self.clone();
        let requested = self
            .vm
            .form
            .with(|f| (f.id, f.library_id, f.translation_id));
        wasm_bindgen_futures::spawn_local(async move {
            let (id, library_id, translation_id) = requested;
            let result = match (id, library_id) {
                (Some(id), None) => model::fetch_own_library(id).await,
                (None, Some(library_id)) => {
                    model::fetch_translated_library(library_id, translation_id).await
                }
                _ => return,
            };
            match result {
                Ok(library) => {
                    let current = this
                        .vm
                        .form
                        .with(|f| (f.id, f.library_id, f.translation_id));
                    if current != requested {
                        return;
                    }
                    this.cache.set(
                        &INDUSTRY_LIBRARY.translation_cache_key(),
                        serde_json::to_value(&library).unwrap_or(serde_json::Value::Null),
                    );
                    this.similar_library.set(Some(library));
                }
                Err(e) => log::error!("failed to load industry library data: {}", e),
            }
        });
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.vm.form.get();
        if let Err(msg) = Self::validate_form(&current) {
            self.vm.error.set(Some(msg.to_string()));
            return;
        }

        let payload = self.vm.build_submission();
        let this = self.clone();
        let on_saved_cb = on_saved.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&payload, current.id).await {
                Ok(saved) => {
                    this.cache.invalidate(&INDUSTRY_LIBRARY.actions_cache_key());
                    this.notifications
                        .success(format!("Отрасль «{}» сохранена", saved.base.name));
                    this.vm.error.set(None);
                    (on_saved_cb)(());
                }
                Err(SaveError::Validation(errors)) => {
                    for field_error in this.vm.apply_validation_errors(&errors) {
                        this.notifications.error(format!(
                            "{}: {}",
                            field_error.field,
                            field_error.messages.join(", ")
                        ));
                    }
                }
                Err(SaveError::Other(message)) => {
                    this.notifications
                        .error(format!("Ошибка сохранения: {}", message));
                }
            }
        });
    }

    pub fn hide(&self) {
        self.vm.hide(&self.cache);
        self.similar_library.set(None);
    }
}
