use serde::{Deserialize, Serialize};

use crate::domain::common::{LibraryFields, LibraryForm, LibraryRecord};

// ============================================================================
// Record
// ============================================================================
//
// Язык сам по себе — библиотечная запись: у "German" могут быть переводы
// названия и похожие варианты, как у любого другого справочника.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    #[serde(flatten)]
    pub base: LibraryFields,

    /// Собственный ISO2-код языка (не путать с base.translation.iso2)
    pub iso2: Option<String>,
    pub native_name: Option<String>,
}

impl LibraryRecord for Language {
    fn library_fields(&self) -> &LibraryFields {
        &self.base
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageDto {
    pub id: Option<i64>,
    pub name: String,
    pub priority_id: Option<i64>,
    pub translation_id: Option<i64>,
    pub library_id: Option<i64>,
    pub iso2: Option<String>,
    pub native_name: Option<String>,
}

impl From<&Language> for LanguageDto {
    fn from(record: &Language) -> Self {
        Self {
            id: Some(record.base.id),
            name: record.base.name.clone(),
            priority_id: record.base.priority.as_ref().map(|p| p.id),
            translation_id: record.base.translation.as_ref().map(|t| t.id),
            library_id: record.base.library_id,
            iso2: record.iso2.clone(),
            native_name: record.native_name.clone(),
        }
    }
}

impl LibraryForm for LanguageDto {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn clear_id(&mut self) {
        self.id = None;
    }

    fn priority_id(&self) -> Option<i64> {
        self.priority_id
    }

    fn set_priority_id(&mut self, value: Option<i64>) {
        self.priority_id = value;
    }

    fn translation_id(&self) -> Option<i64> {
        self.translation_id
    }

    fn set_translation_id(&mut self, value: Option<i64>) {
        self.translation_id = value;
    }

    fn library_id(&self) -> Option<i64> {
        self.library_id
    }

    fn set_library_id(&mut self, value: Option<i64>) {
        self.library_id = value;
    }
}
