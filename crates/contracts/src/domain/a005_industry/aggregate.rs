use serde::{Deserialize, Serialize};

use crate::domain::common::{ImageValue, LibraryFields, LibraryForm, LibraryRecord, LibraryRef};

// ============================================================================
// Record
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Industry {
    #[serde(flatten)]
    pub base: LibraryFields,

    /// Подотрасли привязаны только к канонической записи
    #[serde(default)]
    pub sub_industries: Vec<LibraryRef>,
    pub image_icon: Option<String>,
}

impl LibraryRecord for Industry {
    fn library_fields(&self) -> &LibraryFields {
        &self.base
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndustryDto {
    pub id: Option<i64>,
    pub name: String,
    pub priority_id: Option<i64>,
    pub translation_id: Option<i64>,
    pub library_id: Option<i64>,
    #[serde(default)]
    pub sub_industries: Vec<i64>,
    pub image_icon: Option<ImageValue>,
}

impl From<&Industry> for IndustryDto {
    fn from(record: &Industry) -> Self {
        Self {
            id: Some(record.base.id),
            name: record.base.name.clone(),
            priority_id: record.base.priority.as_ref().map(|p| p.id),
            translation_id: record.base.translation.as_ref().map(|t| t.id),
            library_id: record.base.library_id,
            sub_industries: record.sub_industries.iter().map(|s| s.id).collect(),
            image_icon: record.image_icon.clone().map(ImageValue::Existing),
        }
    }
}

impl LibraryForm for IndustryDto {
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
