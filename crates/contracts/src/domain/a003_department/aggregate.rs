use serde::{Deserialize, Serialize};

use crate::domain::common::{ImageValue, LibraryFields, LibraryForm, LibraryRecord};

// ============================================================================
// Record
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    #[serde(flatten)]
    pub base: LibraryFields,

    /// Цвет бейджа отдела в списках, hex-строка вида "#ff9800"
    pub color: Option<String>,
    pub image_icon: Option<String>,
}

impl LibraryRecord for Department {
    fn library_fields(&self) -> &LibraryFields {
        &self.base
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentDto {
    pub id: Option<i64>,
    pub name: String,
    pub priority_id: Option<i64>,
    pub translation_id: Option<i64>,
    pub library_id: Option<i64>,
    pub color: Option<String>,
    pub image_icon: Option<ImageValue>,
}

impl From<&Department> for DepartmentDto {
    fn from(record: &Department) -> Self {
        Self {
            id: Some(record.base.id),
            name: record.base.name.clone(),
            priority_id: record.base.priority.as_ref().map(|p| p.id),
            translation_id: record.base.translation.as_ref().map(|t| t.id),
            library_id: record.base.library_id,
            color: record.color.clone(),
            image_icon: record.image_icon.clone().map(ImageValue::Existing),
        }
    }
}

impl LibraryForm for DepartmentDto {
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
