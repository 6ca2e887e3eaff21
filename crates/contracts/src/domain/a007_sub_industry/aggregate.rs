use serde::{Deserialize, Serialize};

use crate::domain::common::{ImageValue, LibraryFields, LibraryForm, LibraryRecord};

// ============================================================================
// Record
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubIndustry {
    #[serde(flatten)]
    pub base: LibraryFields,

    pub industry_id: Option<i64>,
    pub image_icon: Option<String>,
}

impl LibraryRecord for SubIndustry {
    fn library_fields(&self) -> &LibraryFields {
        &self.base
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubIndustryDto {
    pub id: Option<i64>,
    pub name: String,
    pub priority_id: Option<i64>,
    pub translation_id: Option<i64>,
    pub library_id: Option<i64>,
    pub industry_id: Option<i64>,
    pub image_icon: Option<ImageValue>,
}

impl From<&SubIndustry> for SubIndustryDto {
    fn from(record: &SubIndustry) -> Self {
        Self {
            id: Some(record.base.id),
            name: record.base.name.clone(),
            priority_id: record.base.priority.as_ref().map(|p| p.id),
            translation_id: record.base.translation.as_ref().map(|t| t.id),
            library_id: record.base.library_id,
            industry_id: record.industry_id,
            image_icon: record.image_icon.clone().map(ImageValue::Existing),
        }
    }
}

impl LibraryForm for SubIndustryDto {
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
