use serde::{Deserialize, Serialize};

use crate::domain::common::{ImageValue, LibraryFields, LibraryForm, LibraryRecord};

// ============================================================================
// Record
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    #[serde(flatten)]
    pub base: LibraryFields,

    pub iso2: Option<String>,
    pub iso3: Option<String>,
    pub image_icon: Option<String>,
}

impl LibraryRecord for Country {
    fn library_fields(&self) -> &LibraryFields {
        &self.base
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryDto {
    pub id: Option<i64>,
    pub name: String,
    pub priority_id: Option<i64>,
    pub translation_id: Option<i64>,
    pub library_id: Option<i64>,
    pub iso2: Option<String>,
    pub iso3: Option<String>,
    pub image_icon: Option<ImageValue>,
}

impl From<&Country> for CountryDto {
    fn from(record: &Country) -> Self {
        Self {
            id: Some(record.base.id),
            name: record.base.name.clone(),
            priority_id: record.base.priority.as_ref().map(|p| p.id),
            translation_id: record.base.translation.as_ref().map(|t| t.id),
            library_id: record.base.library_id,
            iso2: record.iso2.clone(),
            iso3: record.iso3.clone(),
            image_icon: record.image_icon.clone().map(ImageValue::Existing),
        }
    }
}

impl LibraryForm for CountryDto {
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
