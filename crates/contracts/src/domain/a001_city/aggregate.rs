use serde::{Deserialize, Serialize};

use crate::domain::common::{LibraryFields, LibraryForm, LibraryRecord};

// ============================================================================
// Record
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    #[serde(flatten)]
    pub base: LibraryFields,

    pub country_id: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LibraryRecord for City {
    fn library_fields(&self) -> &LibraryFields {
        &self.base
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityDto {
    pub id: Option<i64>,
    pub name: String,
    pub priority_id: Option<i64>,
    pub translation_id: Option<i64>,
    pub library_id: Option<i64>,
    pub country_id: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<&City> for CityDto {
    fn from(record: &City) -> Self {
        Self {
            id: Some(record.base.id),
            name: record.base.name.clone(),
            priority_id: record.base.priority.as_ref().map(|p| p.id),
            translation_id: record.base.translation.as_ref().map(|t| t.id),
            library_id: record.base.library_id,
            country_id: record.country_id,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

impl LibraryForm for CityDto {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{LanguageRef, PriorityRef};

    #[test]
    fn test_dto_from_record() {
        let record = City {
            base: LibraryFields {
                id: 17,
                name: "Berlin".to_string(),
                priority: Some(PriorityRef {
                    id: 1,
                    name: "Primary".to_string(),
                }),
                translation: Some(LanguageRef {
                    id: 1,
                    name: "English".to_string(),
                    iso2: "en".to_string(),
                }),
                library_id: None,
                created_at: None,
                updated_at: None,
            },
            country_id: Some(3),
            latitude: Some(52.52),
            longitude: Some(13.405),
        };

        let dto = CityDto::from(&record);
        assert_eq!(dto.id, Some(17));
        assert_eq!(dto.priority_id, Some(1));
        assert_eq!(dto.translation_id, Some(1));
        assert_eq!(dto.country_id, Some(3));
    }
}
