use serde::{Deserialize, Serialize};

use super::{LanguageRef, PriorityRef};

/// Базовые поля, общие для всех записей библиотечных справочников
///
/// `library_id` заполнен только у переводов и похожих вариантов и указывает
/// на каноническую (групповую) запись, к которой они прикреплены.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryFields {
    pub id: i64,
    pub name: String,
    pub priority: Option<PriorityRef>,
    pub translation: Option<LanguageRef>,
    pub library_id: Option<i64>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl LibraryFields {
    /// Создать базовые поля новой записи (до сохранения id = 0)
    pub fn new(id: i64, name: String) -> Self {
        Self {
            id,
            name,
            priority: None,
            translation: None,
            library_id: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Общий доступ к базовым полям библиотечной записи
///
/// Отсутствующие ссылки читаются как пустые строки: решение о закладке
/// принимает резолвер, у которого для любой комбинации есть ветка.
pub trait LibraryRecord {
    fn library_fields(&self) -> &LibraryFields;

    fn record_id(&self) -> i64 {
        self.library_fields().id
    }

    fn record_name(&self) -> &str {
        &self.library_fields().name
    }

    fn priority_name(&self) -> &str {
        self.library_fields()
            .priority
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("")
    }

    fn translation_iso2(&self) -> &str {
        self.library_fields()
            .translation
            .as_ref()
            .map(|t| t.iso2.as_str())
            .unwrap_or("")
    }

    fn library_id(&self) -> Option<i64> {
        self.library_fields().library_id
    }
}
