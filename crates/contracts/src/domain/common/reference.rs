use serde::{Deserialize, Serialize};

/// Идентификатор приоритета "primary" в справочнике приоритетов
pub const PRIMARY_PRIORITY_ID: i64 = 1;
/// Идентификатор приоритета "secondary"
pub const SECONDARY_PRIORITY_ID: i64 = 2;
/// Идентификатор канонического (английского) языка
pub const ENGLISH_TRANSLATION_ID: i64 = 1;
/// ISO2-код канонического языка
pub const ENGLISH_ISO2: &str = "en";

pub const PRIMARY_PRIORITY: &str = "primary";
pub const SECONDARY_PRIORITY: &str = "secondary";

/// Ссылка на приоритет записи
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRef {
    pub id: i64,
    pub name: String,
}

/// Ссылка на язык перевода
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRef {
    pub id: i64,
    pub name: String,
    pub iso2: String,
}

/// Ссылка на каноническую (групповую) запись библиотеки
///
/// Используется в выпадающих списках выбора группы, к которой
/// прикрепляется перевод или похожий вариант.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryRef {
    pub id: i64,
    pub name: String,
}
