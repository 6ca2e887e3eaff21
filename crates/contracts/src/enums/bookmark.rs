use serde::{Deserialize, Serialize};

/// Закладки формы библиотечной сущности
///
/// Каждая запись каталога редактируется в одной из трёх взаимоисключающих
/// закладок: канонная группа, перевод или похожий вариант.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bookmark {
    Group,
    Translation,
    Similar,
}

impl Bookmark {
    /// Получить код закладки
    pub fn code(&self) -> &'static str {
        match self {
            Bookmark::Group => "group",
            Bookmark::Translation => "translation",
            Bookmark::Similar => "similar",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Bookmark::Group => "Группа",
            Bookmark::Translation => "Перевод",
            Bookmark::Similar => "Похожие",
        }
    }

    /// Получить все закладки
    pub fn all() -> Vec<Bookmark> {
        vec![Bookmark::Group, Bookmark::Translation, Bookmark::Similar]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "group" => Some(Bookmark::Group),
            "translation" => Some(Bookmark::Translation),
            "similar" => Some(Bookmark::Similar),
            _ => None,
        }
    }
}

impl std::fmt::Display for Bookmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for bookmark in Bookmark::all() {
            assert_eq!(Bookmark::from_code(bookmark.code()), Some(bookmark));
        }
        assert_eq!(Bookmark::from_code("unknown"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_code() {
        let json = serde_json::to_string(&Bookmark::Translation).unwrap();
        assert_eq!(json, "\"translation\"");
        let parsed: Bookmark = serde_json::from_str("\"similar\"").unwrap();
        assert_eq!(parsed, Bookmark::Similar);
    }
}
