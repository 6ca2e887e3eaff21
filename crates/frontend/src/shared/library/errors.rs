use contracts::domain::common::ValidationErrors;

/// Ошибка сохранения записи справочника
#[derive(Debug, Clone, PartialEq)]
pub enum SaveError {
    /// 422: ошибки по полям, раскладываются по закладкам формы
    Validation(ValidationErrors),
    /// Всё остальное: одно общее уведомление
    Other(String),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Validation(errors) => write!(f, "validation failed: {} field(s)", errors.len()),
            SaveError::Other(message) => f.write_str(message),
        }
    }
}

/// Сгруппировать ошибки валидации по верхнеуровневому имени поля
///
/// Сервер присылает ключи вложенных полей через точку ("languages.0");
/// форма знает только верхний уровень, сообщения таких ключей сливаются
/// под ним с сохранением порядка.
pub fn group_validation_errors(raw: &ValidationErrors) -> ValidationErrors {
    let mut grouped = ValidationErrors::new();
    for (key, messages) in raw {
        let top_level = key.split('.').next().unwrap_or(key).to_string();
        grouped
            .entry(top_level)
            .or_default()
            .extend(messages.iter().cloned());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_keys_group_under_top_level_field() {
        let mut raw = ValidationErrors::new();
        raw.insert("languages.0".to_string(), vec!["bad iso".to_string()]);
        raw.insert("languages.2".to_string(), vec!["missing".to_string()]);
        raw.insert("name".to_string(), vec!["required".to_string()]);

        let grouped = group_validation_errors(&raw);
        assert_eq!(grouped.len(), 2);
        assert_eq!(
            grouped["languages"],
            vec!["bad iso".to_string(), "missing".to_string()]
        );
        assert_eq!(grouped["name"], vec!["required".to_string()]);
    }

    #[test]
    fn test_flat_keys_pass_through() {
        let mut raw = ValidationErrors::new();
        raw.insert("iso2".to_string(), vec!["taken".to_string()]);

        let grouped = group_validation_errors(&raw);
        assert_eq!(grouped["iso2"], vec!["taken".to_string()]);
    }
}
