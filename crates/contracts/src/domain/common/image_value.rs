use serde::{Deserialize, Serialize};

/// Значение поля картинки/иконки в форме
///
/// Сервер отдаёт URL строкой; при выборе нового файла форма держит base64
/// payload. Сериализация untagged: неизменённая картинка остаётся обычной
/// JSON-строкой.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageValue {
    /// URL картинки, уже сохранённой на сервере
    Existing(String),
    /// Новый файл, выбранный пользователем
    Upload {
        file_name: String,
        content_type: String,
        data: String,
    },
}

impl ImageValue {
    pub fn is_upload(&self) -> bool {
        matches!(self, ImageValue::Upload { .. })
    }

    /// URL существующей картинки, если значение не менялось
    pub fn existing_url(&self) -> Option<&str> {
        match self {
            ImageValue::Existing(url) => Some(url),
            ImageValue::Upload { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_serializes_to_plain_string() {
        let value = ImageValue::Existing("https://cdn.example.com/icons/7.png".to_string());
        let json = serde_json::to_value(&value).unwrap();
        assert!(json.is_string());
    }

    #[test]
    fn test_upload_serializes_to_object() {
        let value = ImageValue::Upload {
            file_name: "flag.png".to_string(),
            content_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
        };
        let json = serde_json::to_value(&value).unwrap();
        assert!(json.is_object());
    }
}
