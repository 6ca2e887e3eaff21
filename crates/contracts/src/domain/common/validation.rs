use std::collections::BTreeMap;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Ошибки валидации, сгруппированные по имени поля
///
/// BTreeMap — чтобы порядок обхода полей был стабильным.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

/// Тело ответа сервера при ошибке сохранения
///
/// При 422 сервер возвращает `errors` с ключами вида `"iso2"` или
/// `"languages.0"`; при прочих ошибках — только `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<ValidationErrors>,
}

impl ApiErrorBody {
    pub fn parse(body: &str) -> anyhow::Result<Self> {
        serde_json::from_str(body).context("malformed error body")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validation_body() {
        let body = r#"{"message":"Unprocessable","errors":{"iso2":["taken"],"languages.0":["bad"]}}"#;
        let parsed = ApiErrorBody::parse(body).unwrap();
        let errors = parsed.errors.unwrap();
        assert_eq!(errors["iso2"], vec!["taken".to_string()]);
        assert!(errors.contains_key("languages.0"));
    }

    #[test]
    fn test_parse_message_only_body() {
        let parsed = ApiErrorBody::parse(r#"{"message":"boom"}"#).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("boom"));
        assert!(parsed.errors.is_none());
    }
}
