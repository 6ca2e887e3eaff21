use contracts::domain::a004_language::aggregate::Language;
use contracts::domain::common::{ApiErrorBody, LibraryRef};
use serde_json::{Map, Value};

use crate::domain::a004_language::LANGUAGE_LIBRARY;
use crate::shared::api_utils::{api_url, get_json, request_raw};
use crate::shared::library::SaveError;

pub async fn fetch_by_id(id: i64) -> Result<Language, String> {
    get_json(&api_url(&format!(
        "/api/{}/{}",
        LANGUAGE_LIBRARY.resource, id
    )))
    .await
}

pub async fn fetch_library_options() -> Result<Vec<LibraryRef>, String> {
    get_json(&api_url(&format!(
        "/api/{}/library-options",
        LANGUAGE_LIBRARY.resource
    )))
    .await
}

pub async fn fetch_own_library(id: i64) -> Result<Language, String> {
    get_json(&api_url(&format!(
        "/api/{}/{}/library",
        LANGUAGE_LIBRARY.resource, id
    )))
    .await
}

pub async fn fetch_translated_library(
    library_id: i64,
    translation_id: Option<i64>,
) -> Result<Language, String> {
    let mut path = format!(
        "/api/{}/library?library_id={}",
        LANGUAGE_LIBRARY.resource, library_id
    );
    if let Some(translation_id) = translation_id {
        path += &format!("&translation_id={}", translation_id);
    }
    get_json(&api_url(&path)).await
}

pub async fn save_form(
    payload: &Map<String, Value>,
    id: Option<i64>,
) -> Result<Language, SaveError> {
    let body = serde_json::to_string(payload).map_err(|e| SaveError::Other(format!("{e}")))?;
    let (method, path) = match id {
        Some(id) => ("PUT", format!("/api/{}/{}", LANGUAGE_LIBRARY.resource, id)),
        None => ("POST", format!("/api/{}", LANGUAGE_LIBRARY.resource)),
    };

    let (status, text) = request_raw(method, &api_url(&path), Some(body))
        .await
        .map_err(SaveError::Other)?;

    if status == 422 {
        return Err(match ApiErrorBody::parse(&text).ok().and_then(|b| b.errors) {
            Some(errors) if !errors.is_empty() => SaveError::Validation(errors),
            _ => SaveError::Other("Unprocessable entity".to_string()),
        });
    }
    if !(200..300).contains(&status) {
        let message = ApiErrorBody::parse(&text)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(SaveError::Other(message));
    }

    serde_json::from_str::<Language>(&text).map_err(|e| SaveError::Other(format!("{e}")))
}
