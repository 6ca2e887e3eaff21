use contracts::enums::Bookmark;
use serde::Serialize;
use serde_json::{Map, Value};

use super::descriptor::LibraryDescriptor;

/// Собрать payload сохранения с учётом активной закладки
///
/// Правила обрезки:
/// - группа: `library_id` убирается, у канонической записи нет родителя;
/// - перевод: убираются поля оригинала из дескриптора (iso-коды, цвет);
/// - любая закладка кроме группы: убираются поля, живущие только на
///   канонической записи (подотрасли);
/// - картинка, оставшаяся строкой (URL с сервера), не отправляется заново.
///
/// Функция чистая: сеть не трогает, форму не меняет.
pub fn build_submission<F: Serialize>(
    form: &F,
    active: Bookmark,
    descriptor: &LibraryDescriptor,
) -> Map<String, Value> {
    let mut payload = match serde_json::to_value(form) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };

    match active {
        Bookmark::Group => {
            payload.remove("library_id");
        }
        Bookmark::Translation => {
            for field in descriptor.translation_excluded_fields {
                payload.remove(*field);
            }
        }
        Bookmark::Similar => {}
    }

    if active != Bookmark::Group {
        for field in descriptor.group_only_fields {
            payload.remove(*field);
        }
    }

    for field in descriptor.image_fields {
        if payload.get(*field).map(Value::is_string).unwrap_or(false) {
            payload.remove(*field);
        }
    }

    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_country::aggregate::CountryDto;
    use contracts::domain::a003_department::aggregate::DepartmentDto;
    use contracts::domain::a005_industry::aggregate::IndustryDto;
    use contracts::domain::common::ImageValue;
    use crate::domain::{a002_country, a003_department, a005_industry};

    fn country_form() -> CountryDto {
        CountryDto {
            id: None,
            name: "United States".to_string(),
            priority_id: Some(1),
            translation_id: Some(1),
            library_id: Some(5),
            iso2: Some("US".to_string()),
            iso3: Some("USA".to_string()),
            image_icon: None,
        }
    }

    #[test]
    fn test_group_submission_never_contains_library_id() {
        let payload = build_submission(
            &country_form(),
            Bookmark::Group,
            &a002_country::COUNTRY_LIBRARY,
        );
        assert!(!payload.contains_key("library_id"));
        assert_eq!(payload["iso2"], "US");
    }

    #[test]
    fn test_country_translation_excludes_iso_codes() {
        let payload = build_submission(
            &country_form(),
            Bookmark::Translation,
            &a002_country::COUNTRY_LIBRARY,
        );
        assert!(!payload.contains_key("iso2"));
        assert!(!payload.contains_key("iso3"));
        // поля вне списка исключений проходят без изменений
        assert_eq!(payload["name"], "United States");
        assert_eq!(payload["library_id"], 5);
    }

    #[test]
    fn test_department_translation_excludes_color() {
        let form = DepartmentDto {
            id: None,
            name: "Sales".to_string(),
            priority_id: Some(1),
            translation_id: Some(2),
            library_id: Some(9),
            color: Some("#ff9800".to_string()),
            image_icon: None,
        };
        let payload = build_submission(
            &form,
            Bookmark::Translation,
            &a003_department::DEPARTMENT_LIBRARY,
        );
        assert!(!payload.contains_key("color"));
        assert_eq!(payload["name"], "Sales");
    }

    #[test]
    fn test_industry_sub_industries_live_only_on_group() {
        let form = IndustryDto {
            id: None,
            name: "Construction".to_string(),
            priority_id: Some(2),
            translation_id: Some(1),
            library_id: Some(3),
            sub_industries: vec![10, 11],
            image_icon: None,
        };

        let group = build_submission(&form, Bookmark::Group, &a005_industry::INDUSTRY_LIBRARY);
        assert!(group.contains_key("sub_industries"));

        let translation =
            build_submission(&form, Bookmark::Translation, &a005_industry::INDUSTRY_LIBRARY);
        assert!(!translation.contains_key("sub_industries"));

        let similar = build_submission(&form, Bookmark::Similar, &a005_industry::INDUSTRY_LIBRARY);
        assert!(!similar.contains_key("sub_industries"));
    }

    #[test]
    fn test_unchanged_image_url_is_dropped() {
        let mut form = country_form();
        form.image_icon = Some(ImageValue::Existing("https://cdn/us.png".to_string()));
        let payload = build_submission(&form, Bookmark::Group, &a002_country::COUNTRY_LIBRARY);
        assert!(!payload.contains_key("image_icon"));
    }

    #[test]
    fn test_new_image_upload_is_retained() {
        let mut form = country_form();
        form.image_icon = Some(ImageValue::Upload {
            file_name: "us.png".to_string(),
            content_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
        });
        let payload = build_submission(&form, Bookmark::Group, &a002_country::COUNTRY_LIBRARY);
        assert!(payload["image_icon"].is_object());
    }
}
