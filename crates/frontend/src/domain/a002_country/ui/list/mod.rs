pub mod state;

use contracts::domain::a002_country::aggregate::Country;
use contracts::domain::common::{ListQuery, ListResponse};
use gloo_net::http::Request;
use leptos::prelude::*;

use self::state::CountryListState;
use crate::domain::a002_country::COUNTRY_LIBRARY;
use crate::shared::api_utils::api_url;
use crate::shared::state::QueryCacheService;

async fn fetch_page(query: &ListQuery) -> Result<ListResponse<Country>, String> {
    let mut params = format!(
        "page={}&page_size={}&sort_field={}&sort_ascending={}",
        query.page, query.page_size, query.sort_field, query.sort_ascending
    );
    if !query.search.is_empty() {
        params += &format!("&search={}", urlencoding::encode(&query.search));
    }
    let url = api_url(&format!("/api/{}?{}", COUNTRY_LIBRARY.resource, params));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response
        .json::<ListResponse<Country>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub fn load_page(state: RwSignal<CountryListState>, cache: QueryCacheService, force: bool) {
    let key = COUNTRY_LIBRARY.actions_cache_key();
    if !force && !cache.is_stale(&key) {
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        let query = state.with_untracked(|s| ListQuery {
            page: s.page,
            page_size: s.page_size,
            search: s.search_query.clone(),
            sort_field: s.sort_field.clone(),
            sort_ascending: s.sort_ascending,
        });
        match fetch_page(&query).await {
            Ok(response) => {
                state.update(|s| {
                    s.items = response.items;
                    s.total_count = response.total_count;
                    s.total_pages = response.total_pages;
                    s.is_loaded = true;
                });
                cache.set(&key, serde_json::json!({ "page": query.page }));
            }
            Err(e) => log::error!("failed to load countries: {}", e),
        }
    });
}
