use std::collections::HashSet;

use contracts::domain::a004_language::aggregate::Language;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct LanguageListState {
    pub items: Vec<Language>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub selected_ids: HashSet<i64>,
    pub is_loaded: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for LanguageListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
            selected_ids: HashSet::new(),
            is_loaded: false,
            page: 0,
            page_size: 100,
            total_count: 0,
            total_pages: 0,
        }
    }
}

pub fn create_state() -> RwSignal<LanguageListState> {
    RwSignal::new(LanguageListState::default())
}
