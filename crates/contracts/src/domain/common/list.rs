use serde::{Deserialize, Serialize};

/// Параметры постраничной выборки списка
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: usize,
    pub page_size: usize,
    pub search: String,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 100,
            search: String::new(),
            sort_field: "name".to_string(),
            sort_ascending: true,
        }
    }
}

/// Страница списка с итогами
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T> ListResponse<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            total_pages: 0,
        }
    }
}
