use serde_json::{json, Value};

use super::SearchQuery;

/// Exact lookup of one city by its geonames id.
#[derive(Debug, Clone, Copy)]
pub struct CityByIdQuery {
    id: u64,
}

impl CityByIdQuery {
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

impl SearchQuery for CityByIdQuery {
    fn as_search_body(&self) -> Value {
        json!({
            "size": 1,
            "query": { "term": { "id": self.id } }
        })
    }
}
