use async_trait::async_trait;

use crate::domain::{
    models::{CandidateBatch, CityId, SearchOrder},
    CityLookupError,
};

/// A name search as handed to the search backend.
#[derive(Debug, Clone, PartialEq)]
pub struct NameSearch {
    pub name: String,
    pub country_codes: Vec<String>,
    pub order: SearchOrder,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CitySearch {
    ByName(NameSearch),
    ById(CityId),
}

#[async_trait]
pub trait CitySearchBackend: Send + Sync + 'static {
    /// Run the search. An empty batch means no match.
    async fn search(&self, search: &CitySearch) -> Result<CandidateBatch, CityLookupError>;
}
