//! Search-cluster implementation of the CitySearchBackend port.

mod conversions;

use async_trait::async_trait;
use geonames_search::{CityByIdQuery, SearchClient, SearchFetchError};

use crate::domain::{
    models::CandidateBatch,
    ports::outbound::{CitySearch, CitySearchBackend},
    CityLookupError,
};

use self::conversions::{to_candidate_batch, to_name_query};

/// Adapter that wraps the search client to implement the CitySearchBackend port.
#[derive(Clone)]
pub struct ElasticsearchCityAdapter {
    client: SearchClient,
}

impl ElasticsearchCityAdapter {
    pub fn new(client: SearchClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CitySearchBackend for ElasticsearchCityAdapter {
    async fn search(&self, search: &CitySearch) -> Result<CandidateBatch, CityLookupError> {
        let documents = match search {
            CitySearch::ByName(name_search) => {
                self.client.find_cities(&to_name_query(name_search)).await
            }
            CitySearch::ById(id) => {
                self.client
                    .find_cities(&CityByIdQuery::new(id.as_u64()))
                    .await
            }
        }
        .map_err(map_search_error)?;

        Ok(to_candidate_batch(documents))
    }
}

fn map_search_error(err: SearchFetchError) -> CityLookupError {
    CityLookupError::SearchBackend(err.to_string())
}
