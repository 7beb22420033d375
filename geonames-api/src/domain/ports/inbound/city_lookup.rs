use async_trait::async_trait;

use crate::domain::{
    models::{CityId, CityList, CitySearchRequest, EnrichedCity, IpCity, IpSources},
    CityLookupError,
};

#[async_trait]
pub trait CityLookupService: Send + Sync + 'static {
    /// Name search with optional country filter and proximity ordering.
    async fn search_cities(&self, request: CitySearchRequest) -> Result<CityList, CityLookupError>;

    async fn city_by_id(&self, id: CityId) -> Result<Option<EnrichedCity>, CityLookupError>;

    /// The city nearest to the caller's (or the supplied) address.
    async fn city_by_ip(&self, sources: IpSources) -> Result<Option<IpCity>, CityLookupError>;
}
