use async_trait::async_trait;

use crate::domain::{models::CountryRecord, CityLookupError};

#[async_trait]
pub trait CountryRepository: Send + Sync + 'static {
    /// The whole country table, in table order.
    async fn all_countries(&self) -> Result<Vec<CountryRecord>, CityLookupError>;
}
