//! Composition root: the only place that names concrete outbound adapters.

use std::sync::Arc;

use geonames_search::{SearchClient, SearchFetchError, SearchURL};
use sqlx::postgres::PgPoolOptions;

use crate::{
    adapters::outbound::{
        elasticsearch::ElasticsearchCityAdapter,
        maxmind::MaxMindGeoLocator,
        postgres::{PostgresAdminAreaRepository, PostgresCountryRepository},
    },
    config::Settings,
    domain::{ports::inbound::CityLookupService, services::CityLookupServiceImpl},
};

#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("Failed to create search client: {0}")]
    SearchClient(#[from] SearchFetchError),
    #[error("Failed to open geolocation database: {0}")]
    GeoIp(#[from] maxminddb::MaxMindDBError),
}

/// Wire the lookup service to the search cluster, the metadata database and
/// the geolocation database described by `settings`.
pub fn create_city_service(
    settings: &Settings,
) -> Result<Arc<dyn CityLookupService>, FactoryError> {
    let client = SearchClient::new(
        SearchURL::new(&settings.search.url),
        &settings.search.cities_index,
        settings.search.timeout(),
    )?;

    // Connections are opened on first use.
    let pool = PgPoolOptions::new().connect_lazy_with(settings.database.with_db());

    tracing::info!(
        "opening geolocation database at {}",
        settings.geoip.database_path.display()
    );
    let locator = MaxMindGeoLocator::open(&settings.geoip.database_path)?;

    let service = CityLookupServiceImpl::new(
        Arc::new(ElasticsearchCityAdapter::new(client)),
        Arc::new(PostgresCountryRepository::new(pool.clone())),
        Arc::new(PostgresAdminAreaRepository::new(pool)),
        Arc::new(locator),
    );

    Ok(Arc::new(service))
}
