//! PostgreSQL implementations of the country and admin-area ports.

mod admin_areas;
mod countries;

pub use admin_areas::PostgresAdminAreaRepository;
pub use countries::PostgresCountryRepository;

use crate::domain::CityLookupError;

/// Row shape shared by every geonames metadata table.
#[derive(Debug, sqlx::FromRow)]
struct CodeNameRow {
    code: String,
    name: String,
}

fn map_db_error(table: &str, err: sqlx::Error) -> CityLookupError {
    CityLookupError::metadata(format!("{table}: {err}"))
}
