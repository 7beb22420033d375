use async_trait::async_trait;
use sqlx::PgPool;

use super::{map_db_error, CodeNameRow};
use crate::domain::{models::CountryRecord, ports::outbound::CountryRepository, CityLookupError};

pub struct PostgresCountryRepository {
    pool: PgPool,
}

impl PostgresCountryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for PostgresCountryRepository {
    async fn all_countries(&self) -> Result<Vec<CountryRecord>, CityLookupError> {
        let rows = sqlx::query_as::<_, CodeNameRow>(
            r#"
            SELECT code, name
            FROM countrynames
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("countrynames", e))?;

        Ok(rows
            .into_iter()
            .map(|row| CountryRecord::new(row.code, row.name))
            .collect())
    }
}
