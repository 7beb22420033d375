use async_trait::async_trait;
use sqlx::PgPool;

use super::{map_db_error, CodeNameRow};
use crate::domain::{models::AdminArea, ports::outbound::AdminAreaRepository, CityLookupError};

pub struct PostgresAdminAreaRepository {
    pool: PgPool,
}

impl PostgresAdminAreaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminAreaRepository for PostgresAdminAreaRepository {
    async fn admin1_by_codes(&self, codes: &[String]) -> Result<Vec<AdminArea>, CityLookupError> {
        let rows = sqlx::query_as::<_, CodeNameRow>(
            r#"
            SELECT code, name
            FROM admincodes
            WHERE lower(code) = ANY($1)
            "#,
        )
        .bind(codes)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("admincodes", e))?;

        Ok(rows
            .into_iter()
            .map(|row| AdminArea::new(row.code, row.name))
            .collect())
    }

    async fn admin2_by_code(&self, code: &str) -> Result<Option<AdminArea>, CityLookupError> {
        let row = sqlx::query_as::<_, CodeNameRow>(
            r#"
            SELECT code, name
            FROM admin2codes
            WHERE lower(code) = $1
            LIMIT 1
            "#,
        )
        .bind(code.to_lowercase())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("admin2codes", e))?;

        Ok(row.map(|row| AdminArea::new(row.code, row.name)))
    }
}
