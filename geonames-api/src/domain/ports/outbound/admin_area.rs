use async_trait::async_trait;

use crate::domain::{models::AdminArea, CityLookupError};

/// Read access to the two administrative-area name tables.
///
/// Codes are lowercase composite codes; implementations must match them
/// case-insensitively.
#[async_trait]
pub trait AdminAreaRepository: Send + Sync + 'static {
    async fn admin1_by_codes(&self, codes: &[String]) -> Result<Vec<AdminArea>, CityLookupError>;

    async fn admin2_by_code(&self, code: &str) -> Result<Option<AdminArea>, CityLookupError>;
}
