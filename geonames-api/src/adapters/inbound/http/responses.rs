//! HTTP response types for the city endpoints.

use serde::Serialize;

use crate::domain::models::{CityId, EnrichedCity, IpCity};

/// A city with its administrative area names.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityResponse {
    pub id: CityId,
    pub name: String,
    pub country_code: String,
    pub admin1_code: String,
    pub admin1_name: Option<String>,
    pub admin2_code: String,
    pub admin2_name: Option<String>,
    pub population: u64,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<EnrichedCity> for CityResponse {
    fn from(city: EnrichedCity) -> Self {
        let candidate = city.candidate;
        Self {
            id: candidate.id,
            name: candidate.name,
            country_code: candidate.country_code,
            admin1_code: candidate.admin1_code,
            admin1_name: city.admin1_name,
            admin2_code: candidate.admin2_code,
            admin2_name: city.admin2_name,
            population: candidate.population,
            latitude: candidate.coordinates.latitude,
            longitude: candidate.coordinates.longitude,
        }
    }
}

/// The city found for an address, tagged with that address.
#[derive(Debug, Serialize)]
pub struct IpCityResponse {
    #[serde(flatten)]
    pub city: CityResponse,
    pub ip: String,
}

impl From<IpCity> for IpCityResponse {
    fn from(found: IpCity) -> Self {
        Self {
            city: found.city.into(),
            ip: found.ip.to_string(),
        }
    }
}
