use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// A city as stored in the search index.
///
/// The geonames id is accepted both as a JSON number and as a string, since
/// indices built by different loaders disagree on the mapping.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityDocument {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: u64,
    pub name: String,
    pub country_code: String,
    pub admin1_code: Option<String>,
    pub admin2_code: Option<String>,
    pub population: Option<u64>,
    pub location: Location,
}

/// A `geo_point` in the object form Elasticsearch expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
