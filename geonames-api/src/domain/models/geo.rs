use strum::{Display, EnumString};

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// How name-search results are ordered.
///
/// `closeness` is the name used on the wire, `proximity` is accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum SortMode {
    #[strum(ascii_case_insensitive, serialize = "population")]
    Population,
    #[strum(ascii_case_insensitive, to_string = "closeness", serialize = "proximity")]
    Proximity,
}

impl SortMode {
    /// Unknown or missing values mean population.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse().ok())
            .unwrap_or(SortMode::Population)
    }
}

/// The effective ordering of a name search, carrying the reference point
/// when ordering by proximity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOrder {
    Population,
    Proximity(GeoPoint),
}

impl SearchOrder {
    pub fn mode(&self) -> SortMode {
        match self {
            SearchOrder::Population => SortMode::Population,
            SearchOrder::Proximity(_) => SortMode::Proximity,
        }
    }
}

/// What the geolocation database knows about an address.
#[derive(Debug, Clone, PartialEq)]
pub struct IpLocation {
    pub point: GeoPoint,
    pub city_name: Option<String>,
    pub country_code: Option<String>,
}

impl IpLocation {
    pub fn new(point: GeoPoint) -> Self {
        Self {
            point,
            city_name: None,
            country_code: None,
        }
    }

    pub fn with_city(
        mut self,
        city_name: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        self.city_name = Some(city_name.into());
        self.country_code = Some(country_code.into().to_lowercase());
        self
    }
}
