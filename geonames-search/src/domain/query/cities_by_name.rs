use serde_json::{json, Value};

use super::SearchQuery;
use crate::domain::Location;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CitySort {
    /// Most populated first.
    Population,
    /// Nearest to the given point first.
    DistanceFrom(Location),
}

/// Full-text search on the city name, optionally restricted to a set of
/// country codes.
#[derive(Debug, Clone)]
pub struct CitiesByNameQuery {
    name: String,
    country_codes: Vec<String>,
    sort: CitySort,
    size: usize,
}

impl CitiesByNameQuery {
    pub fn new(name: impl Into<String>, sort: CitySort, size: usize) -> Self {
        Self {
            name: name.into(),
            country_codes: Vec::new(),
            sort,
            size,
        }
    }

    pub fn with_country_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.country_codes = codes.into_iter().map(Into::into).collect();
        self
    }
}

impl SearchQuery for CitiesByNameQuery {
    fn as_search_body(&self) -> Value {
        let must = if self.name.is_empty() {
            json!({ "match_all": {} })
        } else {
            json!({ "match": { "name": { "query": self.name, "operator": "and" } } })
        };

        let filter = if self.country_codes.is_empty() {
            Vec::new()
        } else {
            vec![json!({ "terms": { "country_code": self.country_codes } })]
        };

        let sort = match self.sort {
            CitySort::Population => json!([{ "population": { "order": "desc" } }]),
            CitySort::DistanceFrom(point) => json!([{
                "_geo_distance": {
                    "location": { "lat": point.lat, "lon": point.lon },
                    "order": "asc",
                    "unit": "km"
                }
            }]),
        };

        json!({
            "size": self.size,
            "query": { "bool": { "must": must, "filter": filter } },
            "sort": sort
        })
    }
}
