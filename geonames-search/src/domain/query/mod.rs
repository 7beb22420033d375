mod cities_by_name;
mod city_by_id;

pub use cities_by_name::{CitiesByNameQuery, CitySort};
pub use city_by_id::CityByIdQuery;

pub trait SearchQuery {
    fn as_search_body(&self) -> serde_json::Value;
}
