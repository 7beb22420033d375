//! In-memory port implementations for tests.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::{AdminAreaRepository, CitySearch, CitySearchBackend, CountryRepository, GeoLocator};
use crate::domain::{
    models::{
        AdminArea, CandidateBatch, CityCandidate, CityId, CountryRecord, GeoPoint, IpLocation,
        SearchOrder,
    },
    CityLookupError,
};

/// A candidate with placeholder admin codes at (0, 0).
pub fn candidate(id: u64, name: &str, country_code: &str, population: u64) -> CityCandidate {
    CityCandidate {
        id: CityId::new(id),
        name: name.to_string(),
        country_code: country_code.to_lowercase(),
        admin1_code: "01".to_string(),
        admin2_code: "001".to_string(),
        population,
        coordinates: GeoPoint::new(0.0, 0.0),
        match_order_index: 0,
    }
}

/// Search backend that filters and orders a fixed set of cities roughly the
/// way the real index does.
#[derive(Clone, Default)]
pub struct MockCitySearch {
    cities: Arc<Vec<CityCandidate>>,
    searches: Arc<Mutex<Vec<CitySearch>>>,
    fail: bool,
}

impl MockCitySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cities(mut self, cities: Vec<CityCandidate>) -> Self {
        self.cities = Arc::new(cities);
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Every search issued so far.
    pub fn searches(&self) -> Vec<CitySearch> {
        self.searches.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.searches.lock().unwrap().len()
    }
}

fn squared_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    (a.latitude - b.latitude).powi(2) + (a.longitude - b.longitude).powi(2)
}

#[async_trait]
impl CitySearchBackend for MockCitySearch {
    async fn search(&self, search: &CitySearch) -> Result<CandidateBatch, CityLookupError> {
        self.searches.lock().unwrap().push(search.clone());

        if self.fail {
            return Err(CityLookupError::SearchBackend(
                "connection refused".to_string(),
            ));
        }

        let mut hits: Vec<CityCandidate> = match search {
            CitySearch::ById(id) => self
                .cities
                .iter()
                .filter(|city| city.id == *id)
                .take(1)
                .cloned()
                .collect(),
            CitySearch::ByName(query) => {
                let name = query.name.to_lowercase();
                let mut hits: Vec<CityCandidate> = self
                    .cities
                    .iter()
                    .filter(|city| name.is_empty() || city.name.to_lowercase().contains(&name))
                    .filter(|city| {
                        query.country_codes.is_empty()
                            || query.country_codes.contains(&city.country_code)
                    })
                    .cloned()
                    .collect();

                match query.order {
                    SearchOrder::Population => {
                        hits.sort_by(|a, b| b.population.cmp(&a.population))
                    }
                    SearchOrder::Proximity(point) => hits.sort_by(|a, b| {
                        squared_distance(&a.coordinates, &point)
                            .total_cmp(&squared_distance(&b.coordinates, &point))
                    }),
                }

                hits.truncate(query.limit);
                hits
            }
        };

        for (index, hit) in hits.iter_mut().enumerate() {
            hit.match_order_index = index;
        }

        Ok(CandidateBatch::new(hits))
    }
}

#[derive(Clone, Default)]
pub struct MockCountryRepository {
    countries: Arc<Vec<CountryRecord>>,
    call_count: Arc<AtomicUsize>,
    fail: bool,
}

impl MockCountryRepository {
    pub fn new(countries: Vec<CountryRecord>) -> Self {
        Self {
            countries: Arc::new(countries),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryRepository for MockCountryRepository {
    async fn all_countries(&self) -> Result<Vec<CountryRecord>, CityLookupError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CityLookupError::metadata("countrynames unavailable"));
        }
        Ok(self.countries.as_ref().clone())
    }
}

/// Admin-area store that records every lookup and how many ran at once.
#[derive(Clone, Default)]
pub struct MockAdminAreaRepository {
    admin1: Arc<Vec<AdminArea>>,
    admin2: Arc<Vec<AdminArea>>,
    admin1_requests: Arc<Mutex<Vec<Vec<String>>>>,
    admin2_requests: Arc<Mutex<Vec<String>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    completed: Arc<AtomicUsize>,
    failing_admin2: Option<String>,
    delay: Duration,
}

impl MockAdminAreaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_admin1(mut self, areas: Vec<AdminArea>) -> Self {
        self.admin1 = Arc::new(areas);
        self
    }

    pub fn with_admin2(mut self, areas: Vec<AdminArea>) -> Self {
        self.admin2 = Arc::new(areas);
        self
    }

    /// Make the admin2 lookup for `code` fail with a store error.
    pub fn failing_admin2(mut self, code: &str) -> Self {
        self.failing_admin2 = Some(code.to_string());
        self
    }

    /// Hold every lookup open for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn admin1_requests(&self) -> Vec<Vec<String>> {
        self.admin1_requests.lock().unwrap().clone()
    }

    pub fn admin2_requests(&self) -> Vec<String> {
        self.admin2_requests.lock().unwrap().clone()
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn settle<T>(&self, result: T) -> T {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(self.delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.completed.fetch_add(1, Ordering::SeqCst);
        result
    }
}

#[async_trait]
impl AdminAreaRepository for MockAdminAreaRepository {
    async fn admin1_by_codes(&self, codes: &[String]) -> Result<Vec<AdminArea>, CityLookupError> {
        self.admin1_requests.lock().unwrap().push(codes.to_vec());

        let found = self
            .admin1
            .iter()
            .filter(|area| codes.contains(&area.code.to_lowercase()))
            .cloned()
            .collect();

        self.settle(Ok(found)).await
    }

    async fn admin2_by_code(&self, code: &str) -> Result<Option<AdminArea>, CityLookupError> {
        self.admin2_requests.lock().unwrap().push(code.to_string());

        let result = if self.failing_admin2.as_deref() == Some(code) {
            Err(CityLookupError::metadata(format!("admin2codes lookup failed for {code}")))
        } else {
            Ok(self
                .admin2
                .iter()
                .find(|area| area.code.eq_ignore_ascii_case(code))
                .cloned())
        };

        self.settle(result).await
    }
}

#[derive(Clone, Default)]
pub struct MockGeoLocator {
    locations: Arc<HashMap<Ipv4Addr, IpLocation>>,
    lookups: Arc<Mutex<Vec<Ipv4Addr>>>,
    fail: bool,
}

impl MockGeoLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, ip: Ipv4Addr, location: IpLocation) -> Self {
        let mut locations = self.locations.as_ref().clone();
        locations.insert(ip, location);
        self.locations = Arc::new(locations);
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> Vec<Ipv4Addr> {
        self.lookups.lock().unwrap().clone()
    }
}

impl GeoLocator for MockGeoLocator {
    fn locate(&self, ip: Ipv4Addr) -> Result<Option<IpLocation>, CityLookupError> {
        self.lookups.lock().unwrap().push(ip);
        if self.fail {
            return Err(CityLookupError::Geolocation(
                "corrupt search tree".to_string(),
            ));
        }
        Ok(self.locations.get(&ip).cloned())
    }
}
