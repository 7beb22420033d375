use std::net::Ipv4Addr;

use itertools::Itertools;

use super::{admin1_composite_code, admin2_composite_code, CityId, GeoPoint};

/// A city returned by the search backend.
#[derive(Debug, Clone, PartialEq)]
pub struct CityCandidate {
    pub id: CityId,
    pub name: String,
    /// Always lowercase.
    pub country_code: String,
    pub admin1_code: String,
    pub admin2_code: String,
    pub population: u64,
    pub coordinates: GeoPoint,
    /// Position in the backend's result list.
    pub match_order_index: usize,
}

impl CityCandidate {
    pub fn admin1_key(&self) -> String {
        admin1_composite_code(&self.country_code, &self.admin1_code)
    }

    pub fn admin2_key(&self) -> String {
        admin2_composite_code(&self.country_code, &self.admin1_code, &self.admin2_code)
    }
}

/// Candidates in backend order together with the admin1 codes they reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateBatch {
    pub candidates: Vec<CityCandidate>,
    /// Deduplicated, first-seen order.
    pub admin1_codes: Vec<String>,
}

impl CandidateBatch {
    pub fn new(candidates: Vec<CityCandidate>) -> Self {
        let admin1_codes = candidates
            .iter()
            .map(CityCandidate::admin1_key)
            .unique()
            .collect();

        Self {
            candidates,
            admin1_codes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// A candidate joined with its administrative area names.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedCity {
    pub candidate: CityCandidate,
    pub admin1_name: Option<String>,
    pub admin2_name: Option<String>,
}

/// The city found for a client address, with the address it was resolved from.
#[derive(Debug, Clone, PartialEq)]
pub struct IpCity {
    pub city: EnrichedCity,
    pub ip: Ipv4Addr,
}
