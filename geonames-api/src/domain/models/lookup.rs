use std::net::Ipv4Addr;

use super::{EnrichedCity, IpSources, SearchOrder, SortMode};

/// A `/city` name search as received from the caller.
#[derive(Debug, Clone)]
pub struct CitySearchRequest {
    pub name: String,
    pub country: String,
    pub sort: SortMode,
    pub limit: usize,
    pub ip_sources: IpSources,
}

/// Outcome of sort-mode selection for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortDecision {
    pub order: SearchOrder,
    pub client_ip: Option<Ipv4Addr>,
    /// Proximity was asked for but no point could be resolved.
    pub downgraded: bool,
}

impl SortDecision {
    pub fn population() -> Self {
        Self {
            order: SearchOrder::Population,
            client_ip: None,
            downgraded: false,
        }
    }

    pub fn downgraded(client_ip: Option<Ipv4Addr>) -> Self {
        Self {
            order: SearchOrder::Population,
            client_ip,
            downgraded: true,
        }
    }

    pub fn mode(&self) -> SortMode {
        self.order.mode()
    }
}

/// Everything resolved while serving one request. Lives on the request's
/// stack and nowhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupContext {
    pub country_codes: Vec<String>,
    pub sort: SortDecision,
}

/// Search results ready for the list view.
#[derive(Debug, Clone, PartialEq)]
pub struct CityList {
    pub cities: Vec<EnrichedCity>,
    /// The mode that was actually applied.
    pub sort_mode: SortMode,
    pub downgraded: bool,
    /// Address the sort decision was made for, if any.
    pub client_ip: Option<Ipv4Addr>,
}

impl CityList {
    pub fn empty(sort_mode: SortMode) -> Self {
        Self {
            cities: Vec::new(),
            sort_mode,
            downgraded: false,
            client_ip: None,
        }
    }
}
