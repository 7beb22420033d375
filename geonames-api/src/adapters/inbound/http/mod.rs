mod client_ip;
mod jsonp;
mod responses;

pub use client_ip::ip_sources;
pub use jsonp::Jsonp;
pub use responses::*;

/// Effective sort mode of a `/city` response.
pub const SORT_BY_HEADER: &str = "x-geonames-sortby";
/// Number of cities in a `/city` response.
pub const TOTAL_HEADER: &str = "x-geonames-total";
