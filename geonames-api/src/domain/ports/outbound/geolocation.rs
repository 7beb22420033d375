use std::net::Ipv4Addr;

use crate::domain::{models::IpLocation, CityLookupError};

pub trait GeoLocator: Send + Sync + 'static {
    /// `Ok(None)` when the address has no known location. `Err` only when the
    /// lookup itself failed.
    fn locate(&self, ip: Ipv4Addr) -> Result<Option<IpLocation>, CityLookupError>;
}
