//! GeoLite2-City implementation of the GeoLocator port.

use std::{
    net::{IpAddr, Ipv4Addr},
    path::Path,
};

use maxminddb::{geoip2, MaxMindDBError, Reader};

use crate::domain::{
    models::{GeoPoint, IpLocation},
    ports::outbound::GeoLocator,
    CityLookupError,
};

/// Reads the whole database into memory once; lookups never touch the disk.
pub struct MaxMindGeoLocator {
    reader: Reader<Vec<u8>>,
}

impl MaxMindGeoLocator {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, MaxMindDBError> {
        let reader = Reader::open_readfile(path)?;
        Ok(Self { reader })
    }
}

impl GeoLocator for MaxMindGeoLocator {
    fn locate(&self, ip: Ipv4Addr) -> Result<Option<IpLocation>, CityLookupError> {
        let record = match self.reader.lookup::<geoip2::City>(IpAddr::V4(ip)) {
            Ok(record) => record,
            Err(MaxMindDBError::AddressNotFoundError(_)) => return Ok(None),
            Err(e) => return Err(CityLookupError::Geolocation(e.to_string())),
        };

        Ok(to_ip_location(&record))
    }
}

fn to_ip_location(record: &geoip2::City) -> Option<IpLocation> {
    let location = record.location.as_ref()?;
    let point = GeoPoint::new(location.latitude?, location.longitude?);

    let city_name = record
        .city
        .as_ref()
        .and_then(|city| city.names.as_ref())
        .and_then(|names| names.get("en"))
        .map(|name| name.to_string());
    let country_code = record
        .country
        .as_ref()
        .and_then(|country| country.iso_code)
        .map(str::to_lowercase);

    Some(IpLocation {
        point,
        city_name,
        country_code,
    })
}
