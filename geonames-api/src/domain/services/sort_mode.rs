use crate::domain::{
    models::{parse_ipv4, IpSources, SearchOrder, SortDecision, SortMode, LOOPBACK_PLACEHOLDER},
    ports::outbound::GeoLocator,
    CityLookupError,
};

/// Decide how a name search is ordered.
///
/// Proximity needs a point: the client address is taken from the explicit
/// override, else inferred from the connection. A missing address or one the
/// locator does not know downgrades the request to population order. A
/// malformed address is rejected.
pub fn select_sort_mode<G: GeoLocator + ?Sized>(
    requested: SortMode,
    sources: &IpSources,
    locator: &G,
) -> Result<SortDecision, CityLookupError> {
    if requested == SortMode::Population {
        return Ok(SortDecision::population());
    }

    let Some(raw_ip) = proximity_candidate(sources) else {
        tracing::debug!("no client address, sorting by population");
        return Ok(SortDecision::downgraded(None));
    };

    let ip = parse_ipv4(raw_ip)
        .ok_or_else(|| CityLookupError::InvalidClientIp(raw_ip.to_string()))?;

    match locator.locate(ip)? {
        Some(location) => Ok(SortDecision {
            order: SearchOrder::Proximity(location.point),
            client_ip: Some(ip),
            downgraded: false,
        }),
        None => {
            tracing::debug!("no location for {}, sorting by population", ip);
            Ok(SortDecision::downgraded(Some(ip)))
        }
    }
}

fn proximity_candidate(sources: &IpSources) -> Option<&str> {
    if let Some(explicit) = sources.explicit() {
        return Some(explicit);
    }

    match sources.inferred() {
        Some(LOOPBACK_PLACEHOLDER) => {
            tracing::warn!(
                "Detected remote client address is {}, server is probably misconfigured",
                LOOPBACK_PLACEHOLDER
            );
            None
        }
        other => other,
    }
}
