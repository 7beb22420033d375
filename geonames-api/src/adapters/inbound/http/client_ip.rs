use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderMap;

use crate::domain::models::IpSources;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Collect every candidate client address for a request.
///
/// IPv4-mapped peers are reported as plain IPv4 and an IPv6 loopback peer as
/// `127.0.0.1`, so that both go through the same validation as IPv4 peers.
pub fn ip_sources(
    explicit: Option<String>,
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
) -> IpSources {
    let forwarded_for = headers
        .get(FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let peer = peer.map(|addr| match addr.ip().to_canonical() {
        IpAddr::V6(v6) if v6.is_loopback() => Ipv4Addr::LOCALHOST.to_string(),
        ip => ip.to_string(),
    });

    IpSources {
        explicit: explicit.filter(|ip| !ip.is_empty()),
        forwarded_for,
        peer,
    }
}
