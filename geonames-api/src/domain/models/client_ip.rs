use std::net::Ipv4Addr;

/// The address a misconfigured reverse proxy reports for every client.
pub const LOOPBACK_PLACEHOLDER: &str = "127.0.0.1";

/// Parse a strict dotted-quad IPv4 address: four dot-separated groups of one
/// to three digits, each at most 255, nothing else.
pub fn parse_ipv4(candidate: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = candidate.split('.');

    for octet in octets.iter_mut() {
        let part = parts.next()?;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = part.parse().ok()?;
    }

    if parts.next().is_some() {
        return None;
    }

    Some(Ipv4Addr::from(octets))
}

/// Every place a client address can come from, in the order they are
/// consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpSources {
    /// Explicit override from the query string.
    pub explicit: Option<String>,
    /// Raw `X-Forwarded-For` header value.
    pub forwarded_for: Option<String>,
    /// Transport-level peer address.
    pub peer: Option<String>,
}

impl IpSources {
    pub fn explicit(&self) -> Option<&str> {
        self.explicit.as_deref()
    }

    /// The address inferred from the connection: the first `X-Forwarded-For`
    /// entry, else the peer address.
    pub fn inferred(&self) -> Option<&str> {
        self.forwarded_for
            .as_deref()
            .and_then(|header| header.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
            .or(self.peer.as_deref())
    }

    pub fn explicit_or_inferred(&self) -> Option<&str> {
        self.explicit().or_else(|| self.inferred())
    }
}
