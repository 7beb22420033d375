use thiserror::Error;

/// Errors that can end a city lookup.
///
/// "Nothing matched" is not an error; the service returns an empty list or
/// `None` for that.
#[derive(Debug, Error)]
pub enum CityLookupError {
    #[error("The provided IP {0} is not valid")]
    InvalidClientIp(String),
    #[error("Could not determine your remote IP or the provided one is not valid")]
    UndeterminedClientIp,
    #[error("geolocation lookup failed: {0}")]
    Geolocation(String),
    #[error("search backend error: {0}")]
    SearchBackend(String),
    #[error("metadata store error: {0}")]
    MetadataStore(String),
}

impl CityLookupError {
    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::MetadataStore(msg.into())
    }
}
