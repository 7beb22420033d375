use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A geonames city identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(u64);

impl CityId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CityId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for CityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids_only() {
        assert_eq!("2988507".parse::<CityId>().unwrap(), CityId::new(2988507));
        assert!("paris".parse::<CityId>().is_err());
        assert!("-1".parse::<CityId>().is_err());
    }
}
