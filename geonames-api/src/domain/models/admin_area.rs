/// A named administrative area, keyed by its composite code.
///
/// Level-1 codes look like `us.ma`, level-2 codes like `us.ma.013`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminArea {
    pub code: String,
    pub name: String,
}

impl AdminArea {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// `country.admin1`, lowercased.
pub fn admin1_composite_code(country_code: &str, admin1_code: &str) -> String {
    format!("{}.{}", country_code, admin1_code).to_lowercase()
}

/// `country.admin1.admin2`, lowercased.
pub fn admin2_composite_code(country_code: &str, admin1_code: &str, admin2_code: &str) -> String {
    format!("{}.{}.{}", country_code, admin1_code, admin2_code).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_codes_are_lowercased() {
        assert_eq!(admin1_composite_code("GB", "ENG"), "gb.eng");
        assert_eq!(admin2_composite_code("US", "MA", "013"), "us.ma.013");
    }
}
