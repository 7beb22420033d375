/// One row of the country-name table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub code: String,
    pub name: String,
}

impl CountryRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}
