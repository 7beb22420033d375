use crate::domain::models::CountryRecord;

/// Codes of every country whose name contains `filter`, ignoring case.
///
/// Codes are lowercased and returned once each, in table order.
pub fn resolve_country_codes(countries: &[CountryRecord], filter: &str) -> Vec<String> {
    let filter = filter.trim().to_lowercase();
    let mut codes: Vec<String> = Vec::new();

    for country in countries {
        if !country.name.to_lowercase().contains(&filter) {
            continue;
        }
        let code = country.code.to_lowercase();
        if !codes.contains(&code) {
            codes.push(code);
        }
    }

    codes
}
