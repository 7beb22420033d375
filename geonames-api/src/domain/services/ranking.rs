use crate::domain::models::CityCandidate;

/// Reorder candidates so that countries listed earlier in `country_codes`
/// come first. The sort is stable, so backend order breaks ties. With fewer
/// than two codes there is nothing to prioritise and the input is returned
/// as is.
pub fn rank_by_country(
    mut candidates: Vec<CityCandidate>,
    country_codes: &[String],
) -> Vec<CityCandidate> {
    if country_codes.len() < 2 {
        return candidates;
    }

    candidates.sort_by_key(|candidate| {
        country_codes
            .iter()
            .position(|code| code.eq_ignore_ascii_case(&candidate.country_code))
            .unwrap_or(country_codes.len())
    });

    candidates
}

/// Pick the candidate a single-result endpoint answers with: the last one of
/// the ranked sequence.
pub fn select_last(ranked: Vec<CityCandidate>) -> Option<CityCandidate> {
    ranked.into_iter().last()
}
