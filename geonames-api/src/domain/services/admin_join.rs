use std::collections::HashMap;

use futures::future::{join, join_all};

use crate::domain::{
    models::{CityCandidate, EnrichedCity},
    ports::outbound::AdminAreaRepository,
    CityLookupError,
};

/// Attach administrative area names to `candidates`.
///
/// Issues one bulk admin1 lookup for `admin1_codes` and one admin2 lookup per
/// candidate, all at once, and waits for every one of them to settle before
/// looking at the results. Unknown codes leave the name empty. A store error
/// on any lookup fails the whole join.
///
/// Admin2 names are matched to candidates by position.
pub async fn join_admin_names<A: AdminAreaRepository + ?Sized>(
    repository: &A,
    candidates: Vec<CityCandidate>,
    admin1_codes: &[String],
) -> Result<Vec<EnrichedCity>, CityLookupError> {
    let admin2_codes: Vec<String> = candidates.iter().map(CityCandidate::admin2_key).collect();

    let admin1_lookup = repository.admin1_by_codes(admin1_codes);
    let admin2_lookups = join_all(
        admin2_codes
            .iter()
            .map(|code| repository.admin2_by_code(code)),
    );

    let (admin1_result, admin2_results) = join(admin1_lookup, admin2_lookups).await;

    let admin1_names: HashMap<String, String> = admin1_result?
        .into_iter()
        .map(|area| (area.code.to_lowercase(), area.name))
        .collect();
    let admin2_areas = admin2_results.into_iter().collect::<Result<Vec<_>, _>>()?;

    let enriched = candidates
        .into_iter()
        .zip(admin2_areas)
        .map(|(candidate, admin2)| EnrichedCity {
            admin1_name: admin1_names.get(&candidate.admin1_key()).cloned(),
            admin2_name: admin2.map(|area| area.name),
            candidate,
        })
        .collect();

    Ok(enriched)
}
