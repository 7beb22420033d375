use geonames_search::{CitiesByNameQuery, CityDocument, CitySort, Location};

use crate::domain::{
    models::{CandidateBatch, CityCandidate, CityId, GeoPoint, SearchOrder},
    ports::outbound::NameSearch,
};

/// Build the search-cluster query for a name search.
pub fn to_name_query(search: &NameSearch) -> CitiesByNameQuery {
    let sort = match search.order {
        SearchOrder::Population => CitySort::Population,
        SearchOrder::Proximity(point) => {
            CitySort::DistanceFrom(Location::new(point.latitude, point.longitude))
        }
    };

    CitiesByNameQuery::new(search.name.clone(), sort, search.limit)
        .with_country_codes(search.country_codes.iter().cloned())
}

/// Convert indexed documents, in backend order, into candidates.
pub fn to_candidate_batch(documents: Vec<CityDocument>) -> CandidateBatch {
    let candidates = documents
        .into_iter()
        .enumerate()
        .map(|(index, doc)| to_domain_candidate(doc, index))
        .collect();

    CandidateBatch::new(candidates)
}

fn to_domain_candidate(doc: CityDocument, match_order_index: usize) -> CityCandidate {
    CityCandidate {
        id: CityId::new(doc.id),
        name: doc.name,
        country_code: doc.country_code.to_lowercase(),
        admin1_code: doc.admin1_code.unwrap_or_default(),
        admin2_code: doc.admin2_code.unwrap_or_default(),
        population: doc.population.unwrap_or_default(),
        coordinates: GeoPoint::new(doc.location.lat, doc.location.lon),
        match_order_index,
    }
}

#[cfg(test)]
mod tests {
    use geonames_search::SearchQuery;
    use serde_json::json;

    use super::*;

    fn document(id: u64, country: &str, admin1: Option<&str>) -> CityDocument {
        CityDocument {
            id,
            name: format!("city-{id}"),
            country_code: country.to_string(),
            admin1_code: admin1.map(str::to_string),
            admin2_code: None,
            population: Some(id * 10),
            location: Location::new(1.5, -2.5),
        }
    }

    #[test]
    fn documents_keep_backend_order() {
        let batch = to_candidate_batch(vec![
            document(3, "US", Some("MA")),
            document(1, "US", Some("IL")),
            document(2, "US", Some("MA")),
        ]);

        let ids: Vec<u64> = batch.candidates.iter().map(|c| c.id.as_u64()).collect();
        let indexes: Vec<usize> = batch
            .candidates
            .iter()
            .map(|c| c.match_order_index)
            .collect();

        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(indexes, vec![0, 1, 2]);
        assert_eq!(batch.admin1_codes, vec!["us.ma", "us.il"]);
    }

    #[test]
    fn missing_fields_become_defaults() {
        let batch = to_candidate_batch(vec![document(7, "GB", None)]);
        let candidate = &batch.candidates[0];

        assert_eq!(candidate.country_code, "gb");
        assert_eq!(candidate.admin1_code, "");
        assert_eq!(candidate.admin2_code, "");
        assert_eq!(candidate.coordinates, GeoPoint::new(1.5, -2.5));
    }

    #[test]
    fn empty_hit_list_is_an_empty_batch() {
        let batch = to_candidate_batch(Vec::new());
        assert!(batch.is_empty());
        assert!(batch.admin1_codes.is_empty());
    }

    #[test]
    fn proximity_search_sorts_by_distance() {
        let search = NameSearch {
            name: "paris".to_string(),
            country_codes: vec!["fr".to_string()],
            order: SearchOrder::Proximity(GeoPoint::new(48.85, 2.35)),
            limit: 1,
        };

        let body = to_name_query(&search).as_search_body();

        assert_eq!(body["size"], json!(1));
        assert_eq!(
            body["sort"][0]["_geo_distance"]["location"],
            json!({ "lat": 48.85, "lon": 2.35 })
        );
        assert_eq!(
            body["query"]["bool"]["filter"][0]["terms"]["country_code"],
            json!(["fr"])
        );
    }
}
