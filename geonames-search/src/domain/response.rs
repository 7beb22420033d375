use serde::Deserialize;

/// The part of an Elasticsearch `_search` response we care about.
#[derive(Debug, Deserialize)]
pub struct SearchResponse<T> {
    pub hits: HitList<T>,
}

#[derive(Debug, Deserialize)]
pub struct HitList<T> {
    pub hits: Vec<Hit<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Hit<T> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source")]
    pub source: T,
}

impl<T> SearchResponse<T> {
    /// Source documents in the order the backend ranked them.
    pub fn into_sources(self) -> Vec<T> {
        self.hits.hits.into_iter().map(|hit| hit.source).collect()
    }
}
