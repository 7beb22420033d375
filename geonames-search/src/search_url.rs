#[derive(Debug, Clone)]
pub struct SearchURL(String);

impl AsRef<str> for SearchURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SearchURL {
    /// Creates a new SearchURL from the base address of the search cluster,
    /// e.g. `http://127.0.0.1:9200`.
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// The `_search` endpoint of `index`.
    pub fn search_endpoint(&self, index: &str) -> Self {
        self.append_path(index).append_path("_search")
    }
}
