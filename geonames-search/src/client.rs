use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    domain::{CityDocument, SearchQuery, SearchResponse},
    SearchURL,
};

/// Client for the city index of the search cluster.
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    url: SearchURL,
    cities_index: String,
}

impl SearchClient {
    pub fn new(
        url: SearchURL,
        cities_index: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, SearchFetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SearchFetchError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            url,
            cities_index: cities_index.into(),
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
        query: &impl SearchQuery,
    ) -> Result<SearchResponse<T>, SearchFetchError> {
        let resp = self
            .http
            .post(url.as_ref())
            .json(&query.as_search_body())
            .send()
            .await
            .map_err(|e| SearchFetchError::ResponseError(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchFetchError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<SearchResponse<T>>().await.map_err(|e| {
            SearchFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    /// Run `query` against the city index and return the matching documents
    /// in backend order.
    pub async fn find_cities(
        &self,
        query: &impl SearchQuery,
    ) -> Result<Vec<CityDocument>, SearchFetchError> {
        let url = self.url.search_endpoint(&self.cities_index);
        tracing::debug!("querying city index at {}", url.as_ref());

        let response: SearchResponse<CityDocument> = self.fetch(url, query).await?;

        Ok(response.into_sources())
    }
}

#[derive(Error, Debug)]
pub enum SearchFetchError {
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("UnexpectedStatus: {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("Other: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;
    use crate::domain::CityByIdQuery;

    /// Serves exactly one request with the given status line and JSON body,
    /// returning the raw request it received.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 4096];

            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);

                let text = String::from_utf8_lossy(&received);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if received.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "{}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&received).into_owned()
        });

        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn find_cities_posts_query_to_index() {
        let (base, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"hits":{"hits":[{"_id":"3","_source":{"id":3,"name":"Lyon","country_code":"fr","location":{"lat":45.75,"lon":4.85}}}]}}"#,
        )
        .await;

        let client = SearchClient::new(SearchURL::new(base), "cities", None).unwrap();
        let cities = client.find_cities(&CityByIdQuery::new(3)).await.unwrap();

        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "Lyon");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /cities/_search "));
        assert!(request.contains(r#""term":{"id":3}"#));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (base, server) = serve_once(
            "HTTP/1.1 503 Service Unavailable",
            r#"{"error":"cluster_block_exception"}"#,
        )
        .await;

        let client = SearchClient::new(SearchURL::new(base), "cities", None).unwrap();
        let err = client.find_cities(&CityByIdQuery::new(3)).await.unwrap_err();
        server.await.unwrap();

        match err {
            SearchFetchError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 503);
                assert!(body.contains("cluster_block_exception"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_response_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = SearchClient::new(
            SearchURL::new(format!("http://{}", addr)),
            "cities",
            Some(Duration::from_secs(2)),
        )
        .unwrap();
        let err = client.find_cities(&CityByIdQuery::new(3)).await.unwrap_err();

        assert!(matches!(err, SearchFetchError::ResponseError(_)));
    }
}
