//! Catalog client implementation

use crate::config::{CatalogConfig, CatalogSource};
use crate::error::{CatalogError, CatalogResult};
use crate::parse::parse_documents;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use servicesearch_search::Document;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Loads the document catalog from its configured source
///
/// HTTP sources are retried with exponential backoff on connection errors,
/// timeouts, 5xx and 429 responses.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Client,
    config: Arc<CatalogConfig>,
}

impl CatalogClient {
    /// Create a client with default configuration
    pub fn new() -> CatalogResult<Self> {
        Self::with_config(CatalogConfig::default())
    }

    /// Create a client with specific configuration
    pub fn with_config(config: CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static("servicesearch-catalog/0.3"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(CatalogError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Load the catalog, substituting an empty one if the source fails
    #[instrument(skip(self), fields(source = %self.config.source))]
    pub async fn load(&self) -> Vec<Document> {
        match self.try_load().await {
            Ok(documents) => documents,
            Err(e) => {
                warn!(error = %e, "Catalog unavailable, continuing with an empty catalog");
                Vec::new()
            }
        }
    }

    /// Load the catalog, reporting failures
    pub async fn try_load(&self) -> CatalogResult<Vec<Document>> {
        let start = Instant::now();

        let documents = match &self.config.source {
            CatalogSource::Url(url) => self.fetch_with_retry(url).await?,
            CatalogSource::File(path) => load_from_file(path).await?,
        };

        info!(
            documents = documents.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Catalog loaded"
        );

        Ok(documents)
    }

    /// Fetch and parse with retry logic
    async fn fetch_with_retry(&self, url: &str) -> CatalogResult<Vec<Document>> {
        let retry_config = &self.config.retry;
        let request_id = Uuid::new_v4().to_string();
        let mut last_error: Option<CatalogError> = None;

        for attempt in 0..retry_config.max_attempts {
            // Wait before retry (except first attempt)
            if attempt > 0 {
                let delay = retry_config.delay_for_attempt(attempt);
                debug!(
                    request_id = %request_id,
                    attempt = attempt,
                    delay_ms = delay.as_millis() as u64,
                    "Retrying after delay"
                );
                tokio::time::sleep(delay).await;
            }

            match self.fetch_once(&request_id, url).await {
                Ok(documents) => return Ok(documents),
                Err(e) if e.is_retryable() && attempt + 1 < retry_config.max_attempts => {
                    debug!(
                        request_id = %request_id,
                        attempt = attempt + 1,
                        error = %e,
                        "Catalog fetch failed, will retry"
                    );
                    last_error = Some(e);
                }
                Err(e) => {
                    debug!(
                        request_id = %request_id,
                        attempt = attempt + 1,
                        error = %e,
                        "Catalog fetch failed, not retrying"
                    );
                    return Err(e);
                }
            }
        }

        Err(CatalogError::RetriesExhausted {
            attempts: retry_config.max_attempts,
            last_error: last_error.map_or_else(|| "Unknown error".to_string(), |e| e.to_string()),
        })
    }

    /// Single request without retry
    async fn fetch_once(&self, request_id: &str, url: &str) -> CatalogResult<Vec<Document>> {
        let response = self
            .inner
            .get(url)
            .header(X_REQUEST_ID, request_id)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        parse_documents(&body)
    }
}

/// Read and parse a local catalog file
#[instrument]
pub async fn load_from_file(path: &Path) -> CatalogResult<Vec<Document>> {
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    parse_documents(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use servicesearch_core::retry::RetryConfig;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const CATALOG: &str = r#"[
        {"id": 1, "name": "Plumbing", "position": {"lat": 59.33, "lng": 18.06}},
        {"id": 2, "name": "Electric", "position": {"lat": 57.70, "lng": 11.97}}
    ]"#;

    /// Local HTTP endpoint answering every request with `status` and no body.
    /// Returns its URL and the number of connections served.
    async fn status_server(status: &'static str) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let served = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&served);

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        (format!("http://{addr}/data.json"), served)
    }

    fn http_client(url: &str, max_attempts: u32) -> CatalogClient {
        let config = CatalogConfig::default()
            .with_source(url)
            .with_timeout(Duration::from_secs(5))
            .with_retry(RetryConfig::default().without_jitter().with_max_attempts(max_attempts));
        CatalogClient::with_config(config).unwrap()
    }

    fn catalog_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_client_creation() {
        let client = CatalogClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CatalogConfig::default().with_timeout(Duration::ZERO);
        assert!(CatalogClient::with_config(config).is_err());
    }

    #[tokio::test]
    async fn test_load_from_file_source() {
        let file = catalog_file();
        let config = CatalogConfig::default().with_source(file.path().to_str().unwrap());
        let client = CatalogClient::with_config(config).unwrap();

        let documents = client.try_load().await.unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].id, 1);
    }

    #[test]
    fn test_load_from_file_blocking() {
        let file = catalog_file();
        let documents = tokio_test::block_on(load_from_file(file.path())).unwrap();
        assert_eq!(documents[1].name, "Electric");
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_empty() {
        let config = CatalogConfig::default().with_source("/nonexistent/catalog.json");
        let client = CatalogClient::with_config(config).unwrap();

        let err = client.try_load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(client.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_url_falls_back_to_empty() {
        let config = CatalogConfig::default()
            .with_source("http://127.0.0.1:9/data.json")
            .with_timeout(Duration::from_secs(2))
            .with_retry(RetryConfig::no_retry());
        let client = CatalogClient::with_config(config).unwrap();

        assert!(client.try_load().await.is_err());
        assert!(client.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_is_not_retried() {
        let (url, served) = status_server("404 Not Found").await;
        let client = http_client(&url, 3);

        let err = client.try_load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 404, .. }), "got {err:?}");
        assert!(!err.is_retryable());
        assert_eq!(served.load(Ordering::SeqCst), 1);

        assert!(client.load().await.is_empty());
        assert_eq!(served.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_server_error_retried_then_empty() {
        let (url, served) = status_server("503 Service Unavailable").await;
        let client = http_client(&url, 2);

        let err = client.try_load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 503, .. }), "got {err:?}");
        assert_eq!(served.load(Ordering::SeqCst), 2);

        assert!(client.load().await.is_empty());
        assert_eq!(served.load(Ordering::SeqCst), 4);
    }
}
