use crate::CatalogConfig;
use appfinder_core::{
    AppId, CatalogRecord, LOOKUP_RESULT_CAP, SEARCH_RESULT_CAP, SearchResponse,
};
use appfinder_error::{CatalogError, CatalogErrorKind, CatalogResult};
use appfinder_interface::CatalogSource;
use async_trait::async_trait;
use tracing::instrument;

const MEDIA_SOFTWARE: &str = "software";

/// Decode an upstream response body, keeping at most `cap` records.
///
/// # Examples
///
/// ```
/// use appfinder_catalog::parse_response;
///
/// let body = r#"{"resultCount": 2, "results": [{"trackId": 1}, {"trackId": 2}]}"#;
/// assert_eq!(parse_response(body, 1).unwrap().len(), 1);
/// assert!(parse_response("<html>", 8).is_err());
/// ```
pub fn parse_response(body: &str, cap: usize) -> CatalogResult<Vec<CatalogRecord>> {
    let response: SearchResponse = serde_json::from_str(body).map_err(|e| {
        CatalogError::new(CatalogErrorKind::Deserialization(e.to_string()))
    })?;
    Ok(response.into_records(cap))
}

/// Client for the upstream catalog search service
#[derive(Debug, Clone)]
pub struct CatalogClient {
    config: CatalogConfig,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a new catalog client
    #[instrument(skip(config), fields(search_url = %config.search_url(), lookup_url = %config.lookup_url()))]
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        tracing::debug!("Creating catalog client");
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                CatalogError::new(CatalogErrorKind::Configuration(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;
        Ok(Self { config, client })
    }

    /// Get the catalog configuration
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Build the free-text search request without sending it.
    pub fn search_request(&self, term: &str) -> CatalogResult<reqwest::Request> {
        let limit = SEARCH_RESULT_CAP.to_string();
        self.client
            .get(self.config.search_url())
            .query(&[
                ("term", term),
                ("media", MEDIA_SOFTWARE),
                ("limit", limit.as_str()),
            ])
            .build()
            .map_err(|e| CatalogError::new(CatalogErrorKind::Http(e.to_string())))
    }

    /// Build the identifier lookup request without sending it.
    pub fn lookup_request(&self, id: AppId) -> CatalogResult<reqwest::Request> {
        let id = id.to_string();
        let limit = LOOKUP_RESULT_CAP.to_string();
        self.client
            .get(self.config.lookup_url())
            .query(&[
                ("id", id.as_str()),
                ("media", MEDIA_SOFTWARE),
                ("limit", limit.as_str()),
            ])
            .build()
            .map_err(|e| CatalogError::new(CatalogErrorKind::Http(e.to_string())))
    }

    /// Send a request and decode the envelope, keeping at most `cap` records.
    async fn fetch(&self, request: reqwest::Request, cap: usize) -> CatalogResult<Vec<CatalogRecord>> {
        tracing::debug!(url = %request.url(), "Sending catalog request");

        let response = self.client.execute(request).await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            CatalogError::new(CatalogErrorKind::Http(format!("Request failed: {}", e)))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Catalog returned error: {}", status);
            return Err(CatalogError::new(CatalogErrorKind::Status(status.as_u16())));
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response: {}", e);
            CatalogError::new(CatalogErrorKind::Body(e.to_string()))
        })?;

        parse_response(&body, cap).inspect_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
        })
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    #[instrument(skip(self))]
    async fn search(&self, term: &str) -> CatalogResult<Vec<CatalogRecord>> {
        let request = self.search_request(term)?;
        let records = self.fetch(request, SEARCH_RESULT_CAP).await?;
        tracing::debug!(count = records.len(), "Search completed");
        Ok(records)
    }

    #[instrument(skip(self, id), fields(id = %id))]
    async fn lookup(&self, id: AppId) -> CatalogResult<Vec<CatalogRecord>> {
        let request = self.lookup_request(id)?;
        let records = self.fetch(request, LOOKUP_RESULT_CAP).await?;
        if records.is_empty() {
            tracing::info!("No catalog entry for id");
        }
        Ok(records)
    }
}
