use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use bookbud_kernel::settings::CatalogSettings;

use crate::error::CatalogError;
use crate::wire::{VolumeList, VolumeRecord};

/// Read-only port onto the remote book catalog.
///
/// Implementations are stateless between calls and safe to share across
/// screen stores; stores take one as an `Arc<dyn CatalogApi>` so tests can
/// substitute a fake.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Free-text search. `max_results` must be positive; an empty result
    /// list is a successful outcome, not an error.
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<VolumeRecord>, CatalogError>;

    /// Fetch one entry by its catalog identifier.
    async fn get_by_id(&self, volume_id: &str) -> Result<VolumeRecord, CatalogError>;
}

/// [`CatalogApi`] implementation against the hosted volumes API.
pub struct GoogleBooksClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl GoogleBooksClient {
    pub fn new(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()
            .map_err(|err| CatalogError::network(err.to_string()))?;
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| CatalogError::network(format!("invalid catalog base url: {err}")))?;
        Ok(Self {
            http,
            base_url,
            api_key: settings.api_key.clone(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::network("catalog base url cannot carry paths"))?
            .extend(segments);
        if !self.api_key.is_empty() {
            url.query_pairs_mut().append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Reads the body as text before parsing, so malformed payloads are
    /// distinguishable from transport failures.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: Url,
        missing_id: Option<&str>,
    ) -> Result<T, CatalogError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| CatalogError::network(err.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some(id) = missing_id {
                return Err(CatalogError::not_found(id));
            }
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| CatalogError::network(err.to_string()))?;
        serde_json::from_str(&body).map_err(|err| CatalogError::malformed(err.to_string()))
    }
}

#[async_trait]
impl CatalogApi for GoogleBooksClient {
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<VolumeRecord>, CatalogError> {
        debug_assert!(max_results > 0, "max_results must be positive");

        let mut url = self.endpoint(&["volumes"])?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("maxResults", &max_results.to_string());

        tracing::debug!(query, max_results, "searching catalog");
        let list: VolumeList = self.fetch_json(url, None).await?;
        Ok(list.items)
    }

    async fn get_by_id(&self, volume_id: &str) -> Result<VolumeRecord, CatalogError> {
        let url = self.endpoint(&["volumes", volume_id])?;

        tracing::debug!(volume_id, "fetching catalog entry");
        self.fetch_json(url, Some(volume_id)).await
    }
}
