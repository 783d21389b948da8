//! HTTP client for the optimization service REST API.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use feedlift_core::{BatchResult, OptimizedProduct, ProductInput};

use crate::error::ApiError;
use crate::types::{CsvUploadResponse, FeedType, ServiceStatus, StatusEnvelope};

/// Client for the optimization service API.
///
/// Holds the HTTP client and the API root URL. Construct with
/// [`ApiClient::new`]; point `base_url` at a mock server in tests.
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct BatchRequest<'a> {
    products: &'a [ProductInput],
}

impl ApiClient {
    /// Creates a new client for the service rooted at `base_url`
    /// (e.g. `http://localhost:8000/api`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ApiError::BadUrl`] if `base_url` is not
    /// a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("feedlift/0.1 (product-feed-optimization)")
            .build()?;

        // Normalise: ensure the root ends with exactly one slash so that
        // Url::join appends endpoint segments rather than replacing the
        // last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ApiError::BadUrl(format!("invalid API root '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Runs the liveness/credential check against `test-key`.
    ///
    /// Infallible by design: transport failures collapse into
    /// [`ServiceStatus::Unreachable`] so the caller can render a status
    /// indicator without special-casing errors.
    pub async fn check_status(&self) -> ServiceStatus {
        match self.fetch_status().await {
            Ok(status) => status,
            Err(e) => ServiceStatus::Unreachable {
                reason: e.to_string(),
            },
        }
    }

    async fn fetch_status(&self) -> Result<ServiceStatus, ApiError> {
        let envelope: StatusEnvelope = self.get_json("test-key").await?;
        if envelope.status == "success" {
            Ok(ServiceStatus::Ready {
                message: envelope.message,
            })
        } else {
            Ok(ServiceStatus::Degraded {
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("service reported status '{}'", envelope.status)),
            })
        }
    }

    /// Optimizes a single product via `optimize-product`.
    ///
    /// The caller is expected to pass a sanitized input; `None` fields are
    /// omitted from the JSON body entirely.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] if the request cannot be sent or received.
    /// - [`ApiError::Status`] on a non-success HTTP status.
    /// - [`ApiError::Decode`] if the body does not match the expected shape.
    pub async fn optimize_single(
        &self,
        product: &ProductInput,
    ) -> Result<OptimizedProduct, ApiError> {
        tracing::debug!(product = product.label(), "submitting single optimization");
        self.post_json("optimize-product", product).await
    }

    /// Uploads a CSV file via multipart `upload-csv` and returns the
    /// product inputs the service parsed out of it.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ApiClient::optimize_single`].
    pub async fn upload_csv(
        &self,
        filename: &str,
        contents: Vec<u8>,
    ) -> Result<Vec<ProductInput>, ApiError> {
        let url = self.endpoint("upload-csv")?;
        let part = Part::bytes(contents)
            .file_name(filename.to_owned())
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);

        tracing::debug!(filename, "uploading CSV");
        let response = self.client.post(url.clone()).multipart(form).send().await?;
        let body = Self::read_success_body(response).await?;
        let parsed: CsvUploadResponse = Self::decode(&body, url.as_str())?;
        Ok(parsed.products)
    }

    /// Optimizes an ordered list of products via `optimize-batch`.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ApiClient::optimize_single`].
    pub async fn optimize_batch(
        &self,
        products: &[ProductInput],
    ) -> Result<BatchResult, ApiError> {
        tracing::debug!(count = products.len(), "submitting batch optimization");
        self.post_json("optimize-batch", &BatchRequest { products })
            .await
    }

    /// Downloads an export feed for a completed batch as an opaque payload.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] if the request cannot be sent or received.
    /// - [`ApiError::Status`] on a non-success HTTP status.
    pub async fn export_feed(&self, batch_id: &str, feed: FeedType) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint(&format!("export/{}/{batch_id}", feed.path_segment()))?;
        tracing::debug!(batch_id, feed = %feed, "requesting feed export");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Resolves an endpoint path against the API root.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::BadUrl(format!("cannot resolve '{path}': {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self.client.get(url.clone()).send().await?;
        let body = Self::read_success_body(response).await?;
        Self::decode(&body, url.as_str())
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self.client.post(url.clone()).json(body).send().await?;
        let text = Self::read_success_body(response).await?;
        Self::decode(&text, url.as_str())
    }

    /// Asserts a 2xx HTTP status and reads the response body.
    async fn read_success_body(response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }

    fn decode<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode {
            context: context.to_string(),
            source: e,
        })
    }
}
