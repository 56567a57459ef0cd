//! HTTP transport shared by every resource client.

use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{LambdaCloudError, Result};

/// Base URL for the Lambda Cloud API.
pub const DEFAULT_BASE_URL: &str = "https://cloud.lambdalabs.com/api/v1";

/// User agent identifying this library, baked in at compile time.
pub(crate) const USER_AGENT: &str = concat!("lambda-cloud-v", env!("CARGO_PKG_VERSION"));

/// Query-string pairs appended to a request.
pub type Query<'a> = &'a [(&'a str, &'a str)];

/// Failure envelope returned by the API for any status >= 400.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Thin wrapper around [`reqwest::Client`], the single chokepoint for every
/// outbound call.
///
/// Owns credential injection and error translation: each request gets the
/// bearer token and content-type headers attached, the path is resolved
/// against the base URL by plain concatenation (callers supply the leading
/// slash), and any failure status is turned into
/// [`LambdaCloudError::Api`]. Calls are never retried; timeouts and
/// connection pooling are whatever reqwest defaults to.
#[derive(Debug)]
pub struct Transport {
    client: Client,
    api_key: String,
    base_url: String,
}

impl Transport {
    /// Create a transport holding the API key and base URL for the lifetime
    /// of the client.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Send a GET request and decode the response body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<Query<'_>>,
    ) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "GET request");

        let mut request = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, self.bearer())
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(query) = query {
            request = request.query(query);
        }

        Self::handle_response(request.send().await?).await
    }

    /// Send a POST request, serializing `body` as JSON when present, and
    /// decode the response body.
    pub async fn post<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        query: Option<Query<'_>>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(url = %url, "POST request");

        let mut request = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, self.bearer())
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        Self::handle_response(request.send().await?).await
    }

    /// Send a DELETE request and return the raw response body text.
    pub async fn delete<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        query: Option<Query<'_>>,
    ) -> Result<String> {
        let url = self.url(path);
        debug!(url = %url, "DELETE request");

        let mut request = self
            .client
            .delete(&url)
            .header(header::AUTHORIZATION, self.bearer())
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.as_u16() >= 400 {
            return Err(Self::api_error(status, &text));
        }
        Ok(text)
    }

    /// Decode a response, translating failure statuses into
    /// [`LambdaCloudError::Api`].
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let text = response.text().await?;

        if status.as_u16() >= 400 {
            return Err(Self::api_error(status, &text));
        }

        serde_json::from_str(&text).map_err(|e| {
            warn!(error = %e, body = %text, "failed to decode response body");
            LambdaCloudError::Serialization(e)
        })
    }

    /// Build the error for a failure status from the response body.
    ///
    /// The failure envelope's `code` and `message` are each optional. A body
    /// that is not a JSON object is carried verbatim in `message`.
    fn api_error(status: StatusCode, body: &str) -> LambdaCloudError {
        let envelope: ApiErrorBody = serde_json::from_str(body).unwrap_or_else(|_| ApiErrorBody {
            code: None,
            message: if body.is_empty() {
                None
            } else {
                Some(body.to_string())
            },
        });

        LambdaCloudError::Api {
            status: status.as_u16(),
            code: envelope.code,
            message: envelope.message,
        }
    }

    /// Resolve a relative path against the base URL. No normalization is
    /// applied; callers supply the leading separator.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}
