//! Main ShotAPI client implementation.

use crate::error::{check_response, Error, Result};
use crate::options::CaptureOptions;
use crate::types::*;
use crate::version::build_user_agent;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://shotapi.net";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const API_KEY_HEADER: &str = "X-API-Key";
const DIFF_PERCENTAGE_HEADER: &str = "X-Diff-Percentage";

/// Builder for constructing a [`Client`].
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    user_agent_suffix: Option<String>,
}

impl ClientBuilder {
    /// Create a new client builder with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent_suffix: None,
        }
    }

    /// Set the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = trim_base_url(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent suffix.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        if self.api_key.is_empty() {
            return Err(Error::Config("API key is required".into()));
        }
        api_key_header(&self.api_key)?;

        warn_if_insecure(&self.base_url);

        let user_agent = build_user_agent(self.user_agent_suffix.as_deref());
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&user_agent)
                .map_err(|_| Error::Config(format!("invalid User-Agent: {}", user_agent)))?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(Error::Http)?;

        Ok(Client {
            api_key: self.api_key,
            base_url: self.base_url,
            timeout: self.timeout,
            http_client,
        })
    }
}

/// The ShotAPI SDK client.
///
/// Each method issues exactly one POST request; there are no retries.
/// A `Client` can be shared between tasks by reference.
///
/// # Example
///
/// ```rust,no_run
/// use shotapi::{CaptureOptions, Client};
///
/// #[tokio::main]
/// async fn main() -> Result<(), shotapi::Error> {
///     let client = Client::new("sk_your_api_key")?;
///
///     let options = CaptureOptions {
///         full_page: Some(true),
///         ..Default::default()
///     };
///     let image = client.screenshot("https://example.com", &options).await?;
///
///     std::fs::write("screenshot.png", image).expect("write screenshot");
///     Ok(())
/// }
/// ```
pub struct Client {
    api_key: String,
    base_url: String,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a client with the default base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// Create a new client builder.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// The API key sent with every request.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Replace the API key used for subsequent requests.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> Result<()> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::Config("API key is required".into()));
        }
        api_key_header(&api_key)?;
        self.api_key = api_key;
        Ok(())
    }

    /// Replace the API base URL used for subsequent requests.
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = trim_base_url(url.into());
        warn_if_insecure(&self.base_url);
    }

    /// Replace the timeout used for subsequent requests.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Take a screenshot of a URL. Returns the image bytes.
    pub async fn screenshot(&self, url: &str, options: &CaptureOptions) -> Result<Vec<u8>> {
        let payload = UrlRequest {
            url,
            options: options.to_wire(),
        };
        self.post_bytes("/v1/screenshot", &payload).await
    }

    /// Render an HTML document to an image. Returns the image bytes.
    pub async fn render(&self, html: &str, options: &CaptureOptions) -> Result<Vec<u8>> {
        let payload = RenderRequest {
            html,
            options: options.to_wire(),
        };
        self.post_bytes("/v1/render", &payload).await
    }

    /// Extract metadata from a URL.
    pub async fn metadata(
        &self,
        url: &str,
        options: &CaptureOptions,
    ) -> Result<Map<String, Value>> {
        let payload = UrlRequest {
            url,
            options: options.to_wire(),
        };
        self.post_json("/v1/metadata", &payload).await
    }

    /// Take screenshots of several URLs with the same options.
    pub async fn batch<S: AsRef<str>>(
        &self,
        urls: &[S],
        options: &CaptureOptions,
    ) -> Result<Value> {
        let payload = BatchRequest {
            urls: urls.iter().map(S::as_ref).collect(),
            options: options.to_wire(),
        };
        self.post_json("/v1/batch", &payload).await
    }

    /// Compare two URLs visually.
    ///
    /// Only the viewport size from `options` is sent.
    pub async fn diff(&self, url_a: &str, url_b: &str, options: &DiffOptions) -> Result<DiffResult> {
        let (width, height) = options.resolved();
        let payload = DiffRequest {
            url_a,
            url_b,
            width,
            height,
        };

        let response = self.post("/v1/diff", &payload).await?;

        let header = response
            .headers()
            .get(DIFF_PERCENTAGE_HEADER)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
        let percentage = match parse_diff_percentage(header.as_deref()) {
            Some(p) => p,
            None => {
                if let Some(raw) = &header {
                    warn!(value = %raw, "Unparsable {} header, using 0.0", DIFF_PERCENTAGE_HEADER);
                }
                0.0
            }
        };

        let image = response.bytes().await?.to_vec();
        Ok(DiffResult { image, percentage })
    }

    // === Internal methods ===

    async fn post_bytes<B: Serialize>(&self, path: &str, body: &B) -> Result<Vec<u8>> {
        let response = self.post(path, body).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: Serialize,
    {
        let response = self.post(path, body).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Error::Json)
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, api_key_header(&self.api_key)?)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await?;

        debug!(endpoint = path, status = %response.status(), "ShotAPI response");

        check_response(response).await
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn warn_if_insecure(base_url: &str) {
    if !base_url.starts_with("https://") {
        warn!(
            base_url = %base_url,
            "API base URL is not using HTTPS. This is insecure."
        );
    }
}

fn api_key_header(api_key: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(api_key)
        .map_err(|_| Error::Config("API key contains invalid header characters".into()))?;
    value.set_sensitive(true);
    Ok(value)
}
