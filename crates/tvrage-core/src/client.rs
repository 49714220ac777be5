//! HTTP transport for the TVRage feeds
//!
//! The API layer talks to the network only through the [`Transport`] trait,
//! so tests and embedders can supply their own. [`HttpTransport`] is the
//! default: a reqwest client with rate limiting, optional proxy, and retry
//! with exponential backoff on 429 and 5xx responses.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::error::{Result, TvRageError};

/// Default feed location
pub const DEFAULT_BASE_URL: &str = "http://services.tvrage.com/myfeeds/";

/// Default User-Agent sent with every request
const DEFAULT_USER_AGENT: &str = concat!("tvrage-core/", env!("CARGO_PKG_VERSION"));

/// Base delay for exponential backoff (in milliseconds)
const BASE_RETRY_DELAY_MS: u64 = 1000;

/// Raw reply handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Response body decoded as text
    pub body: String,
    /// HTTP status code
    pub status: u16,
}

impl RawResponse {
    pub fn new(body: impl Into<String>, status: u16) -> Self {
        Self {
            body: body.into(),
            status,
        }
    }
}

/// Fetches a URL and returns its body and status.
///
/// Implementations own timeouts, proxies and retries. They should return
/// non-2xx statuses as a [`RawResponse`] and reserve `Err` for failures
/// where no status is available.
pub trait Transport: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// Rate limiter to control request frequency
///
/// Ensures that requests are spaced at least `min_interval` apart.
pub struct RateLimiter {
    /// Minimum interval between requests
    min_interval: Duration,
    /// Timestamp of the last request
    last_request: Arc<Mutex<Instant>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the specified requests per second
    ///
    /// # Example
    /// ```
    /// use tvrage_core::client::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(2.0); // 2 requests per second
    /// ```
    pub fn new(requests_per_second: f64) -> Self {
        let min_interval = Duration::from_secs_f64(1.0 / requests_per_second);
        let now = Instant::now();
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(now.checked_sub(min_interval).unwrap_or(now))),
        }
    }

    /// Wait until the minimum interval since the last request has passed.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();

        if elapsed < self.min_interval {
            let wait_time = self.min_interval - elapsed;
            sleep(wait_time).await;
        }

        *last = Instant::now();
    }

    /// Get the minimum interval between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// Proxy settings for [`HttpTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Proxy URL, e.g. `http://proxy.local:8080`
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Configuration for the TVRage HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Feed base URL, ending in `/` (default: [`DEFAULT_BASE_URL`])
    pub base_url: String,
    /// Maximum requests per second (default: 2.0)
    pub requests_per_second: f64,
    /// Whole-request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Connect timeout in seconds (default: 10)
    pub connect_timeout_secs: u64,
    /// Retries on 429 and 5xx before giving up (default: 3)
    pub max_retries: u32,
    /// Optional HTTP proxy
    pub proxy: Option<ProxyConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            requests_per_second: 2.0,
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_retries: 3,
            proxy: None,
        }
    }
}

/// reqwest-backed [`Transport`] with rate limiting and retry logic
pub struct HttpTransport {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Rate limiter for request throttling
    rate_limiter: RateLimiter,
    max_retries: u32,
}

impl HttpTransport {
    /// Create a transport with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a transport with custom configuration
    ///
    /// # Errors
    /// - `TvRageError::InvalidConfig` - rate or proxy settings are unusable
    /// - `TvRageError::HttpError` - the reqwest client cannot be built
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        if !(config.requests_per_second.is_finite() && config.requests_per_second > 0.0) {
            return Err(TvRageError::InvalidConfig(format!(
                "requests_per_second must be positive, got {}",
                config.requests_per_second
            )));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs));

        if let Some(proxy) = &config.proxy {
            let mut p = reqwest::Proxy::all(&proxy.url)
                .map_err(|e| TvRageError::InvalidConfig(format!("proxy {}: {}", proxy.url, e)))?;
            if let (Some(user), Some(pass)) = (&proxy.username, &proxy.password) {
                p = p.basic_auth(user, pass);
            }
            builder = builder.proxy(p);
        }

        Ok(Self {
            client: builder.build()?,
            rate_limiter: RateLimiter::new(config.requests_per_second),
            max_retries: config.max_retries,
        })
    }

    /// Internal method to fetch with retry logic
    async fn fetch_with_retry(&self, url: &str) -> Result<RawResponse> {
        let mut attempt = 0;
        loop {
            // Wait for rate limiter before making request
            self.rate_limiter.acquire().await;

            let response = self.client.get(url).send().await?;
            let status = response.status();

            let retryable =
                status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error();
            if retryable && attempt < self.max_retries {
                let delay = self.calculate_backoff_delay(attempt);
                tracing::debug!(
                    "Status {} from feed, retrying in {:?} (attempt {})",
                    status.as_u16(),
                    delay,
                    attempt + 1
                );
                sleep(delay).await;
                attempt += 1;
                continue;
            }

            let body = response.text().await?;
            return Ok(RawResponse::new(body, status.as_u16()));
        }
    }

    /// Calculate exponential backoff delay for retry
    fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        // Exponential backoff: 1s, 2s, 4s, ...
        let delay_ms = BASE_RETRY_DELAY_MS * 2u64.pow(attempt);
        Duration::from_millis(delay_ms)
    }

    /// Get a reference to the rate limiter (for testing)
    #[cfg(test)]
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<RawResponse>> + Send {
        self.fetch_with_retry(url)
    }
}
