//! Main TVRage API
//!
//! This module provides the high-level API. It combines a [`Transport`]
//! with the XML parsers: each operation builds the feed URL, fetches it,
//! rejects non-success statuses, parses the body and runs the matching
//! parser pipeline.

use crate::client::{ClientConfig, HttpTransport, Transport};
use crate::error::{Result, TvRageError};
use crate::parser::{
    is_valid_string, parse_document, parse_episode_info, parse_episode_list,
    parse_search_results, parse_show_info, to_int, XmlDocument,
};
use crate::types::{Episode, EpisodeList, ShowInfo};

/// Feed endpoints and the query parameter each one takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Search,
    ShowInfo,
    EpisodeList,
    EpisodeInfo,
}

impl Endpoint {
    fn path(self) -> &'static str {
        match self {
            Endpoint::Search => "search.php",
            Endpoint::ShowInfo => "showinfo.php",
            Endpoint::EpisodeList => "episode_list.php",
            Endpoint::EpisodeInfo => "episodeinfo.php",
        }
    }

    fn param(self) -> &'static str {
        match self {
            Endpoint::Search => "show",
            Endpoint::ShowInfo | Endpoint::EpisodeList | Endpoint::EpisodeInfo => "sid",
        }
    }
}

/// Main API for the TVRage feeds
///
/// Provides methods for searching shows, getting show details, and
/// fetching episode lists. Operations that find nothing return an empty
/// or default record rather than an error; check `is_valid()` on the
/// result.
///
/// # Example
/// ```no_run
/// use tvrage_core::TvRageApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = TvRageApi::new("my-api-key")?;
///
///     let results = api.search_show("Chuck").await?;
///     println!("Found {} results", results.len());
///
///     Ok(())
/// }
/// ```
pub struct TvRageApi<T = HttpTransport> {
    transport: T,
    api_key: String,
    base_url: String,
}

impl TvRageApi<HttpTransport> {
    /// Create an API client with default configuration.
    ///
    /// # Errors
    /// - `TvRageError::InvalidApiKey` if `api_key` is blank
    /// - any error from building the HTTP transport
    ///
    /// # Example
    /// ```
    /// use tvrage_core::TvRageApi;
    ///
    /// let api = TvRageApi::new("my-api-key").expect("Failed to create client");
    /// ```
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(api_key, &ClientConfig::default())
    }

    /// Create an API client with custom configuration.
    pub fn with_config(api_key: &str, config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::with_config(config)?;
        Self::with_transport(api_key, &config.base_url, transport)
    }
}

impl<T: Transport> TvRageApi<T> {
    /// Create an API client over any transport.
    ///
    /// This is useful for testing or when requests must go through an
    /// existing HTTP stack.
    ///
    /// # Arguments
    /// * `api_key` - TVRage feed key
    /// * `base_url` - feed root, e.g. [`crate::client::DEFAULT_BASE_URL`]
    /// * `transport` - performs the actual requests
    pub fn with_transport(api_key: &str, base_url: &str, transport: T) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(TvRageError::InvalidApiKey);
        }

        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            transport,
            api_key: api_key.trim().to_string(),
            base_url,
        })
    }

    /// Search for shows by name.
    ///
    /// # Returns
    /// * `Ok(Vec<ShowInfo>)` with matching shows, empty if none match or if
    ///   `show_name` is blank
    ///
    /// # Example
    /// ```no_run
    /// use tvrage_core::TvRageApi;
    ///
    /// # async fn example() -> Result<(), tvrage_core::TvRageError> {
    /// let api = TvRageApi::new("my-api-key")?;
    /// for show in api.search_show("Chuck").await? {
    ///     println!("{} ({})", show.show_name(), show.show_id());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_show(&self, show_name: &str) -> Result<Vec<ShowInfo>> {
        if !is_valid_string(show_name) {
            return Ok(Vec::new());
        }

        let url = self.build_url(Endpoint::Search, show_name.trim());
        let document = self.fetch_document(&url).await?;
        Ok(parse_search_results(&document))
    }

    /// Get full information about a show.
    ///
    /// # Returns
    /// * `Ok(ShowInfo)` - the show, or a default (invalid) record when
    ///   `show_id` is 0 or the feed returned no show
    pub async fn get_show_info(&self, show_id: u32) -> Result<ShowInfo> {
        if show_id == 0 {
            return Ok(ShowInfo::default());
        }

        let url = self.build_url(Endpoint::ShowInfo, &show_id.to_string());
        let document = self.fetch_document(&url).await?;
        Ok(parse_show_info(&document)
            .into_iter()
            .next()
            .unwrap_or_default())
    }

    /// Like [`get_show_info`](Self::get_show_info) with a textual id.
    pub async fn get_show_info_str(&self, show_id: &str) -> Result<ShowInfo> {
        if !is_valid_string(show_id) {
            return Ok(ShowInfo::default());
        }

        match u32::try_from(to_int(show_id, 0)) {
            Ok(id) => self.get_show_info(id).await,
            Err(_) => Ok(ShowInfo::default()),
        }
    }

    /// Get all episodes of a show.
    ///
    /// # Returns
    /// * `Ok(EpisodeList)` - check `is_valid()`; a default list is returned
    ///   for a blank `show_id`
    ///
    /// # Example
    /// ```no_run
    /// use tvrage_core::TvRageApi;
    ///
    /// # async fn example() -> Result<(), tvrage_core::TvRageError> {
    /// let api = TvRageApi::new("my-api-key")?;
    /// let list = api.get_episode_list("15614").await?;
    /// for ep in list.episodes() {
    ///     println!("{}: {}", ep.episode_number().sxxeyy(), ep.title());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_episode_list(&self, show_id: &str) -> Result<EpisodeList> {
        if !is_valid_string(show_id) {
            return Ok(EpisodeList::default());
        }

        let url = self.build_url(Endpoint::EpisodeList, show_id.trim());
        let document = self.fetch_document(&url).await?;
        Ok(parse_episode_list(&document))
    }

    /// Get a single episode.
    ///
    /// # Returns
    /// * `Ok(Episode)` - check `is_valid()`; a default episode is returned
    ///   when any argument is blank
    pub async fn get_episode_info(&self, show_id: &str, season: &str, episode: &str) -> Result<Episode> {
        if !is_valid_string(show_id) || !is_valid_string(season) || !is_valid_string(episode) {
            return Ok(Episode::default());
        }

        let mut url = self.build_url(Endpoint::EpisodeInfo, show_id.trim());
        url.push_str(&format!(
            "&ep={}x{}",
            urlencoding::encode(season.trim()),
            urlencoding::encode(episode.trim())
        ));
        let document = self.fetch_document(&url).await?;
        Ok(parse_episode_info(&document))
    }

    /// Build the feed URL for an endpoint.
    fn build_url(&self, endpoint: Endpoint, data: &str) -> String {
        format!(
            "{}{}?key={}&{}={}",
            self.base_url,
            endpoint.path(),
            urlencoding::encode(&self.api_key),
            endpoint.param(),
            urlencoding::encode(data)
        )
    }

    /// URL with the API key masked, for logs and errors.
    fn redact(&self, url: &str) -> String {
        let key_param = format!("key={}&", urlencoding::encode(&self.api_key));
        url.replacen(&key_param, "key=***&", 1)
    }

    /// Fetch a URL, reject non-success statuses, and parse the body.
    async fn fetch_document(&self, url: &str) -> Result<XmlDocument> {
        let safe_url = self.redact(url);
        tracing::trace!("Request URL: {}", safe_url);

        let response = self
            .transport
            .fetch(url)
            .await
            .map_err(|e| redact_error(e, &safe_url))?;
        check_status(&safe_url, response.status)?;

        parse_document(&response.body).map_err(|e| {
            tracing::warn!("Failed to parse response from {}: {}", safe_url, e);
            TvRageError::ParseError {
                url: safe_url,
                message: e.to_string(),
            }
        })
    }
}

/// Swap the URL reqwest attaches to its errors for the masked one.
fn redact_error(error: TvRageError, safe_url: &str) -> TvRageError {
    match error {
        TvRageError::HttpError(e) => TvRageError::HttpError(match reqwest::Url::parse(safe_url) {
            Ok(url) => e.with_url(url),
            Err(_) => e.without_url(),
        }),
        other => other,
    }
}

/// Map a status code onto the transport error classes.
fn check_status(url: &str, status: u16) -> Result<()> {
    if status >= 500 {
        return Err(TvRageError::ServerError {
            url: url.to_string(),
            status,
        });
    }
    if status >= 300 {
        return Err(TvRageError::NotFound {
            url: url.to_string(),
            status,
        });
    }
    Ok(())
}
