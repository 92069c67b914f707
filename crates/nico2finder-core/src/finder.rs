//! Video search API
//!
//! Combines response field toggles, filters and the transport into one
//! search call.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;

use crate::client::{ClientConfig, HttpTransport, Transport};
use crate::error::{FinderError, Result};
use crate::fields::ResponseFields;
use crate::filter::SearchFilter;
use crate::types::{Sort, Target};
use crate::url::{Service, build_search_url};

const ACCEPT_VALUE: &str = "application/json, */*;q=0.8";

/// Parameters of a single search call
///
/// Defaults: targets `title`, sort [`Sort::Latest`], limit 10, no filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub targets: Vec<Target>,
    pub filter: Option<SearchFilter>,
    pub sort: Sort,
    pub limit: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            targets: vec![Target::Title],
            filter: None,
            sort: Sort::default(),
            limit: 10,
        }
    }

    /// Match the query against these attributes instead of the title only
    pub fn targets(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    pub fn filter(mut self, filter: impl Into<SearchFilter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    fn joined_targets(&self) -> String {
        if self.targets.is_empty() {
            return Target::default().as_str().to_string();
        }
        self.targets
            .iter()
            .map(Target::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Searches videos on niconico
///
/// Only the response field configuration persists between calls; each
/// search is an independent request.
///
/// # Example
///
/// ```no_run
/// use nico2finder_core::{NicoVideoFinder, SearchFilter, SearchRequest, Sort};
///
/// # async fn example() -> nico2finder_core::Result<()> {
/// let mut finder = NicoVideoFinder::new()?;
/// finder.configure_fields([("description", true)]);
///
/// let filter = SearchFilter::builder().least_views(1000).build();
/// let request = SearchRequest::new("初音ミク")
///     .filter(filter)
///     .sort(Sort::MostPlayed)
///     .limit(5);
///
/// let json = finder.find_video(&request).await?;
/// println!("{}", json["meta"]["totalCount"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NicoVideoFinder<T = HttpTransport> {
    transport: T,
    fields: ResponseFields,
    app_name: String,
    user_agent: HeaderValue,
    base_url: String,
}

impl NicoVideoFinder<HttpTransport> {
    /// Create a finder with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a finder with custom configuration
    ///
    /// # Errors
    /// - `InvalidConfig` if the HTTP client can't be built or `app_name`
    ///   is not a valid header value
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::with_config(&config)?;
        Self::with_transport(transport, config)
    }
}

impl<T: Transport> NicoVideoFinder<T> {
    /// Create a finder that sends its requests through `transport`
    ///
    /// `config.timeout_secs` is left to the transport.
    pub fn with_transport(transport: T, config: ClientConfig) -> Result<Self> {
        let user_agent = HeaderValue::from_str(&config.app_name).map_err(|_| {
            FinderError::InvalidConfig(format!(
                "app name {:?} is not a valid header value",
                config.app_name
            ))
        })?;

        Ok(Self {
            transport,
            fields: ResponseFields::default(),
            app_name: config.app_name,
            user_agent,
            base_url: config.base_url,
        })
    }

    /// Set which response fields to include, by API name
    ///
    /// Unknown names are ignored.
    pub fn configure_fields<I, K>(&mut self, overrides: I) -> &ResponseFields
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        self.fields.configure(overrides);
        &self.fields
    }

    /// Current include flag of every known response field
    pub fn current_fields(&self) -> Vec<(&'static str, bool)> {
        self.fields.current()
    }

    /// Typed access to the response field toggles
    pub fn fields_mut(&mut self) -> &mut ResponseFields {
        &mut self.fields
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Search titles for `query` with default sort, limit and no filter
    pub async fn search(&self, query: &str) -> Result<Value> {
        self.find_video(&SearchRequest::new(query)).await
    }

    /// Run a search and return the API's JSON response untouched
    ///
    /// # Errors
    /// - `Transport` if the GET fails or the status is not 2xx
    /// - `Decode` if the body is not JSON
    pub async fn find_video(&self, request: &SearchRequest) -> Result<Value> {
        let url = self.search_url(request);
        tracing::debug!(%url, "searching videos");

        let body = self.transport.get(&url, &self.headers()).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Query parameters a search would send, in wire order
    pub fn search_params(&self, request: &SearchRequest) -> Vec<(String, String)> {
        let mut params = vec![
            ("q".to_string(), request.query.clone()),
            ("targets".to_string(), request.joined_targets()),
            ("fields".to_string(), self.fields.joined()),
            ("_sort".to_string(), request.sort.as_str().to_string()),
            ("_context".to_string(), self.app_name.clone()),
            ("_limit".to_string(), request.limit.to_string()),
        ];

        if let Some(filter) = &request.filter {
            params.extend(
                filter
                    .query()
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_string())),
            );
        }

        params
    }

    /// Absolute URL a search would request
    pub fn search_url(&self, request: &SearchRequest) -> String {
        build_search_url(&self.base_url, Service::Video, &self.search_params(request))
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers
    }
}
