//! URL helper functions for the niconico search API
//!
//! Provides the endpoint constants and query string encoding.

/// Origin of the public search API
pub const API_DOMAIN: &str = "https://api.search.nicovideo.jp";

/// Search services exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Service {
    #[default]
    Video,
    /// Live broadcasts; `NicoVideoFinder` never targets it, build URLs with [`build_search_url`]
    Live,
}

impl Service {
    /// Path of the service's search endpoint, relative to the API origin
    pub fn search_path(&self) -> &'static str {
        match self {
            Service::Video => "/api/v2/video/contents/search",
            Service::Live => "/api/v2/live/contents/search",
        }
    }
}

/// Percent-encodes a query component the way HTML forms do
///
/// Unreserved characters stay as they are, spaces become `+` and everything
/// else is percent-encoded as UTF-8.
///
/// # Example
/// ```
/// use nico2finder_core::url::encode_component;
/// assert_eq!(encode_component("filters[tags][0]"), "filters%5Btags%5D%5B0%5D");
/// assert_eq!(encode_component("a b+c"), "a+b%2Bc");
/// ```
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

/// Encodes `(name, value)` pairs into a query string without leading `?`
///
/// Pair order is preserved.
pub fn encode_query<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                encode_component(name.as_ref()),
                encode_component(value.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds the full search URL for a service
///
/// # Arguments
/// * `base_url` - API origin, normally [`API_DOMAIN`]
/// * `service` - Which search endpoint to hit
/// * `params` - Query parameters in the order they should appear
///
/// # Example
/// ```
/// use nico2finder_core::url::{build_search_url, Service, API_DOMAIN};
/// let url = build_search_url(API_DOMAIN, Service::Video, &[("q", "初音ミク"), ("_limit", "10")]);
/// assert_eq!(
///     url,
///     "https://api.search.nicovideo.jp/api/v2/video/contents/search?q=%E5%88%9D%E9%9F%B3%E3%83%9F%E3%82%AF&_limit=10"
/// );
/// ```
pub fn build_search_url<K, V>(base_url: &str, service: Service, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    format!(
        "{}{}?{}",
        base_url.trim_end_matches('/'),
        service.search_path(),
        encode_query(params)
    )
}
