//! niconico Video Search Client
//!
//! Provides an async API for the public niconico content search endpoint.
//!
//! # Overview
//!
//! This crate turns structured search options into the API's query string
//! and hands back the JSON response as-is:
//! - [`SearchFilter`] maps optional constraints onto `filters[...]` parameters
//! - [`NicoVideoFinder`] owns the response field toggles and performs searches
//! - [`Transport`] is the HTTP seam, implemented over reqwest by [`HttpTransport`]
//!
//! # Example
//!
//! ```no_run
//! use nico2finder_core::{NicoVideoFinder, Result, SearchFilter, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let finder = NicoVideoFinder::new()?;
//!
//!     let filter = SearchFilter::builder()
//!         .least_views(1000)
//!         .tag(["VOCALOID", "ミク"])
//!         .build();
//!
//!     let json = finder
//!         .find_video(&SearchRequest::new("初音ミク").filter(filter))
//!         .await?;
//!
//!     for hit in json["data"].as_array().into_iter().flatten() {
//!         println!("{}: {}", hit["contentId"], hit["title"]);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! The response schema belongs to the remote service and is not modelled
//! here; each call is a single request with no retry.

mod client;
mod error;
mod fields;
mod filter;
mod finder;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, DEFAULT_APP_NAME, HttpTransport, Transport};

// Re-export error types
pub use error::{FinderError, Result};

// Re-export search API
pub use fields::ResponseFields;
pub use filter::{FilterOptions, SearchFilter};
pub use finder::{NicoVideoFinder, SearchRequest};

// Re-export data types
pub use types::{OneOrMany, ParamValue, ResponseField, Sort, Target};

// Re-export URL helpers for convenience
pub use url::{API_DOMAIN, Service, build_search_url};
