//! Search filters
//!
//! Translates optional search constraints into the API's bracketed parameter
//! names (`filters[viewCounter][gte]`, `filters[tags][0]`, ...).
//!
//! # Example
//!
//! ```
//! use nico2finder_core::SearchFilter;
//!
//! let filter = SearchFilter::builder()
//!     .least_views(1000)
//!     .tag(["VOCALOID", "ミク"])
//!     .build();
//!
//! assert_eq!(filter.get("filters[viewCounter][gte]").map(|v| v.to_string()), Some("1000".into()));
//! assert_eq!(filter.get("filters[tags][1]").map(|v| v.to_string()), Some("ミク".into()));
//! ```

use crate::types::{OneOrMany, ParamValue};

/// Optional constraints collected before a [`SearchFilter`] is built
///
/// Every field is independent; `None` contributes nothing to the query.
/// Values are not validated, the API server decides what is acceptable.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub user_id: Option<ParamValue>,
    pub least_views: Option<ParamValue>,
    pub most_views: Option<ParamValue>,
    pub least_comments: Option<ParamValue>,
    pub most_comments: Option<ParamValue>,
    pub least_mylists: Option<ParamValue>,
    pub most_mylists: Option<ParamValue>,
    /// Minimum duration in seconds
    pub shortest_length: Option<ParamValue>,
    /// Maximum duration in seconds
    pub longest_length: Option<ParamValue>,
    /// ISO-8601 timestamp with offset, e.g. `2011-01-01T00:00:00+09:00`
    pub posted_after: Option<ParamValue>,
    pub posted_before: Option<ParamValue>,
    pub tag: Option<OneOrMany>,
    pub genre: Option<OneOrMany>,
}

impl FilterOptions {
    pub fn user_id(mut self, value: impl Into<ParamValue>) -> Self {
        self.user_id = Some(value.into());
        self
    }

    pub fn least_views(mut self, value: impl Into<ParamValue>) -> Self {
        self.least_views = Some(value.into());
        self
    }

    pub fn most_views(mut self, value: impl Into<ParamValue>) -> Self {
        self.most_views = Some(value.into());
        self
    }

    pub fn least_comments(mut self, value: impl Into<ParamValue>) -> Self {
        self.least_comments = Some(value.into());
        self
    }

    pub fn most_comments(mut self, value: impl Into<ParamValue>) -> Self {
        self.most_comments = Some(value.into());
        self
    }

    pub fn least_mylists(mut self, value: impl Into<ParamValue>) -> Self {
        self.least_mylists = Some(value.into());
        self
    }

    pub fn most_mylists(mut self, value: impl Into<ParamValue>) -> Self {
        self.most_mylists = Some(value.into());
        self
    }

    pub fn shortest_length(mut self, seconds: impl Into<ParamValue>) -> Self {
        self.shortest_length = Some(seconds.into());
        self
    }

    pub fn longest_length(mut self, seconds: impl Into<ParamValue>) -> Self {
        self.longest_length = Some(seconds.into());
        self
    }

    pub fn posted_after(mut self, timestamp: impl Into<ParamValue>) -> Self {
        self.posted_after = Some(timestamp.into());
        self
    }

    pub fn posted_before(mut self, timestamp: impl Into<ParamValue>) -> Self {
        self.posted_before = Some(timestamp.into());
        self
    }

    /// Restrict to one tag or to every tag of a sequence
    pub fn tag(mut self, tags: impl Into<OneOrMany>) -> Self {
        self.tag = Some(tags.into());
        self
    }

    /// Restrict to one genre or to every genre of a sequence
    pub fn genre(mut self, genres: impl Into<OneOrMany>) -> Self {
        self.genre = Some(genres.into());
        self
    }

    pub fn build(self) -> SearchFilter {
        SearchFilter::new(self)
    }
}

/// Immutable set of `filters[...]` query parameters
///
/// Keys are emitted in a fixed order (user, views, comments, mylists,
/// length, posting time, tags, genre) regardless of the order options were
/// set in, so the resulting query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    filters: Vec<(String, ParamValue)>,
}

impl SearchFilter {
    /// Start collecting filter options
    pub fn builder() -> FilterOptions {
        FilterOptions::default()
    }

    /// Build the parameter set from collected options
    pub fn new(options: FilterOptions) -> Self {
        let mut filter = Self::default();

        filter.set_attr("[userId][0]", options.user_id);
        filter.set_attr("[viewCounter][gte]", options.least_views);
        filter.set_attr("[viewCounter][lte]", options.most_views);
        filter.set_attr("[commentCounter][gte]", options.least_comments);
        filter.set_attr("[commentCounter][lte]", options.most_comments);
        filter.set_attr("[mylistCounter][gte]", options.least_mylists);
        filter.set_attr("[mylistCounter][lte]", options.most_mylists);
        filter.set_attr("[lengthSeconds][gte]", options.shortest_length);
        filter.set_attr("[lengthSeconds][lte]", options.longest_length);
        filter.set_attr("[startTime][gte]", options.posted_after);
        filter.set_attr("[startTime][lte]", options.posted_before);
        filter.set_indexed("tags", options.tag);
        filter.set_indexed("genre", options.genre);

        filter
    }

    fn set_attr(&mut self, key: &str, value: Option<ParamValue>) {
        if let Some(value) = value {
            self.filters.push((format!("filters{}", key), value));
        }
    }

    fn set_indexed(&mut self, field: &str, values: Option<OneOrMany>) {
        let Some(values) = values else {
            return;
        };
        for (index, value) in values.into_vec().into_iter().enumerate() {
            self.set_attr(&format!("[{}][{}]", field, index), Some(value));
        }
    }

    /// All filter parameters as `(name, value)` pairs
    pub fn query(&self) -> &[(String, ParamValue)] {
        &self.filters
    }

    /// Value of a single parameter by full name
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.filters
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl From<FilterOptions> for SearchFilter {
    fn from(options: FilterOptions) -> Self {
        SearchFilter::new(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pairs(items: &[(&str, ParamValue)]) -> Vec<(String, ParamValue)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_filter_empty() {
        let f = SearchFilter::builder().build();
        assert!(f.is_empty());
        assert!(f.query().is_empty());
    }

    #[test]
    fn test_filter_userid() {
        let f = SearchFilter::builder().user_id(1).build();
        assert_eq!(f.query(), pairs(&[("filters[userId][0]", 1.into())]));
    }

    #[test]
    fn test_filter_least_views() {
        let f = SearchFilter::builder().least_views(1000).build();
        assert_eq!(f.query(), pairs(&[("filters[viewCounter][gte]", 1000.into())]));
    }

    #[test]
    fn test_filter_most_views() {
        let f = SearchFilter::builder().most_views(5000).build();
        assert_eq!(f.query(), pairs(&[("filters[viewCounter][lte]", 5000.into())]));
    }

    #[test]
    fn test_filter_range_views() {
        let f = SearchFilter::builder().least_views(1000).most_views(5000).build();
        assert_eq!(
            f.query(),
            pairs(&[
                ("filters[viewCounter][gte]", 1000.into()),
                ("filters[viewCounter][lte]", 5000.into()),
            ])
        );
    }

    #[test]
    fn test_filter_least_comments() {
        let f = SearchFilter::builder().least_comments(1000).build();
        assert_eq!(f.query(), pairs(&[("filters[commentCounter][gte]", 1000.into())]));
    }

    #[test]
    fn test_filter_most_comments() {
        let f = SearchFilter::builder().most_comments(5000).build();
        assert_eq!(f.query(), pairs(&[("filters[commentCounter][lte]", 5000.into())]));
    }

    #[test]
    fn test_filter_range_comments() {
        let f = SearchFilter::builder().least_comments(1000).most_comments(5000).build();
        assert_eq!(
            f.query(),
            pairs(&[
                ("filters[commentCounter][gte]", 1000.into()),
                ("filters[commentCounter][lte]", 5000.into()),
            ])
        );
    }

    #[test]
    fn test_filter_least_mylists() {
        let f = SearchFilter::builder().least_mylists(1000).build();
        assert_eq!(f.query(), pairs(&[("filters[mylistCounter][gte]", 1000.into())]));
    }

    #[test]
    fn test_filter_most_mylists() {
        let f = SearchFilter::builder().most_mylists(5000).build();
        assert_eq!(f.query(), pairs(&[("filters[mylistCounter][lte]", 5000.into())]));
    }

    #[test]
    fn test_filter_range_mylists() {
        let f = SearchFilter::builder().least_mylists(1000).most_mylists(5000).build();
        assert_eq!(
            f.query(),
            pairs(&[
                ("filters[mylistCounter][gte]", 1000.into()),
                ("filters[mylistCounter][lte]", 5000.into()),
            ])
        );
    }

    #[test]
    fn test_filter_shortest_length() {
        let f = SearchFilter::builder().shortest_length(60).build();
        assert_eq!(f.query(), pairs(&[("filters[lengthSeconds][gte]", 60.into())]));
    }

    #[test]
    fn test_filter_longest_length() {
        let f = SearchFilter::builder().longest_length(600).build();
        assert_eq!(f.query(), pairs(&[("filters[lengthSeconds][lte]", 600.into())]));
    }

    #[test]
    fn test_filter_range_length() {
        let f = SearchFilter::builder().shortest_length(60).longest_length(600).build();
        assert_eq!(
            f.query(),
            pairs(&[
                ("filters[lengthSeconds][gte]", 60.into()),
                ("filters[lengthSeconds][lte]", 600.into()),
            ])
        );
    }

    #[test]
    fn test_filter_posted_after() {
        let f = SearchFilter::builder().posted_after("2011-01-01T00:00:00+09:00").build();
        assert_eq!(
            f.query(),
            pairs(&[("filters[startTime][gte]", "2011-01-01T00:00:00+09:00".into())])
        );
    }

    #[test]
    fn test_filter_posted_before() {
        let f = SearchFilter::builder().posted_before("2020-01-01T00:00:00+09:00").build();
        assert_eq!(
            f.query(),
            pairs(&[("filters[startTime][lte]", "2020-01-01T00:00:00+09:00".into())])
        );
    }

    #[test]
    fn test_filter_range_posted() {
        let f = SearchFilter::builder()
            .posted_after("2011-01-01T00:00:00+09:00")
            .posted_before("2020-01-01T00:00:00+09:00")
            .build();
        assert_eq!(
            f.query(),
            pairs(&[
                ("filters[startTime][gte]", "2011-01-01T00:00:00+09:00".into()),
                ("filters[startTime][lte]", "2020-01-01T00:00:00+09:00".into()),
            ])
        );
    }

    #[test]
    fn test_filter_tag() {
        let f = SearchFilter::builder().tag("VOCALOID").build();
        assert_eq!(f.query(), pairs(&[("filters[tags][0]", "VOCALOID".into())]));
    }

    #[test]
    fn test_filter_multi_tags() {
        let expected = pairs(&[
            ("filters[tags][0]", "VOCALOID".into()),
            ("filters[tags][1]", "ミク".into()),
            ("filters[tags][2]", "リン".into()),
        ]);

        let from_array = SearchFilter::builder().tag(["VOCALOID", "ミク", "リン"]).build();
        let from_vec = SearchFilter::builder()
            .tag(vec!["VOCALOID".to_string(), "ミク".to_string(), "リン".to_string()])
            .build();

        assert_eq!(from_array.query(), expected);
        assert_eq!(from_vec.query(), expected);
    }

    #[test]
    fn test_filter_genre() {
        let f = SearchFilter::builder().genre("音楽・サウンド").build();
        assert_eq!(f.query(), pairs(&[("filters[genre][0]", "音楽・サウンド".into())]));
    }

    #[test]
    fn test_filter_multi_genres() {
        let f = SearchFilter::builder()
            .genre(vec!["音楽・サウンド", "ゲーム", "その他"])
            .build();
        assert_eq!(
            f.query(),
            pairs(&[
                ("filters[genre][0]", "音楽・サウンド".into()),
                ("filters[genre][1]", "ゲーム".into()),
                ("filters[genre][2]", "その他".into()),
            ])
        );
    }

    #[test]
    fn test_filter_empty_sequence_contributes_nothing() {
        let f = SearchFilter::builder().tag(Vec::<String>::new()).build();
        assert!(f.is_empty());
    }

    #[test]
    fn test_filter_values_pass_through_unvalidated() {
        let f = SearchFilter::builder().least_views(-1).posted_after("not a date").build();
        assert_eq!(f.get("filters[viewCounter][gte]"), Some(&ParamValue::Number(-1)));
        assert_eq!(
            f.get("filters[startTime][gte]"),
            Some(&ParamValue::Text("not a date".to_string()))
        );
    }

    #[test]
    fn test_filter_key_order_is_fixed() {
        let f = SearchFilter::builder().genre("ゲーム").tag("VOCALOID").user_id(7).build();
        let keys: Vec<&str> = f.query().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["filters[userId][0]", "filters[tags][0]", "filters[genre][0]"]);
    }

    #[test]
    fn test_filter_query_is_stable() {
        let f = SearchFilter::builder().least_views(1000).tag("a").build();
        let first = f.query().to_vec();
        assert_eq!(f.query(), first);
        assert!(std::ptr::eq(f.query(), f.query()));
    }

    type Setter = fn(FilterOptions, ParamValue) -> FilterOptions;

    const RANGE_SETTERS: [(&str, Setter, Setter); 5] = [
        ("viewCounter", |o, v| o.least_views(v), |o, v| o.most_views(v)),
        ("commentCounter", |o, v| o.least_comments(v), |o, v| o.most_comments(v)),
        ("mylistCounter", |o, v| o.least_mylists(v), |o, v| o.most_mylists(v)),
        ("lengthSeconds", |o, v| o.shortest_length(v), |o, v| o.longest_length(v)),
        ("startTime", |o, v| o.posted_after(v), |o, v| o.posted_before(v)),
    ];

    proptest! {
        #[test]
        fn prop_tags_indexed_in_input_order(tags in prop::collection::vec("[a-zA-Z0-9]{1,12}", 0..16)) {
            let f = SearchFilter::builder().tag(tags.clone()).build();
            prop_assert_eq!(f.len(), tags.len());
            for (i, tag) in tags.iter().enumerate() {
                let key = format!("filters[tags][{}]", i);
                prop_assert_eq!(f.get(&key).cloned(), Some(ParamValue::Text(tag.clone())));
            }
        }

        #[test]
        fn prop_range_bounds_emit_only_given_keys(
            field in 0..RANGE_SETTERS.len(),
            lower in prop::option::of(any::<i32>()),
            upper in prop::option::of(any::<i32>()),
        ) {
            let (name, set_lower, set_upper) = RANGE_SETTERS[field];
            let mut options = SearchFilter::builder();
            if let Some(v) = lower {
                options = set_lower(options, v.into());
            }
            if let Some(v) = upper {
                options = set_upper(options, v.into());
            }
            let f = options.build();

            let gte = format!("filters[{}][gte]", name);
            let lte = format!("filters[{}][lte]", name);
            prop_assert_eq!(f.len(), lower.is_some() as usize + upper.is_some() as usize);
            prop_assert_eq!(f.get(&gte).cloned(), lower.map(ParamValue::from));
            prop_assert_eq!(f.get(&lte).cloned(), upper.map(ParamValue::from));
        }
    }
}
