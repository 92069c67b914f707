//! Core data types for the niconico search client
//!
//! Parameter values, sort tokens, search targets and the closed set of
//! response fields the API knows about.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single query parameter value, either numeric or textual
///
/// The API accepts both for filters (`filters[viewCounter][gte]=1000`,
/// `filters[tags][0]=VOCALOID`); values are passed through unvalidated.
///
/// Integers outside the `i64` range and floats are kept as their decimal
/// text, which is what ends up in the query string either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) => write!(f, "{}", n),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Number(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => ParamValue::Number(n),
            Err(_) => ParamValue::Text(value.to_string()),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

/// Input for multi-valued filters: a single value or an ordered sequence
///
/// Both shapes normalize to a `Vec` via [`OneOrMany::into_vec`]; a single
/// value lands at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany {
    One(ParamValue),
    Many(Vec<ParamValue>),
}

impl OneOrMany {
    /// Flatten into an ordered list of values
    pub fn into_vec(self) -> Vec<ParamValue> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl From<ParamValue> for OneOrMany {
    fn from(value: ParamValue) -> Self {
        OneOrMany::One(value)
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.into())
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        OneOrMany::One(value.into())
    }
}

impl From<i64> for OneOrMany {
    fn from(value: i64) -> Self {
        OneOrMany::One(value.into())
    }
}

impl From<Vec<ParamValue>> for OneOrMany {
    fn from(values: Vec<ParamValue>) -> Self {
        OneOrMany::Many(values)
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(ParamValue::from).collect())
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values.into_iter().map(ParamValue::from).collect())
    }
}

impl From<&[&str]> for OneOrMany {
    fn from(values: &[&str]) -> Self {
        OneOrMany::Many(values.iter().copied().map(ParamValue::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany {
    fn from(values: [&str; N]) -> Self {
        OneOrMany::Many(values.into_iter().map(ParamValue::from).collect())
    }
}

/// Sort order for search results
///
/// Each variant maps to the API's `_sort` token (`+field` ascending,
/// `-field` descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sort {
    /// Oldest posts first
    Oldest,
    /// Newest posts first
    #[default]
    Latest,
    LeastCommented,
    MostCommented,
    LeastPlayed,
    MostPlayed,
    Shortest,
    Longest,
    /// Most recently commented first
    RecentCommented,
}

impl Sort {
    /// Wire token for the `_sort` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Sort::Oldest => "+startTime",
            Sort::Latest => "-startTime",
            Sort::LeastCommented => "+commentCounter",
            Sort::MostCommented => "-commentCounter",
            Sort::LeastPlayed => "+viewCounter",
            Sort::MostPlayed => "-viewCounter",
            Sort::Shortest => "+lengthSeconds",
            Sort::Longest => "-lengthSeconds",
            Sort::RecentCommented => "-lastCommentTime",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text attribute the free-text query is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    #[default]
    Title,
    Description,
    Tags,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Title => "title",
            Target::Description => "description",
            Target::Tags => "tags",
        }
    }
}

/// A field the API can include in each search hit
///
/// [`ResponseField::ALL`] lists them in the order they are sent in the
/// `fields` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseField {
    ContentId,
    Title,
    Description,
    UserId,
    ViewCounter,
    MylistCounter,
    LengthSeconds,
    ThumbnailUrl,
    StartTime,
    ThreadId,
    CommentCounter,
    LastCommentTime,
    CategoryTags,
    ChannelId,
    Tags,
    TagsExact,
    LockTagsExact,
    Genre,
    GenreKeyword,
}

impl ResponseField {
    pub const ALL: [ResponseField; 19] = [
        ResponseField::ContentId,
        ResponseField::Title,
        ResponseField::Description,
        ResponseField::UserId,
        ResponseField::ViewCounter,
        ResponseField::MylistCounter,
        ResponseField::LengthSeconds,
        ResponseField::ThumbnailUrl,
        ResponseField::StartTime,
        ResponseField::ThreadId,
        ResponseField::CommentCounter,
        ResponseField::LastCommentTime,
        ResponseField::CategoryTags,
        ResponseField::ChannelId,
        ResponseField::Tags,
        ResponseField::TagsExact,
        ResponseField::LockTagsExact,
        ResponseField::Genre,
        ResponseField::GenreKeyword,
    ];

    /// API name of the field
    pub fn name(&self) -> &'static str {
        match self {
            ResponseField::ContentId => "contentId",
            ResponseField::Title => "title",
            ResponseField::Description => "description",
            ResponseField::UserId => "userId",
            ResponseField::ViewCounter => "viewCounter",
            ResponseField::MylistCounter => "mylistCounter",
            ResponseField::LengthSeconds => "lengthSeconds",
            ResponseField::ThumbnailUrl => "thumbnailUrl",
            ResponseField::StartTime => "startTime",
            ResponseField::ThreadId => "threadId",
            ResponseField::CommentCounter => "commentCounter",
            ResponseField::LastCommentTime => "lastCommentTime",
            ResponseField::CategoryTags => "categoryTags",
            ResponseField::ChannelId => "channelId",
            ResponseField::Tags => "tags",
            ResponseField::TagsExact => "tagsExact",
            ResponseField::LockTagsExact => "lockTagsExact",
            ResponseField::Genre => "genre",
            ResponseField::GenreKeyword => "genre.keyword",
        }
    }

    /// Look up a field by its API name; `None` for names the API doesn't know
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Whether the field is requested by a freshly created finder
    pub fn enabled_by_default(&self) -> bool {
        matches!(
            self,
            ResponseField::ContentId
                | ResponseField::Title
                | ResponseField::ViewCounter
                | ResponseField::MylistCounter
                | ResponseField::StartTime
                | ResponseField::CommentCounter
        )
    }
}

impl fmt::Display for ResponseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
