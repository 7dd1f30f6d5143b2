//! Filter normalization for list endpoints.
//!
//! Filters are typed at the call boundary and only turned into query-string
//! pairs by [`QueryString`]:
//!
//! | filter type | omitted when | sent as |
//! |---|---|---|
//! | `Option<&str>` text | `None` or `""` | the text |
//! | `Option<V>` value | `None` | `V`'s `Display` |
//! | [`StatusFilter`] | `All` | the status wire name |
//! | [`Filter`] | `Absent` | `"null"` for `Empty`, the value otherwise |
//!
//! `page` and `size` always come first when the query is paged. Encoding is
//! `application/x-www-form-urlencoded`, so a space becomes `+`.

use crate::error::ApiError;
use crate::page::PageRequest;
use serde::{Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

/// Wire value that selects records whose nullable reference is unset
pub const EMPTY_FILTER_VALUE: &str = "null";

/// Wire value of a status filter that does not filter
pub const ALL_STATUSES: &str = "all";

/// Tri-state filter for nullable references
///
/// - `Absent`: no filter, the key is left out
/// - `Empty`: only records with no reference (`key=null`)
/// - `Value(v)`: only records referencing `v`
///
/// As a JSON field it serializes to `null` or the value; pair it with
/// `#[serde(skip_serializing_if = "Filter::is_absent")]` to leave the field
/// out when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter<T> {
    #[default]
    Absent,
    Empty,
    Value(T),
}

impl<T> Filter<T> {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Empty => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Filter<U> {
        match self {
            Self::Absent => Filter::Absent,
            Self::Empty => Filter::Empty,
            Self::Value(v) => Filter::Value(f(v)),
        }
    }
}

/// `None` means no filter, `Some(v)` filters for `v`
impl<T> From<Option<T>> for Filter<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Value)
    }
}

impl<T: Serialize> Serialize for Filter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Absent | Self::Empty => serializer.serialize_none(),
        }
    }
}

/// Parses `"null"` or `"none"` (any case) as `Empty`, anything else as a value
impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(EMPTY_FILTER_VALUE) || s.eq_ignore_ascii_case("none") {
            return Ok(Self::Empty);
        }
        s.parse().map(Self::Value)
    }
}

/// Status filter where "all" means no filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S> StatusFilter<S> {
    #[must_use]
    pub const fn status(&self) -> Option<&S> {
        match self {
            Self::All => None,
            Self::Only(s) => Some(s),
        }
    }
}

impl<S> From<S> for StatusFilter<S> {
    fn from(status: S) -> Self {
        Self::Only(status)
    }
}

impl<S: FromStr> FromStr for StatusFilter<S> {
    type Err = S::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ALL_STATUSES) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Ordered query-string pairs for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(&'static str, String)>,
}

impl QueryString {
    /// Query without paging parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Query that starts with `page` and `size`
    #[must_use]
    pub fn paged(page: PageRequest) -> Self {
        Self {
            pairs: vec![
                ("page", page.page().to_string()),
                ("size", page.size().to_string()),
            ],
        }
    }

    /// Text filter, left out when missing or empty
    #[must_use]
    pub fn text(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((key, v.to_owned()));
        }
        self
    }

    /// Plain filter, left out only when missing
    #[must_use]
    pub fn value<V: Display>(mut self, key: &'static str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.pairs.push((key, v.to_string()));
        }
        self
    }

    #[must_use]
    pub fn status<S: Display>(mut self, key: &'static str, filter: &StatusFilter<S>) -> Self {
        if let StatusFilter::Only(status) = filter {
            self.pairs.push((key, status.to_string()));
        }
        self
    }

    #[must_use]
    pub fn tri_state<V: Display>(mut self, key: &'static str, filter: &Filter<V>) -> Self {
        match filter {
            Filter::Absent => {}
            Filter::Empty => self.pairs.push((key, EMPTY_FILTER_VALUE.to_owned())),
            Filter::Value(v) => self.pairs.push((key, v.to_string())),
        }
        self
    }

    /// First value recorded for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Form-encode the pairs in insertion order
    ///
    /// # Errors
    /// Returns `ApiError::InvalidRequest` if encoding fails.
    pub fn encode(&self) -> Result<String, ApiError> {
        serde_urlencoded::to_string(&self.pairs)
            .map_err(|e| ApiError::InvalidRequest(format!("cannot encode query string: {e}")))
    }
}
