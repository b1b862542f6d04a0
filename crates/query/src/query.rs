use crate::error::QueryError;
use crate::parser::{RawSegment, segments};
use indexmap::IndexMap;
use indexmap::map::Entry;
use percent_encoding::percent_decode_str;
use std::slice;

/// The value(s) recorded for one query key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// The key appeared once.
    Single(String),
    /// The key appeared two or more times, in order of appearance.
    Multiple(Vec<String>),
}

impl QueryValue {
    /// Records another occurrence, promoting a scalar to a list.
    pub fn push(&mut self, value: String) {
        match self {
            QueryValue::Single(first) => {
                let first = std::mem::take(first);
                *self = QueryValue::Multiple(vec![first, value]);
            }
            QueryValue::Multiple(values) => values.push(value),
        }
    }

    /// The first recorded value.
    pub fn first(&self) -> &str {
        match self {
            QueryValue::Single(value) => value,
            QueryValue::Multiple(values) => values.first().map(String::as_str).unwrap_or(""),
        }
    }

    pub fn values(&self) -> &[String] {
        match self {
            QueryValue::Single(value) => slice::from_ref(value),
            QueryValue::Multiple(values) => values,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        QueryValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// A parsed query string, keys in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: IndexMap<String, QueryValue>,
}

/// Parses a query string, rejecting segments that have no `=`.
///
/// A leading `?` is ignored. Empty segments (`a=1&&b=2`, trailing `&`) are
/// skipped.
pub fn parse_query(input: &str) -> Result<Query, QueryError> {
    Query::parse(input)
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict parsing; see [`parse_query`].
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        let mut query = Query::new();
        for segment in segments(strip_marker(input))? {
            if segment.is_empty() {
                continue;
            }
            let (key, value) = decode_segment(&segment)?;
            query.append(key, value);
        }
        Ok(query)
    }

    /// Lenient parsing: malformed segments are logged and skipped.
    pub fn parse_lenient(input: &str) -> Self {
        let mut query = Query::new();
        let parsed = match segments(strip_marker(input)) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("ignoring unparsable query '{}': {}", input, e);
                return query;
            }
        };
        for segment in parsed {
            if segment.is_empty() {
                continue;
            }
            match decode_segment(&segment) {
                Ok((key, value)) => query.append(key, value),
                Err(e) => log::warn!("skipping query segment: {}", e),
            }
        }
        query
    }

    /// Records an occurrence of `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        match self.params.entry(key.into()) {
            Entry::Occupied(mut entry) => entry.get_mut().push(value.into()),
            Entry::Vacant(entry) => {
                entry.insert(QueryValue::Single(value.into()));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.get(key)
    }

    /// The first value recorded for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(QueryValue::first)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn strip_marker(input: &str) -> &str {
    input.strip_prefix('?').unwrap_or(input)
}

fn decode_segment(segment: &RawSegment<'_>) -> Result<(String, String), QueryError> {
    let raw_value = segment
        .value
        .ok_or_else(|| QueryError::malformed(segment.key, "missing '='"))?;
    let value = percent_decode_str(raw_value)
        .decode_utf8()
        .map_err(|e| QueryError::malformed(raw_value, format!("invalid UTF-8 after decoding: {}", e)))?;
    Ok((segment.key.to_string(), value.into_owned()))
}
