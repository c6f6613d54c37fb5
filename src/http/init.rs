//! Initializer shapes accepted by [`HeaderMap::from_init`].

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::http::headers::HeaderMap;

/// A value given at construction time: one string, or several strings
/// joined with `", "` before being appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderInitValue {
    Single(String),
    List(Vec<String>),
}

impl HeaderInitValue {
    pub fn into_joined(self) -> String {
        match self {
            HeaderInitValue::Single(value) => value,
            HeaderInitValue::List(values) => values.join(", "),
        }
    }
}

impl From<String> for HeaderInitValue {
    fn from(value: String) -> Self {
        HeaderInitValue::Single(value)
    }
}

impl From<&str> for HeaderInitValue {
    fn from(value: &str) -> Self {
        HeaderInitValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for HeaderInitValue {
    fn from(values: Vec<String>) -> Self {
        HeaderInitValue::List(values)
    }
}

impl From<Vec<&str>> for HeaderInitValue {
    fn from(values: Vec<&str>) -> Self {
        HeaderInitValue::List(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for HeaderInitValue {
    fn from(values: &[&str]) -> Self {
        HeaderInitValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}

/// The shapes a [`HeaderMap`] can be built from.
#[derive(Debug, Clone, Default)]
pub enum HeadersInit<'a> {
    /// No initializer: an empty map.
    #[default]
    None,
    /// Another map, deep-copied entry by entry.
    Headers(&'a HeaderMap),
    /// Ordered `(name, value)` pairs.
    Pairs(Vec<(String, HeaderInitValue)>),
    /// A key/value record, taken in its own key order.
    Record(IndexMap<String, HeaderInitValue>),
}

impl HeadersInit<'_> {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            HeadersInit::None => "none",
            HeadersInit::Headers(_) => "headers",
            HeadersInit::Pairs(_) => "pairs",
            HeadersInit::Record(_) => "record",
        }
    }
}

impl<'a> From<&'a HeaderMap> for HeadersInit<'a> {
    fn from(headers: &'a HeaderMap) -> Self {
        HeadersInit::Headers(headers)
    }
}

impl<K, V> From<Vec<(K, V)>> for HeadersInit<'_>
where
    K: Into<String>,
    V: Into<HeaderInitValue>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        HeadersInit::Pairs(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> From<IndexMap<K, V>> for HeadersInit<'_>
where
    K: Into<String>,
    V: Into<HeaderInitValue>,
{
    fn from(record: IndexMap<K, V>) -> Self {
        HeadersInit::Record(record.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> From<BTreeMap<K, V>> for HeadersInit<'_>
where
    K: Into<String>,
    V: Into<HeaderInitValue>,
{
    fn from(record: BTreeMap<K, V>) -> Self {
        HeadersInit::Record(record.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a, T> From<Option<T>> for HeadersInit<'a>
where
    T: Into<HeadersInit<'a>>,
{
    fn from(init: Option<T>) -> Self {
        init.map_or(HeadersInit::None, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_values_are_joined_with_comma_space() {
        let value = HeaderInitValue::from(vec!["gzip", "br"]);
        assert_eq!(value.into_joined(), "gzip, br");
        assert_eq!(HeaderInitValue::from("one").into_joined(), "one");
        assert_eq!(HeaderInitValue::List(Vec::new()).into_joined(), "");
    }

    #[test]
    fn conversions_pick_the_matching_shape() {
        assert!(matches!(HeadersInit::from(vec![("a", "1")]), HeadersInit::Pairs(_)));

        let mut record = BTreeMap::new();
        record.insert("a", "1");
        assert!(matches!(HeadersInit::from(record), HeadersInit::Record(_)));

        let absent: Option<Vec<(&str, &str)>> = None;
        assert!(matches!(HeadersInit::from(absent), HeadersInit::None));
        assert!(matches!(HeadersInit::default(), HeadersInit::None));
    }
}
