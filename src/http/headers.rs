//! Case-insensitive, order-preserving HTTP header container.
//!
//! Headers are stored in an ordered map keyed by the normalized (trimmed,
//! lower-cased) name. Each entry keeps the merged normalized value together
//! with the last raw spelling of the name a caller used, so the two can
//! never drift apart.
//!
//! Overwriting a header keeps its original position; iteration always follows
//! first-insertion order. Iterators borrow the map, which rules out mutating it
//! while an iteration is in progress.
//!
//! Names and values are validated by the [`validator`](crate::http::validator)
//! module on every read and write.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, trace};

use crate::config::{HeadersConfig, config};
use crate::http::error::HeaderError;
use crate::http::init::HeadersInit;
use crate::http::validator::{normalize_name, normalize_value, trim_http_whitespace};

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    value: String,
    raw_name: String,
}

#[derive(Debug, Clone)]
pub struct HeaderMap {
    entries: IndexMap<String, HeaderEntry>,
    config: HeadersConfig,
}

impl Default for HeaderMap {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for HeaderMap {
    /// Two maps are equal when they hold the same normalized entries in the
    /// same order. Raw spellings and limits are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.entries().eq(other.entries())
    }
}

impl Eq for HeaderMap {}

impl HeaderMap {
    pub fn new() -> Self {
        Self::with_config(config())
    }

    pub fn with_config(config: HeadersConfig) -> Self {
        Self {
            entries: IndexMap::new(),
            config,
        }
    }

    /// Builds a map from any accepted initializer shape.
    ///
    /// Every entry is added through [`append`](Self::append), so repeated
    /// names accumulate exactly as they would at runtime.
    pub fn from_init<'a>(init: impl Into<HeadersInit<'a>>) -> Result<Self, HeaderError> {
        let mut headers = Self::new();
        headers.extend_from_init(init.into())?;
        Ok(headers)
    }

    /// Builds a map from any iterable of `(name, value)` pairs, appending in
    /// iteration order.
    pub fn try_from_iter<I, K, V>(iter: I) -> Result<Self, HeaderError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.append(name.as_ref(), value.as_ref())?;
        }

        debug!(init = "iter", count = headers.len(), "headers constructed");
        Ok(headers)
    }

    pub(crate) fn extend_from_init(&mut self, init: HeadersInit<'_>) -> Result<(), HeaderError> {
        let kind = init.kind();
        match init {
            HeadersInit::None => {}
            HeadersInit::Headers(other) => {
                for (name, value) in other {
                    self.append(name, value)?;
                }
            }
            HeadersInit::Pairs(pairs) => {
                for (name, value) in pairs {
                    self.append(&name, &value.into_joined())?;
                }
            }
            HeadersInit::Record(record) => {
                for (name, value) in record {
                    self.append(&name, &value.into_joined())?;
                }
            }
        }

        debug!(init = kind, count = self.entries.len(), "headers constructed");
        Ok(())
    }

    pub fn config(&self) -> &HeadersConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Result<Option<&str>, HeaderError> {
        let key = normalize_name(name)?;
        Ok(self.entries.get(&key).map(|entry| entry.value.as_str()))
    }

    pub fn has(&self, name: &str) -> Result<bool, HeaderError> {
        let key = normalize_name(name)?;
        Ok(self.entries.contains_key(&key))
    }

    /// Replaces the value of `name`, recording `name` as passed as its raw
    /// spelling. An existing header keeps its position.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
        let key = normalize_name(name)?;
        let value = normalize_value(value).map_err(|err| err.with_name(name))?;
        self.store(key, name, value)
    }

    /// Adds `value` to `name`, joining it onto any existing value with `", "`.
    /// The joined value is normalized again, so joining an empty value leaves
    /// no trailing separator space. The raw spelling becomes `name` as passed.
    pub fn append(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
        let key = normalize_name(name)?;
        let value = normalize_value(value).map_err(|err| err.with_name(name))?;
        let resolved = match self.entries.get(&key) {
            Some(existing) => normalize_value(&format!("{}, {}", existing.value, value))
                .map_err(|err| err.with_name(name))?,
            None => value,
        };
        self.store(key, name, resolved)
    }

    /// Removes `name`. Returns whether a header was present.
    pub fn delete(&mut self, name: &str) -> Result<bool, HeaderError> {
        let key = normalize_name(name)?;
        let removed = self.entries.shift_remove(&key).is_some();
        if removed {
            trace!(name = %key, "header removed");
        }
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // Single write path shared by `set` and `append`; `key` and `value` are
    // already normalized.
    fn store(&mut self, key: String, raw_name: &str, value: String) -> Result<(), HeaderError> {
        if value.len() > self.config.max_value_size {
            return Err(HeaderError::ValueTooLarge {
                name: key,
                limit: self.config.max_value_size,
            });
        }

        let limit = self.config.max_headers;
        let len = self.entries.len();
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.value = value;
                entry.raw_name = raw_name.to_string();
                trace!(name = %occupied.key(), "header replaced");
            }
            Entry::Vacant(vacant) => {
                if len >= limit {
                    return Err(HeaderError::TooManyHeaders { limit });
                }
                trace!(name = %vacant.key(), "header added");
                vacant.insert(HeaderEntry {
                    value,
                    raw_name: raw_name.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys {
            inner: self.entries.keys(),
        }
    }

    pub fn values(&self) -> Values<'_> {
        Values {
            inner: self.entries.values(),
        }
    }

    pub fn entries(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Copy of the normalized name to value mapping, in insertion order.
    pub fn all(&self) -> IndexMap<String, String> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect()
    }

    /// Mapping keyed by the last raw spelling of each name, in insertion order.
    pub fn raw(&self) -> IndexMap<String, String> {
        self.entries
            .values()
            .map(|entry| (entry.raw_name.clone(), entry.value.clone()))
            .collect()
    }

    /// Calls `f(value, name, self)` for every header in insertion order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &str, &HeaderMap),
    {
        for (key, entry) in &self.entries {
            f(&entry.value, key, self);
        }
    }
}

impl fmt::Display for HeaderMap {
    /// Renders one `Raw-Name: value\r\n` line per header.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries.values() {
            write!(f, "{}: {}\r\n", trim_http_whitespace(&entry.raw_name), entry.value)?;
        }
        Ok(())
    }
}

pub struct Keys<'a> {
    inner: indexmap::map::Keys<'a, String, HeaderEntry>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}

pub struct Values<'a> {
    inner: indexmap::map::Values<'a, String, HeaderEntry>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| entry.value.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Values<'_> {}

/// Iterator over `(name, value)` pairs, names normalized.
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, String, HeaderEntry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, entry)| (key.as_str(), entry.value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

pub struct IntoIter {
    inner: indexmap::map::IntoIter<String, HeaderEntry>,
}

impl Iterator for IntoIter {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, entry)| (key, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for HeaderMap {
    type Item = (String, String);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a> TryFrom<HeadersInit<'a>> for HeaderMap {
    type Error = HeaderError;

    fn try_from(init: HeadersInit<'a>) -> Result<Self, Self::Error> {
        Self::from_init(init)
    }
}
