//! Serde support for [`HeaderMap`].
//!
//! A map serializes as an ordered object of normalized names to values.
//! Deserialization accepts the same shapes as [`HeadersInit`]: an object
//! (record), a sequence of `[name, value]` pairs, or `null`. Values may be a
//! string or a sequence of strings. Anything else fails fast.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::http::headers::HeaderMap;
use crate::http::init::{HeaderInitValue, HeadersInit};

impl Serialize for HeaderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum InitValueRepr {
    Single(String),
    List(Vec<String>),
}

impl InitValueRepr {
    fn into_init(self) -> HeaderInitValue {
        match self {
            InitValueRepr::Single(value) => HeaderInitValue::Single(value),
            InitValueRepr::List(values) => HeaderInitValue::List(values),
        }
    }
}

struct HeaderMapVisitor;

impl HeaderMapVisitor {
    fn build<E: de::Error>(init: HeadersInit<'_>) -> Result<HeaderMap, E> {
        HeaderMap::from_init(init).map_err(E::custom)
    }
}

impl<'de> Visitor<'de> for HeaderMapVisitor {
    type Value = HeaderMap;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a header record, a list of [name, value] pairs, or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<HeaderMap, E> {
        Self::build(HeadersInit::None)
    }

    fn visit_none<E: de::Error>(self) -> Result<HeaderMap, E> {
        Self::build(HeadersInit::None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<HeaderMap, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<HeaderMap, A::Error> {
        let mut pairs = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some((name, value)) = seq.next_element::<(String, InitValueRepr)>()? {
            pairs.push((name, value.into_init()));
        }
        Self::build(HeadersInit::Pairs(pairs))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<HeaderMap, A::Error> {
        let mut record = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, value)) = map.next_entry::<String, InitValueRepr>()? {
            record.insert(name, value.into_init());
        }
        Self::build(HeadersInit::Record(record))
    }
}

impl<'de> Deserialize<'de> for HeaderMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(HeaderMapVisitor)
    }
}
