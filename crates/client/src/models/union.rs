//! Shared decoding machinery for polymorphic JSON models.
//!
//! Responsibilities:
//! - Dispatch a JSON object to a variant by a sibling tag field.
//! - Dispatch an untagged JSON object by structural matching against an
//!   ordered list of required-key sets, falling back to a catch-all.
//!
//! Invariants:
//! - Matchers are tried strictly in the order given; the first whose
//!   required keys are all present wins.
//! - A selected variant that then fails to decode is an error; there is no
//!   silent fall-through to a later matcher.
//! - Each variant keeps its own `extra` bag, so fields it consumes never
//!   appear twice.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Required keys plus decoder for one structural variant.
pub(crate) struct ShapeMatcher<T> {
    pub(crate) required: &'static [&'static str],
    pub(crate) decode: fn(Map<String, Value>) -> Result<T, serde_json::Error>,
}

/// True when every key in `keys` is present in `map`.
pub(crate) fn has_keys(map: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().all(|key| map.contains_key(*key))
}

/// Read a string tag such as `type` or `service_type`.
pub(crate) fn tag<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

/// Decode `map` as the concrete variant type `V`.
pub(crate) fn decode_as<V: DeserializeOwned>(map: Map<String, Value>) -> Result<V, serde_json::Error> {
    serde_json::from_value(Value::Object(map))
}

/// Pick the first matcher whose required keys are present, else `fallback`.
pub(crate) fn decode_by_shape<T>(
    map: Map<String, Value>,
    matchers: &[ShapeMatcher<T>],
    fallback: fn(Map<String, Value>) -> T,
) -> Result<T, serde_json::Error> {
    match matchers.iter().find(|m| has_keys(&map, m.required)) {
        Some(matcher) => (matcher.decode)(map),
        None => Ok(fallback(map)),
    }
}
