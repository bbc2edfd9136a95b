//! This module exports the JSON types and helpers used by the rest of the crate, so that payload
//! encoding goes through a single place.

use bytes::Bytes;
use serde::ser::Serialize;

use crate::Result;

pub type Value = serde_json::Value;

pub use serde_json::json;
pub use serde_json::Error as JsonError;

pub type JsonMap = serde_json::Map<String, Value>;

/// Encodes a payload into the opaque body handed to the [`Transport`].
///
/// [`Transport`]: crate::http::Transport
#[allow(clippy::missing_errors_doc)] // It's obvious
pub fn to_bytes<T>(v: &T) -> Result<Bytes>
where
    T: Serialize,
{
    let result = serde_json::to_vec(v)?;
    Ok(Bytes::from(result))
}

#[cfg(test)]
pub(crate) fn to_value<T>(value: T) -> Result<Value>
where
    T: Serialize,
{
    let result = serde_json::to_value(value)?;
    Ok(result)
}

#[cfg(test)]
#[track_caller]
pub(crate) fn assert_json<T>(data: &T, json: crate::json::Value)
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de> + PartialEq + std::fmt::Debug,
{
    // test serialization
    let serialized = to_value(data).unwrap();
    assert!(
        serialized == json,
        "data->JSON serialization failed\nexpected: {json:?}\n     got: {serialized:?}"
    );

    // test deserialization
    let deserialized = serde_json::from_value::<T>(json).unwrap();
    assert!(
        &deserialized == data,
        "JSON->data deserialization failed\nexpected: {data:?}\n     got: {deserialized:?}"
    );
}

pub mod prelude {
    pub use serde_json::{from_slice, from_str, from_value, to_string, to_value, to_vec};

    pub use super::*;
}
