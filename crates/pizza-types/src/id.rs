//! Lenient identifier decoding
//!
//! The service emits numeric ids, but some payloads carry them as strings
//! (`"storeId": "6"`). Both forms decode to the same integer.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn into_id<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            Self::Number(id) => Ok(id),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid id: {text:?}"))),
        }
    }
}

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer)?.into_id()
}

pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(raw) => raw.into_id().map(Some),
        None => Ok(None),
    }
}
