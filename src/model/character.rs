use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned character identifier.
///
/// The characters API may hand out numeric or string identifiers; either form is kept as-is
/// and only ever echoed back in a request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharacterId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{}", id),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Character age as stored by the server.
///
/// Records created through the form carry an integer. An inline edit sends whatever text was
/// typed, so the server may hand that text back. Anything else the server holds (`null`, a
/// fractional number, a missing key) is kept as raw JSON and shown the way it was stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Age {
    Years(i64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for Age {
    fn default() -> Self {
        Self::Other(serde_json::Value::Null)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(years) => write!(f, "{}", years),
            Self::Text(text) => f.write_str(text),
            Self::Other(value) => write!(f, "{}", value),
        }
    }
}

/// A character record as returned by `GET /characters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub age: Age,
    #[serde(default, rename = "class")]
    pub class_name: String,
    #[serde(default)]
    pub lore: String,
    #[serde(default, with = "flexible_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Character {
    /// The record timestamp, or the Unix epoch when the record has none.
    pub fn timestamp_or_epoch(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// Body of `POST /characters`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCharacter {
    pub name: String,
    pub race: String,
    pub age: i64,
    #[serde(rename = "class")]
    pub class_name: String,
    pub lore: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// Body of `PUT /characters/{id}`.
///
/// Carries the card's field text exactly as displayed, so `age` is free text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterUpdate {
    pub name: String,
    pub race: String,
    pub age: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub lore: String,
    pub timestamp: DateTime<Utc>,
}

/// Reads a timestamp written either as epoch milliseconds (form submissions) or as an
/// RFC 3339 string (inline edits), and writes it back as epoch milliseconds.
mod flexible_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Millis(i64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => serializer.serialize_some(&timestamp.timestamp_millis()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawTimestamp>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawTimestamp::Millis(millis)) => DateTime::from_timestamp_millis(millis)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", millis))),
            Some(RawTimestamp::Text(text)) => DateTime::parse_from_rfc3339(&text)
                .map(|timestamp| Some(timestamp.with_timezone(&Utc)))
                .map_err(D::Error::custom),
        }
    }
}
