//! Wire shape of one upstream pet record.
//!
//! The upstream JSON was converted from XML: every leaf is wrapped as
//! `{"$t": value}`, attributes become `@name` keys, and a repeated element
//! with a single occurrence collapses to a bare object. Empty elements
//! arrive as `{}`. Everything here defaults so that a sparse record still
//! deserializes; deciding what is mandatory is the translator's job.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawPetRecord {
    #[serde(default)]
    pub id: Text,
    #[serde(default)]
    pub name: Text,
    #[serde(default)]
    pub description: Text,
    #[serde(default)]
    pub sex: Text,
    #[serde(default)]
    pub age: Text,
    #[serde(default)]
    pub size: Text,
    #[serde(default)]
    pub breeds: Option<Breeds>,
    #[serde(default)]
    pub media: Option<Media>,
    #[serde(default)]
    pub options: Option<Options>,
}

/// A `{"$t": ...}` leaf. Numbers and booleans are kept as their text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Text {
    #[serde(rename = "$t", default, deserialize_with = "scalar_text")]
    pub text: Option<String>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Breeds {
    #[serde(default)]
    pub breed: Option<OneOrMany<Text>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub photos: Option<Photos>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Photos {
    #[serde(default)]
    pub photo: OneOrMany<Photo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Photo {
    #[serde(rename = "$t", default, deserialize_with = "scalar_text")]
    pub url: Option<String>,
    #[serde(rename = "@size", default, deserialize_with = "scalar_text")]
    pub size: Option<String>,
    #[serde(rename = "@id", default, deserialize_with = "scalar_text")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub option: OneOrMany<Text>,
}

/// A repeated element that may have collapsed to a single object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => std::slice::from_ref(item),
        }
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}
