use crate::errors::DecodeError;
use serde::{Deserialize, Deserializer};

/// Navigation links attached to every page of a resource.
///
/// An absent, `null` or empty link means there is no page in that direction.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Link {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub first: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub last: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub prev: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub next: Option<String>,
}

/// One response's worth of records of a resource, plus its links.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(bound = "for<'de2> T: Deserialize<'de2>")]
pub struct ResourcePage<T> {
    #[serde(rename = "data", default, deserialize_with = "null_as_default")]
    pub all: Vec<T>,
    #[serde(rename = "links", default, deserialize_with = "null_as_default")]
    pub link: Link,
}

impl<T> Default for ResourcePage<T> {
    fn default() -> Self {
        ResourcePage {
            all: Vec::new(),
            link: Link::default(),
        }
    }
}

impl<T> ResourcePage<T>
where
    for<'de2> T: Deserialize<'de2>,
{
    /// Decodes a response body. One malformed record fails the whole page.
    pub fn from_slice(body: &[u8]) -> Result<ResourcePage<T>, DecodeError> {
        Ok(serde_json::from_slice(body)?)
    }
}

impl<T> ResourcePage<T> {
    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.link.next.is_some()
    }

    pub fn into_records(self) -> Vec<T> {
        self.all
    }
}

/// Treats an explicit `null` like a missing key.
pub(crate) fn null_as_default<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    V: Default + Deserialize<'de>,
{
    Ok(Option::<V>::deserialize(deserializer)?.unwrap_or_default())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
