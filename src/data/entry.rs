//! File entries stored in a [`FileMap`](super::FileMap).

use std::{fmt, ops::Deref, sync::Arc};

use serde::Serialize;
use serde_json::{Map, Value};

use super::types::{PageLink, Pagination};

/// Metadata key listing the collections an entry belongs to.
pub const COLLECTION_KEY: &str = "collection";

/// Raw file contents, shared and immutable.
///
/// Cloning is cheap: every generated page holds the same template bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Contents(Arc<[u8]>);

impl Contents {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether both handles point at the same buffer.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Contents {
    fn default() -> Self {
        Self(Arc::from(Vec::new()))
    }
}

impl Deref for Contents {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Contents {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Arc::from(bytes))
    }
}

impl From<&[u8]> for Contents {
    fn from(bytes: &[u8]) -> Self {
        Self(Arc::from(bytes))
    }
}

impl From<&str> for Contents {
    fn from(text: &str) -> Self {
        Self::from(text.as_bytes())
    }
}

impl fmt::Debug for Contents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contents({} bytes)", self.0.len())
    }
}

/// One file of the build, keyed by its output path in the file map.
///
/// `data` holds whatever metadata the pipeline parsed for the file (front
/// matter and the like). Pagination fields are only set on generated pages.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileEntry {
    #[serde(skip)]
    pub contents: Contents,

    #[serde(flatten)]
    pub data: Map<String, Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,

    /// Navigation list, the same allocation on every page of one run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Arc<[PageLink]>>,
}

impl FileEntry {
    pub fn new(contents: impl Into<Contents>) -> Self {
        Self {
            contents: contents.into(),
            ..Self::default()
        }
    }

    /// Set a metadata attribute.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Set the `collection` attribute to the given names.
    pub fn with_collections<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<Value> = names
            .into_iter()
            .map(|name| Value::String(name.into()))
            .collect();
        self.with(COLLECTION_KEY, names)
    }

    /// Whether the `collection` attribute is an array naming `collection`.
    ///
    /// A missing attribute, or one that is not an array, never matches.
    pub fn in_collection(&self, collection: &str) -> bool {
        match self.data.get(COLLECTION_KEY) {
            Some(Value::Array(names)) => {
                names.iter().any(|name| name.as_str() == Some(collection))
            }
            _ => false,
        }
    }

    /// Metadata view of the entry, as handed to layouts.
    ///
    /// `data` is flattened into the top level, so a `data` key named `layout`,
    /// `pagination` or `pages` collides with the typed field. A field that is
    /// set wins; an unset one leaves the `data` value in place.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
