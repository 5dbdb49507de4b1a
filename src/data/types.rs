//! Pagination data attached to generated pages.
//!
//! These types are serialized to JSON so layouts can render navigation.

use serde::Serialize;

use super::entry::FileEntry;

/// Slice of a collection held by one generated page.
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    /// 1-based number of the page that created this entry
    pub current: usize,

    /// Collection entries on this page, in collection order
    pub files: Vec<PaginatedFile>,
}

impl Pagination {
    pub fn new(current: usize) -> Self {
        Self {
            current,
            files: Vec::new(),
        }
    }
}

/// A collection entry as seen from the page listing it.
///
/// Holds a snapshot of the entry taken when the page was built.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedFile {
    /// Serialized first so `path` wins over a `path` key in `entry.data`
    #[serde(flatten)]
    pub entry: FileEntry,

    /// Key of the entry in the file map
    pub path: String,
}

/// One item of the navigation list shared by all generated pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// Output path of the page
    pub path: String,

    /// 1-based position in generation order
    pub index: usize,

    /// Display label, `pageLabel` with `:PAGE` replaced by `index`
    pub label: String,
}
