//! Collection selection.

use crate::data::{FileEntry, FileMap};

/// Entries whose `collection` array names `collection`, in map order.
pub fn select<'a>(files: &'a FileMap, collection: &str) -> Vec<(&'a str, &'a FileEntry)> {
    files
        .iter()
        .filter(|(_, entry)| entry.in_collection(collection))
        .collect()
}
