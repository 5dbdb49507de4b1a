//! Navigation list shared by all generated pages.

use std::sync::Arc;

use super::pattern::substitute;
use crate::data::{FileEntry, PageLink};

/// Attach one shared `pages` list to every generated page.
///
/// Indices follow generation order, which can differ from a page's
/// `pagination.current` when page paths collide.
pub fn annotate(pages: &mut [(String, FileEntry)], label: &str) -> Arc<[PageLink]> {
    let links: Arc<[PageLink]> = pages
        .iter()
        .enumerate()
        .map(|(i, (path, _))| PageLink {
            path: path.clone(),
            index: i + 1,
            label: substitute(label, i + 1),
        })
        .collect();

    for (_, page) in pages.iter_mut() {
        page.pages = Some(Arc::clone(&links));
    }
    links
}
