//! Bucketing of collection entries into generated pages.

use rustc_hash::FxHashMap;

use super::pattern::substitute;
use crate::config::PagerConfig;
use crate::data::{Contents, FileEntry, PaginatedFile, Pagination};

/// Group `selected` into pages of `elements_per_page`.
///
/// Entry `i` (0-based) lands on page `i / elements_per_page + 1`, whose path
/// is `page_pattern` with that number substituted. Pages come back in the
/// order their paths were first produced.
///
/// When two page numbers produce the same path, the later page's entries are
/// appended to the page created first, which keeps its own `current`.
pub fn build_pages(
    selected: Vec<PaginatedFile>,
    config: &PagerConfig,
    template: &Contents,
) -> Vec<(String, FileEntry)> {
    let per_page = config.elements_per_page.get();
    let mut pages: Vec<(String, FileEntry)> = Vec::new();
    let mut by_path: FxHashMap<String, usize> = FxHashMap::default();

    for (index, file) in selected.into_iter().enumerate() {
        let current = index / per_page + 1;
        let path = substitute(&config.page_pattern, current);

        let slot = *by_path.entry(path).or_insert_with_key(|path| {
            pages.push((path.clone(), new_page(config, template, current)));
            pages.len() - 1
        });

        if let Some(pagination) = pages[slot].1.pagination.as_mut() {
            pagination.files.push(file);
        }
    }

    pages
}

fn new_page(config: &PagerConfig, template: &Contents, current: usize) -> FileEntry {
    FileEntry {
        contents: template.clone(),
        layout: Some(config.layout_name.clone()),
        pagination: Some(Pagination::new(current)),
        ..FileEntry::default()
    }
}
