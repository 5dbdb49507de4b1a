//! File map data model shared with the host pipeline.
//!
//! # Layout
//!
//! ```text
//! FileMap (insertion ordered)
//! ├── "posts/a.md"            FileEntry { data: { collection: ["blog"] } }
//! ├── "posts/b.md"            FileEntry { data: { collection: ["blog"] } }
//! ├── "page/1/index.html"     FileEntry {
//! │                               contents: <template, shared>,
//! │                               layout: "blog.html",
//! │                               pagination: { current: 1, files: [a, b] },
//! │                               pages: ──┐
//! │                           }            │  one Arc<[PageLink]>
//! └── "page/2/index.html"     ...  pages: ─┘
//! ```
//!
//! Layouts read `pagination` and `pages` through [`FileEntry::to_json`].

mod entry;
mod file_map;
mod types;

pub use entry::{COLLECTION_KEY, Contents, FileEntry};
pub use file_map::FileMap;
pub use types::{PageLink, PaginatedFile, Pagination};
