//! Pager - collection pagination for file-map based static site pipelines.
//!
//! Given a [`FileMap`] whose entries list their collections in a `collection`
//! attribute, the paginator splits one collection into pages of a fixed size
//! and adds a generated entry per page. Each generated entry carries the
//! pagination template, the slice of the collection on that page, and a
//! `pages` list describing every page for prev/next navigation.
//!
//! # Example
//!
//! ```no_run
//! use pager::{FileEntry, FileMap, Plugin, PagerSettings, SourceDir, pager};
//!
//! let mut files: FileMap = (1..=12)
//!     .map(|i| (format!("posts/{i}.md"), FileEntry::new("...").with_collections(["blog"])))
//!     .collect();
//!
//! let settings = PagerSettings::new("blog", "blog-list.html", "templates/blog.html", 5);
//! let pager = pager(&settings)?;
//! pager.run(&mut files, &SourceDir::new("src"))?;
//!
//! assert!(files.contains_key("page/3/index.html"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod data;
mod error;
mod pager;
mod plugin;
#[doc(hidden)]
pub mod utils;

pub use config::{ConfigError, PagerConfig, PagerSettings};
pub use data::{COLLECTION_KEY, Contents, FileEntry, FileMap, PageLink, PaginatedFile, Pagination};
pub use error::PagerError;
pub use pager::{Pager, pager, substitute};
pub use plugin::{Context, Plugin, SourceDir};
