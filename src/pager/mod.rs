//! Collection paginator.
//!
//! # Pipeline
//!
//! ```text
//! settings ──► validate ──► Pager            (once, at construction)
//!
//! run(files, ctx):
//!   template::load ──► filter::select ──► builder::build_pages
//!                                                │
//!                    files.extend ◄── nav::annotate
//! ```
//!
//! Everything that can fail (settings, template access) fails before the file
//! map is touched. Generated pages are inserted in one step at the end, so an
//! error never leaves a half-paginated map behind.
//!
//! Existing entries at a generated page path are replaced. Callers that need
//! the original map should clone it first.

mod builder;
mod filter;
mod nav;
mod pattern;
mod template;

pub use pattern::substitute;

use std::{path::Path, sync::Arc};

use crate::config::{ConfigError, PagerConfig, PagerSettings};
use crate::data::{FileMap, PageLink, PaginatedFile};
use crate::error::PagerError;
use crate::log;
use crate::plugin::{Context, Plugin};

/// Build a paginator from raw settings.
///
/// Settings are validated here, so a misconfigured paginator never runs.
pub fn pager(settings: &PagerSettings) -> Result<Pager, ConfigError> {
    Pager::new(settings)
}

/// Paginates one collection of a [`FileMap`].
#[derive(Debug, Clone)]
pub struct Pager {
    config: PagerConfig,
    quiet: bool,
}

impl Pager {
    pub fn new(settings: &PagerSettings) -> Result<Self, ConfigError> {
        Ok(Self::from_config(settings.validate()?))
    }

    pub fn from_config(config: PagerConfig) -> Self {
        Self {
            config,
            quiet: false,
        }
    }

    /// Suppress the per-run summary line.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Add one page entry per page of the collection to `files`.
    ///
    /// The template is resolved against `source_dir`. Returns the navigation
    /// list attached to every generated page (empty when nothing matched).
    pub fn paginate(
        &self,
        files: &mut FileMap,
        source_dir: &Path,
    ) -> Result<Arc<[PageLink]>, PagerError> {
        let template = template::load(source_dir, &self.config.pagination_template_path)?;

        let selected: Vec<PaginatedFile> = filter::select(files, &self.config.collection)
            .into_iter()
            .map(|(path, entry)| PaginatedFile {
                path: path.to_owned(),
                entry: entry.clone(),
            })
            .collect();
        let entries = selected.len();

        let mut pages = builder::build_pages(selected, &self.config, &template);
        let links = nav::annotate(&mut pages, &self.config.page_label);
        files.extend(pages);

        if !self.quiet {
            log!(
                self.name();
                "{} entries of `{}` -> {} pages",
                entries,
                self.config.collection,
                links.len()
            );
        }
        Ok(links)
    }
}

impl Plugin for Pager {
    fn name(&self) -> &str {
        "pager"
    }

    fn run(&self, files: &mut FileMap, ctx: &dyn Context) -> Result<(), PagerError> {
        self.paginate(files, ctx.source_dir()).map(|_| ())
    }
}
