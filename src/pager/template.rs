//! Pagination template loading.

use std::{fs, path::Path};

use crate::data::Contents;
use crate::error::PagerError;

/// Read the template at `source_dir/relative`.
///
/// Called once per run; the returned buffer is shared by every generated page.
pub fn load(source_dir: &Path, relative: &Path) -> Result<Contents, PagerError> {
    let path = source_dir.join(relative);
    fs::read(&path)
        .map(Contents::from)
        .map_err(|source| PagerError::Template { path, source })
}
