//! Seam between a build pipeline and its plugins.
//!
//! The pipeline owns the [`FileMap`] and hands it to each plugin in turn along
//! with a [`Context`]. A plugin signals completion by returning `Ok(())`;
//! [`Plugin::call`] adapts that to callback-style hosts.

use std::path::{Path, PathBuf};

use crate::data::FileMap;
use crate::error::PagerError;

/// What a plugin may ask of the running pipeline.
pub trait Context {
    /// Root directory that content-relative paths resolve against.
    fn source_dir(&self) -> &Path;
}

/// Minimal [`Context`] for hosts that only know their source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDir(pub PathBuf);

impl SourceDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl Context for SourceDir {
    fn source_dir(&self) -> &Path {
        &self.0
    }
}

/// A build step that mutates the file map in place.
pub trait Plugin {
    /// Short name used as the log prefix.
    fn name(&self) -> &str;

    /// Run once over the file map.
    ///
    /// On error the map is left as it was before the call.
    fn run(&self, files: &mut FileMap, ctx: &dyn Context) -> Result<(), PagerError>;

    /// Run, then invoke `done` exactly once if the run succeeded.
    fn call<F>(&self, files: &mut FileMap, ctx: &dyn Context, done: F) -> Result<(), PagerError>
    where
        Self: Sized,
        F: FnOnce(),
    {
        self.run(files, ctx)?;
        done();
        Ok(())
    }
}
