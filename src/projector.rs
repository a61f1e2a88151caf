//! Rewrites each source project's self-relative content paths so they resolve
//! from the destination project, then formats them the way Tailwind CSS expects.

use std::path::Path;

use log::trace;

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::json;
use crate::layout::ProjectLayout;
use crate::paths;

const CURRENT_DIRECTORY_PREFIX: &str = "./";

pub struct PathProjector<'a> {
    fs: &'a dyn FileSystem,
    layout: &'a ProjectLayout,
}

impl<'a> PathProjector<'a> {
    pub fn new(fs: &'a dyn FileSystem, layout: &'a ProjectLayout) -> Self {
        Self { fs, layout }
    }

    /// All destination-relative content paths of `source_projects`, formatted for Tailwind.
    ///
    /// Sources are concatenated in the given order, each keeping its manifest order.
    /// Duplicates are kept.
    pub fn project<P: AsRef<Path>>(
        &self,
        destination_project: &Path,
        source_projects: &[P],
    ) -> Result<Vec<String>> {
        let mut relative_paths = Vec::new();
        for source_project in source_projects {
            for path in self.globs_for_source(destination_project, source_project.as_ref())? {
                relative_paths.push(path?);
            }
        }

        Ok(format_for_tailwind(relative_paths))
    }

    /// The globs published by `source_project`, rewritten relative to `destination_project`.
    ///
    /// The manifest is read eagerly; each glob is rewritten as the iterator is consumed.
    pub fn globs_for_source(
        &self,
        destination_project: &Path,
        source_project: &Path,
    ) -> Result<impl Iterator<Item = Result<String>> + 'a> {
        let manifest_path = self.layout.manifest_path_for(source_project);
        let globs = json::load_string_array(self.fs, &manifest_path)?;

        let source_directory = self.layout.project_directory_for(source_project);
        let destination_directory = self.layout.project_directory_for(destination_project);

        Ok(globs.into_iter().map(move |glob| {
            let absolute = paths::combine(&source_directory, &glob);
            let relative = paths::relative_path(&destination_directory, &absolute)?;
            let mut relative = relative.to_string_lossy().into_owned();
            // Path components drop a trailing separator; directory globs keep theirs.
            if paths::has_trailing_separator(&glob)
                && !relative.is_empty()
                && !paths::has_trailing_separator(&relative)
            {
                relative.push('/');
            }
            trace!("{} -> {}", glob, relative);
            Ok(relative)
        }))
    }
}

/// Use `/` separators and start every path with `./`.
pub fn format_for_tailwind<I>(globs: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    globs
        .into_iter()
        .map(|path| {
            let path = paths::normalize_to_forward_slashes(path.as_ref());
            if path.starts_with(CURRENT_DIRECTORY_PREFIX) {
                path
            } else {
                format!("{}{}", CURRENT_DIRECTORY_PREFIX, path)
            }
        })
        .collect()
}
