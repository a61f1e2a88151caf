use std::path::{Path, PathBuf};

use log::debug;
use rayon::prelude::*;

use crate::errors::{ContentPathsError, Result};
use crate::fs::FileSystem;
use crate::graph::ProjectGraph;
use crate::layout::ProjectLayout;

/// Finds the projects in a dependency closure that publish a content paths manifest.
pub struct DependencyDiscoverer<'a> {
    graph: &'a dyn ProjectGraph,
    fs: &'a dyn FileSystem,
    layout: &'a ProjectLayout,
    deterministic_order: bool,
    jobs: Option<usize>,
}

impl<'a> DependencyDiscoverer<'a> {
    pub fn new(graph: &'a dyn ProjectGraph, fs: &'a dyn FileSystem, layout: &'a ProjectLayout) -> Self {
        Self {
            graph,
            fs,
            layout,
            deterministic_order: false,
            jobs: None,
        }
    }

    /// Sort the discovered projects by path instead of keeping resolver order.
    pub fn with_deterministic_order(mut self, deterministic_order: bool) -> Self {
        self.deterministic_order = deterministic_order;
        self
    }

    /// Number of threads for the manifest existence checks.
    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }

    /// All projects in the inclusive closure of `root_project` that have a manifest.
    pub fn discover_source_projects(&self, root_project: &Path) -> Result<Vec<PathBuf>> {
        if self.jobs == Some(0) {
            return Err(ContentPathsError::InvalidInput(
                "Number of jobs must be at least 1".to_string(),
            ));
        }

        let closure = self.graph.inclusive_transitive_dependencies(root_project)?;
        debug!("Dependency closure: {:?}", closure);

        let mut sources = match self.jobs {
            Some(num_jobs) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(num_jobs)
                    .build()?;
                pool.install(|| self.filter_publishing(closure))?
            }
            None => self.filter_publishing(closure)?,
        };

        if self.deterministic_order {
            sources.sort();
        }

        debug!("Source projects: {:?}", sources);
        Ok(sources)
    }

    // `collect` on an indexed parallel iterator keeps input order.
    fn filter_publishing(&self, closure: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
        let checked: Vec<(PathBuf, bool)> = closure
            .into_par_iter()
            .map(|project| {
                let manifest = self.layout.manifest_path_for(&project);
                self.fs.file_exists(&manifest).map(|exists| (project, exists))
            })
            .collect::<Result<_>>()?;

        Ok(checked
            .into_iter()
            .filter_map(|(project, exists)| exists.then_some(project))
            .collect())
    }
}
