use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::ContentPathsConfig;
use crate::discovery::DependencyDiscoverer;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::graph::ProjectGraph;
use crate::json;
use crate::layout::ProjectLayout;
use crate::projector::PathProjector;

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub source_projects: Vec<PathBuf>,
    pub content_paths: Vec<String>,
    /// The serialized output, exactly as written (or as it would have been)
    pub json: String,
    pub written: bool,
}

/// Discovers source projects, rewrites their content paths and writes the aggregate file.
pub struct ContentPathsGenerator<'a> {
    graph: &'a dyn ProjectGraph,
    fs: &'a dyn FileSystem,
    config: &'a ContentPathsConfig,
    layout: ProjectLayout,
    dry_run: bool,
}

impl<'a> ContentPathsGenerator<'a> {
    pub fn new(
        graph: &'a dyn ProjectGraph,
        fs: &'a dyn FileSystem,
        config: &'a ContentPathsConfig,
    ) -> Self {
        Self {
            graph,
            fs,
            config,
            layout: config.layout(),
            dry_run: false,
        }
    }

    /// Compute everything but leave the output file untouched
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn discoverer(&self) -> DependencyDiscoverer<'_> {
        DependencyDiscoverer::new(self.graph, self.fs, &self.layout)
            .with_deterministic_order(self.config.deterministic_order)
            .with_jobs(self.config.jobs)
    }

    pub fn projector(&self) -> PathProjector<'_> {
        PathProjector::new(self.fs, &self.layout)
    }

    /// Write the aggregated content paths of `root_project` and everything it references.
    pub fn generate(&self, root_project: &Path) -> Result<GenerationReport> {
        let source_projects = self.discoverer().discover_source_projects(root_project)?;
        let content_paths = self.projector().project(root_project, &source_projects)?;

        let output_path = self.layout.output_path_for(root_project);
        debug!(
            "{} content path(s) from {} source project(s) for {}",
            content_paths.len(),
            source_projects.len(),
            output_path.display()
        );

        let json = if self.dry_run {
            json::to_json_array(&content_paths, self.config.minify)?
        } else {
            let json =
                json::write_string_array(self.fs, &output_path, &content_paths, self.config.minify)?;
            info!("Wrote {}", output_path.display());
            json
        };

        Ok(GenerationReport {
            output_path,
            source_projects,
            content_paths,
            json,
            written: !self.dry_run,
        })
    }
}
