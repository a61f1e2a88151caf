//! Aggregate the Tailwind CSS content paths published by a project and its
//! transitive project references into a single file the consuming project's
//! Tailwind build can read.
//!
//! Every project may publish a manifest (`tailwind-content-paths.json` by
//! default) next to its project file: a JSON array of globs relative to that
//! project's directory. [`generate`] walks the project reference graph, keeps
//! the projects that publish a manifest, rewrites their globs relative to the
//! consuming project and writes them, `./`-prefixed with `/` separators, to
//! `tailwind-all-content-paths.json`.

pub mod args;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod fs;
pub mod generator;
pub mod graph;
pub mod json;
pub mod layout;
pub mod paths;
pub mod projector;

pub use args::{Cli, Commands, DiscoveryArgs, GenerateArgs, SourcesArgs};
pub use config::ContentPathsConfig;
pub use discovery::DependencyDiscoverer;
pub use errors::{ContentPathsError, Result};
pub use fs::{FileSystem, LocalFileSystem};
pub use generator::{ContentPathsGenerator, GenerationReport};
pub use graph::{ProjectGraph, ProjectReferenceGraph};
pub use layout::ProjectLayout;
pub use projector::{format_for_tailwind, PathProjector};

use log::debug;
use std::path::{Path, PathBuf};

/// Generate the aggregated content paths file for `args.project`.
pub fn generate(args: GenerateArgs) -> Result<GenerationReport> {
    let config = ContentPathsConfig::try_from(&args)?;
    let project = absolute_project_path(&args.project)?;
    debug!("Generating content paths for {}", project.display());

    let fs = LocalFileSystem;
    let graph = ProjectReferenceGraph::new(&fs)?;

    ContentPathsGenerator::new(&graph, &fs, &config)
        .with_dry_run(args.dry_run)
        .generate(&project)
}

/// Projects in the closure of `args.project` that publish a content paths manifest.
pub fn list_sources(args: SourcesArgs) -> Result<Vec<PathBuf>> {
    let config = ContentPathsConfig::try_from(&args)?;
    let project = absolute_project_path(&args.project)?;

    let fs = LocalFileSystem;
    let graph = ProjectReferenceGraph::new(&fs)?;

    ContentPathsGenerator::new(&graph, &fs, &config)
        .discoverer()
        .discover_source_projects(&project)
}

fn absolute_project_path(project: &Path) -> Result<PathBuf> {
    if project.as_os_str().is_empty() {
        return Err(ContentPathsError::InvalidInput(
            "Project path must not be empty".to_string(),
        ));
    }
    Ok(paths::normalize_lexically(&std::path::absolute(project)?))
}
