//! Project reference graph resolution.
//!
//! A project is identified by the path of its project file. Edges come from
//! MSBuild-style `<ProjectReference Include="..\Other\Other.csproj" />`
//! elements, whose paths are relative to the referencing project's directory.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use log::{debug, trace};
use regex::Regex;

use crate::errors::{ContentPathsError, Result};
use crate::fs::FileSystem;
use crate::paths;

/// Resolves the projects a project depends on.
pub trait ProjectGraph: Send + Sync {
    /// `project` followed by every project it transitively references, each exactly once.
    fn inclusive_transitive_dependencies(&self, project: &Path) -> Result<Vec<PathBuf>>;
}

/// Reads `<ProjectReference>` elements out of project files.
pub struct ProjectReferenceGraph<'a> {
    fs: &'a dyn FileSystem,
    reference_pattern: Regex,
    comment_pattern: Regex,
    entity_pattern: Regex,
}

impl<'a> ProjectReferenceGraph<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Result<Self> {
        Ok(Self {
            fs,
            reference_pattern: Regex::new(
                r#"<ProjectReference\b[^>]*?\bInclude\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
            )?,
            comment_pattern: Regex::new(r"(?s)<!--.*?-->")?,
            entity_pattern: Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|amp|lt|gt|quot|apos);")?,
        })
    }

    /// Direct references of `project`, in declaration order, as normalized paths.
    pub fn project_references(&self, project: &Path) -> Result<Vec<PathBuf>> {
        let content = self
            .fs
            .read_to_string(project)
            .map_err(|e| resolution_error(project, format!("cannot read project file: {}", e)))?;

        let content = self.comment_pattern.replace_all(&content, "");
        let project_directory = project.parent().unwrap_or_else(|| Path::new(""));

        let mut references = Vec::new();
        for captures in self.reference_pattern.captures_iter(&content) {
            let include = captures
                .get(1)
                .or_else(|| captures.get(2))
                .map(|m| m.as_str().trim())
                .unwrap_or_default();

            if include.is_empty() {
                return Err(resolution_error(project, "empty ProjectReference Include".to_string()));
            }

            let include = self.decode_entities(include);
            let reference = paths::combine(project_directory, &include);
            if !self.fs.file_exists(&reference)? {
                return Err(resolution_error(
                    project,
                    format!("referenced project {} does not exist", reference.display()),
                ));
            }

            trace!("{} -> {}", project.display(), reference.display());
            references.push(reference);
        }

        Ok(references)
    }

    /// Replace XML predefined entities and character references.
    ///
    /// References that do not name a valid character are left untouched.
    fn decode_entities(&self, value: &str) -> String {
        self.entity_pattern
            .replace_all(value, |captures: &regex::Captures<'_>| {
                let entity = &captures[1];
                let decoded = match entity {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    _ => {
                        let code = match entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
                            Some(hex) => u32::from_str_radix(hex, 16).ok(),
                            None => entity[1..].parse::<u32>().ok(),
                        };
                        code.and_then(char::from_u32)
                    }
                };
                decoded.map_or_else(|| captures[0].to_string(), String::from)
            })
            .into_owned()
    }

    fn visit(&self, project: &Path, closure: &mut IndexSet<PathBuf>) -> Result<()> {
        if !closure.insert(project.to_path_buf()) {
            return Ok(());
        }

        for reference in self.project_references(project)? {
            self.visit(&reference, closure)?;
        }

        Ok(())
    }
}

impl ProjectGraph for ProjectReferenceGraph<'_> {
    fn inclusive_transitive_dependencies(&self, project: &Path) -> Result<Vec<PathBuf>> {
        let project = paths::normalize_lexically(project);

        let mut closure = IndexSet::new();
        self.visit(&project, &mut closure)?;

        debug!(
            "{} project(s) in the closure of {}",
            closure.len(),
            project.display()
        );
        Ok(closure.into_iter().collect())
    }
}

fn resolution_error(project: &Path, message: String) -> ContentPathsError {
    ContentPathsError::Resolution {
        project: project.display().to_string(),
        message,
    }
}
