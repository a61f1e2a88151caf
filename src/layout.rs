use std::path::{Path, PathBuf};

/// File name a project publishes its own content paths under.
pub const DEFAULT_MANIFEST_FILE_NAME: &str = "tailwind-content-paths.json";

/// File name the aggregated content paths are written to.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "tailwind-all-content-paths.json";

/// Where a project's Tailwind files live, derived from its project file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub manifest_file_name: String,
    pub output_file_name: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            manifest_file_name: DEFAULT_MANIFEST_FILE_NAME.to_string(),
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
        }
    }
}

impl ProjectLayout {
    pub fn new(manifest_file_name: impl Into<String>, output_file_name: impl Into<String>) -> Self {
        Self {
            manifest_file_name: manifest_file_name.into(),
            output_file_name: output_file_name.into(),
        }
    }

    /// Directory containing the project file.
    pub fn project_directory_for(&self, project: &Path) -> PathBuf {
        match project.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// The manifest of self-relative globs published by `project`.
    pub fn manifest_path_for(&self, project: &Path) -> PathBuf {
        self.project_directory_for(project)
            .join(&self.manifest_file_name)
    }

    /// Where the aggregated content paths for `project` are written.
    pub fn output_path_for(&self, project: &Path) -> PathBuf {
        self.project_directory_for(project).join(&self.output_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_paths() {
        let layout = ProjectLayout::default();
        let project = Path::new("/repo/Web/Web.csproj");

        assert_eq!(layout.project_directory_for(project), PathBuf::from("/repo/Web"));
        assert_eq!(
            layout.manifest_path_for(project),
            PathBuf::from("/repo/Web/tailwind-content-paths.json")
        );
        assert_eq!(
            layout.output_path_for(project),
            PathBuf::from("/repo/Web/tailwind-all-content-paths.json")
        );
    }

    #[test]
    fn test_bare_file_name_uses_current_directory() {
        let layout = ProjectLayout::new("content.json", "all.json");
        assert_eq!(
            layout.manifest_path_for(Path::new("Web.csproj")),
            PathBuf::from("./content.json")
        );
    }
}
