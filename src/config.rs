use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::args::{DiscoveryArgs, GenerateArgs, SourcesArgs};
use crate::errors::{ContentPathsError, Result};
use crate::layout::{ProjectLayout, DEFAULT_MANIFEST_FILE_NAME, DEFAULT_OUTPUT_FILE_NAME};

/// Content paths configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPathsConfig {
    /// Manifest file each project publishes its own globs in
    pub manifest_file_name: String,

    /// File the aggregated globs are written to
    pub output_file_name: String,

    /// Sort source projects by path instead of keeping resolver order
    pub deterministic_order: bool,

    /// Threads used for manifest existence checks
    pub jobs: Option<usize>,

    /// Write compact JSON
    pub minify: bool,
}

impl Default for ContentPathsConfig {
    fn default() -> Self {
        Self {
            manifest_file_name: DEFAULT_MANIFEST_FILE_NAME.to_string(),
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
            deterministic_order: false,
            jobs: None,
            minify: false,
        }
    }
}

impl ContentPathsConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ContentPathsError::Config {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        serde_json::from_str(&content)
            .map_err(|e| ContentPathsError::Config {
                message: format!("Failed to parse JSON config: {}", e),
            })
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Self::from_json_file(path),
            _ => Err(ContentPathsError::Config {
                message: format!(
                    "Unsupported config file format: {}. Use .json",
                    path.display()
                ),
            }),
        }
    }

    /// Config file (if any) with command line overrides applied.
    pub fn from_discovery_args(args: &DiscoveryArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.merge_discovery_args(args))
    }

    /// Apply the flags shared by every subcommand
    pub fn merge_discovery_args(mut self, args: &DiscoveryArgs) -> Self {
        if let Some(name) = &args.manifest_file_name {
            self.manifest_file_name = name.clone();
        }
        if args.jobs.is_some() {
            self.jobs = args.jobs;
        }
        self.deterministic_order |= args.deterministic_order;
        self
    }

    /// Check that the settings describe a usable layout
    pub fn validate(&self) -> Result<()> {
        for (key, name) in [
            ("manifest_file_name", &self.manifest_file_name),
            ("output_file_name", &self.output_file_name),
        ] {
            if name.trim().is_empty() {
                return Err(ContentPathsError::InvalidInput(format!("{} must not be empty", key)));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(ContentPathsError::InvalidInput(format!(
                    "{} must be a file name, got '{}'",
                    key, name
                )));
            }
        }

        if self.manifest_file_name == self.output_file_name {
            return Err(ContentPathsError::InvalidInput(
                "Manifest and output file names must be different".to_string(),
            ));
        }

        if self.jobs == Some(0) {
            return Err(ContentPathsError::InvalidInput(
                "Number of jobs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::new(&self.manifest_file_name, &self.output_file_name)
    }
}

impl TryFrom<&GenerateArgs> for ContentPathsConfig {
    type Error = ContentPathsError;

    fn try_from(args: &GenerateArgs) -> Result<Self> {
        let mut config = Self::from_discovery_args(&args.discovery)?;
        if let Some(name) = &args.output_file_name {
            config.output_file_name = name.clone();
        }
        config.minify |= args.minify;
        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<&SourcesArgs> for ContentPathsConfig {
    type Error = ContentPathsError;

    fn try_from(args: &SourcesArgs) -> Result<Self> {
        let config = Self::from_discovery_args(&args.discovery)?;
        config.validate()?;
        Ok(config)
    }
}
