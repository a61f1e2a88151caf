use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tailwind CSS content paths CLI - Aggregates content paths published by a project's dependencies
#[derive(Parser, Debug)]
#[command(name = "tailwind-content-paths")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the aggregated content paths file for a project
    Generate(GenerateArgs),
    /// List the projects whose content paths would be aggregated
    Sources(SourcesArgs),
}

/// Options shared by every command that walks the project graph
#[derive(Args, Debug, Clone)]
pub struct DiscoveryArgs {
    /// Configuration file path (JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to configuration file (JSON format)"
    )]
    pub config: Option<PathBuf>,

    /// Sort source projects by path
    #[arg(
        long = "deterministic-order",
        default_value_t = false,
        help = "Sort source projects by path instead of keeping dependency order"
    )]
    pub deterministic_order: bool,

    /// Number of parallel threads to use
    #[arg(
        short = 'j',
        long = "jobs",
        value_name = "NUM",
        help = "Number of parallel threads for manifest checks (defaults to number of CPU cores)"
    )]
    pub jobs: Option<usize>,

    /// Manifest file name
    #[arg(
        long = "manifest-file-name",
        value_name = "NAME",
        env = "TAILWIND_CONTENT_PATHS_MANIFEST",
        help = "File name each project publishes its content paths in"
    )]
    pub manifest_file_name: Option<String>,
}

/// Arguments for the generate command
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Project file of the consuming project
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    #[command(flatten)]
    pub discovery: DiscoveryArgs,

    /// Output file name
    #[arg(
        long = "output-file-name",
        value_name = "NAME",
        env = "TAILWIND_CONTENT_PATHS_OUTPUT",
        help = "File name the aggregated content paths are written to, next to the project file"
    )]
    pub output_file_name: Option<String>,

    /// Write compact JSON
    #[arg(
        long = "minify",
        default_value_t = false,
        help = "Write compact JSON instead of pretty-printed JSON"
    )]
    pub minify: bool,

    /// Dry run (don't write the output file)
    #[arg(
        long = "dry-run",
        default_value_t = false,
        help = "Print the aggregated content paths instead of writing the output file"
    )]
    pub dry_run: bool,

    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        default_value_t = false,
        help = "Enable verbose output"
    )]
    pub verbose: bool,
}

/// Arguments for the sources command
#[derive(Parser, Debug, Clone)]
pub struct SourcesArgs {
    /// Project file of the consuming project
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    #[command(flatten)]
    pub discovery: DiscoveryArgs,

    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        default_value_t = false,
        help = "Enable verbose output"
    )]
    pub verbose: bool,
}

impl Commands {
    pub fn verbose(&self) -> bool {
        match self {
            Commands::Generate(args) => args.verbose,
            Commands::Sources(args) => args.verbose,
        }
    }
}
