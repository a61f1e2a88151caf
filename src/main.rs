use anyhow::{Context, Result};
use clap::Parser;
use tailwind_content_paths::{generate, list_sources, Cli, Commands};

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let default_level = if cli.command.verbose() { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    // Handle commands
    match cli.command {
        Commands::Generate(args) => {
            let project = args.project.clone();
            let report = generate(args).with_context(|| {
                format!("Failed to generate content paths for {}", project.display())
            })?;

            if report.written {
                println!(
                    "Wrote {} content path(s) from {} source project(s) to {}",
                    report.content_paths.len(),
                    report.source_projects.len(),
                    report.output_path.display()
                );
            } else {
                // Dry run: the output goes to stdout instead
                print!("{}", report.json);
            }
        }
        Commands::Sources(args) => {
            let project = args.project.clone();
            let sources = list_sources(args).with_context(|| {
                format!("Failed to discover source projects for {}", project.display())
            })?;

            for source in sources {
                println!("{}", source.display());
            }
        }
    }

    Ok(())
}
