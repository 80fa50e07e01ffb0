use clap::Parser;
use notepub::cli::{Cli, Commands};
use notepub::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Some(Commands::Slug { title, slug }) => {
            notepub::cli::slug::run(&title, &slug)?;
        }
        Some(Commands::Resolve { input }) => {
            notepub::cli::resolve::run(&config, &input)?;
        }
        Some(Commands::Folder { slug }) => {
            notepub::cli::folder::run(&config, &slug)?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
