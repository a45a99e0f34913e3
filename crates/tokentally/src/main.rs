mod cli;
mod commands;
mod render;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG always applies; --verbose raises the floor to DEBUG
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match cli.command {
        Commands::Count(args) => commands::count::run(&args),
        Commands::List { json } => commands::list::run(json),
        Commands::Version => commands::version::run(),
        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => commands::config::run_show(),
            Some(ConfigAction::Path) => commands::config::run_path(),
            Some(ConfigAction::Reset) => commands::config::run_reset(),
            Some(ConfigAction::Export { output }) => {
                commands::config::run_export(output.as_deref())
            }
            Some(ConfigAction::Import { file }) => commands::config::run_import(&file),
            Some(ConfigAction::Set { key, value }) => commands::config::run_set(&key, &value),
        },
    }
}
