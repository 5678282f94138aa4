use anyhow::Context;
use clap::Parser;
use iconsync::cli::{
    commands::{icons::IconsCommand, names::NamesCommand, CommandHandler},
    Cli, Commands, LogLevel,
};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries progress lines and the name list
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    tracing::debug!(
        command = cli.command.name(),
        modifies_files = cli.command.modifies_files(),
        "Starting iconsync"
    );

    let handler: Box<dyn CommandHandler> = match cli.command {
        Commands::Icons {
            config,
            catalog,
            staging_dir,
            url,
            archive,
            on_decode_error,
            jobs,
            dry_run,
        } => Box::new(IconsCommand {
            config_path: config,
            catalog,
            staging_dir,
            url,
            archive,
            on_decode_error: on_decode_error.map(Into::into),
            jobs,
            dry_run,
        }),
        Commands::Names { config, url } => Box::new(NamesCommand {
            config_path: config,
            url,
        }),
    };

    handler
        .execute()
        .with_context(|| format!("{} command failed", handler.name()))
}
