use cardsmith_app::cli::{Cli, Command};
use cardsmith_app::generate;
use cardsmith_core::config::load_config;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config(cli.config.as_deref())?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    match cli.command {
        Command::Generate(args) => {
            let summary = generate::run(&config, &args)?;
            tracing::info!(
                destination = %summary.destination,
                records = summary.records,
                warnings = summary.diagnostics,
                "Done"
            );
        }
    }

    Ok(())
}
